// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]

use std::env;
use std::process;

use clap::{App, Arg};

use sokoban_astar::config::Method;
use sokoban_astar::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-astar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds a solution with the lowest number of moves")
        .arg(
            Arg::with_name("dead-ends")
                .short("d")
                .long("dead-ends")
                .help("skip pushes onto cells from which a block can never reach a target"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let method = if matches.is_present("dead-ends") {
        Method::MoveOptimalDeadEnds
    } else {
        Method::MoveOptimal
    };
    // required arg, clap exits before we get here if it's missing
    let path = matches.value_of("file").unwrap();

    let level = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => eprintln!("Can't load level {} in {}: {}", path, dir.display(), err),
            Err(_) => eprintln!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = level.solve(method, true);
    println!("{}", solver_ok.stats);
    match solver_ok.moves {
        Some(moves) => {
            println!("Found solution:");
            print!("{}", level.xsb_solution(&moves, true));
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        None => println!("No solution"),
    }
}
