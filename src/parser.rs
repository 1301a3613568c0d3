use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Pos;
use crate::level::{Level, LevelErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultipleAgents,
    NoAgent,
    Level(LevelErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultipleAgents => write!(f, "More than one agent"),
            ParserErr::NoAgent => write!(f, "No agent"),
            ParserErr::Level(err) => write!(f, "Invalid level: {}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<LevelErr> for ParserErr {
    fn from(err: LevelErr) -> Self {
        ParserErr::Level(err)
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
///
/// Row `r`, column `c` of the text becomes `Pos { x: c, y: r }`.
pub fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let mut walls = Vec::new();
    let mut targets = Vec::new();
    let mut blocks = Vec::new();
    let mut agent = None;

    for (r, line) in level.lines().enumerate() {
        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(c as i32, r as i32);

            match cur_char {
                '#' => walls.push(pos),
                'p' | '@' | 'P' | '+' => {
                    if agent.is_some() {
                        return Err(ParserErr::MultipleAgents);
                    }
                    agent = Some(pos);
                    if cur_char == 'P' || cur_char == '+' {
                        targets.push(pos);
                    }
                }
                'b' | '$' => blocks.push(pos),
                'B' | '*' => {
                    blocks.push(pos);
                    targets.push(pos);
                }
                '.' => targets.push(pos),
                ' ' | '-' | '_' => {}
                _ => return Err(ParserErr::Pos(r, c)),
            }
        }
    }

    let agent = agent.ok_or(ParserErr::NoAgent)?;
    Ok(Level::new(&walls, &targets, agent, &blocks)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::NoAgent);
    }

    #[test]
    fn fail_no_agent() {
        let level = r"
####
#  #
####
";
        assert_failure(level, ParserErr::NoAgent);
    }

    #[test]
    fn fail_multiple_agents() {
        let level = r"
#####
#@ +#
#####
";
        assert_failure(level, ParserErr::MultipleAgents);
    }

    #[test]
    fn fail_pos() {
        let level = r"
#####
#@X.#
#####
";
        assert_failure(level, ParserErr::Pos(1, 2));
    }

    #[test]
    fn fail_blocks_targets() {
        let level = r"
######
#@$$.#
######
";
        assert_failure(level, ParserErr::Level(LevelErr::BlocksTargets(2, 1)));
    }

    #[test]
    fn open_border() {
        let level = r"
#####
#@$.
#####
";
        assert_success(level);
    }

    #[test]
    fn alternative_chars() {
        let level = parse("#####\n#pb.#\n#-_B#\n#####").unwrap();
        assert_eq!(level.to_string(), "#####\n#@$.#\n#  *#\n#####\n");
    }

    #[test]
    fn simplest() {
        let level = r"
#####
#@$.#
#####
";
        assert_success(level);
    }

    #[test]
    fn agent_on_target() {
        let level = r"
#####
#+$ #
# $.#
#####
";
        assert_success(level);
    }

    #[test]
    fn corner_blocks() {
        let level = r"
*###*
#@$.#
*###*
";
        assert_success(level);
    }

    #[test]
    fn original_1() {
        let level = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
";
        assert_success(level);
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        assert_eq!(input_level.parse::<Level>().unwrap_err(), expected_err);
    }

    fn assert_success(input_level: &str) {
        let level = parse(input_level).unwrap();
        assert_eq!(level.to_string(), input_level.trim_start_matches('\n'));
    }
}
