mod a_star;
mod backtracking;
mod preprocessing;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashMap;
use typed_arena::Arena;

use crate::config::Method;
use crate::level::Level;
use crate::map::Map;
use crate::moves::{Move, Moves};
use crate::state::State;
use crate::vec2d::Vec2d;
use crate::Solve;

use self::a_star::SearchNode;

pub use self::a_star::Stats;

/// Result of a finished search.
///
/// `moves` is `None` if every reachable state was explored without finding a solution.
#[derive(Clone)]
pub struct SolverOk {
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, method: Method) -> Self {
        Self {
            moves,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => {
                writeln!(f, "{}", moves)?;
                writeln!(f, "{}: {} moves, {} pushes", self.method, moves.move_cnt(), moves.push_cnt())?;
            }
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, method: Method, print_status: bool) -> SolverOk {
        solve(self, method, print_status)
    }
}

/// Finds a solution with the lowest number of moves.
///
/// Each call owns all of its bookkeeping so separate levels can be solved in parallel.
/// There's no limit on time or memory, run it on a separate thread
/// if the caller needs to give up at some point. Levels that aren't enclosed by walls
/// and have no solution never finish.
pub fn solve(level: &Level, method: Method, print_status: bool) -> SolverOk {
    let dead_ends = match method {
        Method::MoveOptimal => None,
        Method::MoveOptimalDeadEnds => {
            debug!("Preprocessing level...");
            let dead_ends = preprocessing::find_dead_ends(&level.map);
            if let Some(ref dead_ends) = dead_ends {
                let blocks = level.state.blocks();
                if blocks.iter().any(|&pos| preprocessing::is_dead_end(dead_ends, pos)) {
                    debug!("A block starts on a dead end");
                    return SolverOk::new(None, Stats::new(), method);
                }
            }
            dead_ends
        }
    };

    search(&level.map, &level.state, dead_ends.as_ref(), method, print_status)
}

fn search(
    map: &Map,
    initial_state: &State,
    dead_ends: Option<&Vec2d<bool>>,
    method: Method,
    print_status: bool,
) -> SolverOk {
    debug!("Search called");

    // must outlive everything that holds references to states
    let arena = Arena::new();

    let mut stats = Stats::new();
    let mut costs: FnvHashMap<&State, u32> = FnvHashMap::default();
    let mut prevs: FnvHashMap<&State, (&State, Move)> = FnvHashMap::default();
    let mut to_visit = BinaryHeap::new();
    let mut seq = 0;

    let start: &State = arena.alloc(initial_state.clone());
    costs.insert(start, 0);
    let start_node = SearchNode::new(start, 0, heuristic(map, start), seq);
    stats.add_created(&start_node);
    to_visit.push(Reverse(start_node));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if cur_node.cost > costs[cur_node.state] {
            // found a shorter path to this state after queueing this node
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.cost);
            println!("{:?}", stats);
        }

        if cur_node.state.is_solved(map) {
            debug!("Solved, backtracking path");
            let moves = backtracking::reconstruct_moves(&prevs, cur_node.state);
            return SolverOk::new(Some(moves), stats, method);
        }

        let new_cost = cur_node.cost + 1;
        for (mov, new_state) in cur_node.state.neighbors(map) {
            if let Some(dead_ends) = dead_ends {
                if mov.is_push && preprocessing::is_dead_end(dead_ends, new_state.agent() + mov.dir) {
                    continue;
                }
            }

            // reuse the already allocated state if we just found a shorter path to it
            let new_state: &State = match costs.get_key_value(&new_state) {
                Some((_, &old_cost)) if old_cost <= new_cost => continue,
                Some((&known, _)) => known,
                None => arena.alloc(new_state),
            };
            costs.insert(new_state, new_cost);
            prevs.insert(new_state, (cur_node.state, mov));

            seq += 1;
            let next_node = SearchNode::new(new_state, new_cost, heuristic(map, new_state), seq);
            stats.add_created(&next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    debug!("Exhausted all {} reachable states", costs.len());
    SolverOk::new(None, stats, method)
}

/// Sum of distances from each block to its closest target.
///
/// Never overestimates - every block has to make at least that many pushes.
/// Ignores that blocks might compete for the same target.
fn heuristic(map: &Map, state: &State) -> u32 {
    state
        .blocks()
        .iter()
        .map(|&block| {
            map.targets()
                .iter()
                .map(|&target| block.dist(target))
                .min()
                .unwrap_or(0)
        })
        .fold(0, u32::saturating_add)
}
