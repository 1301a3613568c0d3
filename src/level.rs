use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;

use crate::data::Pos;
use crate::map::Map;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelErr {
    BlocksTargets(usize, usize),
    DuplicateBlock(Pos),
    DuplicateTarget(Pos),
    TargetOnWall(Pos),
    BlockOnWall(Pos),
    AgentOnWall,
    AgentOnBlock,
}

impl Display for LevelErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelErr::BlocksTargets(blocks, targets) => write!(
                f,
                "Different number of blocks ({}) and targets ({})",
                blocks, targets
            ),
            LevelErr::DuplicateBlock(pos) => write!(f, "Multiple blocks at {}", pos),
            LevelErr::DuplicateTarget(pos) => write!(f, "Multiple targets at {}", pos),
            LevelErr::TargetOnWall(pos) => write!(f, "Target inside wall at {}", pos),
            LevelErr::BlockOnWall(pos) => write!(f, "Block inside wall at {}", pos),
            LevelErr::AgentOnWall => write!(f, "Agent inside wall"),
            LevelErr::AgentOnBlock => write!(f, "Agent on the same cell as a block"),
        }
    }
}

impl Error for LevelErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayErr {
    /// The move at this index walks or pushes into a wall or pushes two blocks.
    InvalidMove(usize),
    /// The move at this index claims to be a push but isn't or the other way around.
    PushMismatch(usize),
}

impl Display for ReplayErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ReplayErr::InvalidMove(i) => write!(f, "Move {} is not possible", i),
            ReplayErr::PushMismatch(i) => write!(f, "Move {} has wrong push flag", i),
        }
    }
}

impl Error for ReplayErr {}

/// A validated puzzle - the static map and the initial state.
#[derive(Clone)]
pub struct Level {
    pub map: Map,
    pub state: State,
}

impl Level {
    /// Validates the puzzle definition.
    ///
    /// Coordinates are unbounded and walls don't have to enclose anything.
    /// Only the counts and overlaps are checked, a valid level can still be unsolvable.
    pub fn new(walls: &[Pos], targets: &[Pos], agent: Pos, blocks: &[Pos]) -> Result<Self, LevelErr> {
        if blocks.len() != targets.len() {
            return Err(LevelErr::BlocksTargets(blocks.len(), targets.len()));
        }
        if let Some(pos) = first_duplicate(blocks) {
            return Err(LevelErr::DuplicateBlock(pos));
        }
        if let Some(pos) = first_duplicate(targets) {
            return Err(LevelErr::DuplicateTarget(pos));
        }

        let walls: FnvHashSet<Pos> = walls.iter().cloned().collect();
        if let Some(&pos) = targets.iter().find(|&pos| walls.contains(pos)) {
            return Err(LevelErr::TargetOnWall(pos));
        }
        if let Some(&pos) = blocks.iter().find(|&pos| walls.contains(pos)) {
            return Err(LevelErr::BlockOnWall(pos));
        }
        if walls.contains(&agent) {
            return Err(LevelErr::AgentOnWall);
        }
        if blocks.contains(&agent) {
            return Err(LevelErr::AgentOnBlock);
        }

        debug!(
            "Created level with {} walls and {} blocks",
            walls.len(),
            blocks.len()
        );
        Ok(Level {
            map: Map::new(walls, targets.to_vec()),
            state: State::new(agent, blocks.to_vec()),
        })
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.map.format_with_state(&self.state)
    }

    /// Applies `moves` to the initial state.
    ///
    /// Returns all visited states including the initial one.
    pub fn replay(&self, moves: &Moves) -> Result<Vec<State>, ReplayErr> {
        let mut states = vec![self.state.clone()];
        for (i, &mov) in moves.iter().enumerate() {
            let (actual, next) = states[states.len() - 1]
                .apply(&self.map, mov.dir)
                .ok_or(ReplayErr::InvalidMove(i))?;
            if actual != mov {
                return Err(ReplayErr::PushMismatch(i));
            }
            states.push(next);
        }
        Ok(states)
    }

    /// Formats the level after each push (or each move if `include_steps`).
    pub fn xsb_solution<'a>(&'a self, moves: &'a Moves, include_steps: bool) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.map, &self.state, moves, include_steps)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}

fn first_duplicate(positions: &[Pos]) -> Option<Pos> {
    let mut seen = FnvHashSet::default();
    positions.iter().cloned().find(|&pos| !seen.insert(pos))
}
