use crate::data::{Dir, Pos, DIRECTIONS};
use crate::map::Map;
use crate::moves::Move;

/// Agent position and block positions at one point of the game.
///
/// Blocks are kept sorted so two states with the same blocks compare (and hash) equal
/// no matter in which order the blocks were moved.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    agent: Pos,
    blocks: Vec<Pos>,
}

impl State {
    pub fn new(agent: Pos, mut blocks: Vec<Pos>) -> State {
        blocks.sort();
        State { agent, blocks }
    }

    pub fn agent(&self) -> Pos {
        self.agent
    }

    pub fn blocks(&self) -> &[Pos] {
        &self.blocks
    }

    pub fn has_block(&self, pos: Pos) -> bool {
        self.block_index(pos).is_some()
    }

    fn block_index(&self, pos: Pos) -> Option<usize> {
        self.blocks.binary_search(&pos).ok()
    }

    /// Moves the agent one cell in `dir`, pushing a block if there's one in the way.
    ///
    /// Returns `None` if the agent would walk into a wall
    /// or the block can't move because of a wall or another block behind it.
    pub fn apply(&self, map: &Map, dir: Dir) -> Option<(Move, State)> {
        let new_agent = self.agent + dir;
        if map.is_wall(new_agent) {
            return None;
        }

        match self.block_index(new_agent) {
            None => {
                let new_state = State {
                    agent: new_agent,
                    blocks: self.blocks.clone(),
                };
                Some((Move::new(dir, false), new_state))
            }
            Some(index) => {
                let push_dest = new_agent + dir;
                if map.is_wall(push_dest) || self.has_block(push_dest) {
                    return None;
                }

                let mut new_blocks = self.blocks.clone();
                new_blocks[index] = push_dest;
                Some((Move::new(dir, true), State::new(new_agent, new_blocks)))
            }
        }
    }

    /// All valid moves from this state with the resulting states, in `DIRECTIONS` order.
    pub fn neighbors(&self, map: &Map) -> Vec<(Move, State)> {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.apply(map, dir))
            .collect()
    }

    /// Every block is on a target.
    pub fn is_solved(&self, map: &Map) -> bool {
        self.blocks.iter().all(|&pos| map.is_target(pos))
    }
}
