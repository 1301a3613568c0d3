use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;

/// The static part of a level - walls and targets.
///
/// The grid is unbounded, every cell that is not a wall is floor.
#[derive(Clone)]
pub struct Map {
    pub(crate) walls: FnvHashSet<Pos>,
    pub(crate) targets: Vec<Pos>,
}

impl Map {
    pub(crate) fn new(walls: FnvHashSet<Pos>, mut targets: Vec<Pos>) -> Self {
        targets.sort();
        Map { walls, targets }
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.walls.contains(&pos)
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.targets.binary_search(&pos).is_ok()
    }

    pub(crate) fn cell(&self, pos: Pos) -> MapCell {
        if self.is_wall(pos) {
            MapCell::Wall
        } else if self.is_target(pos) {
            MapCell::Target
        } else {
            MapCell::Empty
        }
    }

    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    /// Sorted by `x`, then `y`.
    pub fn walls(&self) -> Vec<Pos> {
        let mut walls: Vec<_> = self.walls.iter().cloned().collect();
        walls.sort();
        walls
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, Some(state))
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        MapFormatter::new(self, None)
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}
