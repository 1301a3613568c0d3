use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

use crate::data::{bounding_box, Contents, MapCell, Pos};
use crate::map::Map;
use crate::state::State;

/// Writes a map, optionally with agent and blocks, in XSB format.
///
/// Covers the smallest rectangle containing all walls, targets, blocks and the agent.
pub struct MapFormatter<'a> {
    map: &'a Map,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(map: &'a Map, state: Option<&'a State>) -> Self {
        Self { map, state }
    }

    fn contents(&self, pos: Pos) -> Contents {
        match self.state {
            Some(state) if state.agent() == pos => Contents::Agent,
            Some(state) if state.has_block(pos) => Contents::Block,
            _ => Contents::Empty,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state_positions = self.state.into_iter().flat_map(|state| {
            state
                .blocks()
                .iter()
                .cloned()
                .chain(iter::once(state.agent()))
        });
        let all = self
            .map
            .walls
            .iter()
            .chain(&self.map.targets)
            .cloned()
            .chain(state_positions);
        let (min, max) = match bounding_box(all) {
            Some(bounds) => bounds,
            None => return Ok(()),
        };

        for y in min.y..=max.y {
            let row = (min.x..=max.x).map(move |x| Pos::new(x, y));

            // don't print trailing empty cells to match the input level strings
            let last_non_empty = row
                .clone()
                .filter(|&pos| {
                    self.map.cell(pos) != MapCell::Empty || self.contents(pos) != Contents::Empty
                })
                .last();

            if let Some(last) = last_non_empty {
                for pos in row.take_while(|&pos| pos.x <= last.x) {
                    Self::write_cell(self.map.cell(pos), self.contents(pos), f)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, contents) {
            (MapCell::Empty, Contents::Empty) => write!(f, " "),
            (MapCell::Empty, Contents::Block) => write!(f, "$"),
            (MapCell::Empty, Contents::Agent) => write!(f, "@"),
            (MapCell::Wall, Contents::Empty) => write!(f, "#"),
            (MapCell::Wall, _) => unreachable!("Wall with non-empty contents"),
            (MapCell::Target, Contents::Empty) => write!(f, "."),
            (MapCell::Target, Contents::Block) => write!(f, "*"),
            (MapCell::Target, Contents::Agent) => write!(f, "+"),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
