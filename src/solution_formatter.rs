use std::fmt::{self, Debug, Display, Formatter};

use crate::map::Map;
use crate::moves::Moves;
use crate::state::State;

/// Writes the initial state followed by the state after each push
/// (or after each move with `include_steps`).
pub struct SolutionFormatter<'a> {
    map: &'a Map,
    initial_state: &'a State,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        map: &'a Map,
        initial_state: &'a State,
        moves: &'a Moves,
        include_steps: bool,
    ) -> Self {
        Self {
            map,
            initial_state,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.map.format_with_state(self.initial_state))?;
        let mut last_state = self.initial_state.clone();
        for (i, &mov) in self.moves.iter().enumerate() {
            let (actual, new_state) = match last_state.apply(self.map, mov.dir) {
                Some(next) => next,
                None => {
                    writeln!(f, "Move {} ({}) is not possible", i, mov)?;
                    return Ok(());
                }
            };
            if actual.is_push || self.include_steps {
                writeln!(f, "{}", self.map.format_with_state(&new_state))?;
            }
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Dir;
    use crate::level::Level;
    use crate::moves::Move;

    use super::*;

    fn level() -> Level {
        r"
#####
#@$.#
#   #
#####
"
        .parse()
        .unwrap()
    }

    #[test]
    fn pushes_only() {
        let level = level();
        let moves = Moves::new(vec![
            Move::new(Dir::Down, false),
            Move::new(Dir::Up, false),
            Move::new(Dir::Right, true),
        ]);
        let expected = "\
#####
#@$.#
#   #
#####

#####
# @*#
#   #
#####

";
        assert_eq!(level.xsb_solution(&moves, false).to_string(), expected);
    }

    #[test]
    fn with_steps() {
        let level = level();
        let moves = Moves::new(vec![Move::new(Dir::Down, false)]);
        let expected = "\
#####
#@$.#
#   #
#####

#####
# $.#
#@  #
#####

";
        assert_eq!(level.xsb_solution(&moves, true).to_string(), expected);
        assert_eq!(format!("{:?}", level.xsb_solution(&moves, true)), expected);
    }

    #[test]
    fn moves_from_another_level() {
        let level = level();
        let moves = Moves::new(vec![Move::new(Dir::Left, false)]);
        assert!(level
            .xsb_solution(&moves, false)
            .to_string()
            .ends_with("Move 0 (l) is not possible\n"));
    }
}
