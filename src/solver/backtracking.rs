use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::moves::{Move, Moves};
use crate::state::State;

/// Follows predecessor links from `final_state` back to the initial state
/// (the only state without a predecessor) and returns the moves in playing order.
pub(crate) fn reconstruct_moves<'a, H: BuildHasher>(
    prevs: &HashMap<&'a State, (&'a State, Move), H>,
    final_state: &'a State,
) -> Moves {
    let mut moves = Moves::default();
    let mut state = final_state;
    while let Some(&(prev, mov)) = prevs.get(state) {
        moves.add(mov);
        state = prev;
    }
    moves.reverse();
    moves
}
