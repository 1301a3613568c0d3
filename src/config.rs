use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Plain A* over single moves.
    MoveOptimal,
    /// Same as `MoveOptimal` but never pushes a block onto a cell
    /// from which it can't reach any target.
    MoveOptimalDeadEnds,
}

impl Default for Method {
    fn default() -> Self {
        Method::MoveOptimal
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::MoveOptimal => write!(f, "move-optimal"),
            Method::MoveOptimalDeadEnds => write!(f, "move-optimal-dead-ends"),
        }
    }
}
