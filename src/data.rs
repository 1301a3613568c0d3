use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Wall,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Block,
    Agent,
}

/// A grid coordinate. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    /// Manhattan distance, saturates instead of overflowing for far apart positions.
    pub fn dist(self, other: Pos) -> u32 {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        (dx + dy).min(i64::from(u32::MAX)) as u32
    }
}

/// Top-left and bottom-right corner of the smallest rectangle containing all `positions`.
pub(crate) fn bounding_box<I>(positions: I) -> Option<(Pos, Pos)>
where
    I: IntoIterator<Item = Pos>,
{
    let mut iter = positions.into_iter();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), pos| {
        (
            Pos::new(min.x.min(pos.x), min.y.min(pos.y)),
            Pos::new(max.x.max(pos.x), max.y.max(pos.y)),
        )
    }))
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Down,
    Right,
    Up,
    Left,
}

/// Order in which the solver tries directions, keeps results reproducible.
pub const DIRECTIONS: [Dir; 4] = [Dir::Down, Dir::Right, Dir::Up, Dir::Left];

impl Dir {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Down => (0, 1),
            Dir::Right => (1, 0),
            Dir::Up => (0, -1),
            Dir::Left => (-1, 0),
        }
    }

    pub(crate) fn inverse(self) -> Dir {
        match self {
            Dir::Down => Dir::Up,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Left => Dir::Right,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // LURD notation
        match *self {
            Dir::Down => write!(f, "d"),
            Dir::Right => write!(f, "r"),
            Dir::Up => write!(f, "u"),
            Dir::Left => write!(f, "l"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    /// Wraps around at the edges of the `i32` range.
    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.delta();
        Pos::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        self + dir.inverse()
    }
}
