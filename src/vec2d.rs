use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Number of cells in the rectangle from `min` to `max` (both inclusive).
///
/// `None` if the rectangle is empty or too big to be addressed.
pub(crate) fn cell_count(min: Pos, max: Pos) -> Option<usize> {
    let width = i64::from(max.x) - i64::from(min.x) + 1;
    let height = i64::from(max.y) - i64::from(min.y) + 1;
    if width <= 0 || height <= 0 {
        return None;
    }
    usize::try_from(width.checked_mul(height)?).ok()
}

/// Dense storage for a rectangular area of the grid.
///
/// The area doesn't have to start at `(0, 0)`, callers index with absolute positions.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    min: Pos,
    max: Pos,
    width: usize,
}

impl<T> Vec2d<T> {
    pub(crate) fn contains(&self, pos: Pos) -> bool {
        self.min.x <= pos.x && pos.x <= self.max.x && self.min.y <= pos.y && pos.y <= self.max.y
    }

    pub(crate) fn positions(&self) -> Positions {
        Positions {
            min: self.min,
            width: self.width,
            len: self.data.len(),
            index: 0,
        }
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    pub(crate) fn scratchpad<U: Copy + Default>(&self) -> Vec2d<U> {
        Vec2d {
            data: vec![U::default(); self.data.len()],
            min: self.min,
            max: self.max,
            width: self.width,
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{} out of bounds", pos);
        let x = (i64::from(pos.x) - i64::from(self.min.x)) as usize;
        let y = (i64::from(pos.y) - i64::from(self.min.y)) as usize;
        y * self.width + x
    }
}

impl<T: Clone> Vec2d<T> {
    /// Area from `min` to `max` (both inclusive) filled with `default`.
    ///
    /// Check the size with `cell_count` first, this allocates all of it.
    pub(crate) fn new(min: Pos, max: Pos, default: T) -> Option<Self> {
        let len = cell_count(min, max)?;
        let width = (i64::from(max.x) - i64::from(min.x) + 1) as usize;
        Some(Vec2d {
            data: vec![default; len],
            min,
            max,
            width,
        })
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = self.index_of(index);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width) {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "from {} to {}", self.min, self.max)?;
        for row in self.data.chunks(self.width) {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

/// Row-major iterator over all positions of a `Vec2d`.
#[derive(Debug, Clone)]
pub(crate) struct Positions {
    min: Pos,
    width: usize,
    len: usize,
    index: usize,
}

impl Iterator for Positions {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.index >= self.len {
            return None;
        }
        let x = i64::from(self.min.x) + (self.index % self.width) as i64;
        let y = i64::from(self.min.y) + (self.index / self.width) as i64;
        self.index += 1;
        Some(Pos::new(x as i32, y as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_coords() {
        let positions = [Pos::new(-1, 2), Pos::new(3, -2), Pos::new(0, 0)];
        let mut grid = Vec2d::new(Pos::new(-1, -2), Pos::new(3, 2), false).unwrap();
        for &pos in &positions {
            assert!(grid.contains(pos));
            grid[pos] = true;
        }
        assert!(!grid.contains(Pos::new(4, 0)));
        assert!(!grid.contains(Pos::new(0, -3)));
        assert_eq!(grid.get(Pos::new(-2, 0)), None);
        assert_eq!(grid.get(Pos::new(3, -2)), Some(&true));

        let expected = "\
00001
00000
01000
00000
10000
";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn sizes() {
        assert_eq!(cell_count(Pos::new(0, 0), Pos::new(0, 0)), Some(1));
        assert_eq!(cell_count(Pos::new(-1, -2), Pos::new(3, 2)), Some(25));
        assert_eq!(cell_count(Pos::new(1, 0), Pos::new(0, 0)), None);
        assert_eq!(cell_count(Pos::new(0, 0), Pos::new(70_000, 70_000)), Some(70_001 * 70_001));
        assert_eq!(
            cell_count(Pos::new(i32::MIN, i32::MIN), Pos::new(i32::MAX, i32::MAX)),
            None
        );
        assert!(Vec2d::new(Pos::new(1, 0), Pos::new(0, 0), 0u8).is_none());
    }

    #[test]
    fn positions_row_major() {
        let grid = Vec2d::new(Pos::new(1, 1), Pos::new(2, 2), 0u8).unwrap();
        let all: Vec<_> = grid.positions().collect();
        assert_eq!(
            all,
            vec![
                Pos::new(1, 1),
                Pos::new(2, 1),
                Pos::new(1, 2),
                Pos::new(2, 2),
            ]
        );
    }

    #[test]
    fn edges_of_the_plane() {
        let max = Pos::new(i32::MAX, i32::MAX);
        let grid = Vec2d::new(Pos::new(i32::MAX - 1, i32::MAX), max, 'x').unwrap();
        let all: Vec<_> = grid.positions().collect();
        assert_eq!(all, vec![Pos::new(i32::MAX - 1, i32::MAX), max]);
        assert!(grid.contains(max));

        let scratch: Vec2d<bool> = grid.scratchpad();
        assert_eq!(scratch.to_string(), "00\n");
    }
}
