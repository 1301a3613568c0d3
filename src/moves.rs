use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// One agent step, possibly pushing a block.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) dir: Dir,
    pub(crate) is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // pushes are uppercase in LURD
        let lurd = self.dir.to_string();
        if self.is_push {
            f.write_str(&lurd.to_ascii_uppercase())
        } else {
            f.write_str(&lurd)
        }
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![
            Move::new(Dir::Up, false),
            Move::new(Dir::Right, false),
            Move::new(Dir::Down, false),
            Move::new(Dir::Left, false),
            Move::new(Dir::Up, true),
            Move::new(Dir::Right, true),
            Move::new(Dir::Down, true),
            Move::new(Dir::Left, true),
        ]);
        assert_eq!(moves.to_string(), "urdlURDL");
        assert_eq!(format!("{:?}", moves), "urdlURDL");
    }

    #[test]
    fn adding_and_counting() {
        let mut moves = Moves::default();
        assert!(moves.is_empty());
        assert_eq!(moves.to_string(), "");

        moves.add(Move::new(Dir::Left, true));
        moves.add(Move::new(Dir::Up, false));
        moves.add(Move::new(Dir::Up, true));
        assert_eq!(moves.move_cnt(), 3);
        assert_eq!(moves.push_cnt(), 2);

        moves.reverse();
        assert_eq!(moves.to_string(), "UuL");
    }

    #[test]
    fn iterating() {
        let v = vec![
            Move::new(Dir::Down, false),
            Move::new(Dir::Right, true),
            Move::new(Dir::Left, false),
        ];
        let moves = Moves::new(v.clone());

        let by_ref: Vec<_> = (&moves).into_iter().cloned().collect();
        let by_iter: Vec<_> = moves.iter().cloned().collect();
        assert_eq!(by_ref, v);
        assert_eq!(by_iter, v);
        assert_eq!(moves.iter().filter(|mov| mov.is_push).count(), moves.push_cnt());
    }
}
