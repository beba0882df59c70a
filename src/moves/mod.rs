//! Module for puzzle move generics and related functionality

use std::fmt;

/// A move, for use in writing expressions or algorithms. It is intended that a term of this trait
/// is a generator of the puzzle's move group, so that every move has an exact inverse.
///
/// The relations used when searching are that a move followed by its inverse is the identity and
/// that moves on the same axis commute. Commutativity is encoded in the `commutes_with` method,
/// and `ordinal` fixes one canonical order among moves that commute.
pub trait Move: Eq + Copy {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    fn inverse(self) -> Self;

    /// Returns whether the two moves commute, i.e. can be swapped when adjacent. It is required
    /// that this property is transitive.
    ///
    /// If A and B are moves, then `A.commutes_with(B)` iff
    /// `A B = B A`
    fn commutes_with(&self, b: &Self) -> bool;

    /// Position of the layer this move turns in a fixed total order. Only used to pick one order
    /// for pairs of commuting moves.
    fn ordinal(self) -> usize;
}

/// Determine whether `candidate` can be skipped after `last` without losing any optimal solution.
/// `last` is `None` at the root of a search.
///
/// ```rust
/// # fn main() {
/// use pocket_cube::mv;
/// use pocket_cube::cube222::moves::{Move222, Move222Type, Turn};
/// use pocket_cube::moves::is_redundant;
///
/// assert!(!is_redundant(None, mv!(U, Cw)));
/// assert!(is_redundant(Some(mv!(U, Cw)), mv!(U, Ccw)));
/// assert!(is_redundant(Some(mv!(U, Cw)), mv!(U, Cw)));
/// assert!(is_redundant(Some(mv!(D, Cw)), mv!(U, Cw)));
/// assert!(!is_redundant(Some(mv!(U, Cw)), mv!(D, Cw)));
/// # }
/// ```
pub fn is_redundant<M: Move>(last: Option<M>, candidate: M) -> bool {
    let Some(last) = last else {
        return false;
    };

    candidate == last.inverse()
        || candidate == last
        || (candidate.commutes_with(&last) && candidate.ordinal() < last.ordinal())
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> Default for MoveSequence<M> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<M: Move> MoveSequence<M> {
    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Concatenate two sequences.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recently pushed move.
    pub fn last(&self) -> Option<M> {
        self.0.last().copied()
    }

    /// Add a move to the end.
    pub fn push(&mut self, m: M) {
        self.0.push(m);
    }

    /// Remove the move at the end.
    pub fn pop(&mut self) -> Option<M> {
        self.0.pop()
    }

    /// Remove every move.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate over the moves in order.
    pub fn iter(&self) -> impl Iterator<Item = M> + '_ {
        self.0.iter().copied()
    }
}

impl<M: Move + fmt::Debug> fmt::Debug for MoveSequence<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<M: Move + fmt::Debug> fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for m in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{m:?}")?;
            first = false;
        }
        Ok(())
    }
}

impl<M: Move> From<Vec<M>> for MoveSequence<M> {
    fn from(mvs: Vec<M>) -> Self {
        Self(mvs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cube222::moves::{Move222, Move222Type, Turn};
    use crate::mv;

    #[test]
    fn sequence_inverse() {
        let seq = MoveSequence(vec![mv!(R, Cw), mv!(U, Cw), mv!(F, Ccw)]);
        assert_eq!(
            seq.clone().inverse(),
            MoveSequence(vec![mv!(F, Cw), mv!(U, Ccw), mv!(R, Ccw)])
        );
        assert_eq!(seq.clone().inverse().inverse(), seq);
    }

    #[test]
    fn default_sequence_is_empty() {
        let seq: MoveSequence<Move222> = MoveSequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq, MoveSequence(Vec::new()));
    }

    #[test]
    fn sequence_append_and_display() {
        let mut seq = MoveSequence::from(vec![mv!(R, Cw)]).append(MoveSequence(vec![mv!(D, Ccw)]));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.to_string(), "R D'");
        assert_eq!(format!("{seq:?}"), "R D'");
        assert_eq!(seq.pop(), Some(mv!(D, Ccw)));
        assert_eq!(seq.last(), Some(mv!(R, Cw)));
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "");
    }
}
