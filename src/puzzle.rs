//! We give a general description of a puzzle that can be searched, so that the search driver does
//! not depend on any one puzzle's representation.

use std::fmt::Debug;
use std::hash::Hash;

use crate::moves::Move;

/// A puzzle state that can be mutated in place by moves and evaluated during a search.
pub trait Puzzle {
    /// The move type that acts on this puzzle.
    type Move: Move + Debug + 'static;

    /// A serialisation of the whole state, used to recognise states already seen.
    type Fingerprint: Eq + Hash;

    /// Every move, in the order a search expands them.
    const MOVE_LIST: &'static [Self::Move];

    /// Apply a move to the puzzle.
    fn apply(&mut self, m: Self::Move);

    /// Undo a move that was just applied. This must restore the exact state from before `apply`.
    fn invert(&mut self, m: Self::Move) {
        self.apply(m.inverse());
    }

    /// Determine whether the puzzle is in a solved state.
    fn is_solved(&self) -> bool;

    /// A lower bound on the number of moves needed to solve the puzzle.
    fn heuristic(&self) -> usize;

    /// Obtain the fingerprint of the current state.
    fn fingerprint(&self) -> Self::Fingerprint;
}

/// Gives the ability to save a state and return to it later.
pub trait Restore {
    /// Save the current state, replacing any previous snapshot.
    fn snapshot(&mut self);

    /// Return to the saved state and forget every move applied since.
    fn reset(&mut self);
}
