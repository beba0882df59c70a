//! Exhaustive search over every sequence of a fixed length. This is far too slow to be useful on
//! its own, but it makes no assumptions about the puzzle, so it is used to check the answers of
//! [`IdaStar`](super::IdaStar).

use log::debug;

use crate::moves::MoveSequence;
use crate::puzzle::{Puzzle, Restore};

/// Try every sequence of exactly `depth` moves, in move list order, and return the first one that
/// solves the puzzle.
///
/// The search starts from the puzzle's snapshot, so the caller must [`snapshot`](Restore::snapshot)
/// the state to solve beforehand. Every attempt begins with a reset and the snapshot itself is
/// never changed. On success the puzzle is left solved; otherwise it is left at the snapshot.
pub fn solve_fixed_depth<P>(puzzle: &mut P, depth: usize) -> Option<MoveSequence<P::Move>>
where
    P: Puzzle + Restore,
{
    let moves = P::MOVE_LIST;
    puzzle.reset();

    if depth > 0 && moves.is_empty() {
        return None;
    }

    let mut digits = vec![0; depth];
    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        for &i in &digits {
            puzzle.apply(moves[i]);
        }
        if puzzle.is_solved() {
            debug!("depth {depth} solved after {attempts} attempts");
            return Some(MoveSequence(digits.iter().map(|&i| moves[i]).collect()));
        }
        puzzle.reset();

        // Odometer increment, last move fastest.
        let mut pos = depth;
        loop {
            if pos == 0 {
                debug!("depth {depth} exhausted after {attempts} attempts");
                return None;
            }
            pos -= 1;
            digits[pos] += 1;
            if digits[pos] < moves.len() {
                break;
            }
            digits[pos] = 0;
        }
    }
}

/// Run [`solve_fixed_depth`] for every depth from zero up to `max_depth`, so the result is a
/// shortest solution for the snapshot if any exists.
pub fn solve_up_to<P>(puzzle: &mut P, max_depth: usize) -> Option<MoveSequence<P::Move>>
where
    P: Puzzle + Restore,
{
    (0..=max_depth).find_map(|depth| solve_fixed_depth(puzzle, depth))
}
