//! An iterative deepening A* (IDA*) solver, generic over any [`Puzzle`].
//!
//! Each pass is a depth first search bounded by `depth + heuristic <= bound`. The bound starts at
//! the root's heuristic and grows by one after every failed pass, so the first solution found is
//! no longer than any other that respects the same pruning rules.

pub mod brute_force;

use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

use fxhash::FxHashMap;
use log::{debug, info, trace};

use crate::moves::{is_redundant, Move, MoveSequence};
use crate::puzzle::Puzzle;

/// Settings for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// The largest depth bound tried before giving up.
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        // Every 2x2x2 state is within 14 quarter turns of solved.
        Self { max_depth: 20 }
    }
}

impl SearchConfig {
    /// Replace the depth ceiling.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<M: Move> {
    /// The puzzle was solved by this sequence, which is empty if it started solved.
    Solved(MoveSequence<M>),
    /// No solution exists within `max_depth` moves (or the state cannot be solved at all).
    Exhausted {
        /// The ceiling that was reached.
        max_depth: usize,
    },
}

/// The result of a search along with statistics about it.
#[derive(Debug, Clone)]
pub struct SearchReport<M: Move> {
    /// How the search ended.
    pub outcome: Outcome<M>,
    /// Number of states expanded over every pass.
    pub nodes: u64,
    /// Time since the start reference given to the search.
    pub elapsed: Duration,
}

impl<M: Move> SearchReport<M> {
    /// The solving sequence, if one was found.
    pub fn solution(&self) -> Option<&MoveSequence<M>> {
        match &self.outcome {
            Outcome::Solved(sol) => Some(sol),
            Outcome::Exhausted { .. } => None,
        }
    }
}

/// A move applied to a puzzle for as long as this guard lives. Dropping the guard inverts the
/// move; [`keep`](AppliedMove::keep) leaves it applied.
pub struct AppliedMove<'a, P: Puzzle> {
    puzzle: &'a mut P,
    m: P::Move,
    undo: bool,
}

impl<'a, P: Puzzle> AppliedMove<'a, P> {
    /// Apply `m` to the puzzle.
    pub fn new(puzzle: &'a mut P, m: P::Move) -> Self {
        puzzle.apply(m);
        Self {
            puzzle,
            m,
            undo: true,
        }
    }

    /// Leave the move applied.
    pub fn keep(mut self) {
        self.undo = false;
    }
}

impl<P: Puzzle> Deref for AppliedMove<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.puzzle
    }
}

impl<P: Puzzle> DerefMut for AppliedMove<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.puzzle
    }
}

impl<P: Puzzle> Drop for AppliedMove<'_, P> {
    fn drop(&mut self) {
        if self.undo {
            self.puzzle.invert(self.m);
        }
    }
}

/// A solver that uses iterative deepening A*.
#[derive(Debug, Default, Clone)]
pub struct IdaStar {
    config: SearchConfig,
}

/// Bookkeeping for one call to [`IdaStar::solve`].
struct SearchState<P: Puzzle> {
    bound: usize,
    path: MoveSequence<P::Move>,
    nodes: u64,
    // Shallowest depth each state was reached at during the current pass.
    visited: FxHashMap<P::Fingerprint, usize>,
    pruned: u64,
}

impl IdaStar {
    /// Create a solver.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The settings this solver uses.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a shortest sequence that solves `puzzle`. `started` is the reference point for
    /// the reported elapsed time and defaults to now.
    ///
    /// On success the puzzle is left solved, in the state the solution leads to. On exhaustion it
    /// is left exactly as it was.
    pub fn solve<P: Puzzle>(
        &self,
        puzzle: &mut P,
        started: Option<Instant>,
    ) -> SearchReport<P::Move> {
        let started = started.unwrap_or_else(Instant::now);
        let mut state = SearchState::<P> {
            bound: puzzle.heuristic().max(1),
            path: MoveSequence::default(),
            nodes: 0,
            visited: FxHashMap::default(),
            pruned: 0,
        };

        while state.bound <= self.config.max_depth {
            debug!(
                "searching with depth bound {} ({} nodes so far)",
                state.bound, state.nodes
            );
            state.visited.clear();
            state.pruned = 0;

            if state.expand(puzzle, 0, None) {
                let elapsed = started.elapsed();
                info!(
                    "solved in {} moves ({}) after {} nodes in {:.3}s",
                    state.path.len(),
                    state.path,
                    state.nodes,
                    elapsed.as_secs_f64()
                );
                return SearchReport {
                    outcome: Outcome::Solved(state.path),
                    nodes: state.nodes,
                    elapsed,
                };
            }

            trace!(
                "bound {} exhausted, {} states seen, {} pruned",
                state.bound,
                state.visited.len(),
                state.pruned
            );
            state.bound += 1;
        }

        let elapsed = started.elapsed();
        info!(
            "no solution within {} moves after {} nodes in {:.3}s",
            self.config.max_depth,
            state.nodes,
            elapsed.as_secs_f64()
        );
        SearchReport {
            outcome: Outcome::Exhausted {
                max_depth: self.config.max_depth,
            },
            nodes: state.nodes,
            elapsed,
        }
    }
}

impl<P: Puzzle> SearchState<P> {
    /// Returns whether a solution was found below this node. On success the path holds the
    /// solution and the moves stay applied.
    fn expand(&mut self, puzzle: &mut P, depth: usize, last: Option<P::Move>) -> bool {
        self.nodes += 1;

        if puzzle.is_solved() {
            return true;
        }

        if depth + puzzle.heuristic() > self.bound {
            self.pruned += 1;
            return false;
        }

        let fingerprint = puzzle.fingerprint();
        if self
            .visited
            .get(&fingerprint)
            .is_some_and(|&seen| seen <= depth)
        {
            self.pruned += 1;
            return false;
        }
        self.visited.insert(fingerprint, depth);

        for &m in P::MOVE_LIST {
            if is_redundant(last, m) {
                continue;
            }

            let mut applied = AppliedMove::new(&mut *puzzle, m);
            self.path.push(m);
            if self.expand(&mut applied, depth + 1, Some(m)) {
                applied.keep();
                return true;
            }
            self.path.pop();
        }

        false
    }
}
