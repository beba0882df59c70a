//! A library which implements the 2x2x2 pocket cube as a sticker grid along with an IDA* solver
//! for it. The search is written against the [`puzzle::Puzzle`] trait, so it does not depend on
//! the cube's representation.

#![deny(missing_docs)]

pub mod cube222;
pub mod error;
pub mod moves;
pub mod puzzle;
pub mod search;
