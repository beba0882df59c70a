//! This module defines general error types used throughout the crate.

use thiserror::Error;

use crate::cube222::Face;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error for addressing a sticker that does not exist on the grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The row or column lies outside the face.
    #[error("sticker ({row}, {col}) is out of bounds on the {face:?} face")]
    OutOfBounds {
        /// The face that was addressed.
        face: Face,
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },
}

/// Errors from decoding colors, face tags and face strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The character does not name a color.
    #[error("'{0}' is not a color, expected one of R B O G W Y")]
    UnknownColor(char),
    /// The tag does not name a face.
    #[error("'{0}' is not a face tag")]
    UnknownFace(String),
    /// A face string had the wrong number of stickers.
    #[error("expected 1 or {expected} stickers for a face, found {found}")]
    WrongStickerCount {
        /// The number of stickers on a face.
        expected: usize,
        /// The number of stickers that were given.
        found: usize,
    },
    /// The token does not name a quarter turn.
    #[error("'{0}' is not a move, expected a face letter optionally followed by '")]
    UnknownMove(String),
    /// A flag was given without its value.
    #[error("missing value after '{0}'")]
    MissingValue(String),
}
