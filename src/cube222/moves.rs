//! The twelve quarter turns of the 2x2x2 and the sticker permutations they perform.
//!
//! Each face turn is described by a [`Layer`]: the face that rotates and the ring of four strips
//! on the neighbouring faces that cycle around it. The descriptions are compiled into gather
//! tables at compile time, so making a move is a single pass over the grid.

use std::str::FromStr;

use super::{Face, StickerGrid, CELLS, COLS, ROWS};
use crate::error::ParseError;
use crate::moves::MoveSequence;

#[cfg(test)]
use proptest_derive::Arbitrary;

// Strips on the ring must be as long as the face is wide.
const _: () = assert!(ROWS == COLS);

/// An axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Up-Down axis
    UD,
    /// Left-Right axis
    LR,
    /// Front-Back axis
    FB,
}

/// Represents each type of move. Note that the `Move222` struct uses this along with a [`Turn`]
/// to represent moves such as U or U'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move222Type {
    /// Up
    U,
    /// Down
    D,
    /// Right
    R,
    /// Left
    L,
    /// Front
    F,
    /// Back
    B,
}

impl Move222Type {
    /// Every move type, in canonical order.
    pub const ARRAY: [Move222Type; 6] = [
        Move222Type::U,
        Move222Type::D,
        Move222Type::R,
        Move222Type::L,
        Move222Type::F,
        Move222Type::B,
    ];

    /// The move type on the face opposite to the given one.
    pub fn opposite(self) -> Move222Type {
        match self {
            Move222Type::U => Move222Type::D,
            Move222Type::D => Move222Type::U,
            Move222Type::R => Move222Type::L,
            Move222Type::L => Move222Type::R,
            Move222Type::F => Move222Type::B,
            Move222Type::B => Move222Type::F,
        }
    }

    /// The axis this layer turns around.
    pub fn axis(self) -> Axis {
        match self {
            Move222Type::U | Move222Type::D => Axis::UD,
            Move222Type::R | Move222Type::L => Axis::LR,
            Move222Type::F | Move222Type::B => Axis::FB,
        }
    }

    /// The face whose stickers rotate in place.
    pub fn face(self) -> Face {
        LAYERS[self as usize].face
    }
}

/// The direction of a quarter turn, as seen looking at the turning face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Turn {
    /// Clockwise
    Cw,
    /// Counter-clockwise
    Ccw,
}

impl Turn {
    /// The opposite direction.
    pub fn inverse(self) -> Turn {
        match self {
            Turn::Cw => Turn::Ccw,
            Turn::Ccw => Turn::Cw,
        }
    }
}

/// Stores a move type and a direction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move222 {
    pub ty: Move222Type,
    pub turn: Turn,
}

impl crate::moves::Move for Move222 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            turn: self.turn.inverse(),
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty.axis() == b.ty.axis()
    }

    fn ordinal(self) -> usize {
        self.ty as usize
    }
}

// I don't want to have the default derive debug for this!
impl std::fmt::Debug for Move222 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.turn {
            Turn::Cw => write!(f, "{:?}", self.ty),
            Turn::Ccw => write!(f, "{:?}'", self.ty),
        }
    }
}

impl std::fmt::Display for Move222 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Move222 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParseError::UnknownMove(s.to_owned());
        let (face, turn) = match s.strip_suffix('\'') {
            Some(face) => (face, Turn::Ccw),
            None => (s, Turn::Cw),
        };
        let ty = match face {
            "U" => Move222Type::U,
            "D" => Move222Type::D,
            "R" => Move222Type::R,
            "L" => Move222Type::L,
            "F" => Move222Type::F,
            "B" => Move222Type::B,
            _ => return Err(unknown()),
        };
        Ok(Move222 { ty, turn })
    }
}

/// Parse a whitespace separated list of moves such as `R U R' U'`.
pub fn parse_moves(s: &str) -> Result<MoveSequence<Move222>, ParseError> {
    s.split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<_>, _>>()
        .map(MoveSequence)
}

/// A trait to classify a type as a move generator, i.e. the set of moves a search may use.
pub trait MoveGenerator {
    /// The amount of moves that are available in the moveset.
    const SIZE: usize;
    /// A list of all valid moves. The index of a move in this list will be the same index used
    /// when accessing the move table.
    const MOVE_LIST: &'static [Move222];
}

impl From<Move222> for usize {
    fn from(mv: Move222) -> usize {
        mv.turn as usize * 6 + mv.ty as usize
    }
}

/// Create a move by specifying a move type and a turn direction, e.g. `mv!(R, Ccw)` for R'.
#[macro_export]
macro_rules! mv {
    ($ty:ident, $turn:ident) => {
        Move222 {
            ty: Move222Type::$ty,
            turn: Turn::$turn,
        }
    };
}

/// Type for the Quarter Turn Metric
pub struct Qtm;

impl MoveGenerator for Qtm {
    const SIZE: usize = 12;
    const MOVE_LIST: &'static [Move222] = &[
        mv!(U, Cw),
        mv!(D, Cw),
        mv!(R, Cw),
        mv!(L, Cw),
        mv!(F, Cw),
        mv!(B, Cw),
        mv!(U, Ccw),
        mv!(D, Ccw),
        mv!(R, Ccw),
        mv!(L, Ccw),
        mv!(F, Ccw),
        mv!(B, Ccw),
    ];
}

#[derive(Clone, Copy)]
enum Line {
    Row(usize),
    Col(usize),
}

/// A row or column of one face. A reversed strip is walked from its high end, for faces whose
/// layout is seen from the opposite side of the ring.
#[derive(Clone, Copy)]
struct Strip {
    face: Face,
    line: Line,
    reversed: bool,
}

/// The stickers touched by one face turn. On a clockwise turn the sticker at position `k` of
/// `ring[j]` moves to position `k` of `ring[j + 1]`.
struct Layer {
    face: Face,
    ring: [Strip; 4],
}

const fn strip(face: Face, line: Line, reversed: bool) -> Strip {
    Strip {
        face,
        line,
        reversed,
    }
}

const LAST: usize = ROWS - 1;

// Indexed by Move222Type.
const LAYERS: [Layer; 6] = [
    Layer {
        face: Face::Up,
        ring: [
            strip(Face::Front, Line::Row(0), false),
            strip(Face::Left, Line::Row(0), false),
            strip(Face::Back, Line::Row(0), false),
            strip(Face::Right, Line::Row(0), false),
        ],
    },
    Layer {
        face: Face::Down,
        ring: [
            strip(Face::Front, Line::Row(LAST), false),
            strip(Face::Right, Line::Row(LAST), false),
            strip(Face::Back, Line::Row(LAST), false),
            strip(Face::Left, Line::Row(LAST), false),
        ],
    },
    Layer {
        face: Face::Right,
        ring: [
            strip(Face::Up, Line::Col(LAST), false),
            strip(Face::Back, Line::Col(0), true),
            strip(Face::Down, Line::Col(LAST), false),
            strip(Face::Front, Line::Col(LAST), false),
        ],
    },
    Layer {
        face: Face::Left,
        ring: [
            strip(Face::Up, Line::Col(0), false),
            strip(Face::Front, Line::Col(0), false),
            strip(Face::Down, Line::Col(0), false),
            strip(Face::Back, Line::Col(LAST), true),
        ],
    },
    Layer {
        face: Face::Front,
        ring: [
            strip(Face::Up, Line::Row(LAST), false),
            strip(Face::Right, Line::Col(0), false),
            strip(Face::Down, Line::Row(0), true),
            strip(Face::Left, Line::Col(LAST), true),
        ],
    },
    Layer {
        face: Face::Back,
        ring: [
            strip(Face::Up, Line::Row(0), false),
            strip(Face::Right, Line::Col(LAST), true),
            strip(Face::Down, Line::Row(LAST), false),
            strip(Face::Left, Line::Col(0), true),
        ],
    },
];

const fn strip_cell(s: Strip, k: usize) -> usize {
    let k = if s.reversed { ROWS - 1 - k } else { k };
    match s.line {
        Line::Row(r) => StickerGrid::index(s.face, r, k),
        Line::Col(c) => StickerGrid::index(s.face, k, c),
    }
}

/// Gather table for a clockwise turn of `layer`: after the move, cell `i` holds the sticker that
/// was in cell `table[i]`.
const fn layer_table(layer: &Layer) -> [u8; CELLS] {
    let mut table = [0u8; CELLS];
    let mut i = 0;
    while i < CELLS {
        table[i] = i as u8;
        i += 1;
    }

    // The face itself: (r, c) moves to (c, n - 1 - r).
    let mut r = 0;
    while r < ROWS {
        let mut c = 0;
        while c < COLS {
            table[StickerGrid::index(layer.face, c, COLS - 1 - r)] =
                StickerGrid::index(layer.face, r, c) as u8;
            c += 1;
        }
        r += 1;
    }

    let mut j = 0;
    while j < 4 {
        let from = layer.ring[j];
        let to = layer.ring[(j + 1) % 4];
        let mut k = 0;
        while k < ROWS {
            table[strip_cell(to, k)] = strip_cell(from, k) as u8;
            k += 1;
        }
        j += 1;
    }

    table
}

const fn invert_table(table: &[u8; CELLS]) -> [u8; CELLS] {
    let mut inv = [0u8; CELLS];
    let mut i = 0;
    while i < CELLS {
        inv[table[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

const fn build_tables() -> [[u8; CELLS]; Qtm::SIZE] {
    let mut tables = [[0u8; CELLS]; Qtm::SIZE];
    let mut ty = 0;
    while ty < 6 {
        let cw = layer_table(&LAYERS[ty]);
        tables[ty] = cw;
        tables[ty + 6] = invert_table(&cw);
        ty += 1;
    }
    tables
}

// Indexed by `usize::from(Move222)`.
const MOVE_TABLES: [[u8; CELLS]; Qtm::SIZE] = build_tables();

impl StickerGrid {
    /// Apply a move to the grid.
    pub fn make_move(&mut self, mv: Move222) {
        let table = &MOVE_TABLES[usize::from(mv)];
        let old = self.0;
        for (cell, &src) in self.0.iter_mut().zip(table) {
            *cell = old[src as usize];
        }
    }

    /// Apply an algorithm to the grid
    pub fn make_moves(&mut self, mvs: &MoveSequence<Move222>) {
        for m in mvs.iter() {
            self.make_move(m);
        }
    }
}
