//! Implementation of the 2x2x2 pocket cube as a grid of stickers.
//!
//! The state is stored as six faces of `ROWS` x `COLS` stickers. Faces are laid out the way they
//! are seen from outside the cube, with the Up face's first row at the back and the Down face's
//! first row at the front.

pub mod moves;

use std::fmt;

use log::warn;

use crate::error::{GridError, ParseError, TryFromIntToEnumError};
use crate::moves::{Move, MoveSequence};
use crate::puzzle::{Puzzle, Restore};
use moves::{Move222, MoveGenerator, Qtm};

/// Rows of stickers on a face.
pub const ROWS: usize = 2;
/// Columns of stickers on a face.
pub const COLS: usize = 2;
/// Stickers on a face.
pub const CELLS_PER_FACE: usize = ROWS * COLS;
/// Stickers on the whole cube.
pub const CELLS: usize = 6 * CELLS_PER_FACE;

/// Upper bound on how many stickers a single move can put in place, used to turn a count of
/// misplaced stickers into a move estimate.
pub const HEURISTIC_DIVISOR: usize = 8;

/// A face of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Face {
    Up,
    Front,
    Right,
    Down,
    Back,
    Left,
}

impl Face {
    /// Every face, in storage order.
    pub const ARRAY: [Face; 6] = [
        Face::Up,
        Face::Front,
        Face::Right,
        Face::Down,
        Face::Back,
        Face::Left,
    ];

    /// Three mutually adjacent faces, the ones checked by [`Puzzle::is_solved`].
    pub const HALF: [Face; 3] = [Face::Up, Face::Front, Face::Right];

    /// Look a face up by its command line tag (`-ft`, `-ff`, `-fr`, `-fb`, `-fbk`, `-fl`).
    pub fn from_tag(tag: &str) -> Result<Face, ParseError> {
        match tag {
            "-ft" => Ok(Face::Up),
            "-ff" => Ok(Face::Front),
            "-fr" => Ok(Face::Right),
            "-fb" => Ok(Face::Down),
            "-fbk" => Ok(Face::Back),
            "-fl" => Ok(Face::Left),
            _ => Err(ParseError::UnknownFace(tag.to_owned())),
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Face, TryFromIntToEnumError> {
        Face::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// A sticker color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Blue,
    Orange,
    Green,
    #[default]
    White,
    Yellow,
}

impl Color {
    /// Every color.
    pub const ARRAY: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Orange,
        Color::Green,
        Color::White,
        Color::Yellow,
    ];

    /// The single letter used for this color on the command line and when printing.
    pub fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Yellow => 'Y',
        }
    }
}

impl TryFrom<char> for Color {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Color, ParseError> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Color::Red),
            'B' => Ok(Color::Blue),
            'O' => Ok(Color::Orange),
            'G' => Ok(Color::Green),
            'W' => Ok(Color::White),
            'Y' => Ok(Color::Yellow),
            _ => Err(ParseError::UnknownColor(c)),
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Color, TryFromIntToEnumError> {
        Color::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// Decode a face string such as `ROOO` (row-major) or `Y` (the whole face).
pub fn parse_face(s: &str) -> Result<Vec<Color>, ParseError> {
    let colors = s
        .chars()
        .map(Color::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    if colors.len() != 1 && colors.len() != CELLS_PER_FACE {
        return Err(ParseError::WrongStickerCount {
            expected: CELLS_PER_FACE,
            found: colors.len(),
        });
    }

    Ok(colors)
}

/// Colors of each face on the solved cube, indexed by `Face`.
const SOLVED_COLORS: [Color; 6] = [
    Color::Yellow,
    Color::Blue,
    Color::Red,
    Color::White,
    Color::Green,
    Color::Orange,
];

/// The stickers of every face, stored face by face in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StickerGrid([Color; CELLS]);

impl StickerGrid {
    /// The solved cube stored as a const.
    pub const SOLVED: Self = StickerGrid::from_face_colors(SOLVED_COLORS);

    /// A grid where each face is a single color.
    pub const fn from_face_colors(colors: [Color; 6]) -> Self {
        let mut cells = [Color::White; CELLS];
        let mut i = 0;
        while i < CELLS {
            cells[i] = colors[i / CELLS_PER_FACE];
            i += 1;
        }
        StickerGrid(cells)
    }

    const fn index(face: Face, row: usize, col: usize) -> usize {
        face as usize * CELLS_PER_FACE + row * COLS + col
    }

    /// The color at the given position, if the position exists.
    pub fn get(&self, face: Face, row: usize, col: usize) -> Option<Color> {
        (row < ROWS && col < COLS).then(|| self.0[Self::index(face, row, col)])
    }

    fn set(&mut self, face: Face, row: usize, col: usize, color: Color) -> Result<(), GridError> {
        if row >= ROWS || col >= COLS {
            return Err(GridError::OutOfBounds { face, row, col });
        }
        self.0[Self::index(face, row, col)] = color;
        Ok(())
    }

    /// One row of a face. Panics if `row` is out of range.
    pub(crate) fn row(&self, face: Face, row: usize) -> [Color; COLS] {
        std::array::from_fn(|col| self.0[Self::index(face, row, col)])
    }

    /// The stickers of one face, in row-major order.
    pub fn face(&self, face: Face) -> &[Color] {
        let start = Self::index(face, 0, 0);
        &self.0[start..start + CELLS_PER_FACE]
    }

    /// Every sticker, face by face.
    pub fn cells(&self) -> &[Color; CELLS] {
        &self.0
    }

    /// Number of stickers on a face that differ from the face's first sticker.
    fn misplaced(&self, face: Face) -> usize {
        let stickers = self.face(face);
        stickers.iter().filter(|&&c| c != stickers[0]).count()
    }

    /// Whether every sticker on the face has the same color.
    pub fn is_uniform(&self, face: Face) -> bool {
        self.misplaced(face) == 0
    }
}

/// A 2x2x2 cube together with a saved starting state and the log of moves applied since.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube222 {
    grid: StickerGrid,
    snapshot: StickerGrid,
    history: MoveSequence<Move222>,
}

impl Default for Cube222 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube222 {
    /// A solved cube. The solved state is also taken as the snapshot.
    pub fn new() -> Self {
        Self::from_grid(StickerGrid::SOLVED)
    }

    /// A cube in the given state, which is also taken as the snapshot.
    pub fn from_grid(grid: StickerGrid) -> Self {
        Self {
            grid,
            snapshot: grid,
            history: MoveSequence::default(),
        }
    }

    /// The current stickers.
    pub fn grid(&self) -> &StickerGrid {
        &self.grid
    }

    /// Moves applied since construction or the last reset.
    pub fn history(&self) -> &MoveSequence<Move222> {
        &self.history
    }

    /// Paint a whole face one color.
    pub fn set_face_color(&mut self, face: Face, color: Color) {
        for row in 0..ROWS {
            for col in 0..COLS {
                self.set_cell(face, row, col, color);
            }
        }
    }

    /// Paint a face from either one color or a row-major list of colors. Colors past the end of
    /// the face are reported and ignored.
    pub fn set_face(&mut self, face: Face, colors: &[Color]) {
        if let [color] = colors {
            self.set_face_color(face, *color);
            return;
        }
        if colors.len() != CELLS_PER_FACE {
            warn!(
                "setting {face:?} from {} colors, expected {CELLS_PER_FACE}",
                colors.len()
            );
        }
        for (i, &color) in colors.iter().enumerate() {
            self.set_cell(face, i / COLS, i % COLS, color);
        }
    }

    /// The color of one sticker.
    pub fn try_cell(&self, face: Face, row: usize, col: usize) -> Result<Color, GridError> {
        self.grid
            .get(face, row, col)
            .ok_or(GridError::OutOfBounds { face, row, col })
    }

    /// The color of one sticker. An out of range position is reported and reads as the default
    /// color.
    pub fn cell(&self, face: Face, row: usize, col: usize) -> Color {
        self.try_cell(face, row, col).unwrap_or_else(|e| {
            warn!("{e}");
            Color::default()
        })
    }

    /// Set the color of one sticker.
    pub fn try_set_cell(
        &mut self,
        face: Face,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), GridError> {
        self.grid.set(face, row, col, color)
    }

    /// Set the color of one sticker. An out of range position is reported and nothing is
    /// written.
    pub fn set_cell(&mut self, face: Face, row: usize, col: usize, color: Color) {
        if let Err(e) = self.try_set_cell(face, row, col, color) {
            warn!("{e}");
        }
    }

    /// Apply every move of an algorithm in order.
    pub fn apply_sequence(&mut self, mvs: &MoveSequence<Move222>) {
        for m in mvs.iter() {
            self.apply(m);
        }
    }

    /// Check all six faces. Unlike [`Puzzle::is_solved`] this makes no assumption about how the
    /// state was reached.
    pub fn is_fully_solved(&self) -> bool {
        Face::ARRAY.into_iter().all(|f| self.grid.is_uniform(f))
    }
}

impl Puzzle for Cube222 {
    type Move = Move222;
    type Fingerprint = [u8; CELLS];

    const MOVE_LIST: &'static [Move222] = Qtm::MOVE_LIST;

    fn apply(&mut self, m: Move222) {
        self.grid.make_move(m);
        self.history.push(m);
    }

    fn invert(&mut self, m: Move222) {
        self.grid.make_move(m.inverse());
        if self.history.last() == Some(m) {
            self.history.pop();
        } else {
            self.history.push(m.inverse());
        }
    }

    fn is_solved(&self) -> bool {
        Face::HALF.into_iter().all(|f| self.grid.is_uniform(f))
    }

    fn heuristic(&self) -> usize {
        let misplaced: usize = Face::ARRAY.into_iter().map(|f| self.grid.misplaced(f)).sum();
        misplaced / HEURISTIC_DIVISOR
    }

    fn fingerprint(&self) -> [u8; CELLS] {
        self.grid.0.map(|c| c as u8)
    }
}

impl Restore for Cube222 {
    fn snapshot(&mut self) {
        self.snapshot = self.grid;
    }

    fn reset(&mut self) {
        self.grid = self.snapshot;
        self.history.clear();
    }
}

impl fmt::Display for Cube222 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solved = if self.is_solved() { "YES" } else { "NO" };
        writeln!(f, "Solved: {solved}")?;
        writeln!(f, "Moves: {}", self.history)?;
        for face in Face::ARRAY {
            writeln!(f, "{face:?}:")?;
            for row in 0..ROWS {
                let line: Vec<String> = self
                    .grid
                    .row(face, row)
                    .iter()
                    .map(|c| c.to_char().to_string())
                    .collect();
                writeln!(f, "  {}", line.join(" "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mv;
    use moves::{Move222Type, Turn};

    /// The scramble from the README: `-ft YYYY -ff ROOO -fr BGBB -fbk ORRR -fb WWWW -fl GBGG`.
    fn readme_scramble() -> Cube222 {
        let mut cube = Cube222::new();
        for (face, s) in [
            (Face::Up, "YYYY"),
            (Face::Front, "ROOO"),
            (Face::Right, "BGBB"),
            (Face::Back, "ORRR"),
            (Face::Down, "WWWW"),
            (Face::Left, "GBGG"),
        ] {
            cube.set_face(face, &parse_face(s).unwrap());
        }
        cube.snapshot();
        cube
    }

    #[test]
    fn new_cube_is_solved() {
        let cube = Cube222::new();
        assert!(cube.is_solved());
        assert!(cube.is_fully_solved());
        assert_eq!(cube.heuristic(), 0);
        assert!(cube.history().is_empty());
    }

    #[test]
    fn set_single_color() {
        let mut cube = Cube222::new();
        cube.set_face(Face::Up, &[Color::Red]);
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(cube.cell(Face::Up, row, col), Color::Red);
        }
    }

    #[test]
    fn set_color_list_is_row_major() {
        let mut cube = Cube222::new();
        cube.set_face(Face::Front, &[Color::Red, Color::Blue, Color::Green, Color::Yellow]);
        assert_eq!(cube.cell(Face::Front, 0, 0), Color::Red);
        assert_eq!(cube.cell(Face::Front, 0, 1), Color::Blue);
        assert_eq!(cube.cell(Face::Front, 1, 0), Color::Green);
        assert_eq!(cube.cell(Face::Front, 1, 1), Color::Yellow);
    }

    #[test]
    fn extra_colors_are_ignored() {
        let mut cube = Cube222::new();
        cube.set_face(Face::Left, &[Color::Red; 6]);
        assert!(cube.grid().face(Face::Left).iter().all(|&c| c == Color::Red));
        assert!(cube.grid().is_uniform(Face::Back));
        assert_eq!(cube.cell(Face::Back, 0, 0), Color::Green);
    }

    #[test]
    fn out_of_range_access_recovers() {
        let mut cube = Cube222::new();
        assert_eq!(
            cube.try_cell(Face::Back, 2, 0),
            Err(GridError::OutOfBounds {
                face: Face::Back,
                row: 2,
                col: 0
            })
        );
        assert_eq!(cube.cell(Face::Up, 0, 5), Color::White);

        let before = cube.clone();
        cube.set_cell(Face::Down, 7, 7, Color::Red);
        assert_eq!(cube, before);
        assert!(cube.try_set_cell(Face::Down, 0, 2, Color::Red).is_err());
        assert_eq!(
            GridError::OutOfBounds {
                face: Face::Down,
                row: 0,
                col: 2
            }
            .to_string(),
            "sticker (0, 2) is out of bounds on the Down face"
        );
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut cube = Cube222::new();
        cube.apply(mv!(U, Cw));
        cube.apply(mv!(R, Cw));
        cube.apply(mv!(F, Cw));
        assert!(!cube.is_solved());
        assert_eq!(cube.history().len(), 3);

        cube.reset();
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
    }

    #[test]
    fn snapshot_is_explicit() {
        let mut cube = Cube222::new();
        cube.apply(mv!(U, Cw));
        cube.apply(mv!(R, Cw));
        let scrambled = *cube.grid();
        cube.snapshot();

        cube.apply(mv!(F, Cw));
        cube.apply(mv!(L, Cw));
        cube.reset();
        assert_eq!(*cube.grid(), scrambled);
        assert!(!cube.is_solved());

        // Painting faces does not move the snapshot.
        cube.set_face_color(Face::Up, Color::Green);
        cube.reset();
        assert_eq!(*cube.grid(), scrambled);
    }

    #[test]
    fn clones_are_independent() {
        let mut cube = Cube222::new();
        cube.apply(mv!(U, Cw));
        let copy = cube.clone();
        cube.apply(mv!(F, Cw));
        assert_ne!(cube, copy);
        assert_eq!(copy.history().len(), 1);
    }

    #[test]
    fn invert_undoes_and_pops_history() {
        let mut cube = Cube222::new();
        cube.apply(mv!(U, Cw));
        cube.apply(mv!(R, Cw));
        cube.apply(mv!(F, Cw));
        cube.invert(mv!(F, Cw));
        cube.invert(mv!(R, Cw));
        cube.invert(mv!(U, Cw));
        assert_eq!(*cube.grid(), StickerGrid::SOLVED);
        assert!(cube.history().is_empty());
    }

    #[test]
    fn single_turns_are_not_solved() {
        for &m in Qtm::MOVE_LIST {
            let mut cube = Cube222::new();
            cube.apply(m);
            assert!(!cube.is_solved(), "{m:?}");
            assert!(!cube.is_fully_solved(), "{m:?}");
            assert_eq!(cube.heuristic(), 1, "{m:?}");
        }
    }

    #[test]
    fn half_check_accepts_any_uniform_colouring() {
        let cube = Cube222::from_grid(StickerGrid::from_face_colors([
            Color::White,
            Color::Green,
            Color::Orange,
            Color::Yellow,
            Color::Blue,
            Color::Red,
        ]));
        assert!(cube.is_solved());
    }

    #[test]
    fn half_check_ignores_the_other_faces() {
        let mut cube = Cube222::new();
        cube.set_cell(Face::Back, 1, 1, Color::Red);
        assert!(cube.is_solved());
        assert!(!cube.is_fully_solved());
    }

    #[test]
    fn heuristic_counts_misplaced_stickers() {
        let mut cube = Cube222::new();
        cube.set_face(Face::Up, &[Color::Yellow, Color::Red, Color::Red, Color::Red]);
        assert_eq!(cube.heuristic(), 0);
        cube.set_face(Face::Down, &[Color::White, Color::Red, Color::Red, Color::Red]);
        cube.set_face(Face::Left, &[Color::Orange, Color::Red, Color::Red, Color::Red]);
        assert_eq!(cube.heuristic(), 9 / HEURISTIC_DIVISOR);
    }

    #[test]
    fn readme_scramble_is_scrambled() {
        let cube = readme_scramble();
        assert!(!cube.is_solved());
        assert_eq!(cube.heuristic(), 1);
        assert_eq!(cube.cell(Face::Front, 0, 0), Color::Red);
        assert_eq!(cube.cell(Face::Right, 0, 1), Color::Green);
    }

    #[test]
    fn readme_solution_replays_to_solved() {
        let mut cube = readme_scramble();
        let solution = MoveSequence(vec![
            mv!(F, Cw),
            mv!(U, Ccw),
            mv!(B, Cw),
            mv!(L, Ccw),
            mv!(B, Cw),
            mv!(R, Cw),
            mv!(F, Cw),
        ]);
        cube.apply_sequence(&solution);
        assert!(cube.is_solved());
        assert_eq!(*cube.history(), solution);
    }

    #[test]
    fn fingerprint_is_one_symbol_per_sticker() {
        let mut cube = Cube222::new();
        let solved = cube.fingerprint();
        assert_eq!(solved.len(), CELLS);
        assert_eq!(solved[0], Color::Yellow as u8);
        cube.apply(mv!(D, Cw));
        assert_ne!(cube.fingerprint(), solved);
        cube.invert(mv!(D, Cw));
        assert_eq!(cube.fingerprint(), solved);
    }

    #[test]
    fn parsing() {
        assert_eq!(
            parse_face("rOoO").unwrap(),
            vec![Color::Red, Color::Orange, Color::Orange, Color::Orange]
        );
        assert_eq!(parse_face("Y").unwrap(), vec![Color::Yellow]);
        assert_eq!(parse_face("RX"), Err(ParseError::UnknownColor('X')));
        assert_eq!(
            parse_face("RRR"),
            Err(ParseError::WrongStickerCount {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(Face::from_tag("-fbk"), Ok(Face::Back));
        assert_eq!(Face::from_tag("-fb"), Ok(Face::Down));
        assert_eq!(
            Face::from_tag("-fx"),
            Err(ParseError::UnknownFace("-fx".to_owned()))
        );
        assert_eq!(Face::try_from(4u8), Ok(Face::Back));
        assert_eq!(Color::try_from(6u8), Err(TryFromIntToEnumError::OutOfBounds));
        for color in Color::ARRAY {
            assert_eq!(Color::try_from(color.to_char()), Ok(color));
        }
    }

    #[test]
    fn display_lists_faces_and_moves() {
        let mut cube = Cube222::new();
        cube.apply(Move222 {
            ty: Move222Type::R,
            turn: Turn::Ccw,
        });
        let shown = cube.to_string();
        assert!(shown.starts_with("Solved: NO\nMoves: R'\nUp:\n"));
        assert_eq!(shown.lines().count(), 2 + 6 * 3);
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn heuristic_never_exceeds_scramble_length(
            mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence),
        ) {
            let mut cube = Cube222::new();
            cube.apply_sequence(&mvs);
            assert!(cube.heuristic() <= mvs.len());
            if cube.is_fully_solved() {
                assert_eq!(cube.heuristic(), 0);
            }
        }

        #[test]
        fn apply_then_invert_is_identity(
            mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence),
            m in any::<Move222>(),
        ) {
            let mut cube = Cube222::new();
            cube.apply_sequence(&mvs);
            let before = cube.clone();
            cube.apply(m);
            cube.invert(m);
            assert_eq!(cube, before);
            for _ in 0..4 {
                cube.apply(m);
            }
            assert_eq!(cube.grid(), before.grid());
        }
    }
}
