//! Core value types for the pawns-only variant.
//!
//! Every square holds one of exactly three values; color decides movement
//! direction, start row, and the goal row whose arrival wins the game.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step. White advances toward row 0, Black
    /// toward row 7.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row where this color's pawns start, and from which a double step is
    /// allowed.
    #[inline]
    pub const fn start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Far-edge row whose arrival wins the game for this color.
    #[inline]
    pub const fn goal_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Content of one board square. Pawns are the only piece kind in this
/// variant, so color is folded into the square value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Empty,
    WhitePawn,
    BlackPawn,
}

impl Square {
    #[inline]
    pub const fn pawn_of(color: Color) -> Self {
        match color {
            Color::White => Square::WhitePawn,
            Color::Black => Square::BlackPawn,
        }
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Square::Empty => None,
            Square::WhitePawn => Some(Color::White),
            Square::BlackPawn => Some(Color::Black),
        }
    }

    /// Single-character cell content used by the terminal renderer.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::WhitePawn => 'W',
            Square::BlackPawn => 'B',
        }
    }
}

/// Board coordinate. Column 0 is file 'a'; row 0 is rank 8, so White moves
/// toward smaller rows and Black toward larger ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Shift by the given deltas, or `None` when the result leaves the grid.
    #[inline]
    pub fn offset(self, d_col: i8, d_row: i8) -> Option<Self> {
        let col = self.col as i8 + d_col;
        let row = self.row as i8 + d_row;
        if (0..8).contains(&col) && (0..8).contains(&row) {
            Some(Self::new(col as u8, row as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.col),
            char::from(b'8' - self.row)
        )
    }
}

/// A proposed or applied move, already parsed out of move notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnMove {
    pub from: Position,
    pub to: Position,
}

impl fmt::Display for PawnMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
