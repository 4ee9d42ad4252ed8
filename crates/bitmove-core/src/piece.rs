//! Colored pieces and their slot among the twelve position bitboards.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece of one side.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Number of distinct colored pieces, one bitboard each.
    pub const COUNT: usize = Color::COUNT * PieceKind::COUNT;

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Bitboard slot: White pieces 0-5, Black pieces 6-11, kinds in [`PieceKind`] order.
    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * PieceKind::COUNT + self.kind.index()
    }

    /// Inverse of [`Piece::index`].
    pub const fn from_index(index: usize) -> Option<Piece> {
        if index >= Piece::COUNT {
            return None;
        }
        let color = if index < PieceKind::COUNT { Color::White } else { Color::Black };
        Some(Piece::new(color, PieceKind::ALL[index % PieceKind::COUNT]))
    }

    /// Parse a text-format letter: uppercase is White, lowercase is Black.
    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(color, kind))
    }

    /// Text-format letter for this piece.
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({})", self.letter())
    }
}
