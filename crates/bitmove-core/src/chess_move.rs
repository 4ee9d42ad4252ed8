//! Move records produced by the generators.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A candidate move. Plain value: two moves with equal fields are the same move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Set when `to` held an enemy piece at generation time.
    pub capture: bool,
    /// Reserved for promotion moves; the generators never fill it in.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// A non-capturing move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to, capture: false, promotion: None }
    }

    /// A capturing move.
    #[inline]
    pub const fn capture(from: Square, to: Square) -> Move {
        Move { from, to, capture: true, promotion: None }
    }

    /// Build a move from raw square indices, `None` if either is out of range.
    pub const fn from_indices(from: u8, to: u8) -> Option<Move> {
        match (Square::from_index(from), Square::from_index(to)) {
            (Some(from), Some(to)) => Some(Move::new(from, to)),
            _ => None,
        }
    }

    /// Coordinate notation, e.g. `"e2e4"`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.capture { 'x' } else { '-' };
        write!(f, "Move({}{sep}{})", self.from, self.to)
    }
}
