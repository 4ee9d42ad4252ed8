//! Error types for position parsing, validation, and move application.

use crate::color::Color;
use crate::square::Square;

/// Structural problems in a position string that cannot be mapped onto a board.
///
/// Unknown piece letters and a bad side token are tolerated, not reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The string has no piece placement field.
    #[error("missing piece placement")]
    MissingPlacement,

    /// The placement describes more than 8 ranks.
    #[error("expected at most 8 ranks in piece placement, found {found}")]
    TooManyRanks {
        /// Number of ranks found.
        found: usize,
    },

    /// A rank describes more than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected at most 8")]
    BadRankLength {
        /// Zero-based rank index within the string (0 = rank 8).
        rank_index: usize,
        /// Number of squares described so far.
        length: usize,
    },
}

/// Violations of the position invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },

    /// Two of the twelve piece bitboards claim the same square.
    #[error("overlapping piece bitboards on {square}")]
    OverlappingPieces {
        /// First square found in more than one bitboard.
        square: Square,
    },
}

/// Failures of [`Board::apply_move`](crate::Board::apply_move) and
/// [`Board::undo`](crate::Board::undo).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The side to move has no piece on the source square.
    #[error("no {color} piece on {square}")]
    NoPieceOnSource {
        /// The side to move.
        color: Color,
        /// The move's source square.
        square: Square,
    },

    /// Undo was called with no applied move to revert.
    #[error("no move to undo")]
    NothingToUndo,
}
