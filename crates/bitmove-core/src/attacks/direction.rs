//! Compass directions for sliding pieces.

use crate::bitboard::Bitboard;
use crate::square::Square;

/// One of the eight ray directions, with White's side of the board at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
    NorthEast = 4,
    NorthWest = 5,
    SouthEast = 6,
    SouthWest = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Rook rays.
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Bishop rays.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// (rank, file) step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (1, -1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// Linear step: +8, -8, +1, -1, +9, +7, -7, -9.
    #[inline]
    pub const fn offset(self) -> i8 {
        let (dr, df) = self.delta();
        dr * 8 + df
    }

    /// Whether the offset moves toward higher square indices.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.offset() > 0
    }

    /// Squares a step in this direction may not start from.
    ///
    /// Covers both leaving the board and wrapping onto the opposite file.
    pub const fn edge(self) -> Bitboard {
        let (dr, df) = self.delta();
        let mut edge = 0u64;
        if dr > 0 {
            edge |= Bitboard::RANK_8.inner();
        }
        if dr < 0 {
            edge |= Bitboard::RANK_1.inner();
        }
        if df > 0 {
            edge |= Bitboard::FILE_H.inner();
        }
        if df < 0 {
            edge |= Bitboard::FILE_A.inner();
        }
        Bitboard::new(edge)
    }

    /// The neighbouring square in this direction, `None` at the edge.
    #[inline]
    pub fn step(self, from: Square) -> Option<Square> {
        if self.edge().contains(from) {
            None
        } else {
            from.offset(self.offset())
        }
    }
}
