//! Piece placement: twelve bitboards and the side to move.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Twelve piece bitboards, indexed by [`Piece::index`], plus the side to move.
///
/// Equal positions hash equally, which makes a `Position` usable directly as
/// the move cache key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    boards: [Bitboard; Piece::COUNT],
    side_to_move: Color,
}

impl Position {
    /// An empty board with White to move.
    pub fn empty() -> Position {
        Position::default()
    }

    /// The standard starting position.
    pub fn starting_position() -> Position {
        let mut pos = Position::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (kind, white_sq, black_sq) in back_rank
            .into_iter()
            .zip(Bitboard::RANK_1)
            .zip(Bitboard::RANK_8)
            .map(|((kind, w), b)| (kind, w, b))
        {
            pos.boards[Piece::new(Color::White, kind).index()] |= white_sq.bitboard();
            pos.boards[Piece::new(Color::Black, kind).index()] |= black_sq.bitboard();
        }
        pos.boards[Piece::new(Color::White, PieceKind::Pawn).index()] = Bitboard::RANK_2;
        pos.boards[Piece::new(Color::Black, PieceKind::Pawn).index()] = Bitboard::RANK_7;
        pos
    }

    /// Bitboard of one colored piece.
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.boards[piece.index()]
    }

    /// Bitboard of `color`'s pieces of `kind`.
    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces(Piece::new(color, kind))
    }

    /// Union of one side's six bitboards.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        let start = color.index() * PieceKind::COUNT;
        self.boards[start..start + PieceKind::COUNT]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    /// All occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.side(Color::White) | self.side(Color::Black)
    }

    /// All empty squares.
    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    /// The side whose moves are generated next.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// The piece standing on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        (0..Piece::COUNT)
            .find(|&i| self.boards[i].contains(sq))
            .and_then(Piece::from_index)
    }

    /// Which of `color`'s six bitboards holds `sq`.
    pub fn kind_at(&self, color: Color, sq: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.pieces_of(color, kind).contains(sq))
    }

    /// Put `piece` on `sq`, replacing whatever stood there.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.clear_square(sq);
        self.boards[piece.index()] |= sq.bitboard();
    }

    /// Remove `sq` from all twelve bitboards.
    pub fn clear_square(&mut self, sq: Square) {
        let mask = !sq.bitboard();
        for bb in &mut self.boards {
            *bb &= mask;
        }
    }

    /// Move the bit of `piece` from `from` to `to` within its own bitboard.
    #[inline]
    pub(crate) fn relocate(&mut self, piece: Piece, from: Square, to: Square) {
        let bb = &mut self.boards[piece.index()];
        *bb = bb.without(from).with(to);
    }

    /// Check that no square is claimed twice and each side has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = Bitboard::EMPTY;
        for bb in self.boards {
            if let Some(square) = (seen & bb).lsb() {
                return Err(BoardError::OverlappingPieces { square });
            }
            seen |= bb;
        }

        for color in Color::ALL {
            let count = self.pieces_of(color, PieceKind::King).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}

/// Renders a position as an 8x8 grid of piece letters, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Position);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "  +---+---+---+---+---+---+---+---+";
        writeln!(f, "{RULE}")?;
        for rank in (0u8..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0u8..8 {
                let c = Square::from_coords(rank, file)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or(' ', Piece::letter);
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
