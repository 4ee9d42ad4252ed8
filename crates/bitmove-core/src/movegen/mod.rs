//! Pseudo-legal move generation.
//!
//! Every generator works for one piece kind of one side and never checks
//! whether the mover's king is left attacked.

mod jumps;
mod pawns;
mod sliders;

use crate::attacks::SliderMode;
use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use self::jumps::{gen_king, gen_knights};
use self::pawns::gen_pawns;
use self::sliders::gen_sliders;

/// Growable buffer of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::with_capacity(64) }
    }

    /// Append a move.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list contains no moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return the moves as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Push one move per target square, flagging captures from `enemy`.
#[inline]
fn push_targets(list: &mut MoveList, from: Square, targets: Bitboard, enemy: Bitboard) {
    for to in targets {
        list.push(if enemy.contains(to) {
            Move::capture(from, to)
        } else {
            Move::new(from, to)
        });
    }
}

/// Append the moves of `color`'s pieces of `kind` to `list`.
pub fn generate_piece_moves(
    pos: &Position,
    color: Color,
    kind: PieceKind,
    mode: SliderMode,
    list: &mut MoveList,
) {
    match kind {
        PieceKind::Pawn => gen_pawns(pos, color, list),
        PieceKind::Knight => gen_knights(pos, color, list),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            gen_sliders(pos, color, kind, mode, list)
        }
        PieceKind::King => gen_king(pos, color, list),
    }
}

/// All moves for `color`: pawns, knights, bishops, rooks, queens, king, in that order.
pub fn generate_moves(pos: &Position, color: Color, mode: SliderMode) -> MoveList {
    let mut list = MoveList::new();
    for kind in PieceKind::ALL {
        generate_piece_moves(pos, color, kind, mode, &mut list);
    }
    list
}
