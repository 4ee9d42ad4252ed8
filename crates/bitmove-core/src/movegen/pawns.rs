//! Pawn move generation.
//!
//! All pawns of a side are shifted as one bitboard and each source is recovered
//! from its target by the inverse offset. Categories are emitted in order:
//! single push, double push, right capture, left capture. For a single pawn
//! they never share a target, since pushes land on empty squares and captures
//! on enemy pieces, so two pawns reaching one square are both emitted.

use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::MoveList;

/// Linear offsets of the right and left captures for `color`.
///
/// "Right" is toward file h, so those captures must not start on file h.
const fn capture_offsets(color: Color) -> (i8, i8) {
    match color {
        Color::White => (9, 7),
        Color::Black => (-7, -9),
    }
}

/// Emit one move per target square in `targets`, each coming from `to - offset`.
fn push_batch(list: &mut MoveList, targets: Bitboard, offset: i8, capture: bool) {
    for to in targets {
        let Some(from) = to.offset(-offset) else {
            continue;
        };
        list.push(if capture { Move::capture(from, to) } else { Move::new(from, to) });
    }
}

pub(super) fn gen_pawns(pos: &Position, color: Color, list: &mut MoveList) {
    let pawns = pos.pieces_of(color, PieceKind::Pawn);
    if pawns.is_empty() {
        return;
    }
    let empty = pos.empty_squares();
    let enemy = pos.side(color.flip());
    let forward = color.forward();
    let (right, left) = capture_offsets(color);

    let single = pawns.shift(forward) & empty;
    let double = ((pawns & color.pawn_start_rank()).shift(forward) & empty).shift(forward) & empty;
    let right_captures = (pawns & !Bitboard::FILE_H).shift(right) & enemy;
    let left_captures = (pawns & !Bitboard::FILE_A).shift(left) & enemy;

    push_batch(list, single, forward, false);
    push_batch(list, double, forward * 2, false);
    push_batch(list, right_captures, right, true);
    push_batch(list, left_captures, left, true);
}
