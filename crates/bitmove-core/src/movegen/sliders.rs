//! Bishop, rook and queen move generation.

use crate::attacks::{Direction, SliderMode, slider_targets};
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::{MoveList, push_targets};

fn directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &Direction::DIAGONAL,
        PieceKind::Rook => &Direction::ORTHOGONAL,
        _ => &Direction::ALL,
    }
}

/// One routine for all three sliders, parameterised by their ray set.
pub(super) fn gen_sliders(
    pos: &Position,
    color: Color,
    kind: PieceKind,
    mode: SliderMode,
    list: &mut MoveList,
) {
    let own = pos.side(color);
    let enemy = pos.side(color.flip());
    let dirs = directions(kind);
    for from in pos.pieces_of(color, kind) {
        push_targets(list, from, slider_targets(from, dirs, own, enemy, mode), enemy);
    }
}
