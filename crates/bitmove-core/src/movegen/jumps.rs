//! Knight and king move generation from the precomputed jump tables.

use crate::attacks::{king_attacks, knight_attacks};
use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::{MoveList, push_targets};

/// Shared routine for fixed-pattern pieces: look up each origin, drop own squares.
fn gen_jumps(
    pieces: Bitboard,
    own: Bitboard,
    enemy: Bitboard,
    table: fn(Square) -> Bitboard,
    list: &mut MoveList,
) {
    for from in pieces {
        push_targets(list, from, table(from) & !own, enemy);
    }
}

pub(super) fn gen_knights(pos: &Position, color: Color, list: &mut MoveList) {
    gen_jumps(
        pos.pieces_of(color, PieceKind::Knight),
        pos.side(color),
        pos.side(color.flip()),
        knight_attacks,
        list,
    );
}

/// Every bit of the king board is treated as a king, so a position without
/// one simply yields no king moves.
pub(super) fn gen_king(pos: &Position, color: Color, list: &mut MoveList) {
    gen_jumps(
        pos.pieces_of(color, PieceKind::King),
        pos.side(color),
        pos.side(color.flip()),
        king_attacks,
        list,
    );
}

#[cfg(test)]
mod tests {
    use super::{gen_king, gen_knights};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::movegen::MoveList;
    use crate::position::Position;
    use crate::square::Square;

    fn run(fen: &str, gen_fn: fn(&Position, Color, &mut MoveList)) -> MoveList {
        let pos: Position = fen.parse().unwrap();
        let mut list = MoveList::new();
        gen_fn(&pos, pos.side_to_move(), &mut list);
        list
    }

    #[test]
    fn corner_knight() {
        let list = run("8/8/8/8/8/8/8/N7 w", gen_knights);
        assert_eq!(
            list.into_vec(),
            vec![Move::new(Square::A1, Square::C2), Move::new(Square::A1, Square::B3)]
        );
    }

    #[test]
    fn knight_on_h_file_does_not_wrap() {
        let list = run("8/8/8/8/7N/8/8/8 w", gen_knights);
        assert_eq!(list.len(), 4);
        for mv in &list {
            assert!(mv.to.file() >= 5, "{mv:?} wrapped");
        }
    }

    #[test]
    fn knight_captures_and_own_blockers() {
        // c3 knight: b1 own, d5 enemy
        let list = run("8/8/8/3p4/8/2N5/8/1K6 w", gen_knights);
        assert_eq!(list.len(), 7);
        assert!(list.as_slice().contains(&Move::capture(Square::C3, Square::D5)));
        assert!(!list.as_slice().iter().any(|mv| mv.to == Square::B1));
    }

    #[test]
    fn king_in_corner_and_centre() {
        assert_eq!(run("8/8/8/8/8/8/8/K7 w", gen_king).len(), 3);
        assert_eq!(run("8/8/8/8/4K3/8/8/8 w", gen_king).len(), 8);
        assert_eq!(run("7k/8/8/8/8/8/8/8 b", gen_king).len(), 3);
    }

    #[test]
    fn king_on_a_file_does_not_wrap() {
        let list = run("8/8/8/8/K7/8/8/8 w", gen_king);
        assert_eq!(list.len(), 5);
        for mv in &list {
            assert!(mv.to.file() <= 1, "{mv:?} wrapped");
        }
    }

    #[test]
    fn missing_or_extra_kings() {
        assert!(run("8/8/8/8/8/8/8/8 w", gen_king).is_empty());
        // two white kings: both generate
        let list = run("8/8/8/8/8/8/8/K6K w", gen_king);
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn king_captures_flagged() {
        let list = run("8/8/8/8/8/8/1p6/K7 w", gen_king);
        assert_eq!(list.len(), 3);
        assert!(list.as_slice().contains(&Move::capture(Square::A1, Square::B2)));
    }
}
