//! The move-generation engine: a position plus its undo history and move cache.

use std::sync::Arc;

use tracing::trace;

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::cache::{CacheStats, MoveCache};
use crate::chess_move::Move;
use crate::color::Color;
use crate::config::Config;
use crate::error::{FenError, MoveError};
use crate::movegen::{MoveList, generate_moves, generate_piece_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Owns the current [`Position`], a stack of snapshots for [`Board::undo`], and
/// a cache of generated move lists keyed by position.
#[derive(Debug)]
pub struct Board {
    position: Position,
    history: Vec<Position>,
    cache: MoveCache,
    config: Config,
}

impl Board {
    /// The starting position with the default configuration.
    pub fn new() -> Board {
        Board::with_config(Config::default())
    }

    /// The starting position with a custom configuration.
    pub fn with_config(config: Config) -> Board {
        Board::from_position_with_config(Position::starting_position(), config)
    }

    /// Wrap an existing position with the default configuration.
    pub fn from_position(position: Position) -> Board {
        Board::from_position_with_config(position, Config::default())
    }

    /// Wrap an existing position with a custom configuration.
    pub fn from_position_with_config(position: Position, config: Config) -> Board {
        Board {
            position,
            history: Vec::new(),
            cache: MoveCache::new(config.cache),
            config,
        }
    }

    /// Parse a position string. See [`Position`]'s `FromStr` for the accepted format.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        Ok(Board::from_position(fen.parse()?))
    }

    /// The current position.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    /// Export the current position in the text format.
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Number of moves that can currently be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Every pseudo-legal move for the side to move.
    ///
    /// The list is cached per position; a repeated call on an identical position
    /// returns the same shared list without regenerating.
    pub fn generate_all(&mut self) -> Arc<[Move]> {
        let position = self.position;
        let mode = self.config.slider_mode;
        self.cache.get_or_insert_with(&position, || {
            generate_moves(&position, position.side_to_move(), mode).into_vec()
        })
    }

    /// Moves of one piece kind for `color`, bypassing the cache.
    pub fn piece_moves(&self, color: Color, kind: PieceKind) -> MoveList {
        let mut list = MoveList::new();
        generate_piece_moves(&self.position, color, kind, self.config.slider_mode, &mut list);
        list
    }

    /// Play `mv` for the side to move and hand the turn to the other side.
    ///
    /// The move is not checked against the generated list. Whatever stands on
    /// `to` is removed. Fails without touching the board if the side to move
    /// has no piece on `from`.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let color = self.position.side_to_move();
        let kind = self
            .position
            .kind_at(color, mv.from)
            .ok_or(MoveError::NoPieceOnSource { color, square: mv.from })?;

        self.history.push(self.position);
        self.position.clear_square(mv.to);
        self.position.relocate(Piece::new(color, kind), mv.from, mv.to);
        self.position.set_side_to_move(color.flip());

        trace!(mv = %mv, piece = %Piece::new(color, kind), ply = self.history.len(), "applied move");
        Ok(())
    }

    /// Restore the position from before the most recent [`Board::apply_move`].
    pub fn undo(&mut self) -> Result<(), MoveError> {
        let previous = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        self.position = previous;
        trace!(ply = self.history.len(), "undid move");
        Ok(())
    }

    /// Whether the side to move has a generated move landing on `sq`.
    ///
    /// This counts pawn pushes as well as captures and ignores the opponent
    /// entirely. Use [`Board::is_attacked_by`] for real attack detection.
    pub fn is_attacked(&mut self, sq: Square) -> bool {
        self.generate_all().iter().any(|mv| mv.to == sq)
    }

    /// Whether any piece of `by` attacks `sq`, regardless of whose turn it is.
    pub fn is_attacked_by(&self, sq: Square, by: Color) -> bool {
        let pos = &self.position;
        let occupied = pos.occupied();
        let queens = pos.pieces_of(by, PieceKind::Queen);

        (knight_attacks(sq) & pos.pieces_of(by, PieceKind::Knight)).is_nonempty()
            || (king_attacks(sq) & pos.pieces_of(by, PieceKind::King)).is_nonempty()
            || (pawn_attacks(by.flip(), sq) & pos.pieces_of(by, PieceKind::Pawn)).is_nonempty()
            || (bishop_attacks(sq, occupied) & (pos.pieces_of(by, PieceKind::Bishop) | queens))
                .is_nonempty()
            || (rook_attacks(sq, occupied) & (pos.pieces_of(by, PieceKind::Rook) | queens))
                .is_nonempty()
    }

    /// Resolve coordinate notation such as `"g1f3"` against the generated moves.
    ///
    /// Returns `None` for malformed input or a move that is not generated here.
    pub fn parse_move(&mut self, text: &str) -> Option<Move> {
        let text = text.trim();
        let from = Square::from_algebraic(text.get(0..2)?)?;
        let to = Square::from_algebraic(text.get(2..4)?)?;
        let promotion = match text.get(4..)? {
            "" => None,
            rest => {
                let mut chars = rest.chars();
                let kind = chars.next().and_then(PieceKind::from_letter)?;
                if chars.next().is_some() {
                    return None;
                }
                Some(kind)
            }
        };

        self.generate_all()
            .iter()
            .copied()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
    }

    /// Counters of the move cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop every cached move list and reset the counters.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::SliderMode;
    use crate::cache::CachePolicy;
    use crate::fen::STARTING_FEN;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w";

    #[test]
    fn new_board_is_starting_position() {
        let board = Board::new();
        assert_eq!(board.to_fen(), STARTING_FEN);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn apply_moves_piece_and_flips_turn() {
        let mut board = Board::new();
        board.apply_move(Move::new(Square::E2, Square::E4)).unwrap();
        assert_eq!(board.piece_at(Square::E2), None);
        assert_eq!(board.piece_at(Square::E4), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b");
    }

    #[test]
    fn capture_clears_target_on_every_board() {
        let mut board = Board::from_fen("4k3/8/8/3p4/4N3/8/8/4K3 w").unwrap();
        board.apply_move(Move::capture(Square::E4, Square::D5)).unwrap();
        assert_eq!(board.piece_at(Square::D5), Some(Piece::new(Color::White, PieceKind::Knight)));
        assert!(board.position().pieces_of(Color::Black, PieceKind::Pawn).is_empty());
        board.position().validate().unwrap();
    }

    #[test]
    fn apply_then_undo_restores_every_generated_move() {
        for fen in [STARTING_FEN, KIWIPETE, "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b"] {
            let mut board = Board::from_fen(fen).unwrap();
            let before = *board.position();
            let moves = board.generate_all();
            for &mv in moves.iter() {
                board.apply_move(mv).unwrap();
                assert_ne!(*board.position(), before, "{mv:?} changed nothing");
                board.undo().unwrap();
                assert_eq!(*board.position(), before, "{mv:?} not restored");
            }
        }
    }

    #[test]
    fn multi_ply_undo() {
        let mut board = Board::new();
        let start = *board.position();
        let line = ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"];
        let mut snapshots = vec![start];
        for text in line {
            let mv = board.parse_move(text).unwrap();
            board.apply_move(mv).unwrap();
            snapshots.push(*board.position());
        }
        assert_eq!(board.history_len(), line.len());
        snapshots.pop();
        while let Some(expected) = snapshots.pop() {
            board.undo().unwrap();
            assert_eq!(*board.position(), expected);
        }
        assert_eq!(*board.position(), start);
        assert_eq!(board.undo(), Err(MoveError::NothingToUndo));
    }

    #[test]
    fn apply_from_empty_square_fails_cleanly() {
        let mut board = Board::new();
        let before = *board.position();
        let err = board.apply_move(Move::new(Square::E4, Square::E5)).unwrap_err();
        assert_eq!(err, MoveError::NoPieceOnSource { color: Color::White, square: Square::E4 });
        // a black piece is not the side to move's piece
        let err = board.apply_move(Move::new(Square::E7, Square::E5)).unwrap_err();
        assert_eq!(err, MoveError::NoPieceOnSource { color: Color::White, square: Square::E7 });
        assert_eq!(*board.position(), before);
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn undo_on_fresh_board_fails() {
        let mut board = Board::new();
        assert_eq!(board.undo(), Err(MoveError::NothingToUndo));
    }

    #[test]
    fn generate_all_is_cached_per_position() {
        let mut board = Board::new();
        let first = board.generate_all();
        let second = board.generate_all();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(board.cache_stats(), CacheStats { hits: 1, misses: 1, entries: 1 });
    }

    #[test]
    fn cache_returns_fresh_list_after_mutation_and_reuses_after_revert() {
        let mut board = Board::new();
        let start_moves = board.generate_all();
        board.apply_move(Move::new(Square::E2, Square::E4)).unwrap();
        let black_moves = board.generate_all();
        assert!(black_moves.iter().all(|mv| mv.from.rank() >= 6));
        assert_eq!(black_moves.len(), 20);
        board.undo().unwrap();
        let again = board.generate_all();
        assert!(Arc::ptr_eq(&start_moves, &again));
        assert_eq!(board.cache_stats(), CacheStats { hits: 1, misses: 2, entries: 2 });
    }

    #[test]
    fn cached_list_matches_fresh_generation() {
        let mut board = Board::from_fen(KIWIPETE).unwrap();
        board.generate_all();
        let cached = board.generate_all();
        let fresh = generate_moves(board.position(), Color::White, SliderMode::default());
        assert_eq!(&*cached, fresh.as_slice());
    }

    #[test]
    fn clear_cache_forces_regeneration() {
        let mut board = Board::new();
        board.generate_all();
        board.clear_cache();
        board.generate_all();
        assert_eq!(board.cache_stats(), CacheStats { hits: 0, misses: 1, entries: 1 });
    }

    #[test]
    fn bounded_cache_config_is_honoured() {
        let config = Config::default().with_cache(CachePolicy::Bounded(2));
        let mut board = Board::with_config(config);
        for text in ["e2e4", "e7e5", "g1f3"] {
            board.generate_all();
            let mv = board.parse_move(text).unwrap();
            board.apply_move(mv).unwrap();
            assert!(board.cache_stats().entries <= 2);
        }
    }

    #[test]
    fn ray_walk_config_generates_same_moves() {
        let walk = Config::default().with_slider_mode(SliderMode::RayWalk);
        let mut walked = Board::from_position_with_config(KIWIPETE.parse().unwrap(), walk);
        let mut table = Board::from_fen(KIWIPETE).unwrap();
        let mut a = walked.generate_all().to_vec();
        let mut b = table.generate_all().to_vec();
        a.sort_by_key(|mv| (mv.from, mv.to));
        b.sort_by_key(|mv| (mv.from, mv.to));
        assert_eq!(a, b);
    }

    #[test]
    fn piece_moves_accessor() {
        let board = Board::new();
        assert_eq!(board.piece_moves(Color::White, PieceKind::Knight).len(), 4);
        assert_eq!(board.piece_moves(Color::Black, PieceKind::Pawn).len(), 16);
        assert!(board.piece_moves(Color::Black, PieceKind::King).is_empty());
    }

    #[test]
    fn is_attacked_reflects_side_to_move_reach() {
        let mut board = Board::new();
        // a pawn push target counts
        assert!(board.is_attacked(Square::E4));
        assert!(board.is_attacked(Square::F3));
        assert!(!board.is_attacked(Square::E5));
        // own occupied squares are never targets
        assert!(!board.is_attacked(Square::E2));
    }

    #[test]
    fn is_attacked_differs_from_true_attacks() {
        let mut board = Board::new();
        // e4 is reachable by a push but no white piece attacks it
        assert!(board.is_attacked(Square::E4));
        assert!(!board.is_attacked_by(Square::E4, Color::White));
        // d3 is attacked by the c2 and e2 pawns and is also a push target
        assert!(board.is_attacked_by(Square::D3, Color::White));
        // e2 is defended by the king, queen, bishop and knight but holds a pawn
        assert!(board.is_attacked_by(Square::E2, Color::White));
        assert!(!board.is_attacked(Square::E2));
    }

    #[test]
    fn is_attacked_by_each_piece_kind() {
        let board = Board::from_fen("4k3/8/8/8/3q4/8/5N2/4K3 w").unwrap();
        // queen d4 along the diagonal, blocked beyond f2
        assert!(board.is_attacked_by(Square::F2, Color::Black));
        assert!(!board.is_attacked_by(Square::G1, Color::Black));
        // queen along the file
        assert!(board.is_attacked_by(Square::D1, Color::Black));
        // knight f2 attacks d3 and h3
        assert!(board.is_attacked_by(Square::D3, Color::White));
        assert!(board.is_attacked_by(Square::H3, Color::White));
        // kings
        assert!(board.is_attacked_by(Square::D7, Color::Black));
        assert!(board.is_attacked_by(Square::F1, Color::White));

        let pawns = Board::from_fen("4k3/8/8/3p4/8/8/4P3/4K3 w").unwrap();
        assert!(pawns.is_attacked_by(Square::C4, Color::Black));
        assert!(pawns.is_attacked_by(Square::E4, Color::Black));
        assert!(!pawns.is_attacked_by(Square::D4, Color::Black));
        assert!(pawns.is_attacked_by(Square::F3, Color::White));
        assert!(!pawns.is_attacked_by(Square::E3, Color::White));
    }

    #[test]
    fn parse_move_resolves_against_generated_moves() {
        let mut board = Board::from_fen("4k3/8/3p4/8/4N3/8/8/4K3 w").unwrap();
        assert_eq!(board.parse_move("e4d6"), Some(Move::capture(Square::E4, Square::D6)));
        assert_eq!(board.parse_move("e4f6"), Some(Move::new(Square::E4, Square::F6)));
        assert_eq!(board.parse_move(" e1f1 "), Some(Move::new(Square::E1, Square::F1)));
        assert_eq!(board.parse_move("e4e5"), None);
        assert_eq!(board.parse_move("e4d6q"), None);
        assert_eq!(board.parse_move("e4"), None);
        assert_eq!(board.parse_move("z9a1"), None);
        assert_eq!(board.parse_move("e4d6qq"), None);
    }

    #[test]
    fn from_fen_propagates_errors() {
        assert_eq!(Board::from_fen("").unwrap_err(), FenError::MissingPlacement);
    }
}
