//! Text position format: piece placement followed by a side token.
//!
//! Parsing is lenient. Unknown piece letters are skipped, a missing or
//! unrecognized side token means White, and any fields after the side token
//! (castling, en passant, clocks) are ignored.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The starting position in the text format.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::MissingPlacement)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() > 8 {
            return Err(FenError::TooManyRanks { found: ranks.len() });
        }

        let mut pos = Position::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // ranks are listed from 8 down to 1
            let rank = 7 - rank_index as u8;
            let mut file = 0usize;

            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                    continue;
                }
                let Some(piece) = Piece::from_letter(c) else {
                    debug!(character = %c, rank_index, "skipping unrecognized piece letter");
                    continue;
                };
                let sq = u8::try_from(file)
                    .ok()
                    .and_then(|f| Square::from_coords(rank, f))
                    .ok_or(FenError::BadRankLength { rank_index, length: file + 1 })?;
                pos.set_piece(sq, piece);
                file += 1;
            }

            if file > 8 {
                return Err(FenError::BadRankLength { rank_index, length: file });
            }
        }

        let side = match fields.next() {
            Some(token) => Color::from_token(token).unwrap_or_else(|| {
                debug!(token, "unrecognized side token, defaulting to white");
                Color::White
            }),
            None => Color::White,
        };
        pos.set_side_to_move(side);

        Ok(pos)
    }
}

impl Position {
    /// Piece placement only, ranks 8 to 1 separated by `/`.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0u8..8).rev() {
            let mut empty_run = 0u8;
            for file in 0u8..8 {
                match Square::from_coords(rank, file).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push(char::from(b'0' + empty_run));
                            empty_run = 0;
                        }
                        out.push(piece.letter());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push(char::from(b'0' + empty_run));
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }

    /// Placement and side token, the inverse of parsing.
    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.placement(), self.side_to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::color::Color;
    use crate::error::FenError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    fn roundtrip(fen: &str) {
        let pos: Position = fen.parse().unwrap();
        let output = pos.to_fen();
        assert_eq!(output, fen, "roundtrip failed");
        let again: Position = output.parse().unwrap();
        assert_eq!(pos, again);
    }

    #[test]
    fn starting_position_exports_standard_string() {
        let pos = Position::starting_position();
        assert_eq!(pos.to_fen(), STARTING_FEN);
        assert_eq!(pos.placement(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    }

    #[test]
    fn starting_string_parses_to_starting_position() {
        let parsed: Position = STARTING_FEN.parse().unwrap();
        assert_eq!(parsed, Position::starting_position());
    }

    #[test]
    fn roundtrips() {
        roundtrip(STARTING_FEN);
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w");
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b");
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let pos: Position = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
            .parse()
            .unwrap();
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b");
    }

    #[test]
    fn side_token_defaults_to_white() {
        let missing: Position = "8/8/8/8/8/8/8/4K3".parse().unwrap();
        assert_eq!(missing.side_to_move(), Color::White);
        let invalid: Position = "8/8/8/8/8/8/8/4K3 x".parse().unwrap();
        assert_eq!(invalid.side_to_move(), Color::White);
    }

    #[test]
    fn unknown_letters_are_skipped() {
        // 'X' does not advance the file, so the king still lands on e1
        let pos: Position = "8/8/8/8/8/8/8/4XK3 w".parse().unwrap();
        assert_eq!(pos.piece_at(Square::E1), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(pos.occupied().count(), 1);
    }

    #[test]
    fn short_placement_leaves_missing_ranks_empty() {
        let pos: Position = "k7 b".parse().unwrap();
        assert_eq!(pos.piece_at(Square::A8), Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(pos.occupied().count(), 1);
    }

    #[test]
    fn structural_errors() {
        assert_eq!("".parse::<Position>(), Err(FenError::MissingPlacement));
        assert_eq!(
            "8/8/8/8/8/8/8/8/8 w".parse::<Position>(),
            Err(FenError::TooManyRanks { found: 9 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/8K w".parse::<Position>(),
            Err(FenError::BadRankLength { rank_index: 7, length: 9 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/44p w".parse::<Position>(),
            Err(FenError::BadRankLength { rank_index: 7, length: 9 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/9 w".parse::<Position>(),
            Err(FenError::BadRankLength { rank_index: 7, length: 9 })
        );
    }
}
