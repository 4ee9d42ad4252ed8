//! Bitboard move generation: position representation, pseudo-legal move
//! generators, apply/undo, and a per-position move cache.

pub mod attacks;
mod bitboard;
mod board;
mod cache;
mod chess_move;
mod color;
mod config;
mod error;
mod fen;
pub mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use attacks::{Direction, SliderMode};
pub use bitboard::Bitboard;
pub use board::Board;
pub use cache::{CachePolicy, CacheStats};
pub use chess_move::Move;
pub use color::Color;
pub use config::Config;
pub use error::{BoardError, FenError, MoveError};
pub use fen::STARTING_FEN;
pub use movegen::MoveList;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyBoard};
pub use square::Square;
