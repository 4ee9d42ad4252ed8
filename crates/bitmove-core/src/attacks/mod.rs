//! Attack generation: jump tables for knight and king, ray tables and ray walks for sliders.

mod direction;
mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::square::Square;

pub use self::direction::Direction;

use self::tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, RAYS};

/// How sliding-piece targets are computed. Both produce identical sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderMode {
    /// Step square by square from the origin.
    RayWalk,
    /// Cut the precomputed ray at the nearest blocker.
    #[default]
    RayTable,
}

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a pawn of `color` on `sq` captures on.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// The empty-board ray from `sq` toward `dir`, origin excluded.
#[inline]
pub fn ray(dir: Direction, sq: Square) -> Bitboard {
    RAYS[dir.index()][sq.index()]
}

/// Walk from `sq` toward `dir` and collect the reachable squares.
///
/// An own piece ends the ray before its square; an enemy piece ends it on its square.
pub fn ray_walk(sq: Square, dir: Direction, own: Bitboard, enemy: Bitboard) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    let mut current = sq;
    while let Some(next) = dir.step(current) {
        if own.contains(next) {
            break;
        }
        targets = targets.with(next);
        if enemy.contains(next) {
            break;
        }
        current = next;
    }
    targets
}

/// Ray from `sq` toward `dir` up to and including the first occupied square.
#[inline]
pub fn ray_attacks(sq: Square, dir: Direction, occupied: Bitboard) -> Bitboard {
    let full = ray(dir, sq);
    let blockers = full & occupied;
    let nearest = if dir.is_positive() { blockers.lsb() } else { blockers.msb() };
    match nearest {
        Some(blocker) => full ^ ray(dir, blocker),
        None => full,
    }
}

/// Targets of a slider on `sq` moving along `dirs`, own pieces excluded.
pub fn slider_targets(
    sq: Square,
    dirs: &[Direction],
    own: Bitboard,
    enemy: Bitboard,
    mode: SliderMode,
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    match mode {
        SliderMode::RayWalk => {
            for &dir in dirs {
                targets |= ray_walk(sq, dir, own, enemy);
            }
        }
        SliderMode::RayTable => {
            let occupied = own | enemy;
            for &dir in dirs {
                targets |= ray_attacks(sq, dir, occupied);
            }
            targets &= !own;
        }
    }
    targets
}

/// Rook attacks from `sq`, blocker squares included.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    Direction::ORTHOGONAL
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(sq, dir, occupied))
}

/// Bishop attacks from `sq`, blocker squares included.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    Direction::DIAGONAL
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(sq, dir, occupied))
}
