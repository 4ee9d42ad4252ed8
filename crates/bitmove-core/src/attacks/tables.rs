//! Compile-time jump and ray tables.

use crate::bitboard::Bitboard;

use super::direction::Direction;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Build a per-square jump table from (rank, file) deltas, dropping off-board targets.
const fn compute_jumps(deltas: &[(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < deltas.len() {
            let r = rank + deltas[d].0;
            let f = file + deltas[d].1;
            if r >= 0 && r < 8 && f >= 0 && f < 8 {
                bits |= 1u64 << (r as usize * 8 + f as usize);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

/// Diagonal pawn attacks per side: White captures toward rank 8, Black toward rank 1.
const fn compute_pawn_attacks() -> [[Bitboard; 64]; 2] {
    let not_a = !Bitboard::FILE_A.inner();
    let not_h = !Bitboard::FILE_H.inner();

    let mut table = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0usize;
    while sq < 64 {
        let bit = 1u64 << sq;
        table[0][sq] = Bitboard::new(((bit & not_h) << 9) | ((bit & not_a) << 7));
        table[1][sq] = Bitboard::new(((bit & not_h) >> 7) | ((bit & not_a) >> 9));
        sq += 1;
    }
    table
}

/// Full empty-board ray from each square in each direction, origin excluded.
const fn compute_rays() -> [[Bitboard; 64]; 8] {
    let mut table = [[Bitboard::EMPTY; 64]; 8];
    let mut d = 0;
    while d < Direction::ALL.len() {
        let (dr, df) = Direction::ALL[d].delta();
        let mut sq = 0usize;
        while sq < 64 {
            let mut r = (sq / 8) as i8 + dr;
            let mut f = (sq % 8) as i8 + df;
            let mut bits = 0u64;
            while r >= 0 && r < 8 && f >= 0 && f < 8 {
                bits |= 1u64 << (r as usize * 8 + f as usize);
                r += dr;
                f += df;
            }
            table[Direction::ALL[d].index()][sq] = Bitboard::new(bits);
            sq += 1;
        }
        d += 1;
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: [Bitboard; 64] = compute_jumps(&KNIGHT_DELTAS);
pub(crate) static KING_ATTACKS: [Bitboard; 64] = compute_jumps(&KING_DELTAS);
pub(crate) static PAWN_ATTACKS: [[Bitboard; 64]; 2] = compute_pawn_attacks();
pub(crate) static RAYS: [[Bitboard; 64]; 8] = compute_rays();
