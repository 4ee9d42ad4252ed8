//! Perft node counting over pseudo-legal moves, for checking the generators.
//!
//! Moves that leave the mover's king attacked are still counted, so results
//! match the published legal counts only while no checks arise.

use crate::board::Board;
use crate::error::MoveError;

/// Count the leaf nodes at the given depth.
///
/// Depth 0 returns 1. Depth 1 returns the number of generated moves without
/// playing them.
pub fn perft(board: &mut Board, depth: usize) -> Result<u64, MoveError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = board.generate_all();

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for &mv in moves.iter() {
        board.apply_move(mv)?;
        nodes += perft(board, depth - 1)?;
        board.undo()?;
    }
    Ok(nodes)
}

/// Perft with a per-move breakdown.
///
/// Returns `(coordinate_move, node_count)` pairs sorted by move text.
pub fn divide(board: &mut Board, depth: usize) -> Result<Vec<(String, u64)>, MoveError> {
    let moves = board.generate_all();
    let mut results = Vec::with_capacity(moves.len());
    for &mv in moves.iter() {
        board.apply_move(mv)?;
        let count = if depth <= 1 { 1 } else { perft(board, depth - 1)? };
        board.undo()?;
        results.push((mv.to_uci(), count));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
