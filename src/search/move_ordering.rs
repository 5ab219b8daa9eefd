//! Candidate ordering for the search.
//!
//! Captures first (by victim value), then moves toward the centre. Ordering
//! decides which moves survive the per-node branching cap and, through strict
//! comparison at the root, which of several equal-scoring moves is chosen.

use std::cmp::Reverse;

use crate::game_state::chess_types::*;
use crate::search::board_scoring::{piece_value, Score};

/// `victim_value * 10 - 2 * manhattan_distance(to, centre)`, centre at (3.5, 3.5).
/// Computed in doubled coordinates so it stays integral.
pub fn move_order_score(board: &Board, mv: ChessMove) -> Score {
    let capture = board
        .piece_at(mv.to)
        .map(|victim| piece_value(victim.kind) * 10)
        .unwrap_or(0);
    let row = mv.to.row() as Score;
    let col = mv.to.col() as Score;
    let doubled_center_distance = (7 - 2 * row).abs() + (7 - 2 * col).abs();
    capture - doubled_center_distance
}

/// Stable sort, best candidates first.
pub fn order_moves(board: &Board, moves: &mut [ChessMove]) {
    moves.sort_by_key(|mv| Reverse(move_order_score(board, *mv)));
}
