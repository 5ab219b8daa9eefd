//! Legal move filtering.
//!
//! The single authority for move legality: each pseudo-legal candidate is
//! simulated and dropped if the mover's own king would be in check afterwards.
//! The search, the evaluator's mobility term, checkmate detection and the game
//! session all route through here.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::{push_pseudo_legal_moves, MoveGenerator};

/// Legal destinations for the piece on `square` when moved by `color`.
pub fn legal_moves(board: &Board, square: Square, color: Color) -> Vec<Square> {
    let mut pseudo = Vec::with_capacity(28);
    push_pseudo_legal_moves(board, square, color, &mut pseudo);
    pseudo.retain(|to| !leaves_king_in_check(board, square, *to, color));
    pseudo
}

/// Every legal move for `color`, grouped by origin square in row-major order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        moves.extend(
            legal_moves(board, from, color)
                .into_iter()
                .map(|to| ChessMove::new(from, to)),
        );
    }
    moves
}

/// Number of legal moves for `color`.
pub fn count_legal_moves(board: &Board, color: Color) -> usize {
    board
        .pieces_of(color)
        .map(|(from, _)| legal_moves(board, from, color).len())
        .sum()
}

/// Short-circuiting existence check used by checkmate detection.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    let mut pseudo = Vec::with_capacity(28);
    for (from, _) in board.pieces_of(color) {
        pseudo.clear();
        push_pseudo_legal_moves(board, from, color, &mut pseudo);
        if pseudo
            .iter()
            .any(|to| !leaves_king_in_check(board, from, *to, color))
        {
            return true;
        }
    }
    false
}

#[inline]
fn leaves_king_in_check(board: &Board, from: Square, to: Square, color: Color) -> bool {
    is_in_check(&apply_move(board, from, to), color)
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color) -> Vec<ChessMove> {
        all_legal_moves(board, color)
    }
}
