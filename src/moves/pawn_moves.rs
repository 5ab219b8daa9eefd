//! Pawn movement.
//!
//! Single push onto an empty square, double push from the start row when both
//! squares are empty, diagonal steps only onto enemy pieces. No en passant.

use crate::game_state::chess_types::*;

pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if board.is_empty(one) {
            out.push(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if board.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(forward, d_col) {
            if board.color_at(target) == Some(color.opposite()) {
                out.push(target);
            }
        }
    }
}
