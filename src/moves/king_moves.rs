use crate::game_state::chess_types::*;
use crate::moves::ray_casting::push_step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent squares only; castling is not supported.
pub fn generate_king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_step_targets(board, from, color, &KING_OFFSETS, out);
}
