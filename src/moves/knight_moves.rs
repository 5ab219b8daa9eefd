use crate::game_state::chess_types::*;
use crate::moves::ray_casting::push_step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_step_targets(board, from, color, &KNIGHT_OFFSETS, out);
}
