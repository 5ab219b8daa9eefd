use crate::game_state::chess_types::*;
use crate::moves::ray_casting::push_ray_targets;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_ray_targets(board, from, color, &ROOK_DIRECTIONS, out);
}
