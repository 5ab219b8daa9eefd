use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::ray_casting::push_ray_targets;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_ray_targets(board, from, color, &ROOK_DIRECTIONS, out);
    push_ray_targets(board, from, color, &BISHOP_DIRECTIONS, out);
}
