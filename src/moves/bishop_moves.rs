//! Bishop movement: diagonal rays.

use crate::game_state::chess_types::*;
use crate::moves::ray_casting::push_ray_targets;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_ray_targets(board, from, color, &BISHOP_DIRECTIONS, out);
}
