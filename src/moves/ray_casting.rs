//! Shared stepping primitives for piece movement.
//!
//! Leapers (knight, king) test a fixed offset set; sliders (bishop, rook,
//! queen) trace rays until the edge, an own piece (excluded) or an enemy piece
//! (included, ray stops).

use crate::game_state::chess_types::*;

/// `true` when `color` may land on `square`: empty or enemy-occupied.
#[inline]
pub fn is_available(board: &Board, square: Square, color: Color) -> bool {
    board.color_at(square) != Some(color)
}

/// Push every on-board offset target not occupied by `color`.
pub fn push_step_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if is_available(board, to, color) {
                out.push(to);
            }
        }
    }
}

/// Push ray targets for each direction, in direction order then distance order.
pub fn push_ray_targets(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}

fn trace_ray(board: &Board, from: Square, color: Color, d_row: i8, d_col: i8, out: &mut Vec<Square>) {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(to) = cursor {
        match board.color_at(to) {
            None => out.push(to),
            Some(occupant) => {
                if occupant != color {
                    out.push(to);
                }
                break;
            }
        }
        cursor = to.offset(d_row, d_col);
    }
}
