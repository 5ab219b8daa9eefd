//! Move simulation.
//!
//! `apply_move` produces a fresh board; the input is never mutated, so the
//! search can expand many siblings from one parent.

use crate::game_state::chess_rules::PROMOTION_KIND;
use crate::game_state::chess_types::*;

/// Copy `board`, move the piece on `from` to `to` (capturing whatever stood
/// there) and clear `from`. A pawn reaching its promotion row becomes a queen.
/// An empty `from` yields an unchanged copy.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Board {
    let mut next = board.clone();
    let Some(moving) = board.piece_at(from) else {
        return next;
    };

    let landed = if moving.kind == PieceKind::Pawn && to.row() == moving.color.promotion_row() {
        Piece::new(moving.color, PROMOTION_KIND)
    } else {
        moving
    };

    next.set(from, None);
    next.set(to, Some(landed));
    next
}

#[inline]
pub fn apply_chess_move(board: &Board, mv: ChessMove) -> Board {
    apply_move(board, mv.from, mv.to)
}
