//! Pseudo-legal move generation entry points.
//!
//! `generate_pseudo_legal_moves` dispatches on the piece kind found on a
//! square. Output ignores king safety; the legal filter in
//! `legal_move_generator` is the only authority on whether a move may be played.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Destinations for the piece on `square`. Empty when the square is empty or
/// holds a piece not owned by `color`.
pub fn generate_pseudo_legal_moves(board: &Board, square: Square, color: Color) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    push_pseudo_legal_moves(board, square, color, &mut out);
    out
}

pub fn push_pseudo_legal_moves(board: &Board, square: Square, color: Color, out: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(square) else {
        return;
    };
    if piece.color != color {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, square, color, out),
        PieceKind::Knight => generate_knight_moves(board, square, color, out),
        PieceKind::Bishop => generate_bishop_moves(board, square, color, out),
        PieceKind::Rook => generate_rook_moves(board, square, color, out),
        PieceKind::Queen => generate_queen_moves(board, square, color, out),
        PieceKind::King => generate_king_moves(board, square, color, out),
    }
}

/// Whole-board move enumeration, used by perft and anything that wants to
/// swap legal for pseudo-legal generation.
pub trait MoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color) -> Vec<ChessMove>;
}

/// Every pseudo-legal move for `color`, without the king-safety filter.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color) -> Vec<ChessMove> {
        let mut moves = Vec::with_capacity(64);
        let mut targets = Vec::with_capacity(28);
        for (from, _) in board.pieces_of(color) {
            targets.clear();
            push_pseudo_legal_moves(board, from, color, &mut targets);
            moves.extend(targets.iter().map(|to| ChessMove::new(from, *to)));
        }
        moves
    }
}
