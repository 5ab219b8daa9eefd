//! Perft node counting.
//!
//! Walks the move tree to a fixed depth and tallies leaf statistics. Used to
//! validate move generation against published reference counts and as the
//! workload for the criterion benchmarks.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_chess_move;
use crate::move_generation::legal_move_checks::{is_checkmate, is_in_check};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, color: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_moves(board, color) {
        total.merge(perft_recurse(generator, board, mv, color, depth, 1));
    }
    total
}

/// Perft with the legal move filter.
pub fn perft_legal(board: &Board, color: Color, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, board, color, depth)
}

/// Per-root-move node counts, sorted by move text.
pub fn perft_divide(board: &Board, color: Color, depth: u8) -> Vec<(ChessMove, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut out: Vec<(ChessMove, usize)> = LegalMoveGenerator
        .generate_moves(board, color)
        .into_iter()
        .map(|mv| {
            let next = apply_chess_move(board, mv);
            (mv, perft_legal(&next, color.opposite(), depth - 1).nodes)
        })
        .collect();
    out.sort_by_key(|(mv, _)| mv.to_string());
    out
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    mv: ChessMove,
    mover: Color,
    search_depth: u8,
    current_depth: u8,
) -> PerftCounts {
    let next = apply_chess_move(board, mv);

    if current_depth == search_depth {
        let mut counts = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if board.piece_at(mv.to).is_some() {
            counts.captures += 1;
        }
        if let Some(piece) = board.piece_at(mv.from) {
            if piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row() {
                counts.promotions += 1;
            }
        }
        let defender = mover.opposite();
        if is_in_check(&next, defender) {
            counts.checks += 1;
            if is_checkmate(&next, defender) {
                counts.checkmates += 1;
            }
        }
        return counts;
    }

    let mut total = PerftCounts::default();
    for child in generator.generate_moves(&next, mover.opposite()) {
        total.merge(perft_recurse(
            generator,
            &next,
            child,
            mover.opposite(),
            search_depth,
            current_depth + 1,
        ));
    }
    total
}
