//! Static position evaluation.
//!
//! Scores are always from black's point of view: positive favours black,
//! negative favours white. The search assigns min/max roles per color rather
//! than flipping the evaluator's sign.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::count_legal_moves;

pub type Score = i32;

/// Terminal score for a side that has been mated. Far outside anything the
/// material, positional and mobility terms can add up to.
pub const MATE_SCORE: Score = 999_999;

/// Weight applied to the legal-move-count differential.
pub const MOBILITY_WEIGHT: Score = 2;

/// Centre-preferring bonus, indexed `[row][col]`, shared by all piece kinds.
pub const POSITION_BONUS: [[Score; 8]; 8] = [
    [-5, -4, -3, -3, -3, -3, -4, -5],
    [-4, -2, 0, 0, 0, 0, -2, -4],
    [-3, 0, 1, 2, 2, 1, 0, -3],
    [-3, 0, 2, 3, 3, 2, 0, -3],
    [-3, 0, 2, 3, 3, 2, 0, -3],
    [-3, 0, 1, 2, 2, 1, 0, -3],
    [-4, -2, 0, 0, 0, 0, -2, -4],
    [-5, -4, -3, -3, -3, -3, -4, -5],
];

#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

#[inline]
const fn signed(color: Color, value: Score) -> Score {
    match color {
        Color::Black => value,
        Color::White => -value,
    }
}

#[inline]
pub fn position_bonus(square: Square) -> Score {
    POSITION_BONUS[square.row() as usize][square.col() as usize]
}

pub fn material_score(board: &Board) -> Score {
    board
        .pieces()
        .map(|(_, piece)| signed(piece.color, piece_value(piece.kind)))
        .sum()
}

pub fn positional_score(board: &Board) -> Score {
    board
        .pieces()
        .map(|(square, piece)| signed(piece.color, position_bonus(square)))
        .sum()
}

pub fn mobility_score(board: &Board) -> Score {
    let black = count_legal_moves(board, Color::Black) as Score;
    let white = count_legal_moves(board, Color::White) as Score;
    MOBILITY_WEIGHT * (black - white)
}

/// Material + position + mobility, black-positive.
pub fn evaluate(board: &Board) -> Score {
    material_score(board) + positional_score(board) + mobility_score(board)
}

/// Pluggable leaf evaluation for the search.
pub trait BoardScorer {
    /// Black-positive score of `board`.
    fn score(&self, board: &Board) -> Score;
}

/// The full three-term evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    fn score(&self, board: &Board) -> Score {
        evaluate(board)
    }
}

/// Material and position only; skips the legal-move counting that dominates
/// leaf cost. Used where exhaustive comparison searches need to stay fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticScorer;

impl BoardScorer for StaticScorer {
    fn score(&self, board: &Board) -> Score {
        material_score(board) + positional_score(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn opening_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(material_score(&board), 0);
        assert_eq!(positional_score(&board), 0);
        assert_eq!(mobility_score(&board), 0);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn material_is_black_positive() {
        let mut board = Board::starting_position();
        board.set(sq(7, 1), None);
        assert_eq!(material_score(&board), 320);

        let mut board = Board::starting_position();
        board.set(sq(0, 3), None);
        assert_eq!(material_score(&board), -900);
    }

    #[test]
    fn position_bonus_prefers_the_centre() {
        let center = Board::empty().with_piece(sq(3, 3), Piece::new(Color::Black, PieceKind::Knight));
        let corner = Board::empty().with_piece(sq(0, 0), Piece::new(Color::Black, PieceKind::Knight));
        assert_eq!(positional_score(&center), 3);
        assert_eq!(positional_score(&corner), -5);

        let white_center = Board::empty().with_piece(sq(4, 4), Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(positional_score(&white_center), -3);
    }

    #[test]
    fn mobility_counts_legal_moves_with_weight_two() {
        // Lone kings: black in the corner has 3 moves, white in the centre 8.
        let board = Board::empty()
            .with_piece(sq(0, 0), Piece::new(Color::Black, PieceKind::King))
            .with_piece(sq(4, 4), Piece::new(Color::White, PieceKind::King));
        assert_eq!(mobility_score(&board), 2 * (3 - 8));
        assert_eq!(
            evaluate(&board),
            material_score(&board) + positional_score(&board) + mobility_score(&board)
        );
        assert_eq!(evaluate(&board), (20000 - 5) - (20000 + 3) - 10);
    }

    #[test]
    fn scorers_agree_on_static_terms() {
        let board = Board::from_fen("r3k3/8/8/3Q4/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(
            StandardScorer.score(&board) - StaticScorer.score(&board),
            mobility_score(&board)
        );
    }
}
