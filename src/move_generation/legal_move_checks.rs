//! Check and checkmate detection.
//!
//! Attacks are found by generating every opposing piece's pseudo-legal moves
//! and looking for the target square. At 64 squares this is cheap enough that
//! no attack map is cached.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::move_generation::move_generator::push_pseudo_legal_moves;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// `true` when any `attacker_color` piece has a pseudo-legal move onto `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    for (from, _) in board.pieces_of(attacker_color) {
        targets.clear();
        push_pseudo_legal_moves(board, from, attacker_color, &mut targets);
        if targets.contains(&square) {
            return true;
        }
    }
    false
}

/// Squares of `attacker_color` pieces that attack `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::new();
    let mut targets = Vec::with_capacity(28);
    for (from, piece) in board.pieces_of(attacker_color) {
        targets.clear();
        push_pseudo_legal_moves(board, from, attacker_color, &mut targets);
        if targets.contains(&square) {
            attackers.push((from, piece.kind));
        }
    }
    attackers
}

/// Whether `color`'s king is attacked. A board without that king is an
/// already-finished game and reports `false`.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// In check with no legal move that escapes it.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_any_legal_move(board, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::all_legal_moves;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn fools_mate() -> Board {
        Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w - - 1 3")
            .expect("fool's mate FEN should parse")
    }

    #[test]
    fn opening_position_has_no_check() {
        let board = Board::starting_position();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
        assert!(!is_checkmate(&board, Color::White));
    }

    #[test]
    fn rook_gives_check_along_open_file() {
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(sq(0, 4), Piece::new(Color::Black, PieceKind::Rook))
            .with_piece(sq(0, 0), Piece::new(Color::Black, PieceKind::King));
        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));

        let blocked = board.with_piece(sq(4, 4), Piece::new(Color::White, PieceKind::Knight));
        assert!(!is_in_check(&blocked, Color::White));
    }

    #[test]
    fn pawn_pushes_do_not_give_check() {
        let board = Board::empty()
            .with_piece(sq(4, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(sq(3, 4), Piece::new(Color::Black, PieceKind::Pawn));
        assert!(!is_in_check(&board, Color::White));

        let diagonal = Board::empty()
            .with_piece(sq(4, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(sq(3, 3), Piece::new(Color::Black, PieceKind::Pawn));
        assert!(is_in_check(&diagonal, Color::White));
    }

    #[test]
    fn missing_king_is_not_check() {
        let board = Board::empty().with_piece(sq(0, 0), Piece::new(Color::Black, PieceKind::Queen));
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_checkmate(&board, Color::White));
    }

    #[test]
    fn fools_mate_is_checkmate_for_white() {
        let board = fools_mate();
        assert!(is_in_check(&board, Color::White));
        assert!(is_checkmate(&board, Color::White));
        assert!(!is_checkmate(&board, Color::Black));
        assert_eq!(
            attackers_to_square(&board, sq(7, 4), Color::Black),
            vec![(sq(4, 7), PieceKind::Queen)]
        );
    }

    #[test]
    fn check_with_escape_is_not_mate() {
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(sq(0, 4), Piece::new(Color::Black, PieceKind::Rook))
            .with_piece(sq(0, 0), Piece::new(Color::Black, PieceKind::King));
        assert!(is_in_check(&board, Color::White));
        assert!(!is_checkmate(&board, Color::White));
    }

    #[test]
    fn checkmate_iff_check_and_no_legal_moves() {
        let boards = [
            Board::starting_position(),
            fools_mate(),
            Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap(),
            Board::from_fen("6rk/6pp/8/8/8/8/8/R6K w - - 0 1").unwrap(),
            Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap(),
        ];
        for board in boards.iter() {
            for color in [Color::White, Color::Black] {
                let expected = is_in_check(board, color) && all_legal_moves(board, color).is_empty();
                assert_eq!(is_checkmate(board, color), expected, "{board}");
            }
        }
    }

    #[test]
    fn back_rank_mate_is_detected() {
        let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(is_checkmate(&board, Color::Black));
    }
}
