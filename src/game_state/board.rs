//! Mailbox board representation.
//!
//! `Board` is an 8x8 grid of optional pieces. It is a plain value: every
//! engine operation that "changes" a board clones it first, so search
//! branches never alias the live game.

use std::fmt;

use crate::errors::ChessResult;
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The fixed opening layout every new game starts from.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Color::Black, *kind));
            board.cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::new(Color::White, *kind));
        }
        board
    }

    /// Board from the piece-placement field of a FEN string.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(parse_fen(fen)?.board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    /// Overwrite one cell. Only the simulator and board builders use this;
    /// engine callers go through `apply_move`.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Builder-style placement, handy for constructing test positions.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Some(piece));
        self
    }

    /// First king of `color` in row-major order, if any.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|sq| self.piece_at(*sq) == Some(king))
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares of one color, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(
            board.piece_at(sq(0, 4)),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(sq(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(sq(6, 0)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(sq(row, col)));
            }
        }
    }

    #[test]
    fn find_king_reports_absence() {
        let board = Board::empty().with_piece(sq(3, 3), Piece::new(Color::White, PieceKind::King));
        assert_eq!(board.find_king(Color::White), Some(sq(3, 3)));
        assert_eq!(board.find_king(Color::Black), None);
    }

    #[test]
    fn starting_position_matches_fen() {
        let from_fen = Board::from_fen(STARTING_POSITION_FEN)
            .expect("starting FEN should parse");
        assert_eq!(from_fen, Board::starting_position());
    }
}
