//! Board-to-FEN writer.
//!
//! Castling and en-passant are not tracked, so those fields are always `-`
//! and the clocks are fixed at `0 1`.

use crate::game_state::chess_types::*;

pub fn generate_fen(board: &Board, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    format!("{} {} - - 0 1", generate_board_field(board), side)
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8 {
        let mut empty_count = 0u8;

        for col in 0..8 {
            let piece = Square::new(row, col).ok().and_then(|sq| board.piece_at(sq));
            match piece {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_reproduces_canonical_fen() {
        assert_eq!(
            generate_fen(&Board::starting_position(), Color::White),
            STARTING_POSITION_FEN
        );
    }

    #[test]
    fn fen_after_a_move() {
        let board = apply_move(
            &Board::starting_position(),
            Square::new(6, 4).unwrap(),
            Square::new(4, 4).unwrap(),
        );
        let fen = generate_fen(&board, Color::Black);
        assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1");
        assert_eq!(parse_fen(&fen).unwrap().board, board);
    }
}
