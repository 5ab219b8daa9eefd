//! FEN-to-Board parser.
//!
//! Reads the piece-placement field and, when present, the side to move.
//! Castling, en-passant and clock fields are accepted but not modelled.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenPosition {
    pub board: Board,
    pub side_to_move: Color,
}

pub fn parse_fen(fen: &str) -> ChessResult<FenPosition> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFen("missing board layout".to_owned()))?;
    let board = parse_board(board_part)?;

    let side_to_move = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::White,
    };

    Ok(FenPosition { board, side_to_move })
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0i32;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as i32;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;

            if col >= 8 {
                return Err(ChessErrors::InvalidFen(format!(
                    "rank {} has too many files",
                    8 - row
                )));
            }

            board.set(Square::new(row as i32, col)?, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(position.side_to_move, Color::White);
        assert_eq!(position.board.piece_count(), 32);
        assert_eq!(
            position.board.piece_at(Square::new(0, 4).unwrap()),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
    }

    #[test]
    fn side_field_is_optional() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(position.side_to_move, Color::White);
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3 b KQkq e3 4 20").unwrap();
        assert_eq!(position.side_to_move, Color::Black);
    }

    #[test]
    fn rejects_bad_layouts() {
        for bad in [
            "",
            "8/8/8/8/8/8/8",
            "9/8/8/8/8/8/8/8",
            "ppppppppp/8/8/8/8/8/8/8",
            "7/8/8/8/8/8/8/8",
            "x7/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8 x",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessErrors::InvalidFen(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
