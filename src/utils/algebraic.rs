//! Conversions between algebraic coordinates (`e4`) and board squares.
//!
//! Row 0 is rank 8, so `row = 8 - rank` and `col = file - 'a'`.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{ChessMove, Square};

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Square::new(i32::from(b'8' - rank), i32::from(file - b'a'))
}

/// Parse a from/to pair such as "e2e4". A trailing `q` is accepted and
/// ignored since promotion is always to a queen.
pub fn parse_coordinate_move(text: &str) -> ChessResult<ChessMove> {
    let text = text.trim();
    let valid = text.is_ascii()
        && match text.len() {
            4 => true,
            5 => text.ends_with(['q', 'Q']),
            _ => false,
        };
    if !valid {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok(ChessMove::new(from, to))
}
