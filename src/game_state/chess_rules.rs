//! Fixed rule literals: the opening layout and the promotion piece.
//!
//! Castling, en passant and draw rules are not modelled.

use crate::game_state::chess_types::PieceKind;

/// The opening layout, FEN style. Castling and en-passant fields are always
/// empty because neither rule exists here.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Back-rank pieces from the a-file to the h-file, identical for both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Pawns reaching their last row always become this piece.
pub const PROMOTION_KIND: PieceKind = PieceKind::Queen;
