//! Crate root module declarations for the Plum Minimax engine.
//!
//! A mailbox chess rule engine (pseudo-legal generation, check detection,
//! legal filtering), a black-positive evaluator, an alpha-beta minimax
//! search and a click-driven game session on top of them.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_session;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_casting;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod move_ordering;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub use errors::{ChessErrors, ChessResult};
pub use game_state::chess_types::{Board, ChessMove, Color, Piece, PieceKind, Square};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::{is_checkmate, is_in_check};
pub use move_generation::legal_move_generator::{all_legal_moves, legal_moves};
pub use move_generation::move_generator::generate_pseudo_legal_moves;
pub use search::board_scoring::evaluate;
pub use search::minimax::{choose_move, minimax};
