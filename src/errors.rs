//! Errors used throughout the engine.
//!
//! The rule engine itself is total over well-formed boards: it answers
//! degenerate questions with an empty move list or `false`. `ChessErrors` is
//! only raised at the input boundaries (coordinates, algebraic text, FEN,
//! configuration files and the command line) so that caller bugs surface
//! instead of being silently clamped.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum ChessErrors {
    /// Row or column outside `0..=7`.
    #[error("invalid square (row {row}, col {col}): coordinates must be within 0..=7")]
    InvalidSquare { row: i32, col: i32 },

    /// Algebraic square text such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// FEN text could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Configuration could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Search caps that would leave the search with nothing to explore.
    #[error("invalid search configuration: {0}")]
    InvalidSearchConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The side to move has no legal moves.
    #[error("no legal moves available")]
    NoLegalMoves,
}

pub type ChessResult<T> = Result<T, ChessErrors>;
