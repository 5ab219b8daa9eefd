//! Engine abstraction used by the game session and the command line.
//!
//! Different move-selection strategies sit behind one trait so a session can
//! drive either side with whichever engine it was handed.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when `color` has no legal move.
    pub best_move: Option<ChessMove>,
    /// Board after `best_move`, or the unchanged input when there is none.
    pub board_after: Board,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn choose_move(&mut self, board: &Board, color: Color) -> ChessResult<EngineOutput>;
}
