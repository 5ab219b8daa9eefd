//! Alpha-beta engine with a fixed depth and branching caps.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_chess_move;
use crate::search::minimax::{search_best_move, SearchConfig};

pub struct MinimaxEngine {
    depth: u32,
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(depth: u32, config: SearchConfig) -> Self {
        Self { depth, config }
    }
}

impl Default for MinimaxEngine {
    /// Medium difficulty: three plies with the standard caps.
    fn default() -> Self {
        Self::new(3, SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> ChessResult<EngineOutput> {
        let outcome = search_best_move(board, color, self.depth, self.config);

        let mut out = EngineOutput {
            best_move: outcome.best_move,
            board_after: board.clone(),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "minimax depth {} nodes {}",
            self.depth, outcome.nodes
        ));

        if let (Some(mv), Some(score)) = (outcome.best_move, outcome.best_score) {
            out.info_lines.push(format!("minimax best {mv} score {score}"));
            out.board_after = apply_chess_move(board, mv);
        }
        Ok(out)
    }
}
