//! Random-move engine.
//!
//! Selects uniformly among legal moves. Used as a weak sparring partner in
//! self-play and for randomized playouts in tests; seed it for reproducibility.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_chess_move;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> ChessResult<EngineOutput> {
        let legal_moves = all_legal_moves(board, color);

        let mut out = EngineOutput {
            best_move: None,
            board_after: board.clone(),
            info_lines: vec![format!("random legal_moves {}", legal_moves.len())],
        };

        if let Some(mv) = legal_moves.choose(&mut self.rng) {
            out.best_move = Some(*mv);
            out.board_after = apply_chess_move(board, *mv);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_engines_agree() {
        let board = Board::starting_position();
        let a = RandomEngine::with_seed(7).choose_move(&board, Color::White).unwrap();
        let b = RandomEngine::with_seed(7).choose_move(&board, Color::White).unwrap();
        assert_eq!(a.best_move, b.best_move);
        assert!(a.best_move.is_some());
    }

    #[test]
    fn picks_only_legal_moves() {
        let board = Board::starting_position();
        let legal = all_legal_moves(&board, Color::Black);
        let mut engine = RandomEngine::with_seed(42);
        for _ in 0..32 {
            let out = engine.choose_move(&board, Color::Black).unwrap();
            assert!(legal.contains(&out.best_move.unwrap()));
        }
    }
}
