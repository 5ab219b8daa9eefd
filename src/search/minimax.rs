//! Depth-limited minimax with alpha-beta pruning.
//!
//! Black is always the maximizing side and white the minimizing side, matching
//! the black-positive evaluator. Each node enumerates legal moves, orders them,
//! and explores at most `SearchConfig::max_candidates_per_node` of them (the
//! root uses `max_candidates_at_root`). There is no transposition table and
//! no state survives between calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_chess_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::{BoardScorer, Score, StandardScorer, MATE_SCORE};
use crate::search::move_ordering::order_moves;

/// Bound used for the initial alpha-beta window.
pub const SCORE_INFINITY: Score = Score::MAX;

/// Branching caps. Fixed performance bounds, not adaptive. A cap of 0 is
/// rejected by `validate` and treated as 1 by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_candidates_per_node: usize,
    pub max_candidates_at_root: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_candidates_per_node: 30,
            max_candidates_at_root: 40,
        }
    }
}

impl SearchConfig {
    /// No branching caps at all.
    pub const fn unbounded() -> Self {
        Self {
            max_candidates_per_node: usize::MAX,
            max_candidates_at_root: usize::MAX,
        }
    }

    pub fn validate(&self) -> ChessResult<()> {
        if self.max_candidates_per_node == 0 {
            return Err(ChessErrors::InvalidSearchConfig(
                "max_candidates_per_node must be at least 1".to_owned(),
            ));
        }
        if self.max_candidates_at_root == 0 {
            return Err(ChessErrors::InvalidSearchConfig(
                "max_candidates_at_root must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    #[inline]
    fn node_limit(&self) -> usize {
        self.max_candidates_per_node.max(1)
    }

    #[inline]
    fn root_limit(&self) -> usize {
        self.max_candidates_at_root.max(1)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    /// Black-positive score of `best_move`.
    pub best_score: Option<Score>,
    /// Interior and leaf nodes visited below the root.
    pub nodes: u64,
}

struct SearchContext<'a, S: BoardScorer> {
    scorer: &'a S,
    config: SearchConfig,
    nodes: u64,
}

/// Score `board` searched `depth` plies deep. `maximizing` selects whose turn
/// it is: `true` for black, `false` for white.
pub fn minimax<S: BoardScorer>(
    board: &Board,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    scorer: &S,
    config: SearchConfig,
) -> Score {
    let mut ctx = SearchContext {
        scorer,
        config,
        nodes: 0,
    };
    let score = alpha_beta(&mut ctx, board, depth, alpha, beta, maximizing);
    trace!(depth, nodes = ctx.nodes, score, "minimax");
    score
}

fn alpha_beta<S: BoardScorer>(
    ctx: &mut SearchContext<'_, S>,
    board: &Board,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> Score {
    ctx.nodes += 1;
    if depth == 0 {
        return ctx.scorer.score(board);
    }

    let to_move = if maximizing { Color::Black } else { Color::White };
    let mut moves = all_legal_moves(board, to_move);
    if moves.is_empty() {
        return terminal_score(board, to_move);
    }
    order_moves(board, &mut moves);

    let limit = ctx.config.node_limit();
    if maximizing {
        let mut best = -SCORE_INFINITY;
        for mv in moves.into_iter().take(limit) {
            let child = apply_chess_move(board, mv);
            let value = alpha_beta(ctx, &child, depth - 1, alpha, beta, false);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INFINITY;
        for mv in moves.into_iter().take(limit) {
            let child = apply_chess_move(board, mv);
            let value = alpha_beta(ctx, &child, depth - 1, alpha, beta, true);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Score of a node where `to_move` has no legal move: mated sides lose by the
/// mate sentinel, anything else counts as 0 regardless of material.
pub fn terminal_score(board: &Board, to_move: Color) -> Score {
    if !is_in_check(board, to_move) {
        return 0;
    }
    match to_move {
        Color::Black => -MATE_SCORE,
        Color::White => MATE_SCORE,
    }
}

/// Root search with the standard evaluator.
pub fn search_best_move(board: &Board, color: Color, depth: u32, config: SearchConfig) -> SearchOutcome {
    search_best_move_with_scorer(board, color, depth, config, &StandardScorer)
}

/// Root search: every ordered candidate (up to the root cap) is searched one
/// ply deeper with a full window, and the first strictly best one for `color`
/// wins. Depth 0 is treated as depth 1.
pub fn search_best_move_with_scorer<S: BoardScorer>(
    board: &Board,
    color: Color,
    depth: u32,
    config: SearchConfig,
    scorer: &S,
) -> SearchOutcome {
    let mut moves = all_legal_moves(board, color);
    if moves.is_empty() {
        return SearchOutcome::default();
    }
    order_moves(board, &mut moves);

    let mut ctx = SearchContext {
        scorer,
        config,
        nodes: 0,
    };
    let child_depth = depth.saturating_sub(1);
    let opponent_maximizes = color == Color::White;

    let mut best: Option<(ChessMove, Score)> = None;
    for mv in moves.into_iter().take(config.root_limit()) {
        let child = apply_chess_move(board, mv);
        let score = alpha_beta(
            &mut ctx,
            &child,
            child_depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            opponent_maximizes,
        );
        debug!(%color, %mv, score, "root candidate");
        trace!(%mv, nodes = ctx.nodes, "root candidate searched");

        let improves = match best {
            None => true,
            Some((_, best_score)) => for_color(color, score) > for_color(color, best_score),
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let outcome = SearchOutcome {
        best_move: best.map(|(mv, _)| mv),
        best_score: best.map(|(_, score)| score),
        nodes: ctx.nodes,
    };
    if let Some((mv, score)) = best {
        info!(%color, depth, %mv, score, nodes = outcome.nodes, "search complete");
    }
    outcome
}

#[inline]
fn for_color(color: Color, score: Score) -> Score {
    match color {
        Color::Black => score,
        Color::White => -score,
    }
}

/// Pick a move for `color` and return the board after it, using the default
/// branching caps. With no legal move the input board is returned unchanged;
/// callers detect end of game themselves.
pub fn choose_move(board: &Board, color: Color, depth: u32) -> Board {
    choose_move_with_config(board, color, depth, SearchConfig::default())
}

pub fn choose_move_with_config(board: &Board, color: Color, depth: u32, config: SearchConfig) -> Board {
    match search_best_move(board, color, depth, config).best_move {
        Some(mv) => apply_chess_move(board, mv),
        None => board.clone(),
    }
}
