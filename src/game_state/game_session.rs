//! Interactive game session.
//!
//! `GameSession` owns the live board, whose turn it is, the current piece
//! selection and the game status. Front ends feed it square clicks (or engine
//! turns) and render whatever it reports back.

use tracing::info;

use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_checkmate, is_in_check};
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer { computer_color: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The given color is in check and has at least one legal reply.
    Check(Color),
    Checkmate { winner: Color },
    /// A king is absent from the board; the game cannot continue.
    KingMissing,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::KingMissing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
}

/// A move that was played on the session board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: ChessMove,
    pub kind: MoveKind,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
    Deselected,
    Moved(AppliedMove),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineTurn {
    Moved(AppliedMove),
    NoMoveAvailable,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Color,
    selection: Selection,
    mode: GameMode,
    status: GameStatus,
}

impl GameSession {
    /// Fresh game from the opening layout with white to move.
    pub fn new(mode: GameMode) -> Self {
        Self::from_board(Board::starting_position(), Color::White, mode)
    }

    pub fn from_board(board: Board, turn: Color, mode: GameMode) -> Self {
        let status = status_for(&board, turn);
        Self {
            board,
            turn,
            selection: Selection::Idle,
            mode,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_computer_turn(&self) -> bool {
        match self.mode {
            GameMode::PlayerVsPlayer => false,
            GameMode::PlayerVsComputer { computer_color } => computer_color == self.turn,
        }
    }

    /// Process one click on `square`.
    ///
    /// Clicks are ignored once the game is over and while the computer is to
    /// move.
    pub fn handle_click(&mut self, square: Square) -> ClickOutcome {
        if self.status.is_over() || self.is_computer_turn() {
            return ClickOutcome::Ignored;
        }

        let clicked = self.board.piece_at(square);
        match std::mem::take(&mut self.selection) {
            Selection::Idle => match clicked {
                Some(piece) if piece.color == self.turn => self.select(square),
                _ => ClickOutcome::Ignored,
            },
            Selection::Selected {
                square: from,
                destinations,
            } => {
                if clicked.is_some_and(|piece| piece.color == self.turn) {
                    return match self.select(square) {
                        ClickOutcome::Ignored => ClickOutcome::Deselected,
                        outcome => outcome,
                    };
                }
                if destinations.contains(&square) {
                    ClickOutcome::Moved(self.play(ChessMove::new(from, square)))
                } else {
                    ClickOutcome::Deselected
                }
            }
        }
    }

    /// Let `engine` play the side to move.
    pub fn play_engine_move(&mut self, engine: &mut dyn Engine) -> ChessResult<EngineTurn> {
        if self.status.is_over() {
            return Ok(EngineTurn::NoMoveAvailable);
        }

        let output = engine.choose_move(&self.board, self.turn)?;
        match output.best_move {
            Some(mv) => {
                self.selection = Selection::Idle;
                Ok(EngineTurn::Moved(self.play(mv)))
            }
            None => {
                info!(engine = engine.name(), color = %self.turn, "engine found no move");
                Ok(EngineTurn::NoMoveAvailable)
            }
        }
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        let destinations = legal_moves(&self.board, square, self.turn);
        if destinations.is_empty() {
            return ClickOutcome::Ignored;
        }
        self.selection = Selection::Selected {
            square,
            destinations: destinations.clone(),
        };
        ClickOutcome::Selected {
            square,
            destinations,
        }
    }

    fn play(&mut self, mv: ChessMove) -> AppliedMove {
        let kind = if self.board.is_empty(mv.to) {
            MoveKind::Quiet
        } else {
            MoveKind::Capture
        };

        let mover = self.turn;
        self.board = apply_move(&self.board, mv.from, mv.to);
        self.turn = mover.opposite();
        self.status = status_for(&self.board, self.turn);

        info!(color = %mover, %mv, ?kind, status = ?self.status, "move played");

        AppliedMove {
            mv,
            kind,
            status: self.status,
        }
    }
}

fn status_for(board: &Board, to_move: Color) -> GameStatus {
    if board.find_king(Color::White).is_none() || board.find_king(Color::Black).is_none() {
        GameStatus::KingMissing
    } else if is_checkmate(board, to_move) {
        GameStatus::Checkmate {
            winner: to_move.opposite(),
        }
    } else if is_in_check(board, to_move) {
        GameStatus::Check(to_move)
    } else {
        GameStatus::Ongoing
    }
}
