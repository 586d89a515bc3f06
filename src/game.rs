//! Turn loop driving the human and agent move handlers
//!
//! `Game` owns the board; the engine and win check only borrow it for
//! the duration of one call. The front-end forwards human coordinates
//! to [`Game::human_move`] and asks for the reply with
//! [`Game::agent_move`]; both run the win check after the placement.

use crate::board::{Board, MoveError, Pos, Stone};
use crate::engine::{self, MoveResult, SelectMode};
use crate::rules::has_five_in_row;
use tracing::info;

/// Number of opening agent moves biased toward the center by default
pub const DEFAULT_OPENING_MOVES: u32 = 3;

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWin,
    AgentWin,
    Draw,
}

/// One game between the human and the agent
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Agent moves played so far; decides the opening mode
    agent_moves: u32,
    /// Agent moves that favor the center (0 disables the opening bias)
    opening_moves: u32,
    outcome: Option<Outcome>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_opening_moves(DEFAULT_OPENING_MOVES)
    }

    pub fn with_opening_moves(opening_moves: u32) -> Self {
        Self {
            board: Board::new(),
            agent_moves: 0,
            opening_moves,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply the human's stone at front-end coordinates.
    ///
    /// Rejects out-of-bounds and occupied cells without touching the
    /// board, then runs the win check.
    pub fn human_move(&mut self, row: i32, col: i32) -> Result<Pos, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }

        let pos = Pos::new(row as u8, col as u8);
        self.board.apply_move(pos, Stone::Human)?;
        self.settle(Stone::Human);
        Ok(pos)
    }

    /// Compute and apply the agent's reply.
    ///
    /// Returns the move made, or `Ok(None)` when the board is exhausted,
    /// which ends the game as a draw.
    pub fn agent_move(&mut self) -> Result<Option<MoveResult>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let mode = if self.agent_moves < self.opening_moves {
            SelectMode::CenterBias
        } else {
            SelectMode::PriorityChain
        };

        let Some(result) = engine::select_move(&mut self.board, Stone::Agent, mode) else {
            self.outcome = Some(Outcome::Draw);
            info!("board exhausted, game drawn");
            return Ok(None);
        };

        // The selector only returns empty cells
        self.board.apply_move(result.pos, Stone::Agent)?;
        self.agent_moves += 1;
        self.settle(Stone::Agent);
        Ok(Some(result))
    }

    /// Update the terminal state after `stone` just moved
    fn settle(&mut self, stone: Stone) {
        if has_five_in_row(&self.board, stone) {
            let outcome = match stone {
                Stone::Human => Outcome::HumanWin,
                _ => Outcome::AgentWin,
            };
            info!(?outcome, "five in a row");
            self.outcome = Some(outcome);
        } else if self.board.is_full() {
            info!("board full, game drawn");
            self.outcome = Some(Outcome::Draw);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
