//! Move selection engine
//!
//! The agent picks its move with a single-ply priority chain; the first
//! satisfied step decides, scanning cells in row-major order:
//!
//! 1. **Win**: complete five-in-a-row for the agent
//! 2. **Block**: deny the opponent's five-in-a-row
//! 3. **Attack**: extend an own run to 3 or more
//! 4. **Defend**: cut an opponent run of 3 or more
//! 5. **Random**: uniform choice over the remaining empty cells
//!
//! Steps 1-4 evaluate candidates by speculative placement through
//! [`Board::trial`], which reverts the stone on every exit path; the
//! caller applies the returned move, the selector never commits one.
//!
//! An alternative center-bias mode serves the opening: it ignores the
//! chain and plays the empty cell nearest the board center. Which mode
//! applies to a given move is the caller's decision (the game loop keeps
//! the move counter).

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::rules::{has_five_in_row, longest_run};
use rand::seq::SliceRandom;
use tracing::debug;

/// Run length that triggers the attack and defend steps
const THREAT_RUN: usize = 3;

/// How the next move is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Play the empty cell closest to the board center (opening moves)
    CenterBias,
    /// Full heuristic priority chain
    PriorityChain,
}

/// Which step of the selection produced a move.
///
/// Carried alongside the move for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    CenterBias,
    Win,
    Block,
    Attack,
    Defend,
    Random,
}

/// A selected move and the step that found it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub pos: Pos,
    pub strategy: Strategy,
}

/// Select the next move for `color`.
///
/// Returns `None` only when the board is exhausted (no empty cell);
/// the caller must treat that as a draw and stop requesting moves.
///
/// The board is borrowed mutably for speculative placements but is left
/// exactly as it was on entry; applying the returned move is up to the
/// caller.
#[must_use]
pub fn select_move(board: &mut Board, color: Stone, mode: SelectMode) -> Option<MoveResult> {
    if board.is_full() {
        debug!("board exhausted, no move to select");
        return None;
    }

    let result = match mode {
        SelectMode::CenterBias => find_central_move(board).map(|pos| MoveResult {
            pos,
            strategy: Strategy::CenterBias,
        }),
        SelectMode::PriorityChain => find_best_move(board, color),
    };

    if let Some(found) = result {
        debug!(row = found.pos.row, col = found.pos.col, strategy = ?found.strategy, "selected move");
    }
    result
}

/// Run the priority chain for `color`
fn find_best_move(board: &mut Board, color: Stone) -> Option<MoveResult> {
    let opponent = color.opponent();

    // 1. Take an immediate win
    if let Some(pos) = find_winning_move(board, color) {
        return Some(MoveResult {
            pos,
            strategy: Strategy::Win,
        });
    }

    // 2. Block the opponent's immediate win
    if let Some(pos) = find_winning_move(board, opponent) {
        return Some(MoveResult {
            pos,
            strategy: Strategy::Block,
        });
    }

    // 3. Extend an own run of three
    if let Some(pos) = find_threat_move(board, color, THREAT_RUN) {
        return Some(MoveResult {
            pos,
            strategy: Strategy::Attack,
        });
    }

    // 4. Cut an opponent run of three
    if let Some(pos) = find_threat_move(board, opponent, THREAT_RUN) {
        return Some(MoveResult {
            pos,
            strategy: Strategy::Defend,
        });
    }

    // 5. Fall back to a random empty cell
    find_random_move(board).map(|pos| MoveResult {
        pos,
        strategy: Strategy::Random,
    })
}

/// Find an empty cell that completes five-in-a-row for `stone`.
/// Row-major scan; the first qualifying cell wins ties.
fn find_winning_move(board: &mut Board, stone: Stone) -> Option<Pos> {
    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(r, c);
            if !board.is_empty(pos) {
                continue;
            }
            let trial = board.trial(pos, stone);
            if has_five_in_row(&trial, stone) {
                return Some(pos);
            }
        }
    }
    None
}

/// Find an empty cell where placing `stone` yields a run of at least
/// `run` through it. Row-major first match.
fn find_threat_move(board: &mut Board, stone: Stone, run: usize) -> Option<Pos> {
    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(r, c);
            if !board.is_empty(pos) {
                continue;
            }
            let trial = board.trial(pos, stone);
            if longest_run(&trial, stone, pos) >= run {
                return Some(pos);
            }
        }
    }
    None
}

/// Empty cell closest to the board center; earlier row-major cells win
/// ties since only a strictly smaller distance replaces the incumbent.
fn find_central_move(board: &Board) -> Option<Pos> {
    let center_row = (BOARD_SIZE / 2) as i32;
    let center_col = (BOARD_SIZE / 2) as i32;

    let mut best: Option<(Pos, i32)> = None;
    for pos in board.empty_cells() {
        let dr = pos.row as i32 - center_row;
        let dc = pos.col as i32 - center_col;
        // Squared distance orders the same as Euclidean distance
        let dist = dr * dr + dc * dc;
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((pos, dist)),
        }
    }
    best.map(|(pos, _)| pos)
}

/// Uniform choice over the remaining empty cells.
///
/// Enumerating the empty set bounds worst-case time on nearly full
/// boards while keeping the same uniform distribution as resampling.
fn find_random_move(board: &Board) -> Option<Pos> {
    let empties: Vec<Pos> = board.empty_cells().collect();
    empties.choose(&mut rand::thread_rng()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    /// Full board with no five-in-a-row for either player: cell value
    /// follows ((col + 2*row) % 4 < 2), giving runs of at most two on
    /// every axis.
    fn full_drawn_board() -> Board {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let stone = if (pos.col as usize + 2 * pos.row as usize) % 4 < 2 {
                Stone::Human
            } else {
                Stone::Agent
            };
            board.place_stone(pos, stone);
        }
        board
    }

    #[test]
    fn test_drawn_board_really_has_no_winner() {
        let board = full_drawn_board();
        assert!(board.is_full());
        assert!(!has_five_in_row(&board, Stone::Human));
        assert!(!has_five_in_row(&board, Stone::Agent));
    }

    #[test]
    fn test_completes_own_four_on_lower_side() {
        let mut board = Board::new();
        // Agent four at row 5, cols 5-8; both completions are open,
        // col 4 comes first in the row-major scan
        for c in 5..9 {
            board.place_stone(Pos::new(5, c), Stone::Agent);
        }
        let result = select_move(&mut board, Stone::Agent, SelectMode::PriorityChain).unwrap();
        assert_eq!(result.pos, Pos::new(5, 4));
        assert_eq!(result.strategy, Strategy::Win);
    }

    #[test]
    fn test_win_takes_precedence_over_block() {
        let mut board = Board::new();
        // Human four earlier in scan order than the agent's four; the
        // win step must still fire before the block step looks
        for c in 5..9 {
            board.place_stone(Pos::new(2, c), Stone::Human);
        }
        for c in 5..9 {
            board.place_stone(Pos::new(5, c), Stone::Agent);
        }
        let result = select_move(&mut board, Stone::Agent, SelectMode::PriorityChain).unwrap();
        assert_eq!(result.pos, Pos::new(5, 4));
        assert_eq!(result.strategy, Strategy::Win);
    }

    #[test]
    fn test_blocks_opposing_four() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(2, c), Stone::Human);
        }
        let result = select_move(&mut board, Stone::Agent, SelectMode::PriorityChain).unwrap();
        assert_eq!(result.pos, Pos::new(2, 4));
        assert_eq!(result.strategy, Strategy::Block);
    }

    #[test]
    fn test_attack_extends_own_pair() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 5), Stone::Agent);
        board.place_stone(Pos::new(7, 6), Stone::Agent);
        // First cell forming a run of three is (7, 4)
        let result = select_move(&mut board, Stone::Agent, SelectMode::PriorityChain).unwrap();
        assert_eq!(result.pos, Pos::new(7, 4));
        assert_eq!(result.strategy, Strategy::Attack);
    }

    #[test]
    fn test_defends_against_opposing_pair() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 5), Stone::Human);
        board.place_stone(Pos::new(7, 6), Stone::Human);
        // A lone agent stone far away cannot reach a run of three
        board.place_stone(Pos::new(0, 0), Stone::Agent);
        let result = select_move(&mut board, Stone::Agent, SelectMode::PriorityChain).unwrap();
        assert_eq!(result.pos, Pos::new(7, 4));
        assert_eq!(result.strategy, Strategy::Defend);
    }

    #[test]
    fn test_random_fallback_on_quiet_board() {
        let mut board = Board::new();
        let result = select_move(&mut board, Stone::Agent, SelectMode::PriorityChain).unwrap();
        assert_eq!(result.strategy, Strategy::Random);
        assert!(board.is_empty(result.pos));
    }

    #[test]
    fn test_selector_does_not_mutate_board() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(2, c), Stone::Human);
        }
        board.place_stone(Pos::new(7, 7), Stone::Agent);
        let before = board;

        let result = select_move(&mut board, Stone::Agent, SelectMode::PriorityChain).unwrap();
        assert_eq!(board, before);

        // The returned cell is empty and applying it is the only change
        board.apply_move(result.pos, Stone::Agent).unwrap();
        assert_ne!(board, before);
    }

    #[test]
    fn test_exhausted_board_returns_no_move() {
        let mut board = full_drawn_board();
        assert!(select_move(&mut board, Stone::Agent, SelectMode::PriorityChain).is_none());
        assert!(select_move(&mut board, Stone::Agent, SelectMode::CenterBias).is_none());
    }

    #[test]
    fn test_center_bias_on_empty_board() {
        let mut board = Board::new();
        let result = select_move(&mut board, Stone::Agent, SelectMode::CenterBias).unwrap();
        assert_eq!(result.pos, Pos::new(7, 7));
        assert_eq!(result.strategy, Strategy::CenterBias);
    }

    #[test]
    fn test_center_bias_with_center_taken() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Human);
        // Four cells sit at distance 1; (6, 7) comes first row-major
        let result = select_move(&mut board, Stone::Agent, SelectMode::CenterBias).unwrap();
        assert_eq!(result.pos, Pos::new(6, 7));
    }

    #[test]
    fn test_center_bias_ignores_threats() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(2, c), Stone::Human);
        }
        // Center bias is mutually exclusive with the chain per call
        let result = select_move(&mut board, Stone::Agent, SelectMode::CenterBias).unwrap();
        assert_eq!(result.pos, Pos::new(7, 7));
    }
}
