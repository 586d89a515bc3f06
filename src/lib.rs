//! Omok (five-in-a-row) engine with a heuristic agent
//!
//! A human plays against a rule-based agent on a 15x15 board. The agent
//! has no search tree: it picks each move with a single-ply priority
//! chain (win, block, attack, defend, random), optionally preceded by a
//! center-biased opening.
//!
//! # Architecture
//!
//! - [`board`]: board representation with bitboards
//! - [`rules`]: line scanning and win detection
//! - [`engine`]: move selection
//! - [`game`]: turn loop tying the handlers together
//!
//! # Quick Start
//!
//! ```
//! use omok::{Game, Pos};
//!
//! let mut game = Game::new();
//!
//! // Human plays, then the agent replies
//! game.human_move(5, 5).unwrap();
//! let reply = game.agent_move().unwrap().unwrap();
//!
//! // Opening moves head for the center
//! assert_eq!(reply.pos, Pos::new(7, 7));
//! assert!(game.outcome().is_none());
//! ```

pub mod board;
pub mod engine;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, MoveError, Pos, Stone, BOARD_SIZE};
pub use engine::{select_move, MoveResult, SelectMode, Strategy};
pub use game::{Game, Outcome, DEFAULT_OPENING_MOVES};
pub use rules::{has_five_in_row, longest_run};
