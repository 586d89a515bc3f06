//! Board state and speculative trial placements

use super::bitboard::Bitboard;
use super::{MoveError, Pos, Stone, TOTAL_CELLS};

/// Game board: one bitboard per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    human: Bitboard,
    agent: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            human: Bitboard::new(),
            agent: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.human.get(pos) {
            Stone::Human
        } else if self.agent.get(pos) {
            Stone::Agent
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.human.get(pos) && !self.agent.get(pos)
    }

    /// Place a stone without occupancy checking.
    /// Use `apply_move` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Human => self.human.set(pos),
            Stone::Agent => self.agent.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.human.clear(pos);
        self.agent.clear(pos);
    }

    /// Place a stone on an empty cell, rejecting occupied cells.
    /// The board is untouched on error.
    pub fn apply_move(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Get bitboard for a player (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Human => Some(&self.human),
            Stone::Agent => Some(&self.agent),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.human.count() + self.agent.count()
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Iterate over empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(|&pos| self.is_empty(pos))
    }

    /// Speculatively place a stone for evaluation.
    ///
    /// The returned guard removes the stone when dropped, so the placement
    /// is reverted on every exit path. The cell must be empty.
    pub fn trial(&mut self, pos: Pos, stone: Stone) -> Trial<'_> {
        debug_assert!(self.is_empty(pos));
        self.place_stone(pos, stone);
        Trial { board: self, pos }
    }
}

/// Scoped speculative placement (see [`Board::trial`])
pub struct Trial<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl std::ops::Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}
