//! Win condition checking for Omok
//!
//! Five or more consecutive stones along any of the four axes win;
//! overlines count. This is the authoritative terminal check run after
//! every placed stone.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 axes).
/// The reverse directions are covered by walking both ways, so a line
/// and its mirror are never counted twice.
pub const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if there's 5+ in a row for the given player.
///
/// Scans forward-only from every stone of the player; iterating all
/// stones already covers both endpoints of a line, so the backward walk
/// would be redundant. Short-circuits on the first winning run.
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };

    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            let mut count = 1;
            for step in 1..5 {
                let r = pos.row as i32 + (dr * step) as i32;
                let c = pos.col as i32 + (dc * step) as i32;
                if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != stone {
                    break;
                }
                count += 1;
            }
            if count >= 5 {
                return true;
            }
        }
    }
    false
}

/// Longest run of `stone` through `pos`, with `pos` itself treated as
/// occupied by `stone` whether or not it actually is.
///
/// Walks at most 4 steps forward and 4 backward per axis, so the result
/// is capped at 9; callers only compare it against the 3- and 5-stone
/// thresholds. Always at least 1.
pub fn longest_run(board: &Board, stone: Stone, pos: Pos) -> usize {
    let mut best = 1;

    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;

        // Forward
        for step in 1..5 {
            let r = pos.row as i32 + (dr * step) as i32;
            let c = pos.col as i32 + (dc * step) as i32;
            if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != stone {
                break;
            }
            count += 1;
        }

        // Backward
        for step in 1..5 {
            let r = pos.row as i32 - (dr * step) as i32;
            let c = pos.col as i32 - (dc * step) as i32;
            if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != stone {
                break;
            }
            count += 1;
        }

        best = best.max(count);
    }

    best
}
