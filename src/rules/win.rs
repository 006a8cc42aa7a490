//! Win condition checking
//!
//! A move wins when it completes five or more in a row along any of the
//! four axes through the just-placed stone. The scan is centered on that
//! stone and bounded to four cells per direction, which is enough to see
//! any five that runs through it.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Maximum steps to walk outward per direction along an axis
const SCAN_RADIUS: i32 = 4;

/// Fewest stones that can be on the board when a five completes:
/// five for the winner, four for the opponent in between.
pub const MIN_STONES_FOR_FIVE: usize = 9;

/// Check if the stone just placed at `pos` completes five-in-a-row
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, stone: Stone) -> bool {
    find_winning_line(board, pos, stone).is_some()
}

/// Find the winning line through `pos` if one exists
///
/// Returns the first five positions of the completed run, ordered along
/// the axis, or `None` if no axis through `pos` reaches five. Out-of-grid
/// cells end a run; runs never wrap across board edges.
pub fn find_winning_line(board: &Board, pos: Pos, stone: Stone) -> Option<[Pos; 5]> {
    let size = board.size() as i32;

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in the negative direction first
        for i in 1..=SCAN_RADIUS {
            let r = pos.row as i32 - dr * i;
            let c = pos.col as i32 - dc * i;
            if r < 0 || r >= size || c < 0 || c >= size {
                break;
            }
            let prev = Pos::new(r as u8, c as u8);
            if board.get(prev) == stone {
                line.insert(0, prev);
            } else {
                break;
            }
        }

        // Extend in the positive direction
        for i in 1..=SCAN_RADIUS {
            let r = pos.row as i32 + dr * i;
            let c = pos.col as i32 + dc * i;
            if r < 0 || r >= size || c < 0 || c >= size {
                break;
            }
            let next = Pos::new(r as u8, c as u8);
            if board.get(next) == stone {
                line.push(next);
            } else {
                break;
            }
        }

        if line.len() >= 5 {
            return Some([line[0], line[1], line[2], line[3], line[4]]);
        }
    }

    None
}
