//! Game rules for Five in a Row
//!
//! Free-style Gomoku: the first unbroken row of five or more stones along
//! any axis wins. No captures, no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_five_at, MIN_STONES_FOR_FIVE};
