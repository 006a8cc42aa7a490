//! Five in a Row (Gomoku)
//!
//! A two-player Gomoku game with a native GUI. Players alternate placing
//! stones on a 20x20 grid; the first unbroken row of five along any of the
//! four axes wins, and a full board without a five is a draw.
//!
//! # Architecture
//!
//! The game model is independent of the GUI:
//! - [`board`]: grid of cell states with a filled-cell count
//! - [`rules`]: win detection centered on the last placed stone
//! - [`engine`]: turn state machine validating and applying move attempts
//! - [`ui`]: egui/eframe presentation layer routing clicks into the engine
//!
//! # Quick Start
//!
//! ```
//! use fiverow::{GameEngine, MoveResult, Pos, Stone};
//!
//! let mut engine = GameEngine::new();
//!
//! // Black moves first
//! match engine.attempt_move(Pos::new(9, 9)) {
//!     MoveResult::Accepted { next_player } => assert_eq!(next_player, Stone::White),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//!
//! // The same cell is rejected without changing state
//! assert!(matches!(
//!     engine.attempt_move(Pos::new(9, 9)),
//!     MoveResult::Rejected(_)
//! ));
//! assert_eq!(engine.board().filled(), 1);
//! ```

pub mod board;
pub mod engine;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, PlaceError, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use engine::{GameEngine, GameOutcome, MoveError, MoveResult};
