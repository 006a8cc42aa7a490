//! GUI module for Five in a Row
//!
//! Native egui/eframe presentation layer. Everything here is adapter code:
//! it reads the model through [`crate::GameEngine`] and routes clicks into
//! [`crate::GameEngine::attempt_move`].

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::FiveInARowApp;
pub use game_state::GameSession;
