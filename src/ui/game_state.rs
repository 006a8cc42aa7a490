//! Game session state for the GUI
//!
//! Thin presentation-side wrapper around [`GameEngine`]: it forwards clicks
//! to the engine and turns each [`MoveResult`] into the status line shown in
//! the side panel. The engine itself stays free of any rendering concern.

use crate::{GameEngine, GameOutcome, MoveResult, Pos, Stone};

pub struct GameSession {
    pub engine: GameEngine,
    pub last_move: Option<Pos>,
    pub move_count: usize,
    pub status: String,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            last_move: None,
            move_count: 0,
            status: format!("{} to play", Stone::Black.name()),
        }
    }

    /// Start a new game: a fresh engine replaces the old one
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }

    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        self.engine.winning_line()
    }

    /// Route a board click into the engine and update the status line
    pub fn handle_click(&mut self, pos: Pos) {
        match self.engine.attempt_move(pos) {
            MoveResult::Accepted { next_player } => {
                self.last_move = Some(pos);
                self.move_count += 1;
                self.status = format!("{} to play", next_player.name());
            }
            MoveResult::Won { winner, .. } => {
                self.last_move = Some(pos);
                self.move_count += 1;
                self.status = format!("{} wins! The game is over", winner.name());
            }
            MoveResult::Draw => {
                self.last_move = Some(pos);
                self.move_count += 1;
                self.status = "Draw! The game is over".to_string();
            }
            MoveResult::Rejected(err) => {
                self.status = err.to_string();
            }
        }
    }

    /// Text for the game-over card, if the game ended
    pub fn outcome_text(&self) -> Option<String> {
        match self.engine.outcome() {
            Some(GameOutcome::Won { winner, .. }) => {
                Some(format!("{} wins by five-in-a-row", winner.name()))
            }
            Some(GameOutcome::Draw) => Some("Draw: the board is full".to_string()),
            None => None,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
