//! Game engine: turn state machine and move handling
//!
//! [`GameEngine`] owns one [`Board`] for its lifetime and drives the whole
//! game through a single operation, [`attempt_move`](GameEngine::attempt_move).
//! The presentation layer translates a click into a position, calls
//! `attempt_move`, and renders whatever [`MoveResult`] comes back. Once the
//! outcome is set it never changes; a fresh engine starts a new game.

use thiserror::Error;

use crate::board::{Board, PlaceError, Pos, Stone};
use crate::rules;

/// Why a move attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell {0} is already occupied")]
    Occupied(Pos),
    #[error("position {0} is outside the board")]
    OutOfBounds(Pos),
    #[error("the game is already over")]
    GameOver,
}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::Occupied(pos) => MoveError::Occupied(pos),
            PlaceError::OutOfBounds(pos) => MoveError::OutOfBounds(pos),
        }
    }
}

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Stone placed, game continues, it is now `next_player`'s turn
    Accepted { next_player: Stone },
    /// Nothing changed; the reason says why
    Rejected(MoveError),
    /// Stone placed and it completed five-in-a-row
    Won { winner: Stone, line: [Pos; 5] },
    /// Stone placed into the last open cell without a win
    Draw,
}

/// Final outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { winner: Stone, line: [Pos; 5] },
    Draw,
}

/// Turn-taking state machine over a [`Board`]
///
/// Black always moves first. Single-threaded by design: the caller handles
/// one move to completion before dispatching the next.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Stone,
    outcome: Option<GameOutcome>,
}

impl GameEngine {
    /// New game on a default-size board
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// New game on a board of the given size
    pub fn with_board_size(size: usize) -> Self {
        Self::with_board(Board::with_size(size))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            current_player: Stone::Black,
            outcome: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose move is next; meaningless once the game is over
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Winning line for the UI highlight, if the game ended in a win
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self.outcome {
            Some(GameOutcome::Won { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Attempt to place the current player's stone at `pos`
    ///
    /// Validates the move, runs win detection centered on the placed stone,
    /// and advances the turn. Rejections leave every piece of state exactly
    /// as it was, including whose turn it is.
    pub fn attempt_move(&mut self, pos: Pos) -> MoveResult {
        if self.outcome.is_some() {
            return MoveResult::Rejected(MoveError::GameOver);
        }

        let player = self.current_player;
        if let Err(err) = self.board.place(pos, player) {
            return MoveResult::Rejected(err.into());
        }

        // A five cannot exist before the ninth stone lands, so the scan is
        // skipped until then.
        if self.board.filled() >= rules::MIN_STONES_FOR_FIVE {
            if let Some(line) = rules::find_winning_line(&self.board, pos, player) {
                self.outcome = Some(GameOutcome::Won {
                    winner: player,
                    line,
                });
                return MoveResult::Won {
                    winner: player,
                    line,
                };
            }
        }

        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            return MoveResult::Draw;
        }

        self.current_player = player.opponent();
        MoveResult::Accepted {
            next_player: self.current_player,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(engine: &mut GameEngine, row: u8, col: u8) -> Stone {
        match engine.attempt_move(Pos::new(row, col)) {
            MoveResult::Accepted { next_player } => next_player,
            other => panic!("expected Accepted at ({row}, {col}), got {other:?}"),
        }
    }

    #[test]
    fn test_black_moves_first() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_player(), Stone::Black);
        assert!(!engine.is_over());
    }

    #[test]
    fn test_turns_alternate() {
        let mut engine = GameEngine::new();
        assert_eq!(accept(&mut engine, 9, 9), Stone::White);
        assert_eq!(accept(&mut engine, 9, 10), Stone::Black);
        assert_eq!(accept(&mut engine, 10, 9), Stone::White);
        assert_eq!(engine.board().filled(), 3);
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut engine = GameEngine::new();
        accept(&mut engine, 5, 5);

        // White tries the same cell
        let result = engine.attempt_move(Pos::new(5, 5));
        assert_eq!(
            result,
            MoveResult::Rejected(MoveError::Occupied(Pos::new(5, 5)))
        );
        assert_eq!(engine.current_player(), Stone::White);
        assert_eq!(engine.board().filled(), 1);
        assert_eq!(engine.board().get(Pos::new(5, 5)), Stone::Black);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut engine = GameEngine::new();
        let off = Pos::new(20, 3);
        let result = engine.attempt_move(off);
        assert_eq!(result, MoveResult::Rejected(MoveError::OutOfBounds(off)));
        assert_eq!(engine.current_player(), Stone::Black);
        assert_eq!(engine.board().filled(), 0);
    }

    #[test]
    fn test_black_wins_on_fifth_stone_in_row() {
        // Black builds (0,0)..(0,4) while White answers on row 1
        let mut engine = GameEngine::new();
        for col in 0..4u8 {
            accept(&mut engine, 0, col);
            accept(&mut engine, 1, col);
        }

        let result = engine.attempt_move(Pos::new(0, 4));
        let expected_line = [
            Pos::new(0, 0),
            Pos::new(0, 1),
            Pos::new(0, 2),
            Pos::new(0, 3),
            Pos::new(0, 4),
        ];
        assert_eq!(
            result,
            MoveResult::Won {
                winner: Stone::Black,
                line: expected_line,
            }
        );
        assert_eq!(engine.board().filled(), 9);
        assert!(engine.is_over());
        assert_eq!(engine.winning_line(), Some(expected_line));
    }

    #[test]
    fn test_no_win_before_fifth_stone() {
        let mut engine = GameEngine::new();
        for col in 0..3u8 {
            accept(&mut engine, 0, col);
            accept(&mut engine, 1, col);
        }
        // Black's fourth stone: four in a row is not a win
        assert_eq!(accept(&mut engine, 0, 3), Stone::White);
        assert!(!engine.is_over());
    }

    #[test]
    fn test_diagonal_win() {
        let mut engine = GameEngine::new();
        for i in 0..4u8 {
            accept(&mut engine, i, i);
            accept(&mut engine, i, i + 1);
        }
        match engine.attempt_move(Pos::new(4, 4)) {
            MoveResult::Won { winner, .. } => assert_eq!(winner, Stone::Black),
            other => panic!("expected diagonal win, got {other:?}"),
        }
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let mut engine = GameEngine::new();
        for col in 0..4u8 {
            accept(&mut engine, 0, col);
            accept(&mut engine, 1, col);
        }
        engine.attempt_move(Pos::new(0, 4));
        assert!(engine.is_over());

        let before = engine.board().clone();
        let result = engine.attempt_move(Pos::new(10, 10));
        assert_eq!(result, MoveResult::Rejected(MoveError::GameOver));
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_outcome_is_monotonic() {
        let mut engine = GameEngine::new();
        for col in 0..4u8 {
            accept(&mut engine, 0, col);
            accept(&mut engine, 1, col);
        }
        engine.attempt_move(Pos::new(0, 4));
        let outcome = engine.outcome();

        engine.attempt_move(Pos::new(10, 10));
        engine.attempt_move(Pos::new(11, 11));
        assert_eq!(engine.outcome(), outcome);
    }

    #[test]
    fn test_full_board_without_five_is_a_draw() {
        // 5x5 board tiled so no axis ever reaches five:
        //   B B W W B
        //   W W B B W
        //   B B W W B
        //   W W B B W
        //   B B W W B
        let pattern = [
            "BBWWB", "WWBBW", "BBWWB", "WWBBW", "BBWWB",
        ];
        let mut black = Vec::new();
        let mut white = Vec::new();
        for (row, line) in pattern.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                if ch == 'B' {
                    black.push(pos);
                } else {
                    white.push(pos);
                }
            }
        }
        assert_eq!(black.len(), 13);
        assert_eq!(white.len(), 12);

        let mut engine = GameEngine::with_board_size(5);
        for k in 0..25usize {
            let pos = if k % 2 == 0 {
                black[k / 2]
            } else {
                white[k / 2]
            };
            let result = engine.attempt_move(pos);
            if k < 24 {
                assert!(
                    matches!(result, MoveResult::Accepted { .. }),
                    "move {k} at {pos} should continue the game, got {result:?}"
                );
            } else {
                assert_eq!(result, MoveResult::Draw);
            }
        }

        assert!(engine.board().is_full());
        assert_eq!(engine.outcome(), Some(GameOutcome::Draw));

        // Still terminal: no cell accepts another stone
        assert_eq!(
            engine.attempt_move(Pos::new(0, 0)),
            MoveResult::Rejected(MoveError::GameOver)
        );
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::Occupied(Pos::new(2, 3)).to_string(),
            "cell (2, 3) is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }
}
