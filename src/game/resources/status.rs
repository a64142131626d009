//! Terminal-state tracking.
//!
//! Starts as `InProgress` and follows the rules engine's checkmate/stalemate
//! flags after every committed move. Once terminal, move input is disabled
//! until undo or reset clears it.

use bevy::prelude::*;
use chess_core::GameState;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
    Stalemate,
}

impl MatchStatus {
    /// Derives the status from the engine's terminal flags. Checkmate means
    /// the side *to move* has lost.
    pub fn evaluate(state: &GameState) -> Self {
        if state.checkmate {
            if state.white_to_move {
                MatchStatus::BlackWins
            } else {
                MatchStatus::WhiteWins
            }
        } else if state.stalemate {
            MatchStatus::Stalemate
        } else {
            MatchStatus::InProgress
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }

    pub fn message(&self) -> &'static str {
        match self {
            MatchStatus::InProgress => "Game in progress",
            MatchStatus::WhiteWins => "White wins by checkmate",
            MatchStatus::BlackWins => "Black wins by checkmate",
            MatchStatus::Stalemate => "Stalemate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Square;

    #[test]
    fn fresh_game_is_in_progress() {
        let state = GameState::new();
        let status = MatchStatus::evaluate(&state);
        assert_eq!(status, MatchStatus::InProgress);
        assert!(!status.is_game_over());
    }

    #[test]
    fn fools_mate_reports_black_win() {
        let mut state = GameState::new();
        for (from, to) in [
            (Square::new(6, 5), Square::new(5, 5)),
            (Square::new(1, 4), Square::new(3, 4)),
            (Square::new(6, 6), Square::new(4, 6)),
            (Square::new(0, 3), Square::new(4, 7)),
        ] {
            let mv = state
                .valid_moves()
                .into_iter()
                .find(|m| m.from == from && m.to == to)
                .expect("scripted move should be legal");
            state.apply_move(&mv);
        }
        state.valid_moves();
        let status = MatchStatus::evaluate(&state);
        assert_eq!(status, MatchStatus::BlackWins);
        assert!(status.is_game_over());
        assert_eq!(status.message(), "Black wins by checkmate");
    }
}
