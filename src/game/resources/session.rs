//! The session resource: rules-engine state plus derived turn data.

use bevy::prelude::*;
use chess_core::{Color, GameState, Move};

use crate::core::config::Controller;
use crate::core::states::TurnState;

/// Owns the authoritative game state and the legal-move list for the current
/// position. The list is recomputed after every committed move, undo, and
/// reset, never in between, so every consumer sees one consistent snapshot
/// per position.
#[derive(Resource, Debug)]
pub struct GameSession {
    pub state: GameState,
    pub legal_moves: Vec<Move>,
}

impl Default for GameSession {
    fn default() -> Self {
        let mut state = GameState::new();
        let legal_moves = state.valid_moves();
        Self { state, legal_moves }
    }
}

impl GameSession {
    /// Recomputes the legal-move cache for the current position. Also updates
    /// the engine's checkmate/stalemate flags as a side effect.
    pub fn refresh_legal_moves(&mut self) {
        self.legal_moves = self.state.valid_moves();
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    /// Discards everything and returns to the starting position.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which controller drives each color.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SideControllers {
    pub white: Controller,
    pub black: Controller,
}

impl Default for SideControllers {
    fn default() -> Self {
        Self {
            white: Controller::Human,
            black: Controller::Engine,
        }
    }
}

impl SideControllers {
    pub fn controller(&self, color: Color) -> Controller {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// The session state that acquires moves for `color`.
    pub fn turn_state_for(&self, color: Color) -> TurnState {
        match self.controller(color) {
            Controller::Human => TurnState::HumanToMove,
            Controller::Engine => TurnState::ComputerToMove,
        }
    }
}

/// Engine tuning handed to every spawned search task.
#[derive(Resource, Debug, Clone, Copy)]
pub struct EngineSettings {
    pub depth: u8,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            depth: chess_core::search::DEFAULT_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_has_twenty_moves() {
        let session = GameSession::default();
        assert_eq!(session.legal_moves.len(), 20);
        assert_eq!(session.side_to_move(), Color::White);
    }

    #[test]
    fn reset_discards_progress() {
        let mut session = GameSession::default();
        let mv = session.legal_moves[0].clone();
        session.state.apply_move(&mv);
        session.refresh_legal_moves();
        assert_eq!(session.state.move_log.len(), 1);

        session.reset();
        assert_eq!(session.state.move_log.len(), 0);
        assert_eq!(session.legal_moves.len(), 20);
    }

    #[test]
    fn controllers_map_states() {
        let controllers = SideControllers {
            white: Controller::Human,
            black: Controller::Engine,
        };
        assert_eq!(controllers.turn_state_for(Color::White), TurnState::HumanToMove);
        assert_eq!(controllers.turn_state_for(Color::Black), TurnState::ComputerToMove);
    }
}
