//! Session state machine.
//!
//! One `TurnState` is active at a time and gates which systems may run:
//!
//! ```text
//! HumanToMove ──commit──▶ Animating ──▶ HumanToMove / ComputerToMove
//! ComputerToMove ─commit─▶ Animating ──▶ GameOver (checkmate/stalemate)
//! any state ──undo/reset──▶ HumanToMove / ComputerToMove
//! ```
//!
//! Board clicks are processed only in `HumanToMove`; the search coordinator
//! runs only in `ComputerToMove`; `Animating` blocks both until the committed
//! move has been fully drawn; `GameOver` accepts nothing but undo and reset.

use bevy::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States)]
pub enum TurnState {
    /// Waiting for the human side to build a move from two clicks.
    #[default]
    HumanToMove,

    /// A search task is (or is about to be) in flight for the engine side.
    ComputerToMove,

    /// A committed move is being interpolated across the board. Exactly one
    /// committed move is applied per visit to this state.
    Animating,

    /// Checkmate or stalemate was detected. Only undo and reset leave this
    /// state.
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_human_to_move() {
        assert_eq!(TurnState::default(), TurnState::HumanToMove);
    }
}
