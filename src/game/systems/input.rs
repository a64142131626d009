//! Pointer input for the human side.
//!
//! Runs only in `TurnState::HumanToMove`; clicks landing in any other state
//! are ignored entirely, which is what keeps the pending-click list from ever
//! being corrupted by input that arrives mid-animation or mid-search.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::states::TurnState;
use crate::game::resources::{GameSession, Selection, SelectorOutcome};
use crate::game::systems::shared::commit_move;
use crate::rendering::board::square_at_cursor;

/// Translates left clicks into selector events and commits accepted moves.
pub fn handle_board_clicks(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut session: ResMut<GameSession>,
    mut selection: ResMut<Selection>,
    mut next_state: ResMut<NextState<TurnState>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    // Clicks right of the board (the move-log panel) map to None and clear
    // the selection.
    let square = square_at_cursor(cursor);
    let outcome = selection.on_square_clicked(square, &session.state, &session.legal_moves);
    match outcome {
        SelectorOutcome::MoveCandidate(mv) => {
            commit_move(
                &mut commands,
                &mut session,
                &mut selection,
                &mut next_state,
                mv,
            );
        }
        SelectorOutcome::AwaitingSecondClick => {
            debug!("[INPUT] pending clicks: {:?}", selection.clicks);
        }
        SelectorOutcome::SelectionCleared => {
            debug!("[INPUT] selection cleared");
        }
    }
}
