//! Undo and reset key commands.
//!
//! Both are accepted in every session state, including `GameOver`, and both
//! cancel an in-flight search. That cancellation, plus the search hold they
//! engage, is what stops the engine from instantly replaying a move the user
//! just took back.

use bevy::prelude::*;

use crate::core::states::TurnState;
use crate::game::ai::{PendingSearch, SearchHold};
use crate::game::animation::MoveAnimation;
use crate::game::resources::{GameSession, MatchStatus, Selection, SideControllers};
use crate::rendering::pieces::PiecesDirty;

pub fn handle_undo_reset(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<GameSession>,
    mut selection: ResMut<Selection>,
    mut status: ResMut<MatchStatus>,
    mut hold: ResMut<SearchHold>,
    controllers: Res<SideControllers>,
    mut next_state: ResMut<NextState<TurnState>>,
    mut dirty: ResMut<PiecesDirty>,
) {
    let undo = keyboard.just_pressed(KeyCode::KeyZ);
    let reset = keyboard.just_pressed(KeyCode::KeyR);
    if !undo && !reset {
        return;
    }

    // Dropping the task resource cancels the worker; a late result can never
    // reach the session. Any half-drawn animation is discarded with it.
    commands.remove_resource::<PendingSearch>();
    commands.remove_resource::<MoveAnimation>();

    if reset {
        info!("[GAME] session reset");
        session.reset();
    } else {
        match session.state.undo_move() {
            Some(mv) => info!("[GAME] took back {}", mv.notation()),
            None => debug!("[GAME] undo with an empty move log"),
        }
        session.refresh_legal_moves();
    }

    selection.clear();
    *status = MatchStatus::InProgress;
    hold.engage();
    dirty.0 = true;
    next_state.set(controllers.turn_state_for(session.side_to_move()));
}
