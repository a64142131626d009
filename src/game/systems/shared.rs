//! The commit path shared by human and engine moves.

use bevy::prelude::*;
use chess_core::Move;

use crate::core::states::TurnState;
use crate::game::animation::MoveAnimation;
use crate::game::resources::{GameSession, Selection};

/// Applies an accepted move to the rules engine and hands it to the animation
/// scheduler. Exactly one move goes through here per `Animating` episode.
///
/// The legal-move cache is intentionally left stale: nothing reads it while
/// the animation runs, and the animation epilogue recomputes it for the new
/// position.
pub fn commit_move(
    commands: &mut Commands,
    session: &mut GameSession,
    selection: &mut Selection,
    next_state: &mut NextState<TurnState>,
    mv: Move,
) {
    let mover = session.state.side_to_move();
    let ply = session.state.move_log.len() + 1;
    info!("[GAME] {:?} plays {} (ply {})", mover, mv.notation(), ply);

    session.state.apply_move(&mv);
    selection.clear();
    commands.insert_resource(MoveAnimation::new(mv));
    next_state.set(TurnState::Animating);
}
