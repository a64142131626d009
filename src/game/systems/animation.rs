//! Drives the move animation while the session sits in
//! `TurnState::Animating`, then runs the post-move bookkeeping the animation
//! gates: legal-move recomputation, terminal-state evaluation, and the
//! transition to whoever moves next.

use bevy::prelude::*;

use crate::core::states::TurnState;
use crate::game::animation::MoveAnimation;
use crate::game::resources::{GameSession, MatchStatus, SideControllers};
use crate::rendering::board::board_to_world;
use crate::rendering::pieces::{PieceSprite, PiecesDirty, Z_PIECE_MOVING};

pub fn run_move_animation(
    mut commands: Commands,
    time: Res<Time>,
    animation: Option<ResMut<MoveAnimation>>,
    mut session: ResMut<GameSession>,
    mut status: ResMut<MatchStatus>,
    controllers: Res<SideControllers>,
    mut next_state: ResMut<NextState<TurnState>>,
    mut dirty: ResMut<PiecesDirty>,
    mut pieces: Query<(&mut Transform, &PieceSprite)>,
) {
    let Some(mut animation) = animation else {
        // Undo mid-animation discards the resource; just route onward.
        next_state.set(controllers.turn_state_for(session.side_to_move()));
        return;
    };

    animation.timer.tick(time.delta());
    for _ in 0..animation.timer.times_finished_this_tick() {
        animation.advance();
    }

    // Piece entities still show the pre-move board during the flight; only
    // the mover's transform is interpolated, drawn above everything else so
    // it passes over the captured piece still sitting on its square.
    let frame = animation.current();
    for (mut transform, sprite) in &mut pieces {
        if sprite.square == animation.mv.from && sprite.piece == animation.mv.moved {
            transform.translation = board_to_world(frame.row, frame.col).extend(Z_PIECE_MOVING);
        }
    }

    if animation.finished() {
        commands.remove_resource::<MoveAnimation>();
        dirty.0 = true;
        session.refresh_legal_moves();
        *status = MatchStatus::evaluate(&session.state);
        if status.is_game_over() {
            info!("[GAME] {}", status.message());
            next_state.set(TurnState::GameOver);
        } else {
            next_state.set(controllers.turn_state_for(session.side_to_move()));
        }
    }
}
