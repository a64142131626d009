//! `GamePlugin` - registers session resources and wires the per-tick systems
//! into their sets, gated by [`TurnState`].

use bevy::prelude::*;

use super::ai::{poll_search_task, release_search_hold, spawn_search_task, SearchHold, SearchStats};
use super::resources::{EngineSettings, GameSession, MatchStatus, Selection, SideControllers};
use super::system_sets::GameSystems;
use super::systems::{
    handle_board_clicks, handle_undo_reset, highlight_squares, run_move_animation,
};
use crate::core::states::TurnState;
use crate::rendering::pieces::{rebuild_pieces, PiecesDirty};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSession>()
            .init_resource::<Selection>()
            .init_resource::<MatchStatus>()
            .init_resource::<SearchHold>()
            .init_resource::<SearchStats>()
            .init_resource::<SideControllers>()
            .init_resource::<EngineSettings>()
            .init_resource::<PiecesDirty>();

        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Search,
                GameSystems::Execution,
                GameSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(Startup, apply_initial_turn_state);
        app.add_systems(
            Update,
            (
                handle_board_clicks
                    .in_set(GameSystems::Input)
                    .run_if(in_state(TurnState::HumanToMove)),
                handle_undo_reset.in_set(GameSystems::Input),
                release_search_hold.in_set(GameSystems::Search),
                (spawn_search_task, poll_search_task)
                    .chain()
                    .in_set(GameSystems::Search)
                    .run_if(in_state(TurnState::ComputerToMove)),
                run_move_animation
                    .in_set(GameSystems::Execution)
                    .run_if(in_state(TurnState::Animating)),
                highlight_squares.in_set(GameSystems::Visual),
                rebuild_pieces.in_set(GameSystems::Visual),
            ),
        );
    }
}

/// Routes the opening position to whichever controller owns White.
fn apply_initial_turn_state(
    controllers: Res<SideControllers>,
    session: Res<GameSession>,
    mut next_state: ResMut<NextState<TurnState>>,
) {
    next_state.set(controllers.turn_state_for(session.side_to_move()));
}
