//! Spawn/poll systems for the search worker.
//!
//! Both run only in `TurnState::ComputerToMove`, chained spawn-then-poll. The
//! control thread never blocks on the worker: `poll_search_task` checks
//! `is_finished` first and uses a non-blocking `poll_once` to take the
//! result.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::tasks::{block_on, AsyncComputeTaskPool};
use chess_core::search;
use futures_lite::future;

use super::resource::{PendingSearch, SearchHold, SearchStats};
use crate::core::states::TurnState;
use crate::game::resources::{EngineSettings, GameSession, MatchStatus, Selection};
use crate::game::systems::shared::commit_move;

#[derive(SystemParam)]
pub struct SearchSpawnParams<'w> {
    pub session: Res<'w, GameSession>,
    pub status: Res<'w, MatchStatus>,
    pub hold: Res<'w, SearchHold>,
    pub settings: Res<'w, EngineSettings>,
    pub pending: Option<Res<'w, PendingSearch>>,
    pub stats: ResMut<'w, SearchStats>,
}

#[derive(SystemParam)]
pub struct SearchPollParams<'w> {
    pub pending: Option<ResMut<'w, PendingSearch>>,
    pub session: ResMut<'w, GameSession>,
    pub selection: ResMut<'w, Selection>,
    pub status: ResMut<'w, MatchStatus>,
    pub stats: ResMut<'w, SearchStats>,
    pub next_state: ResMut<'w, NextState<TurnState>>,
}

/// Releases the post-undo search hold once the command keys are up.
pub fn release_search_hold(keyboard: Res<ButtonInput<KeyCode>>, mut hold: ResMut<SearchHold>) {
    if hold.is_engaged()
        && !keyboard.pressed(KeyCode::KeyZ)
        && !keyboard.pressed(KeyCode::KeyR)
    {
        hold.release();
        debug!("[AI] search hold released");
    }
}

/// Starts one search task when none is in flight. The task receives a deep
/// clone of the game state and the legal-move list; the live session is never
/// shared with the worker.
pub fn spawn_search_task(mut commands: Commands, mut params: SearchSpawnParams) {
    if params.pending.is_some() || params.hold.is_engaged() || params.status.is_game_over() {
        return;
    }
    if params.session.legal_moves.is_empty() {
        // Zero legal moves is the terminal signal; the animation epilogue
        // already routed the session to GameOver.
        return;
    }

    let snapshot = params.session.state.clone();
    let legal = params.session.legal_moves.clone();
    let depth = params.settings.depth;
    info!(
        "[AI] search started: {} candidates at depth {}",
        legal.len(),
        depth
    );

    let task_pool = AsyncComputeTaskPool::get();
    let task = task_pool.spawn(async move { search::find_best_move(&snapshot, &legal, depth) });
    commands.insert_resource(PendingSearch(task));
    params.stats.searches_started += 1;
}

/// Polls the in-flight search. A ready move is committed exactly like a human
/// move; an empty result falls back to a uniformly-random legal move so a
/// failed search never stalls the session.
pub fn poll_search_task(mut commands: Commands, mut params: SearchPollParams) {
    let Some(pending) = params.pending.as_mut() else {
        return;
    };
    if !pending.0.is_finished() {
        return;
    }
    let Some(result) = block_on(future::poll_once(&mut pending.0)) else {
        warn!("[AI] task reported finished but no result was available");
        return;
    };
    commands.remove_resource::<PendingSearch>();

    let mv = match result {
        Some(mv) => mv,
        None => match search::find_random_move(&params.session.legal_moves, &mut rand::rng()) {
            Some(mv) => {
                warn!("[AI] search returned no move; playing a random legal move");
                params.stats.fallback_moves += 1;
                mv
            }
            None => {
                *params.status = MatchStatus::evaluate(&params.session.state);
                params.next_state.set(TurnState::GameOver);
                return;
            }
        },
    };

    info!("[AI] search ready: {}", mv.notation());
    params.stats.results_applied += 1;
    commit_move(
        &mut commands,
        &mut params.session,
        &mut params.selection,
        &mut params.next_state,
        mv,
    );
}
