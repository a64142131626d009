//! Search worker resources.

use bevy::prelude::*;
use bevy::tasks::Task;
use chess_core::Move;

/// The single in-flight search task. At most one exists at a time: the spawn
/// system refuses to start another while this resource is present, and
/// removing the resource drops the task, which cancels it; any result the
/// worker produces afterwards is unreachable.
#[derive(Resource)]
pub struct PendingSearch(pub Task<Option<Move>>);

/// Guard that keeps the engine from instantly replaying a move the user just
/// took back. Engaged by undo and reset; released once the command keys are
/// physically up, checked every tick.
///
/// Releasing on key-up rather than on "next input" means an engine-vs-engine
/// session can never deadlock behind the guard, while a held undo key keeps
/// suppressing search for as long as it is down.
#[derive(Resource, Debug, Default)]
pub struct SearchHold {
    engaged: bool,
}

impl SearchHold {
    pub fn engage(&mut self) {
        self.engaged = true;
    }

    pub fn release(&mut self) {
        self.engaged = false;
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

/// Lifecycle counters for the search coordinator.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub searches_started: u32,
    pub results_applied: u32,
    pub fallback_moves: u32,
}
