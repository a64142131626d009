//! System organization using SystemSets.
//!
//! Each tick runs Input → Search → Execution → Visual, in that order. Making
//! the ordering explicit keeps the three independently-timed activities
//! (pointer input, worker polling, animation) from racing over the session
//! state.

use bevy::prelude::*;

/// Per-tick execution order for the session systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Pointer clicks and the undo/reset key commands.
    Input,

    /// Search-worker lifecycle: hold release, spawn, poll.
    Search,

    /// Move animation and the post-move bookkeeping it gates.
    Execution,

    /// Highlights and piece-entity rebuilds.
    Visual,
}
