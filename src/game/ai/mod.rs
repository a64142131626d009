//! Background search worker lifecycle.
//!
//! The engine side's move is computed off the control thread. One tick spawns
//! a task with a deep snapshot of the session state, later ticks poll it
//! without blocking, and undo/reset cancel it by dropping the task resource.
//! The worker never sees the live board: the snapshot is taken at spawn time
//! and never mutated afterward, so there is no shared mutable state to race
//! over.

pub mod resource;
pub mod systems;

pub use resource::{PendingSearch, SearchHold, SearchStats};
pub use systems::{poll_search_task, release_search_hold, spawn_search_task};
