//! Session orchestration: resources, the search coordinator, the animation
//! scheduler, and the per-tick systems binding them together.
//!
//! # Module Organization
//!
//! - `resources` - session state (game session, selection, match status)
//! - `ai` - background search worker lifecycle (spawn, poll, cancel, hold)
//! - `animation` - frame-based move animation scheduling
//! - `systems` - input, undo/reset commands, commit path, animation driver
//! - `plugin` - `GamePlugin` wiring everything into the app
//! - `system_sets` - deterministic per-tick ordering

pub mod ai;
pub mod animation;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;

pub use plugin::GamePlugin;
