//! Session resources.
//!
//! - [`GameSession`] - the rules-engine state plus the cached legal-move list
//! - [`SideControllers`] - who drives each color
//! - [`Selection`] - the two-click move builder
//! - [`MatchStatus`] - terminal-state tracking

pub mod selection;
pub mod session;
pub mod status;

pub use selection::{Selection, SelectorOutcome};
pub use session::{EngineSettings, GameSession, SideControllers};
pub use status::MatchStatus;
