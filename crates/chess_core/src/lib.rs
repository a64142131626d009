//! Chess rules and search for the clickchess session controller.
//!
//! The application crate consumes this library through a small surface:
//! [`GameState::new`], [`GameState::valid_moves`], [`GameState::apply_move`],
//! [`GameState::undo_move`], the terminal flags on [`GameState`], and the two
//! search entry points [`search::find_best_move`] and
//! [`search::find_random_move`]. Everything else is an implementation detail
//! of move generation.

pub mod error;
pub mod movegen;
pub mod search;
pub mod state;
pub mod types;

pub use error::{ChessError, ChessResult};
pub use state::{CastlingRights, GameState};
pub use types::{Color, Move, Piece, PieceKind, Square};
