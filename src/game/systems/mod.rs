//! Per-tick session systems.
//!
//! - `input` - pointer clicks feeding the two-click selector
//! - `controls` - undo/reset key commands, valid in every state
//! - `shared` - the one commit path both human and engine moves go through
//! - `animation` - drives the move animation and the bookkeeping it gates
//! - `visual` - selection and legal-destination highlights

pub mod animation;
pub mod controls;
pub mod input;
pub mod shared;
pub mod visual;

pub use animation::run_move_animation;
pub use controls::handle_undo_reset;
pub use input::handle_board_clicks;
pub use visual::highlight_squares;
