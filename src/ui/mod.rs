//! Overlay UI: the move-log side panel and the end-of-game banner.

pub mod game_ui;

pub use game_ui::GameUiPlugin;
