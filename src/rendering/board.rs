//! Board layout, tiles, and the square color theme.
//!
//! The board fills the left 512x512 of the window; the move-log panel takes
//! the remaining 250 px on the right. Cursor coordinates arrive with the
//! origin at the window's top-left corner, so the pixel-to-square mapping is
//! a straight division by the square size.

use bevy::prelude::*;
use chess_core::Square;

pub const SQ_SIZE: f32 = 64.0;
pub const BOARD_SIZE: f32 = 8.0 * SQ_SIZE;
pub const LOG_PANEL_WIDTH: f32 = 250.0;
pub const WINDOW_WIDTH: f32 = BOARD_SIZE + LOG_PANEL_WIDTH;
pub const WINDOW_HEIGHT: f32 = BOARD_SIZE;

pub const Z_BOARD: f32 = 0.0;

/// Marks a tile entity with its board square.
#[derive(Component, Clone, Copy, Debug)]
pub struct SquareTile {
    pub square: Square,
}

/// Square colors. The highlight tints follow the classic scheme: blue for
/// the selected square, pale cyan for its legal destinations.
#[derive(Resource, Debug, Clone)]
pub struct BoardTheme {
    pub light: Color,
    pub dark: Color,
    pub selected: Color,
    pub target: Color,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            light: Color::srgb(0.83, 0.83, 0.83),
            dark: Color::srgb(0.0, 0.39, 0.0),
            selected: Color::srgb(0.39, 0.58, 0.93),
            target: Color::srgb(0.59, 1.0, 1.0),
        }
    }
}

impl BoardTheme {
    /// The untinted color of a square; the top-left square is light.
    pub fn base_color(&self, square: Square) -> Color {
        if (square.row + square.col) % 2 == 0 {
            self.light
        } else {
            self.dark
        }
    }
}

/// World position of a (possibly fractional) board coordinate's center.
pub fn board_to_world(row: f32, col: f32) -> Vec2 {
    Vec2::new(
        col * SQ_SIZE + SQ_SIZE / 2.0 - WINDOW_WIDTH / 2.0,
        WINDOW_HEIGHT / 2.0 - (row * SQ_SIZE + SQ_SIZE / 2.0),
    )
}

/// Maps a cursor position (window top-left origin) to a board square.
/// Returns `None` right of the board or otherwise off the grid.
pub fn square_at_cursor(cursor: Vec2) -> Option<Square> {
    if cursor.x < 0.0 || cursor.y < 0.0 {
        return None;
    }
    let col = (cursor.x / SQ_SIZE) as u32;
    let row = (cursor.y / SQ_SIZE) as u32;
    if row < 8 && col < 8 {
        Some(Square::new(row as u8, col as u8))
    } else {
        None
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardTheme>();
        app.add_systems(Startup, (setup_camera, spawn_board));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_board(mut commands: Commands, theme: Res<BoardTheme>) {
    for row in 0..8u8 {
        for col in 0..8u8 {
            let square = Square::new(row, col);
            commands.spawn((
                Sprite {
                    color: theme.base_color(square),
                    custom_size: Some(Vec2::splat(SQ_SIZE)),
                    ..default()
                },
                Transform::from_translation(board_to_world(row as f32, col as f32).extend(Z_BOARD)),
                SquareTile { square },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_maps_to_squares() {
        assert_eq!(square_at_cursor(Vec2::new(10.0, 10.0)), Some(Square::new(0, 0)));
        assert_eq!(
            square_at_cursor(Vec2::new(511.0, 511.0)),
            Some(Square::new(7, 7))
        );
        assert_eq!(
            square_at_cursor(Vec2::new(100.0, 70.0)),
            Some(Square::new(1, 1))
        );
    }

    #[test]
    fn panel_clicks_are_outside_the_grid() {
        assert_eq!(square_at_cursor(Vec2::new(520.0, 10.0)), None);
        assert_eq!(square_at_cursor(Vec2::new(700.0, 300.0)), None);
        assert_eq!(square_at_cursor(Vec2::new(-1.0, 10.0)), None);
    }

    #[test]
    fn world_positions_center_squares() {
        let top_left = board_to_world(0.0, 0.0);
        assert_eq!(top_left, Vec2::new(-WINDOW_WIDTH / 2.0 + 32.0, WINDOW_HEIGHT / 2.0 - 32.0));
        // One square right moves +SQ_SIZE in x; one square down moves -SQ_SIZE in y.
        assert_eq!(board_to_world(0.0, 1.0).x - top_left.x, SQ_SIZE);
        assert_eq!(top_left.y - board_to_world(1.0, 0.0).y, SQ_SIZE);
    }
}
