//! Selection and legal-destination highlights.

use bevy::prelude::*;

use crate::game::resources::{GameSession, Selection};
use crate::rendering::board::{BoardTheme, SquareTile};

/// Tints the selected square and every legal destination of the piece on it.
/// Runs every tick; with no meaningful selection it restores the base colors.
pub fn highlight_squares(
    session: Res<GameSession>,
    selection: Res<Selection>,
    theme: Res<BoardTheme>,
    mut tiles: Query<(&mut Sprite, &SquareTile)>,
) {
    // Only a square holding one of the mover's own pieces gets highlighted.
    let selected = selection.selected.filter(|sq| {
        session.state.piece_at(*sq).map(|p| p.color) == Some(session.side_to_move())
    });

    for (mut sprite, tile) in &mut tiles {
        let mut color = theme.base_color(tile.square);
        if let Some(sel) = selected {
            if tile.square == sel {
                color = theme.selected;
            } else if session
                .legal_moves
                .iter()
                .any(|m| m.from == sel && m.to == tile.square)
            {
                color = theme.target;
            }
        }
        sprite.color = color;
    }
}
