//! Piece entities.
//!
//! Pieces are drawn as letter glyphs with per-side colors rather than image
//! sprites, which keeps the renderer asset-free. Entities are rebuilt from
//! the board wholesale whenever the position changes outside an animation;
//! while a move is in flight the pre-move picture stays up and only the
//! mover's transform is interpolated.

use bevy::prelude::*;
use chess_core::{Color as SideColor, Piece, PieceKind, Square};

use crate::game::resources::GameSession;
use crate::rendering::board::board_to_world;

pub const Z_PIECE: f32 = 1.0;
/// The mover draws above resting pieces so it passes over a captured piece
/// still sitting on its square.
pub const Z_PIECE_MOVING: f32 = 2.0;

const GLYPH_SIZE: f32 = 44.0;

/// A drawn piece and the board square it represents.
#[derive(Component, Clone, Copy, Debug)]
pub struct PieceSprite {
    pub piece: Piece,
    pub square: Square,
}

/// Set after every position change that must be redrawn. Starts dirty so the
/// opening position spawns on the first tick.
#[derive(Resource, Debug)]
pub struct PiecesDirty(pub bool);

impl Default for PiecesDirty {
    fn default() -> Self {
        Self(true)
    }
}

pub fn piece_glyph(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::King => "K",
        PieceKind::Queen => "Q",
        PieceKind::Rook => "R",
        PieceKind::Bishop => "B",
        PieceKind::Knight => "N",
        PieceKind::Pawn => "P",
    }
}

fn glyph_color(color: SideColor) -> Color {
    match color {
        SideColor::White => Color::srgb(0.96, 0.93, 0.82),
        SideColor::Black => Color::srgb(0.08, 0.08, 0.08),
    }
}

/// Despawns every piece entity and respawns the lot from the board. Runs when
/// [`PiecesDirty`] is set: at startup, after undo and reset, and when a move
/// animation completes. Rebuilding wholesale covers captures, castling rook
/// hops, en passant removals, and promotion glyph swaps with one code path.
pub fn rebuild_pieces(
    mut commands: Commands,
    mut dirty: ResMut<PiecesDirty>,
    session: Res<GameSession>,
    existing: Query<Entity, With<PieceSprite>>,
) {
    if !dirty.0 {
        return;
    }
    dirty.0 = false;

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    for row in 0..8u8 {
        for col in 0..8u8 {
            let square = Square::new(row, col);
            let Some(piece) = session.state.piece_at(square) else {
                continue;
            };
            commands.spawn((
                Text2d::new(piece_glyph(piece.kind)),
                TextFont {
                    font_size: GLYPH_SIZE,
                    ..default()
                },
                TextColor(glyph_color(piece.color)),
                Transform::from_translation(
                    board_to_world(row as f32, col as f32).extend(Z_PIECE),
                ),
                PieceSprite { piece, square },
            ));
        }
    }
}
