//! In-game overlay UI.
//!
//! A right-hand egui panel shows the move log in the classic
//! `"<n>.<white> <black>"` format, three entries per visual row, plus the
//! turn line and a thinking indicator while a search is in flight. When the
//! game ends, a banner is centered over the board.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use chess_core::Move;

use crate::game::ai::PendingSearch;
use crate::game::resources::{GameSession, MatchStatus, SideControllers};
use crate::rendering::board::LOG_PANEL_WIDTH;

const MOVES_PER_ROW: usize = 3;

pub struct GameUiPlugin;

impl Plugin for GameUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, game_status_ui);
    }
}

#[derive(SystemParam)]
pub struct GameUiParams<'w, 's> {
    pub contexts: EguiContexts<'w, 's>,
    pub session: Res<'w, GameSession>,
    pub status: Res<'w, MatchStatus>,
    pub controllers: Res<'w, SideControllers>,
    pub pending: Option<Res<'w, PendingSearch>>,
}

pub fn game_status_ui(mut params: GameUiParams) {
    let Ok(ctx) = params.contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("move_log")
        .exact_width(LOG_PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Moves");
            ui.separator();
            egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                for row in log_entries(&params.session.state.move_log).chunks(MOVES_PER_ROW) {
                    ui.label(row.join("  "));
                }
            });
            ui.separator();

            if params.status.is_game_over() {
                ui.label(params.status.message());
            } else {
                let side = params.session.side_to_move();
                ui.label(format!(
                    "{:?} to move ({:?})",
                    side,
                    params.controllers.controller(side)
                ));
                if params.pending.is_some() {
                    let time = ui.input(|i| i.time);
                    let dots = (time * 3.0) as i64 % 4;
                    ui.label(format!("Engine is thinking{}", ".".repeat(dots as usize)));
                }
            }

            ui.separator();
            ui.label("Z: undo    R: reset");
        });

    if params.status.is_game_over() {
        egui::Window::new("game_over_banner")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [-(LOG_PANEL_WIDTH / 2.0), 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(params.status.message())
                            .size(28.0)
                            .strong(),
                    );
                    ui.label("Press R for a new game, Z to take back the last move");
                });
            });
    }
}

/// One entry per full move: `"1.e2e4 e7e5"`, with a trailing half entry when
/// White has moved and Black has not.
fn log_entries(move_log: &[Move]) -> Vec<String> {
    move_log
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let mut text = format!("{}.{}", i + 1, pair[0].notation());
            if let Some(black) = pair.get(1) {
                text.push(' ');
                text.push_str(&black.notation());
            }
            text
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::GameState;

    #[test]
    fn log_entries_pair_plies_into_moves() {
        let mut state = GameState::new();
        for (from, to) in [((6u8, 4u8), (4u8, 4u8)), ((1, 4), (3, 4)), ((7, 6), (5, 5))] {
            let mv = state
                .valid_moves()
                .into_iter()
                .find(|m| {
                    m.from == chess_core::Square::new(from.0, from.1)
                        && m.to == chess_core::Square::new(to.0, to.1)
                })
                .expect("scripted move should be legal");
            state.apply_move(&mv);
        }
        let entries = log_entries(&state.move_log);
        assert_eq!(entries, vec!["1.e2e4 e7e5".to_string(), "2.g1f3".to_string()]);
    }

    #[test]
    fn empty_log_renders_nothing() {
        assert!(log_entries(&[]).is_empty());
    }
}
