use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use clickchess::core::config::Cli;
use clickchess::core::states::TurnState;
use clickchess::game::resources::{EngineSettings, SideControllers};
use clickchess::game::GamePlugin;
use clickchess::rendering::board::{WINDOW_HEIGHT, WINDOW_WIDTH};
use clickchess::rendering::BoardPlugin;
use clickchess::ui::GameUiPlugin;

fn main() {
    let cli = Cli::parse();

    let window = Window {
        resolution: (WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32).into(),
        title: "clickchess".into(),
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
            ..default()
        })
        .init_state::<TurnState>()
        .insert_resource(SideControllers {
            white: cli.white,
            black: cli.black,
        })
        .insert_resource(EngineSettings { depth: cli.depth })
        .add_plugins(BoardPlugin)
        .add_plugins(GamePlugin)
        .add_plugins(GameUiPlugin)
        .run();
}
