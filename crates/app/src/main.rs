//! Écorché — interactive mesh anatomy visualizer
//!
//! Decomposes a primitive shape or a dropped OBJ model into vertices,
//! edges, and faces, and reveals each structural layer with staggered
//! animations, ending with the fully assembled shaded mesh.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use ecorche_config::AppSettings;
use ecorche_scene::ScenePlugin;

mod input;
mod panel;

fn main() {
    let settings = match AppSettings::load_default_file() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("ignoring settings file: {e}");
            AppSettings::default()
        }
    };
    let display = settings.display.clone();

    App::new()
        .insert_resource(settings)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Écorché".into(),
                        resolution: WindowResolution::new(display.width, display.height),
                        present_mode: bevy::window::PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..default()
                }),
        )
        .add_plugins(ScenePlugin)
        .add_plugins(input::InputPlugin)
        .add_plugins(panel::PanelPlugin)
        .run();
}
