//! Input handling for Écorché
//!
//! Keyboard shortcuts for shapes and reveal actions, and file drag-and-drop
//! for model loading. Everything funnels into the same messages the panel
//! buttons write.

use bevy::prelude::*;

mod file_drop;
mod hotkeys;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                hotkeys::handle_reveal_hotkeys,
                hotkeys::handle_shape_hotkeys,
                file_drop::handle_dropped_files,
            ),
        );
    }
}
