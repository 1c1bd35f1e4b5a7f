//! Model loading via file drag-and-drop
//!
//! Any file dropped onto the window is handed to the model loader as-is;
//! the loader decides whether it parses.

use bevy::prelude::*;
use bevy::window::FileDragAndDrop;

use ecorche_scene::ShapeChange;
use ecorche_types::ShapeRequest;

pub fn handle_dropped_files(
    mut drops: MessageReader<FileDragAndDrop>,
    mut shapes: MessageWriter<ShapeChange>,
) {
    for event in drops.read() {
        if let FileDragAndDrop::DroppedFile { path_buf, .. } = event {
            info!("Model file dropped: {}", path_buf.display());
            shapes.write(ShapeChange(ShapeRequest::Model(path_buf.clone())));
        }
    }
}
