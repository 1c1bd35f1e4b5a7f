//! Keyboard shortcuts
//!
//! - 1/2/3/4: reveal vertices, connect edges, form faces, assemble mesh
//! - R: reset
//! - C/Y/O/S: select cube, cylinder, cone, sphere

use bevy::prelude::*;

use ecorche_scene::{RevealActionEvent, ShapeChange};
use ecorche_types::{RevealAction, ShapeKind, ShapeRequest};

pub fn handle_reveal_hotkeys(
    key_input: Res<ButtonInput<KeyCode>>,
    mut actions: MessageWriter<RevealActionEvent>,
) {
    let bindings = [
        (KeyCode::Digit1, RevealAction::RevealVertices),
        (KeyCode::Digit2, RevealAction::ConnectEdges),
        (KeyCode::Digit3, RevealAction::FormFaces),
        (KeyCode::Digit4, RevealAction::AssembleMesh),
        (KeyCode::KeyR, RevealAction::Reset),
    ];

    for (key, action) in bindings {
        if key_input.just_pressed(key) {
            actions.write(RevealActionEvent(action));
        }
    }
}

pub fn handle_shape_hotkeys(
    key_input: Res<ButtonInput<KeyCode>>,
    mut shapes: MessageWriter<ShapeChange>,
) {
    let bindings = [
        (KeyCode::KeyC, ShapeKind::Cube),
        (KeyCode::KeyY, ShapeKind::Cylinder),
        (KeyCode::KeyO, ShapeKind::Cone),
        (KeyCode::KeyS, ShapeKind::Sphere),
    ];

    for (key, kind) in bindings {
        if key_input.just_pressed(key) {
            shapes.write(ShapeChange(ShapeRequest::Primitive(kind)));
        }
    }
}
