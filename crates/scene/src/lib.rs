//! Shared 3D scene setup for Écorché
//!
//! This crate provides the scene the visualizer runs in — camera, lights,
//! environment — plus the shape management and progressive-reveal machinery
//! driven by the input layer.

use bevy::prelude::*;

use ecorche_config::{AppSettings, DEFAULT_STATUS};

mod camera;
mod environment;
mod lighting;
mod reveal;
mod shape;
mod tween;

pub use camera::{CameraControllerPlugin, MainCamera, OrbitCamera};
pub use environment::{EnvironmentMap, EnvironmentPlugin};
pub use lighting::{FillLight, KeyLight, LightingPlugin};
pub use reveal::{
    AssembledShell, EdgeLine, FacePatch, Layer, LayerState, RevealActionEvent, RevealPlugin,
    RevealSession, VertexMarker,
};
pub use shape::{CurrentShape, PendingModel, ShapeChange, ShapePlugin};
pub use tween::{Tween, TweenPlugin, TweenTarget};

/// Resource backing the status text region.
///
/// Reveal and shape systems write it; the UI layer renders it. Reset
/// restores the fixed default message.
#[derive(Resource)]
pub struct StatusLine {
    text: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            text: DEFAULT_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: String) {
        self.text = text;
    }

    pub fn reset(&mut self) {
        self.text = DEFAULT_STATUS.to_string();
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppSettings>();
        app.init_resource::<StatusLine>();

        app.add_plugins(CameraControllerPlugin);
        app.add_plugins(LightingPlugin);
        app.add_plugins(EnvironmentPlugin);
        app.add_plugins(ShapePlugin);
        app.add_plugins(RevealPlugin);
        app.add_plugins(TweenPlugin);

        app.add_systems(Startup, setup_scene);
    }
}

/// Spawn the orbiting main camera
fn setup_scene(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(orbit.position()).looking_at(orbit.target, Vec3::Y),
        MainCamera,
        orbit,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_set_and_reset() {
        let mut status = StatusLine::default();
        assert_eq!(status.text(), DEFAULT_STATUS);

        status.set("Revealed 8 vertices".to_string());
        assert_eq!(status.text(), "Revealed 8 vertices");

        status.reset();
        assert_eq!(status.text(), DEFAULT_STATUS);
    }
}
