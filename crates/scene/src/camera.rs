//! Orbit camera controller
//!
//! Controls:
//! - Middle mouse drag: orbit around the subject
//! - Shift + middle mouse drag: pan
//! - Scroll wheel: dolly (zoom)

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Orbit parameters for a camera circling a target point
#[derive(Component)]
pub struct OrbitCamera {
    /// Point the camera orbits around
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Horizontal angle (yaw) in radians
    pub yaw: f32,
    /// Vertical angle (pitch) in radians, up from the horizontal plane
    pub pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 4.0,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.5,
            min_distance: 1.0,
            max_distance: 40.0,
        }
    }
}

impl OrbitCamera {
    /// Camera position from the orbit parameters (spherical to Cartesian).
    pub fn position(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }
}

const ORBIT_SENSITIVITY: f32 = 0.005;
const PAN_SENSITIVITY: f32 = 0.002;
/// Fraction of the current distance covered per scroll line
const ZOOM_STEP: f32 = 0.1;
/// Keeps the pitch off the poles so the up vector stays well defined
const PITCH_LIMIT: f32 = 1.54;

pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (camera_drag, camera_zoom, update_camera_transform).chain(),
        );
    }
}

/// Orbit or pan from middle-mouse drags
fn camera_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut motion: MessageReader<MouseMotion>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    if !buttons.pressed(MouseButton::Middle) {
        motion.clear();
        return;
    }

    let delta: Vec2 = motion.read().map(|m| m.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }
    let panning = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);

    for mut camera in cameras.iter_mut() {
        if panning {
            // Move the target in the camera's screen plane, scaled by
            // distance so panning covers the same screen-space amount at
            // any zoom.
            let rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, -camera.pitch, 0.0);
            let right = rotation * Vec3::X;
            let up = rotation * Vec3::Y;
            let step = camera.distance * PAN_SENSITIVITY;
            camera.target += (up * delta.y - right * delta.x) * step;
        } else {
            camera.yaw -= delta.x * ORBIT_SENSITIVITY;
            camera.pitch =
                (camera.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }
}

/// Dolly toward or away from the target on scroll
fn camera_zoom(mut wheel: MessageReader<MouseWheel>, mut cameras: Query<&mut OrbitCamera>) {
    let scroll: f32 = wheel.read().map(|w| w.y).sum();
    if scroll == 0.0 {
        return;
    }

    for mut camera in cameras.iter_mut() {
        let step = camera.distance * ZOOM_STEP * scroll;
        camera.distance = (camera.distance - step).clamp(camera.min_distance, camera.max_distance);
    }
}

/// Write the orbit parameters back to the camera transform
fn update_camera_transform(
    mut cameras: Query<(&OrbitCamera, &mut Transform), Changed<OrbitCamera>>,
) {
    for (orbit, mut transform) in cameras.iter_mut() {
        *transform =
            Transform::from_translation(orbit.position()).looking_at(orbit.target, Vec3::Y);
    }
}
