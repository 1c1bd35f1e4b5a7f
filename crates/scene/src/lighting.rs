//! Key/fill/ambient lighting rig
//!
//! A bright key light, a dimmer fill from the opposite side so the unlit
//! half keeps its shape, and a flat ambient term. Intensities and the key
//! direction come from the settings file.

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use ecorche_config::AppSettings;

/// Marker component for the key directional light
#[derive(Component)]
pub struct KeyLight;

/// Marker component for the fill directional light
#[derive(Component)]
pub struct FillLight;

pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_lighting);
    }
}

/// Spawn the light rig from the configured settings
fn setup_lighting(mut commands: Commands, settings: Res<AppSettings>) {
    let lighting = &settings.lighting;

    // The setting stores the "toward the light" direction; looking_to wants
    // the forward direction the light shines in, which is its negation.
    let direction = Vec3::from_array(lighting.key_direction).normalize_or_zero();

    commands.spawn((
        DirectionalLight {
            illuminance: lighting.key_illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::default().looking_to(-direction, Vec3::Y),
        KeyLight,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: lighting.fill_illuminance,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(direction, Vec3::Y),
        FillLight,
    ));

    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb(
            lighting.ambient_color[0],
            lighting.ambient_color[1],
            lighting.ambient_color[2],
        ),
        brightness: lighting.ambient_brightness,
        ..default()
    });

    info!("Lighting rig initialized");
}
