//! Image-based environment lighting
//!
//! Loads a KTX2 cubemap pair through the asset server and attaches it to
//! the main camera once both images have finished loading. When the files
//! are not shipped alongside the binary the analytic lights carry the scene
//! on their own.

use std::path::Path;

use bevy::light::EnvironmentMapLight;
use bevy::prelude::*;

use crate::camera::MainCamera;

const DIFFUSE_MAP: &str = "environment/diffuse.ktx2";
const SPECULAR_MAP: &str = "environment/specular.ktx2";
const ENVIRONMENT_INTENSITY: f32 = 900.0;

/// Resource tracking the in-flight cubemap loads
#[derive(Resource)]
pub struct EnvironmentMap {
    diffuse: Handle<Image>,
    specular: Handle<Image>,
    attached: bool,
}

pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_environment)
            .add_systems(Update, attach_environment);
    }
}

/// Kick off the cubemap loads if the files are shipped
fn load_environment(mut commands: Commands, asset_server: Res<AssetServer>) {
    let shipped = Path::new("assets").join(DIFFUSE_MAP).exists()
        && Path::new("assets").join(SPECULAR_MAP).exists();
    if !shipped {
        debug!("no environment maps found, using analytic lights only");
        return;
    }

    commands.insert_resource(EnvironmentMap {
        diffuse: asset_server.load(DIFFUSE_MAP),
        specular: asset_server.load(SPECULAR_MAP),
        attached: false,
    });
}

/// Attach the environment light once both images are ready
fn attach_environment(
    mut commands: Commands,
    environment: Option<ResMut<EnvironmentMap>>,
    asset_server: Res<AssetServer>,
    cameras: Query<Entity, With<MainCamera>>,
) {
    let Some(mut environment) = environment else {
        return;
    };
    if environment.attached {
        return;
    }
    if !asset_server.is_loaded_with_dependencies(&environment.diffuse)
        || !asset_server.is_loaded_with_dependencies(&environment.specular)
    {
        return;
    }

    for camera in cameras.iter() {
        commands.entity(camera).insert(EnvironmentMapLight {
            diffuse_map: environment.diffuse.clone(),
            specular_map: environment.specular.clone(),
            intensity: ENVIRONMENT_INTENSITY,
            ..default()
        });
    }

    environment.attached = true;
    info!("Environment lighting attached");
}
