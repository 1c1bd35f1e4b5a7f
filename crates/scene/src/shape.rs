//! Active shape management
//!
//! Owns the current geometry and its extracted topology. Primitive
//! selections apply immediately; model files are read and parsed on the IO
//! task pool and applied on completion. Every request bumps a generation
//! counter so that when a shape change overtakes an in-flight load, the
//! stale result is discarded (last writer wins).

use std::path::PathBuf;

use bevy::ecs::message::Message;
use bevy::prelude::*;
use bevy::tasks::futures_lite::future;
use bevy::tasks::{IoTaskPool, Task};

use anatomy::Topology;
use ecorche_obj::{ObjError, ObjModel};
use ecorche_types::{RevealAction, ShapeKind, ShapeRequest};

use crate::reveal::RevealActionEvent;
use crate::StatusLine;

/// Message requesting a geometry replacement
#[derive(Message, Debug, Clone)]
pub struct ShapeChange(pub ShapeRequest);

/// Resource holding the active geometry and its derived topology.
///
/// The mesh handle is the pristine full geometry (what AssembleMesh
/// duplicates); the topology is the single source of truth the reveal
/// layers are built from.
#[derive(Resource, Default)]
pub struct CurrentShape {
    pub mesh: Option<Handle<Mesh>>,
    pub topology: Option<Topology>,
    generation: u64,
}

impl CurrentShape {
    /// Mark the start of a new shape request and return its generation token.
    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a token still names the latest request.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }
}

/// At most one model load is in flight; a newer request replaces it.
#[derive(Resource, Default)]
pub struct PendingModel(Option<ModelLoad>);

struct ModelLoad {
    task: Task<Result<Mesh, ObjError>>,
    token: u64,
    path: PathBuf,
}

pub struct ShapePlugin;

impl Plugin for ShapePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentShape>()
            .init_resource::<PendingModel>()
            .add_message::<ShapeChange>()
            .add_systems(Startup, select_initial_shape)
            .add_systems(Update, (handle_shape_changes, poll_model_load).chain());
    }
}

/// Start from a cube so the first reveal press has something to show.
fn select_initial_shape(mut shapes: MessageWriter<ShapeChange>) {
    shapes.write(ShapeChange(ShapeRequest::Primitive(ShapeKind::Cube)));
}

/// Handle shape selection and model-load requests
fn handle_shape_changes(
    mut requests: MessageReader<ShapeChange>,
    mut current: ResMut<CurrentShape>,
    mut pending: ResMut<PendingModel>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut actions: MessageWriter<RevealActionEvent>,
    mut status: ResMut<StatusLine>,
) {
    for ShapeChange(request) in requests.read() {
        let token = current.begin_request();
        match request {
            ShapeRequest::Primitive(kind) => {
                pending.0 = None;
                let handle = meshes.add(primitive_mesh(*kind));
                apply_geometry(
                    &mut current,
                    &meshes,
                    handle,
                    kind.label(),
                    &mut actions,
                    &mut status,
                );
            }
            ShapeRequest::Model(path) => {
                info!("Loading model {}", path.display());
                status.set(format!("Loading {}", path.display()));

                let task_path = path.clone();
                let task = IoTaskPool::get()
                    .spawn(async move { ecorche_obj::read_obj(&task_path).map(ObjModel::into_mesh) });
                pending.0 = Some(ModelLoad {
                    task,
                    token,
                    path: path.clone(),
                });
            }
        }
    }
}

/// Apply completed model loads, discarding results a newer request outran
fn poll_model_load(
    mut pending: ResMut<PendingModel>,
    mut current: ResMut<CurrentShape>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut actions: MessageWriter<RevealActionEvent>,
    mut status: ResMut<StatusLine>,
) {
    let finished = match pending.0.as_mut() {
        Some(load) => future::block_on(future::poll_once(&mut load.task))
            .map(|result| (result, load.token, load.path.clone())),
        None => None,
    };
    let Some((result, token, path)) = finished else {
        return;
    };
    pending.0 = None;

    if !current.is_current(token) {
        debug!("discarding stale model load for {}", path.display());
        return;
    }

    match result {
        Ok(mesh) => {
            let handle = meshes.add(mesh);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            apply_geometry(&mut current, &meshes, handle, &name, &mut actions, &mut status);
        }
        Err(e) => {
            warn!("failed to load model {}: {e}", path.display());
            status.set(format!("Could not load {}", path.display()));
        }
    }
}

/// Install new geometry: extract its topology, then reset the reveal.
fn apply_geometry(
    current: &mut CurrentShape,
    meshes: &Assets<Mesh>,
    handle: Handle<Mesh>,
    label: &str,
    actions: &mut MessageWriter<RevealActionEvent>,
    status: &mut StatusLine,
) {
    let topology = meshes.get(&handle).and_then(|mesh| {
        match Topology::from_mesh(mesh) {
            Ok(topology) => Some(topology),
            Err(e) => {
                warn!("topology extraction failed for {label}: {e}");
                None
            }
        }
    });

    if let Some(topology) = &topology {
        info!(
            "{label}: {} vertices, {} faces, {} edges",
            topology.vertex_count(),
            topology.face_count(),
            topology.edge_count()
        );
        status.set(format!("{label} ready — reveal its vertices"));
    } else {
        status.set(format!("{label} has no usable geometry"));
    }

    current.mesh = Some(handle);
    current.topology = topology;
    actions.write(RevealActionEvent(RevealAction::Reset));
}

fn primitive_mesh(kind: ShapeKind) -> Mesh {
    match kind {
        ShapeKind::Cube => Mesh::from(Cuboid::new(1.0, 1.0, 1.0)),
        ShapeKind::Cylinder => Mesh::from(Cylinder::new(0.5, 1.2)),
        ShapeKind::Cone => Mesh::from(Cone::new(0.6, 1.2)),
        ShapeKind::Sphere => Sphere::new(0.7).mesh().uv(24, 16),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_last_writer_wins() {
        let mut shape = CurrentShape::default();
        let first = shape.begin_request();
        assert!(shape.is_current(first));

        let second = shape.begin_request();
        assert!(!shape.is_current(first));
        assert!(shape.is_current(second));
    }

    #[test]
    fn test_primitive_meshes_have_topology() {
        for kind in ShapeKind::ALL {
            let topology = Topology::from_mesh(&primitive_mesh(kind)).unwrap();
            assert!(!topology.is_empty(), "{:?} produced no vertices", kind);
            assert!(topology.face_count() > 0);
            assert!(topology.edge_count() > 0);
        }
    }
}
