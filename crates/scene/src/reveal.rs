//! Progressive reveal of a mesh's structural layers
//!
//! Four layers — vertex markers, edge lines, face patches, and the
//! assembled shell — are created on demand from the extracted topology,
//! toggled on repeat triggers, and torn down on reset. Edges and faces are
//! built from the vertex markers' current positions rather than the raw
//! topology, so they track any marker displacement.

use bevy::asset::RenderAssetUsages;
use bevy::ecs::message::Message;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use ecorche_config::AppSettings;
use ecorche_types::RevealAction;

use crate::shape::CurrentShape;
use crate::tween::Tween;
use crate::StatusLine;

const VERTEX_COLOR: Color = Color::srgb(1.0, 0.56, 0.0);
const EDGE_COLOR: Color = Color::srgb(0.85, 0.85, 0.9);
const FACE_COLOR: Color = Color::srgb(0.16, 0.55, 0.85);
const SHELL_COLOR: Color = Color::srgb(0.0, 0.33, 1.0);

/// Radius of the vertex marker spheres
const VERTEX_MARKER_RADIUS: f32 = 0.035;

/// Component marking one vertex marker, carrying its vertex index
#[derive(Component)]
pub struct VertexMarker(pub u32);

/// Component marking one edge line, carrying its edge index
#[derive(Component)]
pub struct EdgeLine(pub u32);

/// Component marking one face patch, carrying its face index
#[derive(Component)]
pub struct FacePatch(pub u32);

/// Component marking the assembled shaded mesh
#[derive(Component)]
pub struct AssembledShell;

/// Lifecycle of one reveal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerState {
    #[default]
    Empty,
    Created {
        visible: bool,
    },
}

/// One reveal layer: its lifecycle state and the entities it spawned.
#[derive(Debug, Default)]
pub struct Layer {
    pub state: LayerState,
    entities: Vec<Entity>,
}

impl Layer {
    pub fn is_created(&self) -> bool {
        matches!(self.state, LayerState::Created { .. })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    fn create(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
        self.state = LayerState::Created { visible: true };
    }

    /// Flip visibility and return the new value. No-op while Empty.
    fn toggle(&mut self) -> bool {
        match self.state {
            LayerState::Created { visible } => {
                self.state = LayerState::Created { visible: !visible };
                !visible
            }
            LayerState::Empty => false,
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if self.is_created() {
            self.state = LayerState::Created { visible };
        }
    }

    /// Drain the layer for teardown, returning the entities to despawn.
    fn clear(&mut self) -> Vec<Entity> {
        self.state = LayerState::Empty;
        std::mem::take(&mut self.entities)
    }
}

/// Resource owning all four reveal layers.
///
/// The single aggregate behind the reveal actions: constructed once,
/// mutated only by the action handler, emptied by Reset.
#[derive(Resource, Default)]
pub struct RevealSession {
    pub vertices: Layer,
    pub edges: Layer,
    pub faces: Layer,
    pub shell: Layer,
}

impl RevealSession {
    /// Layer-gating rule: edges and faces need the vertex markers, the
    /// shell needs the face patches.
    pub fn precursor_satisfied(&self, action: RevealAction) -> bool {
        match action {
            RevealAction::RevealVertices | RevealAction::Reset => true,
            RevealAction::ConnectEdges | RevealAction::FormFaces => self.vertices.is_created(),
            RevealAction::AssembleMesh => self.faces.is_created(),
        }
    }

    /// Drain every layer, returning all entities to despawn.
    pub fn clear_all(&mut self) -> Vec<Entity> {
        let mut entities = self.vertices.clear();
        entities.extend(self.edges.clear());
        entities.extend(self.faces.clear());
        entities.extend(self.shell.clear());
        entities
    }

    pub fn spawned_count(&self) -> usize {
        self.vertices.entity_count()
            + self.edges.entity_count()
            + self.faces.entity_count()
            + self.shell.entity_count()
    }
}

/// Message carrying one user-triggered reveal action
#[derive(Message, Debug, Clone, Copy)]
pub struct RevealActionEvent(pub RevealAction);

pub struct RevealPlugin;

impl Plugin for RevealPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RevealSession>()
            .add_message::<RevealActionEvent>()
            .add_systems(Update, handle_reveal_actions);
    }
}

/// Handle reveal actions: create a layer on first trigger, toggle it on
/// repeats, ignore it while its precursor layer is missing.
fn handle_reveal_actions(
    mut commands: Commands,
    mut actions: MessageReader<RevealActionEvent>,
    mut session: ResMut<RevealSession>,
    mut status: ResMut<StatusLine>,
    current: Res<CurrentShape>,
    settings: Res<AppSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut visibility: Query<&mut Visibility>,
    transforms: Query<&Transform, With<VertexMarker>>,
) {
    for RevealActionEvent(action) in actions.read().copied() {
        if !session.precursor_satisfied(action) {
            debug!("precursor layer missing, ignoring {:?}", action);
            continue;
        }
        let anim = &settings.animation;

        match action {
            RevealAction::RevealVertices => {
                if session.vertices.is_created() {
                    let visible = session.vertices.toggle();
                    apply_visibility(&mut visibility, session.vertices.entities(), visible);
                    status.set(toggle_status("Vertices", visible));
                    continue;
                }
                let Some(topology) = current.topology.as_ref() else {
                    debug!("no geometry loaded, ignoring {:?}", action);
                    continue;
                };

                let marker_mesh = meshes.add(Sphere::new(VERTEX_MARKER_RADIUS).mesh().uv(12, 8));
                let marker_material = materials.add(StandardMaterial {
                    base_color: VERTEX_COLOR,
                    perceptual_roughness: 0.4,
                    ..default()
                });

                let spawned: Vec<Entity> = topology
                    .vertices
                    .iter()
                    .enumerate()
                    .map(|(i, position)| {
                        commands
                            .spawn((
                                Mesh3d(marker_mesh.clone()),
                                MeshMaterial3d(marker_material.clone()),
                                Transform::from_translation(*position).with_scale(Vec3::ZERO),
                                VertexMarker(i as u32),
                                Tween::scale(
                                    Vec3::ZERO,
                                    Vec3::ONE,
                                    anim.marker_duration,
                                    i as f32 * anim.vertex_stagger,
                                    EaseFunction::BackOut,
                                ),
                            ))
                            .id()
                    })
                    .collect();

                status.set(format!("Revealed {} vertices", spawned.len()));
                session.vertices.create(spawned);
            }

            RevealAction::ConnectEdges => {
                if session.edges.is_created() {
                    let visible = session.edges.toggle();
                    apply_visibility(&mut visibility, session.edges.entities(), visible);
                    status.set(toggle_status("Edges", visible));
                    continue;
                }
                let Some(topology) = current.topology.as_ref() else {
                    continue;
                };

                let mut spawned = Vec::with_capacity(topology.edge_count());
                for (i, edge) in topology.edges.iter().enumerate() {
                    // Endpoints come from the markers, not the topology, so
                    // edges track marker displacement. Markers spawned
                    // earlier this frame are not yet visible to the query;
                    // those fall back to the position they spawn at.
                    let Some([a, b]) =
                        marker_lookup(session.vertices.entities(), [edge.lo, edge.hi])
                    else {
                        continue;
                    };
                    let start = transforms
                        .get(a)
                        .map(|t| t.translation)
                        .unwrap_or(topology.vertices[edge.lo as usize]);
                    let end = transforms
                        .get(b)
                        .map(|t| t.translation)
                        .unwrap_or(topology.vertices[edge.hi as usize]);

                    let mesh = meshes.add(line_segment(start, end));
                    let material = materials.add(StandardMaterial {
                        base_color: EDGE_COLOR.with_alpha(0.0),
                        unlit: true,
                        alpha_mode: AlphaMode::Blend,
                        ..default()
                    });
                    spawned.push(
                        commands
                            .spawn((
                                Mesh3d(mesh),
                                MeshMaterial3d(material),
                                EdgeLine(i as u32),
                                Tween::alpha(
                                    0.0,
                                    1.0,
                                    anim.fade_duration,
                                    i as f32 * anim.fade_stagger,
                                    EaseFunction::CubicOut,
                                ),
                            ))
                            .id(),
                    );
                }

                status.set(format!("Connected {} edges", spawned.len()));
                session.edges.create(spawned);
            }

            RevealAction::FormFaces => {
                if session.faces.is_created() {
                    let visible = session.faces.toggle();
                    apply_visibility(&mut visibility, session.faces.entities(), visible);
                    status.set(toggle_status("Faces", visible));
                    continue;
                }
                let Some(topology) = current.topology.as_ref() else {
                    continue;
                };

                let mut spawned = Vec::with_capacity(topology.face_count());
                for (i, face) in topology.faces.iter().enumerate() {
                    let Some(markers) = marker_lookup(session.vertices.entities(), *face)
                    else {
                        continue;
                    };
                    let mut corners = [Vec3::ZERO; 3];
                    for (corner, (marker, index)) in
                        corners.iter_mut().zip(markers.into_iter().zip(*face))
                    {
                        *corner = transforms
                            .get(marker)
                            .map(|t| t.translation)
                            .unwrap_or(topology.vertices[index as usize]);
                    }

                    let mesh = meshes.add(triangle_patch(corners));
                    let material = materials.add(StandardMaterial {
                        base_color: FACE_COLOR.with_alpha(0.0),
                        alpha_mode: AlphaMode::Blend,
                        double_sided: true,
                        cull_mode: None,
                        perceptual_roughness: 0.6,
                        ..default()
                    });
                    spawned.push(
                        commands
                            .spawn((
                                Mesh3d(mesh),
                                MeshMaterial3d(material),
                                FacePatch(i as u32),
                                Tween::alpha(
                                    0.0,
                                    anim.face_opacity,
                                    anim.fade_duration,
                                    i as f32 * anim.fade_stagger,
                                    EaseFunction::CubicOut,
                                ),
                            ))
                            .id(),
                    );
                }

                status.set(format!("Formed {} faces", spawned.len()));
                session.faces.create(spawned);
            }

            RevealAction::AssembleMesh => {
                if session.shell.is_created() {
                    let visible = session.shell.toggle();
                    apply_visibility(&mut visibility, session.shell.entities(), visible);
                    status.set(toggle_status("Assembled mesh", visible));
                    continue;
                }
                let Some(source) = current.mesh.clone() else {
                    debug!("no geometry loaded, ignoring {:?}", action);
                    continue;
                };

                // Hide the patches so the shell doesn't z-fight them.
                session.faces.set_visible(false);
                apply_visibility(&mut visibility, session.faces.entities(), false);

                let material = materials.add(StandardMaterial {
                    base_color: SHELL_COLOR,
                    perceptual_roughness: 0.4,
                    ..default()
                });
                let shell = commands
                    .spawn((
                        Mesh3d(source),
                        MeshMaterial3d(material),
                        Transform::from_scale(Vec3::ZERO),
                        AssembledShell,
                        Tween::scale(
                            Vec3::ZERO,
                            Vec3::ONE,
                            anim.assemble_duration,
                            0.0,
                            EaseFunction::CubicOut,
                        ),
                    ))
                    .id();

                status.set("Mesh assembled".to_string());
                session.shell.create(vec![shell]);
            }

            RevealAction::Reset => {
                let entities = session.clear_all();
                if !entities.is_empty() {
                    debug!("reset cleared {} reveal entities", entities.len());
                }
                for entity in entities {
                    commands.entity(entity).despawn();
                }
                status.reset();
            }
        }
    }
}

/// Resolve vertex indices to marker entities; indices the topology never
/// validated may be out of range, in which case the element is skipped.
fn marker_lookup<const N: usize>(markers: &[Entity], indices: [u32; N]) -> Option<[Entity; N]> {
    let mut entities = [Entity::PLACEHOLDER; N];
    for (slot, index) in entities.iter_mut().zip(indices) {
        *slot = *markers.get(index as usize)?;
    }
    Some(entities)
}

fn apply_visibility(query: &mut Query<&mut Visibility>, entities: &[Entity], visible: bool) {
    for &entity in entities {
        if let Ok(mut vis) = query.get_mut(entity) {
            *vis = if visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

fn toggle_status(layer: &str, visible: bool) -> String {
    format!("{layer} {}", if visible { "shown" } else { "hidden" })
}

/// A one-segment line-list mesh. The standard material's vertex layout
/// expects normals even for unlit lines, so a constant normal is included.
fn line_segment(start: Vec3, end: Vec3) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        vec![start.to_array(), end.to_array()],
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 1.0, 0.0]; 2]);
    mesh.insert_indices(Indices::U32(vec![0, 1]));
    mesh
}

/// A single flat triangle patch; all three vertices share the face normal.
fn triangle_patch(points: [Vec3; 3]) -> Mesh {
    let normal = (points[1] - points[0])
        .cross(points[2] - points[0])
        .normalize_or_zero()
        .to_array();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        points.iter().map(|p| p.to_array()).collect::<Vec<_>>(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vec![normal; 3]);
    mesh.insert_indices(Indices::U32(vec![0, 1, 2]));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_entities(world: &mut World, count: usize) -> Vec<Entity> {
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_layer_create_then_toggle() {
        let mut world = World::new();
        let mut layer = Layer::default();
        assert_eq!(layer.state, LayerState::Empty);

        layer.create(fresh_entities(&mut world, 3));
        assert_eq!(layer.state, LayerState::Created { visible: true });
        assert_eq!(layer.entity_count(), 3);

        assert!(!layer.toggle());
        assert_eq!(layer.state, LayerState::Created { visible: false });
        assert!(layer.toggle());
        // Toggling never changes what was created.
        assert_eq!(layer.entity_count(), 3);
    }

    #[test]
    fn test_toggle_empty_layer_is_noop() {
        let mut layer = Layer::default();
        assert!(!layer.toggle());
        assert_eq!(layer.state, LayerState::Empty);
    }

    #[test]
    fn test_clear_drains_and_empties() {
        let mut world = World::new();
        let mut layer = Layer::default();
        layer.create(fresh_entities(&mut world, 2));

        let drained = layer.clear();
        assert_eq!(drained.len(), 2);
        assert_eq!(layer.state, LayerState::Empty);
        assert_eq!(layer.entity_count(), 0);
    }

    #[test]
    fn test_set_visible_requires_created() {
        let mut layer = Layer::default();
        layer.set_visible(false);
        assert_eq!(layer.state, LayerState::Empty);
    }

    #[test]
    fn test_gating_follows_layer_dependencies() {
        let mut world = World::new();
        let mut session = RevealSession::default();

        assert!(session.precursor_satisfied(RevealAction::RevealVertices));
        assert!(session.precursor_satisfied(RevealAction::Reset));
        assert!(!session.precursor_satisfied(RevealAction::ConnectEdges));
        assert!(!session.precursor_satisfied(RevealAction::FormFaces));
        assert!(!session.precursor_satisfied(RevealAction::AssembleMesh));

        session.vertices.create(fresh_entities(&mut world, 4));
        assert!(session.precursor_satisfied(RevealAction::ConnectEdges));
        assert!(session.precursor_satisfied(RevealAction::FormFaces));
        // The shell is gated on faces, not vertices.
        assert!(!session.precursor_satisfied(RevealAction::AssembleMesh));

        session.faces.create(fresh_entities(&mut world, 2));
        assert!(session.precursor_satisfied(RevealAction::AssembleMesh));
    }

    #[test]
    fn test_clear_all_resets_every_layer() {
        let mut world = World::new();
        let mut session = RevealSession::default();
        session.vertices.create(fresh_entities(&mut world, 4));
        session.edges.create(fresh_entities(&mut world, 6));
        session.faces.create(fresh_entities(&mut world, 2));
        session.shell.create(fresh_entities(&mut world, 1));

        let drained = session.clear_all();
        assert_eq!(drained.len(), 13);
        assert_eq!(session.spawned_count(), 0);
        for layer in [
            &session.vertices,
            &session.edges,
            &session.faces,
            &session.shell,
        ] {
            assert_eq!(layer.state, LayerState::Empty);
        }
    }

    #[test]
    fn test_marker_lookup_skips_out_of_range() {
        let mut world = World::new();
        let markers = fresh_entities(&mut world, 3);

        assert!(marker_lookup(&markers, [0, 2]).is_some());
        assert!(marker_lookup(&markers, [0, 3]).is_none());
    }

    #[test]
    fn test_line_segment_mesh_shape() {
        let mesh = line_segment(Vec3::ZERO, Vec3::X);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineList);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|attr| attr.as_float3())
            .unwrap();
        assert_eq!(positions.len(), 2);
    }

    #[test]
    fn test_triangle_patch_normal() {
        let mesh = triangle_patch([Vec3::ZERO, Vec3::X, Vec3::Y]);
        let normals = mesh
            .attribute(Mesh::ATTRIBUTE_NORMAL)
            .and_then(|attr| attr.as_float3())
            .unwrap();
        assert_eq!(normals.len(), 3);
        for normal in normals {
            assert!((normal[2] - 1.0).abs() < 1e-6);
        }
    }
}
