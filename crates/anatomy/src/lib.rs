//! Mesh topology extraction
//!
//! Derives the combinatorial structure of a triangle mesh — vertex positions,
//! face index triples, and a deduplicated undirected edge list — from a Bevy
//! mesh's raw vertex and index buffers.

mod extract;
mod types;

use bevy::math::Vec3;

pub use types::{Edge, TopologyError};

/// The combinatorial structure of a triangle mesh.
///
/// Vertices keep the order of the source position buffer (a vertex's index
/// is its identity). Faces follow index-buffer order, and edges are listed
/// in first-seen order during derivation, so extracting the same mesh twice
/// yields identical sequences. Rebuilt in full whenever the active geometry
/// changes; never patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[u32; 3]>,
    pub edges: Vec<Edge>,
}

impl Topology {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::mesh::{Indices, PrimitiveTopology};
    use bevy::prelude::*;

    fn mesh_with_positions(positions: Vec<[f32; 3]>) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh
    }

    fn create_test_triangle_mesh() -> Mesh {
        let mut mesh = mesh_with_positions(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.5, 1.0, 0.0],
        ]);
        mesh.insert_indices(Indices::U32(vec![0, 1, 2]));
        mesh
    }

    /// Welded unit cube: 8 corner vertices, 12 triangles, every quad split
    /// along one diagonal.
    fn create_welded_cube_mesh() -> Mesh {
        let mut mesh = mesh_with_positions(vec![
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ]);
        mesh.insert_indices(Indices::U32(vec![
            0, 1, 2, 0, 2, 3, // back
            4, 6, 5, 4, 7, 6, // front
            0, 5, 1, 0, 4, 5, // bottom
            3, 2, 6, 3, 6, 7, // top
            0, 3, 7, 0, 7, 4, // left
            1, 5, 6, 1, 6, 2, // right
        ]));
        mesh
    }

    /// Unwelded box: 4 vertices per side (24 total), every side indexed
    /// `[b, b+1, b+2, b+2, b+3, b]`, so sides share no vertices.
    fn create_unwelded_box_mesh() -> Mesh {
        let corners = [
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ];
        let sides: [[usize; 4]; 6] = [
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [3, 2, 6, 7],
            [0, 3, 7, 4],
            [1, 2, 6, 5],
        ];

        let mut positions = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for side in sides {
            let base = positions.len() as u32;
            for corner in side {
                positions.push(corners[corner]);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        let mut mesh = mesh_with_positions(positions);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }

    #[test]
    fn test_single_triangle() {
        let topology = Topology::from_mesh(&create_test_triangle_mesh()).unwrap();

        assert_eq!(topology.vertex_count(), 3);
        assert_eq!(topology.faces, vec![[0, 1, 2]]);
        assert_eq!(
            topology.edges,
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(0, 2)]
        );
    }

    #[test]
    fn test_welded_cube_edge_count() {
        let topology = Topology::from_mesh(&create_welded_cube_mesh()).unwrap();

        assert_eq!(topology.vertex_count(), 8);
        assert_eq!(topology.face_count(), 12);
        // 12 perimeter edges plus one diagonal per quad side.
        assert_eq!(topology.edge_count(), 18);
    }

    #[test]
    fn test_unwelded_box_edge_count() {
        let topology = Topology::from_mesh(&create_unwelded_box_mesh()).unwrap();

        assert_eq!(topology.vertex_count(), 24);
        assert_eq!(topology.face_count(), 12);
        // 5 edges per side (the diagonal is shared between the side's two
        // triangles), and sides share no vertices with each other.
        assert_eq!(topology.edge_count(), 30);
    }

    #[test]
    fn test_edge_dedup_ignores_winding() {
        // The same triangle twice, second time with reversed winding.
        let mut mesh = mesh_with_positions(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.5, 1.0, 0.0],
        ]);
        mesh.insert_indices(Indices::U32(vec![0, 1, 2, 2, 1, 0]));

        let topology = Topology::from_mesh(&mesh).unwrap();
        assert_eq!(topology.face_count(), 2);
        assert_eq!(topology.edge_count(), 3);
    }

    #[test]
    fn test_edges_in_first_seen_order() {
        let topology = Topology::from_mesh(&create_welded_cube_mesh()).unwrap();

        // First face (0, 1, 2) contributes the first three edges, and the
        // second face (0, 2, 3) re-encounters (0, 2) without duplicating it.
        assert_eq!(topology.edges[0], Edge::new(0, 1));
        assert_eq!(topology.edges[1], Edge::new(1, 2));
        assert_eq!(topology.edges[2], Edge::new(0, 2));
        assert_eq!(topology.edges[3], Edge::new(2, 3));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let mesh = create_welded_cube_mesh();
        let first = Topology::from_mesh(&mesh).unwrap();
        let second = Topology::from_mesh(&mesh).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unindexed_fallback_groups_triples() {
        let mesh = mesh_with_positions(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.5, 1.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
            [2.5, 1.0, 0.0],
        ]);

        let topology = Topology::from_mesh(&mesh).unwrap();
        assert_eq!(topology.faces, vec![[0, 1, 2], [3, 4, 5]]);
        assert_eq!(topology.edge_count(), 6);
    }

    #[test]
    fn test_unindexed_fallback_truncates_remainder() {
        // 7 positions: two full triangles, one trailing vertex dropped.
        let mesh = mesh_with_positions(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.5, 1.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
            [2.5, 1.0, 0.0],
            [9.0, 9.0, 9.0],
        ]);

        let topology = Topology::from_mesh(&mesh).unwrap();
        assert_eq!(topology.vertex_count(), 7);
        assert_eq!(topology.face_count(), 2);
    }

    #[test]
    fn test_u16_indices() {
        let mut mesh = mesh_with_positions(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.5, 1.0, 0.0],
        ]);
        mesh.insert_indices(Indices::U16(vec![0, 1, 2]));

        let topology = Topology::from_mesh(&mesh).unwrap();
        assert_eq!(topology.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_missing_positions() {
        let mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        assert!(matches!(
            Topology::from_mesh(&mesh),
            Err(TopologyError::NoPositions)
        ));
    }

    #[test]
    fn test_non_triangle_mesh_rejected() {
        let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
        );
        assert!(matches!(
            Topology::from_mesh(&mesh),
            Err(TopologyError::NotTriangleList)
        ));
    }
}
