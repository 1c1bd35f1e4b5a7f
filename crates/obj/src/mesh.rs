//! Conversion of parsed models into Bevy mesh assets.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::ObjModel;

impl ObjModel {
    /// Build an indexed triangle mesh with smooth per-vertex normals.
    ///
    /// Normals are accumulated from unnormalized face cross products (which
    /// weights each face by its area) and normalized per vertex at the end.
    pub fn into_mesh(self) -> Mesh {
        let mut accumulated = vec![Vec3::ZERO; self.positions.len()];
        for &[a, b, c] in &self.faces {
            let p0 = Vec3::from_array(self.positions[a as usize]);
            let p1 = Vec3::from_array(self.positions[b as usize]);
            let p2 = Vec3::from_array(self.positions[c as usize]);
            let face_normal = (p1 - p0).cross(p2 - p0);

            accumulated[a as usize] += face_normal;
            accumulated[b as usize] += face_normal;
            accumulated[c as usize] += face_normal;
        }
        let normals: Vec<[f32; 3]> = accumulated
            .into_iter()
            .map(|n| n.normalize_or_zero().to_array())
            .collect();

        let indices: Vec<u32> = self.faces.iter().flatten().copied().collect();

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}
