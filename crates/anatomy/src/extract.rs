//! Topology extraction from Bevy mesh buffers.

use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use std::collections::HashSet;

use crate::types::{Edge, TopologyError};
use crate::Topology;

impl Topology {
    /// Extract the combinatorial structure of a mesh.
    ///
    /// Positions are copied in buffer order. Faces come from the index buffer
    /// when one is present; otherwise every 3 consecutive vertices form one
    /// face (non-indexed fallback). In both paths a trailing group of fewer
    /// than 3 indices is dropped. Edges are derived from the faces,
    /// deduplicated, in first-seen order.
    ///
    /// No geometric validation is performed: degenerate triangles, duplicate
    /// positions, and out-of-range indices all pass through untouched.
    pub fn from_mesh(mesh: &Mesh) -> Result<Self, TopologyError> {
        if mesh.primitive_topology() != PrimitiveTopology::TriangleList {
            return Err(TopologyError::NotTriangleList);
        }

        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|attr| attr.as_float3())
            .ok_or(TopologyError::NoPositions)?;
        let vertices: Vec<Vec3> = positions.iter().copied().map(Vec3::from_array).collect();

        let faces = match mesh.indices() {
            Some(Indices::U16(idx)) => group_triples(idx.iter().map(|&i| u32::from(i))),
            Some(Indices::U32(idx)) => group_triples(idx.iter().copied()),
            None => group_triples(0..vertices.len() as u32),
        };

        let edges = derive_edges(&faces);

        Ok(Self {
            vertices,
            faces,
            edges,
        })
    }
}

/// Group an index stream into face triples, dropping any trailing remainder.
fn group_triples(indices: impl ExactSizeIterator<Item = u32>) -> Vec<[u32; 3]> {
    let len = indices.len();
    if len % 3 != 0 {
        tracing::debug!(
            "index stream of length {} is not a multiple of 3, truncating {} trailing",
            len,
            len % 3
        );
    }

    let mut faces = Vec::with_capacity(len / 3);
    let mut iter = indices;
    while let (Some(a), Some(b), Some(c)) = (iter.next(), iter.next(), iter.next()) {
        faces.push([a, b, c]);
    }
    faces
}

/// Derive the deduplicated undirected edge list from a face list.
///
/// Each face contributes its three canonical edges; the output preserves
/// first-insertion order so that repeated extractions of the same mesh are
/// identical element for element.
fn derive_edges(faces: &[[u32; 3]]) -> Vec<Edge> {
    let mut seen: HashSet<Edge> = HashSet::with_capacity(faces.len() * 3);
    let mut edges = Vec::new();

    for &[a, b, c] in faces {
        for edge in [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)] {
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    edges
}
