//! Shape selection types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Primitive shapes offered by the shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Cube,
    Cylinder,
    Cone,
    Sphere,
}

impl ShapeKind {
    /// Display label for UI buttons and the status line.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Sphere => "Sphere",
        }
    }

    /// All selectable primitives, in selector order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Cube,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Sphere,
    ];
}

/// Request to replace the active geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeRequest {
    /// A built-in primitive.
    Primitive(ShapeKind),
    /// An external model file (loaded asynchronously).
    Model(PathBuf),
}
