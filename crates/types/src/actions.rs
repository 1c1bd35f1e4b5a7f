//! Reveal action vocabulary.

use serde::{Deserialize, Serialize};

/// The five user-triggered actions of the progressive reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealAction {
    /// Show one marker per mesh vertex.
    RevealVertices,
    /// Connect revealed vertices with line segments.
    ConnectEdges,
    /// Fill in translucent triangle patches.
    FormFaces,
    /// Swap the patches for the fully assembled shaded mesh.
    AssembleMesh,
    /// Tear down everything the reveal created.
    Reset,
}

impl RevealAction {
    /// Display label for UI buttons.
    pub fn label(&self) -> &'static str {
        match self {
            RevealAction::RevealVertices => "Reveal vertices",
            RevealAction::ConnectEdges => "Connect edges",
            RevealAction::FormFaces => "Form faces",
            RevealAction::AssembleMesh => "Assemble mesh",
            RevealAction::Reset => "Reset",
        }
    }

    /// All actions, in panel order.
    pub const ALL: [RevealAction; 5] = [
        RevealAction::RevealVertices,
        RevealAction::ConnectEdges,
        RevealAction::FormFaces,
        RevealAction::AssembleMesh,
        RevealAction::Reset,
    ];
}
