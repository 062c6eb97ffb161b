//! Node records and the IR node kinds the layout cares about.

use super::EdgeIx;
use serde::{Deserialize, Serialize};

/// Stable, caller-assigned node id. Ids may be sparse.
pub type NodeId = u32;

/// Position of a node in the [`Graph`](super::Graph) arena.
pub type NodeIx = usize;

/// Rank value of a node that has not been ranked yet.
pub const UNRANKED: u32 = 0;

/// The handful of IR opcodes that change how a node is ranked.
///
/// Every other opcode is [`NodeKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeKind {
    Start,
    Loop,
    Phi,
    EffectPhi,
    InductionVariablePhi,
    #[default]
    Other,
}

impl NodeKind {
    pub fn from_opcode(opcode: &str) -> Self {
        match opcode {
            "Start" => Self::Start,
            "Loop" => Self::Loop,
            "Phi" => Self::Phi,
            "EffectPhi" => Self::EffectPhi,
            "InductionVariablePhi" => Self::InductionVariablePhi,
            _ => Self::Other,
        }
    }

    /// Phi-like nodes are merged values: their last input is the merge or loop they belong to.
    pub fn is_phi_like(self) -> bool {
        matches!(
            self,
            Self::Phi | Self::EffectPhi | Self::InductionVariablePhi
        )
    }

    pub fn is_loop(self) -> bool {
        self == Self::Loop
    }
}

/// Construction input for a node. `width`/`height` come from the caller's text measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSpec {
    pub id: NodeId,
    #[serde(default)]
    pub kind: NodeKind,
    pub width: f64,
    pub height: f64,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl NodeSpec {
    pub fn new(id: NodeId, kind: NodeKind, width: f64, height: f64) -> Self {
        Self {
            id,
            kind,
            width,
            height,
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub width: f64,
    pub height: f64,
    /// Owned by the caller; the only field that carries meaning across layout runs.
    pub visible: bool,

    pub(in crate::graph) inputs: Vec<EdgeIx>,
    pub(in crate::graph) outputs: Vec<EdgeIx>,

    pub rank: u32,
    pub visit_order: u32,
    /// Left edge of the node's footprint.
    pub x: f64,
    /// Top edge of the node.
    pub y: f64,
    /// Vertical distance below the node at which its output lines turn horizontal.
    pub output_approach: f64,
}

impl Node {
    pub(in crate::graph) fn from_spec(spec: NodeSpec) -> Self {
        Self {
            id: spec.id,
            kind: spec.kind,
            width: spec.width,
            height: spec.height,
            visible: spec.visible,
            inputs: Vec::new(),
            outputs: Vec::new(),
            rank: UNRANKED,
            visit_order: 0,
            x: 0.0,
            y: 0.0,
            output_approach: 0.0,
        }
    }

    /// Incoming edges, ordered by the input slot they fill.
    pub fn inputs(&self) -> &[EdgeIx] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[EdgeIx] {
        &self.outputs
    }

    pub fn is_ranked(&self) -> bool {
        self.rank != UNRANKED
    }

    /// Width the node occupies in its rank: wide enough for every input port.
    pub fn total_width(&self, input_width: f64) -> f64 {
        self.width.max(self.inputs.len() as f64 * input_width)
    }
}
