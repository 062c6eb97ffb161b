//! Edge records.

use super::{NodeId, NodeIx};
use serde::{Deserialize, Serialize};

/// Position of an edge in the [`Graph`](super::Graph) arena.
pub type EdgeIx = usize;

/// IR edge category. Layout treats it as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeType {
    Control,
    Effect,
    #[default]
    Value,
    FrameState,
    Context,
    Other,
}

/// Construction input for an edge, addressed by node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSpec {
    #[serde(rename = "source")]
    pub source_id: NodeId,
    #[serde(rename = "target")]
    pub target_id: NodeId,
    /// Input slot of the target this edge fills.
    pub index: usize,
    #[serde(default, rename = "type")]
    pub ty: EdgeType,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl EdgeSpec {
    pub fn new(source_id: NodeId, target_id: NodeId, index: usize, ty: EdgeType) -> Self {
        Self {
            source_id,
            target_id,
            index,
            ty,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: NodeIx,
    pub target: NodeIx,
    pub index: usize,
    pub ty: EdgeType,
    pub visible: bool,
    /// `0` unless this is a back edge, in which case it numbers the edge's routing lane.
    pub back_edge_number: u32,
}

impl Edge {
    pub fn is_back_edge(&self) -> bool {
        self.back_edge_number > 0
    }
}
