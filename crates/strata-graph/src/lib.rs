//! Graph container used by `strata`.
//!
//! Nodes and edges of a compiler IR graph live in a single [`Graph`] arena. Edges refer to their
//! endpoints by arena index, and nodes refer to their incident edges the same way, so the graph
//! has no cyclic ownership even though IR graphs are full of cycles.

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{
    BoundingBox, Edge, EdgeIx, EdgeSpec, EdgeType, Graph, Node, NodeId, NodeIx, NodeKind, NodeSpec,
    Point, UNRANKED,
};
