//! Loop back-edge classification.
//!
//! A back edge closes a loop: it enters a loop-carrying node (a loop header, or a phi merged at
//! one) from a node ranked below it. Back edges are drawn in dedicated lanes to the right of the
//! graph, numbered from 1 in edge order.

use crate::graphlib::{EdgeIx, Graph};
use crate::model::NodePlacement;

pub fn is_back_edge(g: &Graph, nodes: &[NodePlacement], e: EdgeIx) -> bool {
    let edge = g.edge(e);
    g.is_loop_carrying(edge.target) && nodes[edge.target].rank < nodes[edge.source].rank
}

/// Lane numbers for every edge, plus the largest one. Hidden edges are never back edges.
pub fn number_back_edges(g: &Graph, nodes: &[NodePlacement]) -> (Vec<u32>, u32) {
    let mut numbers = vec![0u32; g.edge_count()];
    let mut max = 0u32;
    for (e, number) in numbers.iter_mut().enumerate() {
        if g.is_edge_visible(e) && is_back_edge(g, nodes, e) {
            max += 1;
            *number = max;
        }
    }
    tracing::debug!(back_edges = max, "back edges numbered");
    (numbers, max)
}
