//! Layout output values.
//!
//! A layout run writes into a [`LayoutResult`] rather than into the graph, so a run that fails
//! halfway leaves the caller's previous diagram intact. [`LayoutResult::apply`] commits it.

use crate::config::LayoutConfig;
use crate::graphlib::{BoundingBox, EdgeIx, Graph, NodeIx, UNRANKED};

/// Per-node layout fields, indexed by [`NodeIx`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodePlacement {
    pub rank: u32,
    pub visit_order: u32,
    pub x: f64,
    pub y: f64,
    pub output_approach: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    pub nodes: Vec<NodePlacement>,
    /// Indexed by [`EdgeIx`]; `0` for every edge that is not a back edge.
    pub back_edge_numbers: Vec<u32>,
    pub max_rank: u32,
    pub max_back_edge_number: u32,
    /// Right edge of the rightmost visible node; back-edge lanes start here.
    pub max_node_x: f64,
    pub bounds: BoundingBox,
}

impl LayoutResult {
    /// Snapshot of the layout last committed to `g`.
    pub fn from_graph(g: &Graph, config: &LayoutConfig) -> Self {
        let nodes: Vec<NodePlacement> = g
            .nodes()
            .iter()
            .map(|n| NodePlacement {
                rank: n.rank,
                visit_order: n.visit_order,
                x: n.x,
                y: n.y,
                output_approach: n.output_approach,
            })
            .collect();
        let max_node_x = g
            .nodes()
            .iter()
            .filter(|n| n.visible)
            .map(|n| n.x + n.total_width(config.input_width))
            .fold(None, |acc: Option<f64>, x| Some(acc.map_or(x, |m| m.max(x))))
            .unwrap_or(0.0);
        Self {
            max_rank: nodes.iter().map(|n| n.rank).max().unwrap_or(UNRANKED),
            nodes,
            back_edge_numbers: g.edges().iter().map(|e| e.back_edge_number).collect(),
            max_back_edge_number: g.max_back_edge_number,
            max_node_x,
            bounds: g.bounds,
        }
    }

    pub fn placement(&self, ix: NodeIx) -> &NodePlacement {
        &self.nodes[ix]
    }

    pub fn back_edge_number(&self, e: EdgeIx) -> u32 {
        self.back_edge_numbers.get(e).copied().unwrap_or(0)
    }

    /// Writes every computed field into `g`. Hidden nodes are reset to unranked at the origin.
    pub fn apply(&self, g: &mut Graph) {
        for (node, placed) in g.nodes_mut().iter_mut().zip(&self.nodes) {
            if node.visible {
                node.rank = placed.rank;
                node.visit_order = placed.visit_order;
                node.x = placed.x;
                node.y = placed.y;
                node.output_approach = placed.output_approach;
            } else {
                node.rank = UNRANKED;
                node.visit_order = 0;
                node.x = 0.0;
                node.y = 0.0;
                node.output_approach = 0.0;
            }
        }
        for (edge, &number) in g.edges_mut().iter_mut().zip(&self.back_edge_numbers) {
            edge.back_edge_number = number;
        }
        g.max_back_edge_number = self.max_back_edge_number;
        g.bounds = self.bounds;
    }
}
