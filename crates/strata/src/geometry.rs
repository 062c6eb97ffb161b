//! Port and anchor positions shared by placement and edge routing.
//!
//! Inputs enter a node at evenly spaced ports along its top, right-aligned so the last input
//! sits at the node's right edge. Outputs leave from a single port at the bottom right.

use crate::config::LayoutConfig;
use crate::graphlib::{EdgeIx, Graph, NodeIx};
use crate::model::NodePlacement;

#[derive(Clone, Copy)]
pub(crate) struct Geometry<'a> {
    pub(crate) g: &'a Graph,
    pub(crate) nodes: &'a [NodePlacement],
    pub(crate) config: &'a LayoutConfig,
}

impl<'a> Geometry<'a> {
    pub(crate) fn new(g: &'a Graph, nodes: &'a [NodePlacement], config: &'a LayoutConfig) -> Self {
        Self { g, nodes, config }
    }

    pub(crate) fn total_width(&self, n: NodeIx) -> f64 {
        self.g.node(n).total_width(self.config.input_width)
    }

    /// Center of input port `slot`, relative to the node's left edge.
    pub(crate) fn input_x(&self, n: NodeIx, slot: usize) -> f64 {
        let w = self.config.input_width;
        let inputs = self.g.node(n).inputs().len() as f64;
        self.total_width(n) - w / 2.0 + (slot as f64 - inputs + 1.0) * w
    }

    /// Output port, relative to the node's left edge.
    pub(crate) fn output_x(&self, n: NodeIx) -> f64 {
        self.total_width(n) - self.config.input_width / 2.0
    }

    /// Height at which the line into input `slot` turns vertical. Staggered over four lanes.
    pub(crate) fn input_approach(&self, n: NodeIx, slot: usize) -> f64 {
        let c = self.config;
        self.nodes[n].y
            - c.min_input_approach()
            - (slot % 4) as f64 * c.min_edge_separation
            - c.bubble_radius
    }

    /// Height at which lines leaving `n` turn horizontal.
    pub(crate) fn output_approach(&self, n: NodeIx) -> f64 {
        let p = &self.nodes[n];
        p.y + p.output_approach + self.g.node(n).height + self.config.bubble_radius
    }

    /// X of the vertical run that carries edge `e` down into its target.
    ///
    /// Back edges run in their own lane to the right of every node. Forward edges drop straight
    /// onto their input port unless the source's output approach sits below the target's input
    /// approach, in which case they detour around the target's nearer side.
    pub(crate) fn anchor_x(&self, e: EdgeIx, back_edge_number: u32, max_node_x: f64) -> f64 {
        let c = self.config;
        if back_edge_number > 0 {
            return max_node_x + f64::from(back_edge_number) * c.min_edge_separation;
        }
        let edge = self.g.edge(e);
        let (source, target) = (edge.source, edge.target);
        let target_x = self.nodes[target].x;
        if self.input_approach(target, edge.index) > self.output_approach(source) {
            return target_x + self.input_x(target, edge.index);
        }
        let offset = c.min_edge_separation * (edge.index + 1) as f64;
        if target_x < self.nodes[source].x {
            target_x + self.total_width(target) + offset
        } else {
            target_x - offset
        }
    }
}
