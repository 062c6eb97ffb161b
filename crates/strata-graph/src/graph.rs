//! The [`Graph`] arena.
//!
//! Nodes are stored densely in insertion order and looked up by their (possibly sparse) external
//! id through a hash index. Edges store arena indices of their endpoints; each node keeps the
//! indices of its incident edges. Inputs stay ordered by the input slot they fill, so "the last
//! input" of a node is its highest-numbered slot regardless of insertion order.

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;

mod edge;
mod geometry;
mod node;

pub use edge::{Edge, EdgeIx, EdgeSpec, EdgeType};
pub use geometry::{BoundingBox, Point};
pub use node::{Node, NodeId, NodeIx, NodeKind, NodeSpec, UNRANKED};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: HashMap<NodeId, NodeIx>,
    edges: Vec<Edge>,

    /// Extent computed by the last successful layout.
    pub bounds: BoundingBox,
    pub max_back_edge_number: u32,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from caller-supplied node and edge lists.
    pub fn from_specs(
        nodes: impl IntoIterator<Item = NodeSpec>,
        edges: impl IntoIterator<Item = EdgeSpec>,
    ) -> Result<Self> {
        let mut g = Self::new();
        for spec in nodes {
            g.add_node(spec)?;
        }
        for spec in edges {
            g.add_edge(spec)?;
        }
        Ok(g)
    }

    pub fn add_node(&mut self, spec: NodeSpec) -> Result<NodeIx> {
        if self.node_index.contains_key(&spec.id) {
            return Err(Error::DuplicateNode { id: spec.id });
        }
        check_size(spec.id, spec.width, spec.height)?;
        let ix = self.nodes.len();
        self.node_index.insert(spec.id, ix);
        self.nodes.push(Node::from_spec(spec));
        Ok(ix)
    }

    pub fn add_edge(&mut self, spec: EdgeSpec) -> Result<EdgeIx> {
        let (Some(source), Some(target)) = (
            self.node_ix(spec.source_id),
            self.node_ix(spec.target_id),
        ) else {
            return Err(Error::MissingEndpoint {
                from: spec.source_id,
                to: spec.target_id,
            });
        };

        let ix = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            index: spec.index,
            ty: spec.ty,
            visible: spec.visible,
            back_edge_number: 0,
        });

        // Keep inputs sorted by slot; equal slots keep insertion order.
        let edges = &self.edges;
        let inputs = &mut self.nodes[target].inputs;
        let at = inputs.partition_point(|&e| edges[e].index <= spec.index);
        inputs.insert(at, ix);
        self.nodes[source].outputs.push(ix);
        Ok(ix)
    }

    /// Re-checks what callers may have changed through the public node fields since
    /// construction: every node size must still be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for node in &self.nodes {
            check_size(node.id, node.width, node.height)?;
        }
        Ok(())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn node_ix(&self, id: NodeId) -> Option<NodeIx> {
        self.node_index.get(&id).copied()
    }

    pub fn node(&self, ix: NodeIx) -> &Node {
        &self.nodes[ix]
    }

    pub fn node_mut(&mut self, ix: NodeIx) -> &mut Node {
        &mut self.nodes[ix]
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.node_ix(id).map(|ix| &self.nodes[ix])
    }

    pub fn node_by_id_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.node_ix(id).map(move |ix| &mut self.nodes[ix])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, ix: EdgeIx) -> &Edge {
        &self.edges[ix]
    }

    pub fn edge_mut(&mut self, ix: EdgeIx) -> &mut Edge {
        &mut self.edges[ix]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    /// First edge `from -> to`, by node id.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeIx> {
        let from = self.node_ix(from)?;
        let to = self.node_ix(to)?;
        self.nodes[from]
            .outputs
            .iter()
            .copied()
            .find(|&e| self.edges[e].target == to)
    }

    /// Returns `false` when no node has this id.
    pub fn set_node_visible(&mut self, id: NodeId, visible: bool) -> bool {
        match self.node_by_id_mut(id) {
            Some(node) => {
                node.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn set_all_visible(&mut self, visible: bool) {
        for node in &mut self.nodes {
            node.visible = visible;
        }
        for edge in &mut self.edges {
            edge.visible = visible;
        }
    }

    pub fn is_node_visible(&self, ix: NodeIx) -> bool {
        self.nodes[ix].visible
    }

    /// An edge is only shown when its own flag and both endpoints are visible.
    pub fn is_edge_visible(&self, ix: EdgeIx) -> bool {
        let e = &self.edges[ix];
        e.visible && self.nodes[e.source].visible && self.nodes[e.target].visible
    }

    pub fn visible_inputs(&self, ix: NodeIx) -> impl Iterator<Item = EdgeIx> + '_ {
        self.nodes[ix]
            .inputs
            .iter()
            .copied()
            .filter(move |&e| self.is_edge_visible(e))
    }

    pub fn visible_outputs(&self, ix: NodeIx) -> impl Iterator<Item = EdgeIx> + '_ {
        self.nodes[ix]
            .outputs
            .iter()
            .copied()
            .filter(move |&e| self.is_edge_visible(e))
    }

    /// Visible nodes without visible inputs, in arena order.
    pub fn sources(&self) -> Vec<NodeIx> {
        (0..self.nodes.len())
            .filter(|&ix| self.nodes[ix].visible && self.visible_inputs(ix).next().is_none())
            .collect()
    }

    /// Visible nodes without visible outputs, in arena order.
    pub fn sinks(&self) -> Vec<NodeIx> {
        (0..self.nodes.len())
            .filter(|&ix| self.nodes[ix].visible && self.visible_outputs(ix).next().is_none())
            .collect()
    }

    pub fn last_input(&self, ix: NodeIx) -> Option<EdgeIx> {
        self.nodes[ix].inputs.last().copied()
    }

    /// Loop headers, and phis whose merge input comes from a loop header.
    ///
    /// This is structural: it ignores visibility.
    pub fn is_loop_carrying(&self, ix: NodeIx) -> bool {
        let node = &self.nodes[ix];
        if node.kind.is_loop() {
            return true;
        }
        node.kind.is_phi_like()
            && self
                .last_input(ix)
                .is_some_and(|e| self.nodes[self.edges[e].source].kind.is_loop())
    }
}

fn check_size(id: NodeId, width: f64, height: f64) -> Result<()> {
    let usable = |v: f64| v.is_finite() && v >= 0.0;
    if usable(width) && usable(height) {
        Ok(())
    } else {
        Err(Error::InvalidSize { id, width, height })
    }
}
