//! Visit order: the within-rank sort key.
//!
//! A post-order DFS over visible output edges numbers nodes in the order they finish. Nodes of a
//! rank sorted by this number read roughly in program order and cross fewer edges.

use crate::graphlib::{Graph, NodeIx};

/// Returns one number per node, starting at `1`; unreached (hidden) nodes get `0`.
pub fn visit_order(g: &Graph, roots: &[NodeIx]) -> Vec<u32> {
    let mut order = vec![0u32; g.node_count()];
    let mut visited = vec![false; g.node_count()];
    let mut next = 0u32;
    let mut stack: Vec<(NodeIx, usize)> = Vec::new();

    for &root in roots {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (n, pos) = *top;
            if let Some(&e) = g.node(n).outputs().get(pos) {
                top.1 += 1;
                if g.is_edge_visible(e) {
                    let target = g.edge(e).target;
                    if !visited[target] {
                        visited[target] = true;
                        stack.push((target, 0));
                    }
                }
                continue;
            }
            stack.pop();
            next += 1;
            order[n] = next;
        }
    }
    order
}
