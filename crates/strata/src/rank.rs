//! Rank assignment for possibly cyclic IR graphs.
//!
//! Ranking runs in three steps:
//!
//! 1. an early pass pushes every node one rank below the inputs that matter for it, using a
//!    worklist seeded with the sources;
//! 2. a late pass pulls nodes down so they sit just above their nearest consumer;
//! 3. sinks are pinned to the bottom row.
//!
//! Phi-like nodes only follow their merge input, and loop headers only follow their entry input,
//! so loop-carried values do not drag the loop body downward.

use crate::graphlib::{Graph, NodeIx, NodeKind, UNRANKED};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Indexed by [`NodeIx`]; hidden nodes stay [`UNRANKED`].
    pub ranks: Vec<u32>,
    /// Nodes the traversals start from: the sources, then one entry per source-less cycle.
    pub roots: Vec<NodeIx>,
    pub max_rank: u32,
}

pub fn rank(g: &Graph) -> Ranking {
    let mut ranks = vec![UNRANKED; g.node_count()];
    let mut roots = g.sources();
    let early_max = rank_early(g, &mut ranks, &mut roots);
    pull_toward_consumers(g, &mut ranks, &roots);
    let max_rank = pin_sinks(g, &mut ranks);

    tracing::debug!(
        roots = roots.len(),
        early_max,
        max_rank,
        "ranks assigned"
    );
    Ranking {
        ranks,
        roots,
        max_rank,
    }
}

/// Worklist pass. Returns the largest rank seen.
///
/// When the worklist drains while visible nodes are still unranked, they sit on cycles that no
/// source reaches. The next one (loop headers first, then by id) is appended to `roots` and the
/// worklist restarts from it.
fn rank_early(g: &Graph, ranks: &mut [u32], roots: &mut Vec<NodeIx>) -> u32 {
    // Ranks of an acyclic graph never exceed the number of visible nodes; the cap only bites on
    // cycles that the input-range rules do not break.
    let cap = (g.nodes().iter().filter(|n| n.visible).count() as u32).max(1);

    let mut entries: Vec<NodeIx> = (0..g.node_count())
        .filter(|&ix| g.is_node_visible(ix))
        .collect();
    entries.sort_by_key(|&ix| {
        let n = g.node(ix);
        (!n.kind.is_loop(), n.id)
    });
    let mut entries = entries.into_iter();

    let mut max_rank = UNRANKED;
    let mut worklist: VecDeque<NodeIx> = roots.iter().copied().collect();
    loop {
        while let Some(n) = worklist.pop_back() {
            if relax(g, ranks, n, cap) {
                push_outputs(g, n, &mut worklist);
            }
            max_rank = max_rank.max(ranks[n]);
        }
        let Some(entry) = entries.by_ref().find(|&ix| ranks[ix] == UNRANKED) else {
            break;
        };
        tracing::trace!(node = g.node(entry).id, "seeding unreached cycle");
        roots.push(entry);
        worklist.push_back(entry);
    }
    max_rank
}

/// Raises `n` one rank past each relevant input. Returns whether the rank changed.
fn relax(g: &Graph, ranks: &mut [u32], n: NodeIx, cap: u32) -> bool {
    let mut changed = false;
    if ranks[n] == UNRANKED {
        ranks[n] = 1;
        changed = true;
    }

    let node = g.node(n);
    let inputs = node.inputs();
    let relevant = if node.kind.is_phi_like() {
        // Stay with the merge or loop; the merged values may come from anywhere.
        &inputs[inputs.len().saturating_sub(1)..]
    } else if g.is_loop_carrying(n) {
        &inputs[..inputs.len().min(1)]
    } else {
        inputs
    };

    for &e in relevant {
        if !g.is_edge_visible(e) {
            continue;
        }
        let source_rank = ranks[g.edge(e).source];
        if source_rank >= ranks[n] && source_rank < cap {
            ranks[n] = source_rank + 1;
            changed = true;
        }
    }
    changed
}

fn push_outputs(g: &Graph, n: NodeIx, worklist: &mut VecDeque<NodeIx>) {
    let carries_loop = g.is_loop_carrying(n);
    for (pos, &e) in g.node(n).outputs().iter().enumerate().rev() {
        if !g.is_edge_visible(e) {
            continue;
        }
        let target = g.edge(e).target;
        // Loop bodies are revisited last so the loop header settles first.
        if carries_loop && pos != 0 {
            worklist.push_front(target);
        } else {
            worklist.push_back(target);
        }
    }
}

/// Late pass: depth-first from the roots, consumers before producers.
fn pull_toward_consumers(g: &Graph, ranks: &mut [u32], roots: &[NodeIx]) {
    let mut visited = vec![false; g.node_count()];
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

            let kind = g.node(n).kind;
            if kind == NodeKind::Start || kind.is_phi_like() {
                continue;
            }
            let current = ranks[n];
            let nearest = g
                .visible_outputs(n)
                .map(|e| ranks[g.edge(e).target])
                .filter(|&r| r > current)
                .min();
            if let Some(r) = nearest {
                ranks[n] = r - 1;
            }
        }
    }
}

/// Moves every sink one rank below the deepest non-sink. Returns the final maximum rank.
fn pin_sinks(g: &Graph, ranks: &mut [u32]) -> u32 {
    let sinks = g.sinks();
    let mut is_sink = vec![false; g.node_count()];
    for &s in &sinks {
        is_sink[s] = true;
    }
    let deepest = (0..g.node_count())
        .filter(|&ix| g.is_node_visible(ix) && !is_sink[ix])
        .map(|ix| ranks[ix])
        .max()
        .unwrap_or(UNRANKED);
    if sinks.is_empty() {
        return deepest;
    }
    for &s in &sinks {
        ranks[s] = deepest + 1;
    }
    deepest + 1
}
