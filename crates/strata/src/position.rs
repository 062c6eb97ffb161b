//! Node placement.
//!
//! Rows are stacked top to bottom by rank. Within a row, x positions are packed with a
//! [`SlotTracker`], processing ranks from the bottom up so each node can line up with the
//! consumers already placed below it. While a rank is processed, the tracker holds:
//!
//! - the slots under every edge line that passes through this rank on its way down, and
//! - the slots of the nodes placed so far in this rank.

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::graphlib::{EdgeIx, Graph, NodeIx};
use crate::model::NodePlacement;
use crate::slots::{Direction, SlotTracker};
use std::collections::BTreeMap;

/// Where a node would like to go: towards `x`, growing in `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementHint {
    pub direction: Direction,
    pub x: f64,
}

/// Visible nodes grouped by rank, each rank sorted by visit order.
pub fn rank_sets(g: &Graph, nodes: &[NodePlacement]) -> BTreeMap<u32, Vec<NodeIx>> {
    let mut ranks: BTreeMap<u32, Vec<NodeIx>> = BTreeMap::new();
    for ix in 0..g.node_count() {
        if g.is_node_visible(ix) {
            ranks.entry(nodes[ix].rank).or_default().push(ix);
        }
    }
    for members in ranks.values_mut() {
        members.sort_by_key(|&ix| nodes[ix].visit_order);
    }
    ranks
}

/// Assigns `y` to every visible node. Each row starts below the tallest node of the row above.
pub fn assign_rows(g: &Graph, nodes: &mut [NodePlacement], config: &LayoutConfig) {
    let ranks = rank_sets(g, nodes);
    let Some(&max_rank) = ranks.keys().next_back() else {
        return;
    };

    let row_gap = config.row_separation + 2.0 * config.bubble_radius;
    let mut row_top = vec![0.0; max_rank as usize + 1];
    for rank in 2..=max_rank as usize {
        let above = ranks
            .get(&(rank as u32 - 1))
            .map(|members| {
                members
                    .iter()
                    .map(|&ix| g.node(ix).height)
                    .fold(0.0, f64::max)
            })
            .unwrap_or(0.0);
        row_top[rank] = row_top[rank - 1] + above + row_gap;
    }

    for (&rank, members) in &ranks {
        for &ix in members {
            nodes[ix].y = row_top[rank as usize];
        }
    }
}

/// Assigns `x` and the staggered output approach to every visible node.
pub fn place(g: &Graph, nodes: &mut [NodePlacement], config: &LayoutConfig) -> Result<()> {
    let ranks = rank_sets(g, nodes);
    let mut tracker = SlotTracker::new(config.input_width, g.node_count());

    for (&rank, members) in ranks.iter().rev() {
        // Lines from this rank's outputs end here; stop protecting them.
        for &n in members {
            let anchors = output_anchors(g, nodes, config, n);
            tracker.clear_under_edges(anchors)?;
        }

        let mut placed: Vec<(i64, i64)> = Vec::with_capacity(members.len());
        for (i, &n) in members.iter().enumerate() {
            let (x, slots) = place_node(g, nodes, config, &mut tracker, n)?;
            placed.push(slots);
            let p = &mut nodes[n];
            p.x = x;
            // Neighbouring output lines turn at different heights.
            p.output_approach += (i % 3) as f64 * config.min_edge_separation;
            tracing::trace!(
                node = g.node(n).id,
                rank,
                x,
                right = x + g.node(n).total_width(config.input_width),
                "placed"
            );
        }

        for (first, last) in placed {
            tracker.clear(first, last)?;
        }

        // Lines into this rank start further up; keep lower ranks clear of them.
        for &n in members {
            let anchors = input_anchors(g, nodes, config, n);
            tracker.occupy_under_edges(anchors)?;
        }
    }
    Ok(())
}

/// Packs `n` into its rank. Returns its x and the slot range it holds.
fn place_node(
    g: &Graph,
    nodes: &[NodePlacement],
    config: &LayoutConfig,
    tracker: &mut SlotTracker,
    n: NodeIx,
) -> Result<(f64, (i64, i64))> {
    let width = g.node(n).total_width(config.input_width);
    let margin = config.min_edge_separation;
    let padded = width + 2.0 * margin;
    let hint = placement_hint(g, nodes, config, n);

    let (first, count) = tracker
        .find_space(hint.x - padded + margin, padded, hint.direction)
        .inspect_err(|err| tracing::warn!(node = g.node(n).id, %err, "placement failed"))?;
    let last = first + count - 1;
    tracker.occupy(first, last)?;

    let x = match hint.direction {
        Direction::Left => tracker.slot_left(first + count) - width - margin,
        Direction::Right => tracker.slot_left(first) + margin,
        Direction::Center => {
            (first as f64 + count as f64 / 2.0) * tracker.slot_width() - width / 2.0
        }
    };
    Ok((x, (first, last)))
}

/// Mean x of the input ports `n` feeds in lower ranks.
///
/// Nodes lean left by default. Feeding the right half of a consumer's inputs makes them lean
/// right; feeding several consumers, or being the only input of the consumer, centers them.
pub fn placement_hint(
    g: &Graph,
    nodes: &[NodePlacement],
    config: &LayoutConfig,
    n: NodeIx,
) -> PlacementHint {
    let geo = Geometry::new(g, nodes, config);
    let rank = nodes[n].rank;
    let mut direction = Direction::Left;
    let mut sum = 0.0;
    let mut feeds = 0usize;
    let mut consumer_inputs = 0usize;

    for e in g.visible_outputs(n) {
        let edge = g.edge(e);
        let target = edge.target;
        if nodes[target].rank <= rank {
            continue;
        }
        consumer_inputs += g.visible_inputs(target).count();
        sum += nodes[target].x + geo.input_x(target, edge.index) + config.input_width / 2.0;
        feeds += 1;
        if edge.index * 2 >= g.node(target).inputs().len() {
            direction = Direction::Right;
        }
    }

    if feeds > 1 || consumer_inputs == 1 {
        direction = Direction::Center;
    }
    let x = if feeds == 0 { 0.0 } else { sum / feeds as f64 };
    PlacementHint { direction, x }
}

/// Anchors of visible edges from `n` down to a higher rank.
fn output_anchors(
    g: &Graph,
    nodes: &[NodePlacement],
    config: &LayoutConfig,
    n: NodeIx,
) -> Vec<f64> {
    let geo = Geometry::new(g, nodes, config);
    let rank = nodes[n].rank;
    g.visible_outputs(n)
        .filter(|&e| nodes[g.edge(e).target].rank > rank)
        .map(|e| forward_anchor(&geo, e))
        .collect()
}

/// Anchors of visible edges into `n` from a lower rank.
fn input_anchors(g: &Graph, nodes: &[NodePlacement], config: &LayoutConfig, n: NodeIx) -> Vec<f64> {
    let geo = Geometry::new(g, nodes, config);
    let rank = nodes[n].rank;
    g.visible_inputs(n)
        .filter(|&e| nodes[g.edge(e).source].rank < rank)
        .map(|e| forward_anchor(&geo, e))
        .collect()
}

fn forward_anchor(geo: &Geometry<'_>, e: EdgeIx) -> f64 {
    geo.anchor_x(e, 0, 0.0)
}
