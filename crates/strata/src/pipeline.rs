//! Layout entry points.

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::graphlib::{BoundingBox, Graph};
use crate::model::{LayoutResult, NodePlacement};
use crate::{back_edges, bounds, order, position, rank};

/// Lays out the visible part of `g` without touching it.
pub fn compute(g: &Graph, config: &LayoutConfig) -> Result<LayoutResult> {
    config.validate()?;
    g.validate()?;
    let _span = tracing::debug_span!(
        "layout",
        nodes = g.node_count(),
        edges = g.edge_count()
    )
    .entered();

    let ranking = rank::rank(g);
    let visit_order = order::visit_order(g, &ranking.roots);

    let mut nodes: Vec<NodePlacement> = (0..g.node_count())
        .map(|ix| {
            if !g.is_node_visible(ix) {
                return NodePlacement::default();
            }
            NodePlacement {
                rank: ranking.ranks[ix],
                visit_order: visit_order[ix],
                x: 0.0,
                y: 0.0,
                output_approach: config.min_output_approach,
            }
        })
        .collect();

    position::assign_rows(g, &mut nodes, config);
    position::place(g, &mut nodes, config)?;

    let (back_edge_numbers, max_back_edge_number) = back_edges::number_back_edges(g, &nodes);
    let (bounds, max_node_x) = bounds::bounding_box(g, &nodes, max_back_edge_number, config);
    tracing::debug!(
        max_rank = ranking.max_rank,
        width = bounds.width,
        height = bounds.height,
        "layout complete"
    );

    Ok(LayoutResult {
        nodes,
        back_edge_numbers,
        max_rank: ranking.max_rank,
        max_back_edge_number,
        max_node_x,
        bounds,
    })
}

/// Lays out `g` in place and returns its new extent.
///
/// On error `g` keeps the layout of its last successful run.
pub fn layout(g: &mut Graph, config: &LayoutConfig) -> Result<BoundingBox> {
    let result = compute(g, config)?;
    result.apply(g);
    Ok(result.bounds)
}
