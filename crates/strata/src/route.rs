//! Orthogonal edge routes.
//!
//! Every edge leaves its source's output port straight down, runs horizontally at the source's
//! output approach to its anchor, drops to the target's input approach and enters the input port
//! from above. Back edges use their lane right of the graph as the anchor, so they climb back up
//! outside every node.

use crate::config::LayoutConfig;
use crate::geometry::Geometry;
use crate::graphlib::{EdgeIx, Graph, Point};
use crate::model::LayoutResult;

/// Polyline for edge `e`, or `None` when the edge is hidden.
pub fn edge_path(
    g: &Graph,
    layout: &LayoutResult,
    e: EdgeIx,
    config: &LayoutConfig,
) -> Option<Vec<Point>> {
    if !g.is_edge_visible(e) {
        return None;
    }
    let geo = Geometry::new(g, &layout.nodes, config);
    let edge = g.edge(e);
    let (source, target) = (edge.source, edge.target);
    let (src, tgt) = (layout.placement(source), layout.placement(target));

    let output_x = src.x + geo.output_x(source);
    let output_y = src.y + g.node(source).height + config.bubble_radius;
    let input_x = tgt.x + geo.input_x(target, edge.index);
    let input_y = tgt.y - 2.0 * config.bubble_radius - config.arrowhead_height;

    let output_approach = geo.output_approach(source);
    let mut input_approach = geo.input_approach(target, edge.index);
    let anchor = geo.anchor_x(e, layout.back_edge_number(e), layout.max_node_x);

    let mut points = vec![
        Point::new(output_x, output_y),
        Point::new(output_x, output_approach),
        Point::new(anchor, output_approach),
    ];
    if anchor != input_x {
        points.push(Point::new(anchor, input_approach));
    } else if input_approach < output_approach {
        input_approach = output_approach;
    }
    points.push(Point::new(input_x, input_approach));
    points.push(Point::new(input_x, input_y));
    Some(simplify(points))
}

/// Routes for every visible edge, in edge order.
pub fn edge_paths(
    g: &Graph,
    layout: &LayoutResult,
    config: &LayoutConfig,
) -> Vec<(EdgeIx, Vec<Point>)> {
    (0..g.edge_count())
        .filter_map(|e| edge_path(g, layout, e, config).map(|path| (e, path)))
        .collect()
}

/// Drops repeated points and the middle point of every straight run.
fn simplify(mut points: Vec<Point>) -> Vec<Point> {
    points.dedup();
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        let collinear = matches!(
            out.as_slice(),
            [.., a, b] if (a.x == b.x && b.x == p.x) || (a.y == b.y && b.y == p.y)
        );
        if collinear {
            out.pop();
        }
        out.push(p);
    }
    out
}
