//! Final graph extent.

use crate::config::LayoutConfig;
use crate::graphlib::{BoundingBox, Graph};
use crate::model::NodePlacement;

/// Returns the padded bounding box and the right edge of the rightmost node.
///
/// The box is the union of all visible node rectangles, widened on the right by one lane per
/// back edge and then padded by `config.margin` on every side. A graph with no visible nodes
/// yields an empty box at the origin.
pub fn bounding_box(
    g: &Graph,
    nodes: &[NodePlacement],
    max_back_edge_number: u32,
    config: &LayoutConfig,
) -> (BoundingBox, f64) {
    let mut union: Option<BoundingBox> = None;
    for (ix, node) in g.nodes().iter().enumerate() {
        if !node.visible {
            continue;
        }
        let p = &nodes[ix];
        let rect = BoundingBox::from_rect(
            p.x,
            p.y,
            node.total_width(config.input_width),
            node.height,
        );
        union = Some(match union {
            Some(acc) => acc.union(&rect),
            None => rect,
        });
    }

    let Some(nodes_box) = union else {
        return (BoundingBox::default(), 0.0);
    };
    let lanes = f64::from(max_back_edge_number) * config.min_edge_separation;
    let widened = BoundingBox::from_extents(
        nodes_box.min_x,
        nodes_box.min_y,
        nodes_box.max_x + lanes,
        nodes_box.max_y,
    );
    (widened.pad(config.margin), nodes_box.max_x)
}
