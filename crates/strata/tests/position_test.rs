use strata::graphlib::{EdgeSpec, EdgeType, Graph, NodeKind, NodeSpec};
use strata::position::{self, PlacementHint};
use strata::{Direction, LayoutConfig, LayoutResult, compute, edge_path};

fn graph(ids: &[u32], edges: &[(u32, u32, usize)]) -> Graph {
    Graph::from_specs(
        ids.iter()
            .map(|&id| NodeSpec::new(id, NodeKind::Other, 100.0, 30.0)),
        edges
            .iter()
            .map(|&(from, to, index)| EdgeSpec::new(from, to, index, EdgeType::Value)),
    )
    .unwrap()
}

fn hint(g: &Graph, result: &LayoutResult, config: &LayoutConfig, id: u32) -> PlacementHint {
    position::placement_hint(g, &result.nodes, config, g.node_ix(id).unwrap())
}

fn x_of(g: &Graph, result: &LayoutResult, id: u32) -> f64 {
    result.placement(g.node_ix(id).unwrap()).x
}

#[test]
fn position_centers_a_node_feeding_several_consumers() {
    let config = LayoutConfig::default();
    let g = graph(&[1, 2, 3], &[(1, 2, 0), (1, 3, 0)]);
    let result = compute(&g, &config).unwrap();

    let h = hint(&g, &result, &config, 1);
    assert_eq!(h.direction, Direction::Center);
    // Single-input consumers take their only port at the right end of the node.
    let expected = ((x_of(&g, &result, 2) + 100.0) + (x_of(&g, &result, 3) + 100.0)) / 2.0;
    assert_eq!(h.x, expected);
}

#[test]
fn position_centers_the_only_input_of_a_consumer() {
    let config = LayoutConfig::default();
    let g = graph(&[1, 2], &[(1, 2, 0)]);
    let result = compute(&g, &config).unwrap();

    let h = hint(&g, &result, &config, 1);
    assert_eq!(h.direction, Direction::Center);
    assert_eq!(h.x, x_of(&g, &result, 2) + 100.0);
}

#[test]
fn position_leans_towards_the_half_of_the_inputs_it_feeds() {
    let config = LayoutConfig::default();
    let g = graph(&[1, 2, 3], &[(1, 3, 1), (2, 3, 0)]);
    let result = compute(&g, &config).unwrap();
    let consumer_x = x_of(&g, &result, 3);

    let right = hint(&g, &result, &config, 1);
    assert_eq!(right.direction, Direction::Right);
    assert_eq!(right.x, consumer_x + 100.0);

    let left = hint(&g, &result, &config, 2);
    assert_eq!(left.direction, Direction::Left);
    assert_eq!(left.x, consumer_x + 50.0);

    // The consumer itself has nothing below it.
    let bottom = hint(&g, &result, &config, 3);
    assert_eq!(bottom.direction, Direction::Left);
    assert_eq!(bottom.x, 0.0);
}

#[test]
fn position_staggers_output_approaches_in_a_rank() {
    let config = LayoutConfig::default();
    let g = graph(&[1, 2, 3, 4], &[]);
    let result = compute(&g, &config).unwrap();

    let ranks = position::rank_sets(&g, &result.nodes);
    assert_eq!(ranks.len(), 1);
    let approaches: Vec<f64> = ranks[&1]
        .iter()
        .map(|&ix| result.placement(ix).output_approach)
        .collect();
    let (min, sep) = (config.min_output_approach, config.min_edge_separation);
    assert_eq!(approaches, vec![min, min + sep, min + 2.0 * sep, min]);
}

#[test]
fn position_keeps_rows_clear_of_passing_edges() {
    let config = LayoutConfig::default();
    // 1 -> 3 skips the row of 2 on its way down.
    let g = graph(&[1, 2, 3], &[(1, 2, 0), (2, 3, 0), (1, 3, 1)]);
    let result = compute(&g, &config).unwrap();
    let (top, middle, bottom) = (0, 1, 2);
    assert_eq!(result.placement(top).rank, 1);
    assert_eq!(result.placement(middle).rank, 2);
    assert_eq!(result.placement(bottom).rank, 3);

    let long_edge = g.find_edge(1, 3).unwrap();
    let path = edge_path(&g, &result, long_edge, &config).unwrap();
    let line_x = path.last().unwrap().x;
    let middle_row_y = result.placement(middle).y;
    assert!(
        path.windows(2).any(|s| s[0].x == line_x
            && s[1].x == line_x
            && s[0].y.min(s[1].y) < middle_row_y
            && s[0].y.max(s[1].y) > middle_row_y),
        "the long edge should run vertically through the middle row: {path:?}"
    );

    let left = result.placement(middle).x;
    let right = left + g.node(middle).total_width(config.input_width);
    assert!(
        line_x < left || line_x >= right,
        "line at {line_x} crosses node [{left}, {right})"
    );
}
