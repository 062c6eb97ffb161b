use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use strata::graphlib::{EdgeSpec, EdgeType, Graph, NodeKind, NodeSpec};
use strata::{LayoutConfig, layout};

#[derive(Debug, Clone)]
struct GraphSpec {
    nodes: Vec<NodeSpec>,
    edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    fn build(&self) -> Graph {
        Graph::from_specs(self.nodes.iter().cloned(), self.edges.iter().cloned())
            .expect("bench graph is well formed")
    }
}

/// A chain of `loops` loops, each with a phi, a body of `body` nodes and a back edge.
fn build_loop_spec(loops: u32, body: u32) -> GraphSpec {
    let mut nodes = vec![NodeSpec::new(0, NodeKind::Start, 80.0, 20.0)];
    let mut edges = Vec::new();
    let mut next_id = 1u32;
    let mut entry = 0u32;

    for _ in 0..loops {
        let header = next_id;
        let phi = next_id + 1;
        next_id += 2;
        nodes.push(NodeSpec::new(header, NodeKind::Loop, 80.0, 20.0));
        nodes.push(NodeSpec::new(phi, NodeKind::Phi, 60.0, 20.0));
        edges.push(EdgeSpec::new(entry, header, 0, EdgeType::Control));
        edges.push(EdgeSpec::new(entry, phi, 0, EdgeType::Value));
        edges.push(EdgeSpec::new(header, phi, 2, EdgeType::Control));

        let mut prev = phi;
        for i in 0..body {
            let id = next_id;
            next_id += 1;
            let width = 60.0 + f64::from(i % 4) * 30.0;
            nodes.push(NodeSpec::new(id, NodeKind::Other, width, 20.0));
            edges.push(EdgeSpec::new(prev, id, 0, EdgeType::Value));
            // Extra operands spread the rows.
            if i >= 2 {
                edges.push(EdgeSpec::new(id - 2, id, 1, EdgeType::Value));
            }
            prev = id;
        }
        edges.push(EdgeSpec::new(prev, header, 1, EdgeType::Control));
        edges.push(EdgeSpec::new(prev, phi, 1, EdgeType::Value));
        entry = prev;
    }

    GraphSpec { nodes, edges }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.measurement_time(Duration::from_secs(10));

    let config = LayoutConfig::default();
    let cases = [
        ("loops_4_b10", 4u32, 10u32),
        ("loops_16_b20", 16u32, 20u32),
        ("loops_32_b40", 32u32, 40u32),
    ];

    for (name, loops, body) in cases {
        let spec = build_loop_spec(loops, body);
        group.bench_with_input(BenchmarkId::new("layout", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build(),
                |mut g| {
                    let bounds = layout(black_box(&mut g), &config).expect("layout");
                    black_box(bounds.width);
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
