use criterion::{black_box, criterion_group, criterion_main, Criterion};
use railway_map::models::{MapGraph, MapNode, Pathfinding, TrackLink};

/// Build a `size` x `size` grid of stations with links between neighbors
fn grid_dataset(size: usize) -> (Vec<MapNode>, Vec<TrackLink>) {
    let mut nodes = Vec::with_capacity(size * size);
    let mut links = Vec::new();

    for row in 0..size {
        for col in 0..size {
            let id = format!("n-{row}-{col}");
            nodes.push(MapNode::station(&id, &id, col as f64 * 40.0, row as f64 * 40.0));
            if col > 0 {
                links.push(TrackLink::new(&format!("n-{row}-{}", col - 1), &id));
            }
            if row > 0 {
                links.push(TrackLink::new(&format!("n-{}-{col}", row - 1), &id));
            }
        }
    }

    (nodes, links)
}

fn benchmark_pathfinding(c: &mut Criterion) {
    let (nodes, links) = grid_dataset(50);
    let graph = MapGraph::from_dataset(&nodes, &links);
    let start = "n-0-0";
    let end = "n-49-49";

    c.bench_function("graph_build", |b| {
        b.iter(|| MapGraph::from_dataset(black_box(&nodes), black_box(&links)));
    });

    c.bench_function("shortest_path", |b| {
        b.iter(|| graph.shortest_path(black_box(start), black_box(end)));
    });

    // The full pipeline, which is what a section-highlight request runs
    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let graph = MapGraph::from_dataset(black_box(&nodes), black_box(&links));
            graph.shortest_path(black_box(start), black_box(end))
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
