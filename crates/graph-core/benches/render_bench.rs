// File: crates/graph-core/benches/render_bench.rs
// Summary: Criterion benchmark for rasterizing and encoding XY series.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graph_core::{Graph, Series, Theme};

fn build_graph(n: usize) -> Graph {
    let theme = Theme::dark();
    let mut graph = Graph::with_viewport(800, 500, 0.0, (n - 1) as f64, -12.0, 12.0);

    let mut series = Series::new(theme.series);
    for i in 0..n {
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        assert!(series.add_point((x, y)));
    }
    graph.add_series(series);
    graph
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let mut graph = build_graph(n);
            b.iter(|| {
                let bytes = graph.render_to_png_bytes().expect("render bytes");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
