//! Criterion benchmarks for PNG chart rendering.
//!
//! Run with: cargo bench -p export --bench render_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use export::{render_chart, render_combined, ChartStyle};
use impact::{compute, get_baselines, present, ChartKind, Locale, ParameterSet};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_render");
    group.sample_size(20);

    let presentation = present(
        &get_baselines(),
        &compute(&ParameterSet::default()),
        Locale::English,
    );
    let single = ChartStyle::single();
    let combined = ChartStyle::combined();

    group.bench_function("single_co2", |b| {
        b.iter(|| black_box(render_chart(presentation.chart(ChartKind::Co2), &single)));
    });
    group.bench_function("combined", |b| {
        b.iter(|| black_box(render_combined(&presentation.charts, &combined)));
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
