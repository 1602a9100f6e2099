use criterion::{criterion_group, criterion_main, Criterion};
use pinsight::api::{run_pipeline, CandidateSet};
use pinsight::config::AnalysisParams;
use pinsight::frequency::FrequencyTable;
use pinsight::geometry::{CaptureBounds, RawTap};
use std::hint::black_box;

fn setup_table() -> FrequencyTable {
    FrequencyTable::from_fn(|p| 1 + (p.index() as u64 * 7919) % 4096)
        .expect("Failed to build frequency table")
}

fn corner_taps() -> Vec<RawTap> {
    vec![
        RawTap::new(50.0, 50.0),
        RawTap::new(250.0, 50.0),
        RawTap::new(50.0, 250.0),
        RawTap::new(250.0, 250.0),
    ]
}

fn criterion_benchmark(c: &mut Criterion) {
    let table = setup_table();
    let taps = corner_taps();
    let bounds = Some(CaptureBounds::new(300.0, 400.0));
    let params = AnalysisParams::default();

    c.bench_function("run_pipeline (top_k=4)", |b| {
        b.iter(|| run_pipeline(black_box(&taps), bounds, &table, &params))
    });

    let mut wide = params.clone();
    wide.model.top_k = 10;
    c.bench_function("run_pipeline (top_k=10)", |b| {
        b.iter(|| run_pipeline(black_box(&taps), bounds, &table, &wide))
    });

    let set = CandidateSet::build(&taps, bounds, &params.model);
    c.bench_function("rerank cached set", |b| {
        b.iter(|| set.rank(&table, &params.ranking, black_box(0.3)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
