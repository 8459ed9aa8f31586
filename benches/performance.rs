//! Performance benchmarks for image-gate
//!
//! These benchmarks measure:
//! - Byte-size threshold parsing
//! - Catalog construction from configuration
//! - Single evaluation of the built-in rules
//! - Parallel batch evaluation against a shared catalog
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench batch_evaluation
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use image_gate::units::parse_bytes;
use image_gate::{AnalysisResult, Evaluator, GateConfig, RuleCatalog};

fn config() -> GateConfig {
    GateConfig::parse(
        r#"
[rules]
lowestEfficiency = 0.9
highestWastedBytes = "10MB"
highestUserWastedPercent = 0.1
"#,
    )
    .unwrap()
}

fn bench_parse_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_bytes");
    for input in ["1024", "10MB", "1.5 GiB", "1,024kB"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| parse_bytes(black_box(input)))
        });
    }
    group.finish();
}

fn bench_catalog_load(c: &mut Criterion) {
    let config = config();
    c.bench_function("catalog_load", |b| {
        b.iter(|| RuleCatalog::load(black_box(&config)))
    });
}

fn bench_single_evaluation(c: &mut Criterion) {
    let evaluator = Evaluator::from_config(&config());
    let analysis = AnalysisResult::new(0.85, 15_728_640, 0.25);
    c.bench_function("single_evaluation", |b| {
        b.iter(|| evaluator.evaluate(black_box(&analysis)))
    });
}

fn bench_batch_evaluation(c: &mut Criterion) {
    let evaluator = Evaluator::from_config(&config());
    let mut group = c.benchmark_group("batch_evaluation");

    for size in [10usize, 100, 1_000, 10_000] {
        let analyses: Vec<AnalysisResult> = (0..size)
            .map(|i| AnalysisResult::new((i % 100) as f64 / 100.0, i as u64 * 4096, 0.05))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &analyses, |b, analyses| {
            b.iter(|| evaluator.evaluate_all(black_box(analyses)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_bytes,
    bench_catalog_load,
    bench_single_evaluation,
    bench_batch_evaluation
);
criterion_main!(benches);
