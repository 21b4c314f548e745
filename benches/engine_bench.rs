//! Criterion benchmarks for the symbolic decision engine.
//!
//! Uses deterministic synthetic decision matrices to measure pure
//! algorithm overhead at realistic input sizes (tens of alternatives).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use routerank::neutrosophic::Rule;
use routerank::pipeline::{AlternativeSpec, CriterionSpec, PipelineConfig, PipelineRunner};
use routerank::topsis::{Candidate, Criterion as TopsisCriterion, TopsisRanker};

const CRITERIA: [(&str, bool); 4] = [
    ("cost", false),
    ("time", false),
    ("reliability", true),
    ("risk", false),
];

fn synthetic_value(i: usize, j: usize) -> f64 {
    // Deterministic pseudo-spread over (0, 1).
    let x = ((i * 31 + j * 17 + 7) % 97) as f64;
    (x + 1.0) / 98.0
}

fn synthetic_alternatives(count: usize) -> Vec<AlternativeSpec> {
    (0..count)
        .map(|i| {
            let mut alt = AlternativeSpec::new(format!("alt-{i}"), format!("Alternative {i}"));
            for (j, (name, _)) in CRITERIA.iter().enumerate() {
                alt = alt.with_criterion(*name, synthetic_value(i, j));
            }
            alt
        })
        .collect()
}

fn synthetic_rules() -> Vec<Rule> {
    CRITERIA
        .iter()
        .enumerate()
        .map(|(j, (name, _))| Rule {
            id: format!("r-{name}"),
            statement: format!("prefer better {name}"),
            truth: 0.9,
            indeterminacy: 0.05,
            falsity: 0.01,
            category: (*name).into(),
            weight: 0.2 + 0.05 * j as f64,
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let runner = PipelineRunner::new(PipelineConfig::default()).unwrap();
    let criteria: Vec<CriterionSpec> = CRITERIA
        .iter()
        .map(|(name, beneficial)| CriterionSpec::new(*name, *beneficial))
        .collect();
    let rules = synthetic_rules();

    let mut group = c.benchmark_group("pipeline");
    for count in [3usize, 10, 50] {
        let alternatives = synthetic_alternatives(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &alternatives,
            |b, alternatives| {
                b.iter(|| {
                    runner
                        .run(black_box(alternatives), black_box(&criteria), black_box(&rules))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_topsis(c: &mut Criterion) {
    let ranker = TopsisRanker::new(
        CRITERIA
            .iter()
            .map(|(name, beneficial)| TopsisCriterion::new(*name, 0.25, *beneficial))
            .collect(),
    )
    .unwrap();

    let mut group = c.benchmark_group("topsis");
    for count in [3usize, 10, 50] {
        let candidates: Vec<Candidate> = (0..count)
            .map(|i| {
                Candidate::new(
                    format!("alt-{i}"),
                    (0..CRITERIA.len()).map(|j| synthetic_value(i, j)).collect(),
                )
            })
            .collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &candidates,
            |b, candidates| b.iter(|| ranker.rank(black_box(candidates)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_topsis);
criterion_main!(benches);
