use canning::data::{CompanyRecord, FeedValue};
use canning::{Engine, Universe};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SECTORS: [&str; 6] = [
    "Technology",
    "Energy",
    "Healthcare",
    "Financial Services",
    "Utilities",
    "Industrials",
];

fn universe(size: usize) -> Universe {
    let mut rng = StdRng::seed_from_u64(7);
    let records = (0..size)
        .map(|i| CompanyRecord {
            market_cap: FeedValue::from(rng.gen_range(1e9..1e13)),
            revenue_growth: FeedValue::from(rng.gen_range(-0.3..0.6)),
            roa: FeedValue::from(rng.gen_range(-0.05..0.25)),
            debt_to_equity: FeedValue::from(rng.gen_range(0.0..3.0)),
            current_ratio: FeedValue::from(rng.gen_range(0.3..4.0)),
            ev_ebitda: FeedValue::from(rng.gen_range(4.0..40.0)),
            ..CompanyRecord::new(format!("T{i:05}"), format!("Company {i}"), SECTORS[i % SECTORS.len()])
        })
        .collect();
    Universe::from_records(records).expect("generated tickers are unique")
}

fn benchmark_compute(c: &mut Criterion) {
    let engine = Engine::default();
    let mut group = c.benchmark_group("compute");

    for size in [50, 500, 5_000] {
        let universe = universe(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &universe, |b, u| {
            b.iter(|| engine.compute(black_box(u)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_compute);
criterion_main!(benches);
