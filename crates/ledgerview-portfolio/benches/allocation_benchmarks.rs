//! Benchmarks for the allocation pipeline.
//!
//! Run with: cargo bench -p ledgerview-portfolio

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use ledgerview_portfolio::{
    aggregate_with_config, assess_risk, classify_by_sector, compute_pie_slices, summarize,
    top_performers, AnalyticsConfig, Holding,
};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_holdings(n: usize) -> Vec<Holding> {
    let tags = ["stock", "crypto", "etf", "bond", "reit"];
    (0..n)
        .map(|i| Holding {
            id: format!("H{i}"),
            symbol: format!("SYM{i}"),
            name: None,
            asset_type: tags[i % tags.len()].to_string(),
            current_price: Decimal::new(1_000 + (i as i64 * 37) % 50_000, 2),
            quantity: Decimal::from(1 + (i as i64 * 13) % 500),
            average_cost: Decimal::new(1_000 + (i as i64 * 53) % 50_000, 2),
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [10, 100, 1_000, 10_000] {
        let holdings = create_holdings(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &holdings, |b, h| {
            let config = AnalyticsConfig::sequential();
            b.iter(|| aggregate_with_config(black_box(h), classify_by_sector, &config))
        });

        group.bench_with_input(BenchmarkId::new("default", size), &holdings, |b, h| {
            let config = AnalyticsConfig::default();
            b.iter(|| aggregate_with_config(black_box(h), classify_by_sector, &config))
        });
    }

    group.finish();
}

fn bench_dashboard_pipeline(c: &mut Criterion) {
    let holdings = create_holdings(250);

    c.bench_function("dashboard_pipeline_250", |b| {
        b.iter(|| {
            let groups = aggregate_with_config(
                black_box(&holdings),
                classify_by_sector,
                &AnalyticsConfig::default(),
            )
            .unwrap_or_default();
            let slices = compute_pie_slices(&groups);
            let risk = assess_risk(&groups);
            let top = top_performers(&holdings, 5);
            let summary = summarize(&holdings);
            black_box((slices, risk, top, summary))
        })
    });
}

criterion_group!(benches, bench_aggregate, bench_dashboard_pipeline);
criterion_main!(benches);
