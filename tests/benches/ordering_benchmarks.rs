//! # Taxonomy Sort Benchmarks
//!
//! | Path | Expected cost |
//! |------|---------------|
//! | Listing reorder | O(n log n) sort + n store lookups |
//! | Order submission | n store writes |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use std::time::Duration;

use ts_term_ordering::{
    InMemoryOrderStore, Principal, SortConfig, SubmitOrderRequest, Term, TermId, TermOrderingApi,
    TermOrderingHandler, TermOrderingService, TieBreak,
};

fn listing(size: u64) -> Vec<Term> {
    (1..=size)
        .map(|id| Term::new(id, format!("term-{id}")))
        .collect()
}

/// Every third term ranked, in reverse id order.
fn ranked_store(size: u64) -> Arc<InMemoryOrderStore> {
    Arc::new(InMemoryOrderStore::with_ranks(
        (1..=size)
            .filter(|id| id % 3 == 0)
            .map(|id| (TermId(id), (size - id + 1) as i64)),
    ))
}

fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder");
    group.measurement_time(Duration::from_secs(5));

    for size in [10u64, 100, 1_000, 10_000] {
        let store = ranked_store(size);
        let terms = listing(size);
        group.throughput(Throughput::Elements(size));

        for tie_break in [TieBreak::Stable, TieBreak::LastWins] {
            let service = TermOrderingService::with_config(
                Arc::clone(&store),
                SortConfig {
                    tie_break,
                    ..SortConfig::default()
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", tie_break), size),
                &terms,
                |b, terms| b.iter(|| black_box(service.reorder(terms.clone()))),
            );
        }
    }

    group.finish();
}

fn bench_submit_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_order");
    let principal = Principal::user(1);

    for size in [10u64, 100, 1_000] {
        let handler = TermOrderingHandler::new(Arc::new(InMemoryOrderStore::new()));
        let rows: Vec<String> = (1..=size)
            .map(|id| if id % 5 == 0 { String::new() } else { id.to_string() })
            .collect();
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| {
                let request = SubmitOrderRequest::from_rows(rows.iter().cloned());
                black_box(handler.handle_submit_order(&principal, request))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reorder, bench_submit_order);
criterion_main!(benches);
