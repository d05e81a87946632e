//! Benchmarks for request aggregation and chart painting
//!
//! Run with: cargo bench

use checkinn_dashboard::aggregate::*;
use checkinn_dashboard::chart::{ChartBackend, LineChartConfig, SvgChartBackend};
use checkinn_dashboard::requests::Request;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const DEPARTMENTS: [&str; 5] = ["Housekeeping", "Front Desk", "Kitchen", "Maintenance", "Spa"];

fn create_test_requests(count: usize, hotels: usize) -> Vec<Request> {
    (0..count)
        .map(|i| {
            Request::new(
                DEPARTMENTS[i % DEPARTMENTS.len()],
                format!("HTL{:03}", i % hotels),
            )
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100, 1000, 10000] {
        let requests = create_test_requests(size, 25);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("requests_per_hotel_{}", size), |b| {
            b.iter(|| requests_per_hotel(black_box(&requests)))
        });

        group.bench_function(format!("unique_departments_{}", size), |b| {
            b.iter(|| unique_departments(black_box(&requests)))
        });

        group.bench_function(format!("summarize_{}", size), |b| {
            b.iter(|| summarize(black_box(&requests)))
        });
    }

    group.finish();
}

fn bench_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    let backend = SvgChartBackend::default();

    for hotels in [5, 50] {
        let requests = create_test_requests(1000, hotels);
        let config = LineChartConfig::requests_per_hotel(&requests_per_hotel(&requests));

        group.bench_function(format!("paint_svg_{}_hotels", hotels), |b| {
            b.iter(|| {
                let chart = backend.create(black_box(&config)).unwrap();
                backend.destroy(chart);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_chart);
criterion_main!(benches);
