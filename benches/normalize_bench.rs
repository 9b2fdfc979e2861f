//! Benchmarks for payload normalization and record decoding
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use octofit::demo::{seed::DEFAULT_SEED, DemoData};
use octofit::models::{decode_all, Activity, LeaderboardEntry};
use octofit::normalize;
use octofit::Resource;
use serde_json::{json, Value};

fn create_activities(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": i,
                "user_email": format!("hero{}@avengers.com", i % 12),
                "type": "running",
                "duration": 15 + i % 105,
                "calories": 100 + i % 700,
                "date": "2025-06-01"
            })
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [100, 1000, 10000] {
        let records = create_activities(size);
        let paginated = json!({"count": size, "results": records});
        let bare = Value::Array(records);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("paginated_{}", size), |b| {
            b.iter(|| normalize(black_box(paginated.clone())))
        });

        group.bench_function(format!("bare_array_{}", size), |b| {
            b.iter(|| normalize(black_box(bare.clone())))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [100, 1000, 10000] {
        let records = create_activities(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("activities_{}", size), |b| {
            b.iter(|| decode_all::<Activity>(black_box(&records)))
        });
    }

    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default();
    let data = DemoData::generate(DEFAULT_SEED, today);
    let leaderboard = data.collection(Resource::Leaderboard).unwrap();
    let entries = normalize(leaderboard);

    group.bench_function("demo_leaderboard", |b| {
        b.iter(|| decode_all::<LeaderboardEntry>(black_box(&entries)))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_decode);
criterion_main!(benches);
