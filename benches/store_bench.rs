//! Benchmarks for Brigade stores, persistence and reports

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

use brigade::model::{Firefighter, Occurrence, OccurrenceKind, Priority, Timestamp};
use brigade::persist;
use brigade::report::location_frequency;
use brigade::store::Store;

const RECORDS: u32 = 10_000;

fn crew() -> Store<Firefighter> {
    let mut store: Store<Firefighter> = Store::new();
    for i in 0..RECORDS {
        store.create(&format!("Firefighter {}", i), "Rescue").unwrap();
    }
    store
}

fn occurrences() -> Store<Occurrence> {
    let mut store: Store<Occurrence> = Store::new();
    let reported_at = Timestamp::new(2025, 1, 1, 8, 0);
    for i in 0..RECORDS {
        let location = format!("Sector {}", i % 50);
        store
            .create(&location, OccurrenceKind::Urban, Priority::Normal, reported_at)
            .unwrap();
    }
    store
}

fn store_benchmarks(c: &mut Criterion) {
    c.bench_function("create_10k_firefighters", |b| b.iter(|| black_box(crew())));

    let store = crew();
    c.bench_function("lookup_by_id", |b| {
        b.iter(|| {
            for id in (1..=RECORDS).step_by(97) {
                black_box(store.get(id));
            }
        })
    });
}

fn persist_benchmarks(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("firefighters.bin");
    let store = crew();

    c.bench_function("save_10k_firefighters", |b| {
        b.iter(|| persist::save(&path, &store).unwrap())
    });

    persist::save(&path, &store).unwrap();
    c.bench_function("load_10k_firefighters", |b| {
        b.iter(|| persist::load::<Firefighter>(&path).unwrap())
    });
}

fn report_benchmarks(c: &mut Criterion) {
    let store = occurrences();
    c.bench_function("location_frequency_10k", |b| {
        b.iter(|| black_box(location_frequency(&store)))
    });
}

criterion_group!(benches, store_benchmarks, persist_benchmarks, report_benchmarks);
criterion_main!(benches);
