use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use expense_tracker::{Ledger, Record};
use tempfile::TempDir;

fn seeded_ledger(dir: &TempDir, count: usize) -> Ledger {
    let mut ledger = Ledger::open(dir.path().join("expenses.json"));
    for n in 0..count {
        ledger
            .append(Record::new(n as f64, "Food", "seed"))
            .expect("seed append");
    }
    ledger
}

/// Each append rewrites the file, so cost grows with the stored count.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_append");
    for &count in &[10usize, 100, 1000] {
        group.bench_function(format!("after_{count}"), |b| {
            b.iter_batched(
                || {
                    let dir = TempDir::new().expect("temp dir");
                    let ledger = seeded_ledger(&dir, count);
                    (dir, ledger)
                },
                |(_dir, mut ledger)| {
                    ledger
                        .append(Record::new(1.0, "Bench", ""))
                        .expect("append");
                },
                BatchSize::PerIteration,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_append);
criterion_main!(benches);
