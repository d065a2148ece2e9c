use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqvec::SeqVec;

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push_back", size), size, |b, &size| {
            b.iter(|| {
                let mut seq = SeqVec::new();

                for i in 0..size {
                    black_box(seq.push_back(i).unwrap());
                }

                black_box(seq.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("at_operations", size), size, |b, &size| {
            let mut seq = SeqVec::new();

            // Pre-populate the container
            for i in 0..size {
                seq.push_back(i).unwrap();
            }

            b.iter(|| {
                for i in 0..size {
                    black_box(seq.at(i).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_front_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insertion");

    for size in [10, 100].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert_front", size), size, |b, &size| {
            b.iter(|| {
                let mut seq = SeqVec::new();

                for i in 0..size {
                    black_box(seq.insert(0, i).unwrap());
                }

                black_box(seq.len())
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("full_iteration", size),
            size,
            |b, &size| {
                let mut seq = SeqVec::new();

                // Pre-populate the container
                for i in 0..size {
                    seq.push_back(i).unwrap();
                }

                b.iter(|| {
                    for value in black_box(&seq) {
                        black_box(value);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_clone_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("try_clone", size), size, |b, &size| {
            let mut seq = SeqVec::new();

            for i in 0..size {
                seq.push_back(i).unwrap();
            }

            b.iter(|| black_box(seq.try_clone().unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_front_insertion,
    bench_iterator_performance,
    bench_clone_performance
);
criterion_main!(benches);
