use seqlist::SeqList;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_sequential_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_append");

    for size in [10usize, 100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("from_default_capacity", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut list = SeqList::new();
                    for i in 0..size {
                        list.append(black_box(i));
                    }
                    black_box(list.len())
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("from_capacity_one", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut list = SeqList::with_capacity(1).unwrap();
                    for i in 0..size {
                        list.append(black_box(i));
                    }
                    black_box(list.capacity())
                });
            },
        );
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100usize, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("get_operations", size),
            size,
            |b, &size| {
                let list: SeqList<usize> = (0..size).collect();

                b.iter(|| {
                    for i in 0..size {
                        black_box(list.get(i).ok());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_positional_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional_edits");

    for size in [100usize, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("insert_remove_front", size),
            size,
            |b, &size| {
                let mut list: SeqList<usize> = (0..size).collect();

                b.iter(|| {
                    list.insert_at(0, black_box(size)).unwrap();
                    black_box(list.remove_at(0).unwrap())
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("insert_all_middle", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut list: SeqList<usize> = (0..size).collect();
                    black_box(list.insert_all_at(size / 2, 0..size).unwrap())
                });
            },
        );
    }
    group.finish();
}

fn bench_bulk_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_removal");

    for size in [1000usize, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("remove_matching_half", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut list: SeqList<usize> = (0..size).collect();
                    black_box(list.remove_matching(|v| v % 2 == 0))
                });
            },
        );
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100usize, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("full_iteration", size),
            size,
            |b, &size| {
                let list: SeqList<usize> = (0..size).collect();

                b.iter(|| {
                    for value in black_box(&list) {
                        black_box(value);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [1000usize, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("scrambled", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut list: SeqList<usize> =
                        (0..size).map(|i| (i * 7919) % 10_007).collect();
                    list.sort();
                    black_box(list.first().copied())
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("already_sorted", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut list: SeqList<usize> = (0..size).collect();
                    list.sort();
                    black_box(list.last().copied())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_append,
    bench_random_access,
    bench_positional_edits,
    bench_bulk_removal,
    bench_iterator_performance,
    bench_sort
);
criterion_main!(benches);
