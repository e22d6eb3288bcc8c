use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparsematrix::SparseMatrix;
use std::collections::HashMap;

const SIDE: usize = 100;

fn filled_matrix() -> SparseMatrix<u64, 2> {
    let mut matrix = SparseMatrix::new(0).unwrap();
    for i in 0..SIDE {
        matrix.set([i, i], i as u64 + 1);
        matrix.set([i, SIDE - 1 - i], i as u64 + 1);
    }
    matrix
}

fn filled_map() -> HashMap<[usize; 2], u64> {
    let mut map = HashMap::new();
    for i in 0..SIDE {
        map.insert([i, i], i as u64 + 1);
        map.insert([i, SIDE - 1 - i], i as u64 + 1);
    }
    map
}

fn write_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("writes");

    group.bench_function("matrix_fill_diagonals", |b| {
        b.iter(|| black_box(filled_matrix()))
    });

    group.bench_function("hashmap_fill_diagonals", |b| b.iter(|| black_box(filled_map())));

    group.bench_function("matrix_set_and_prune", |b| {
        let mut matrix = filled_matrix();
        b.iter(|| {
            for i in 0..SIDE {
                matrix.set(black_box([i, i]), 0);
            }
            for i in 0..SIDE {
                matrix.set(black_box([i, i]), i as u64 + 1);
            }
        })
    });

    group.finish();
}

fn read_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reads");
    let matrix = filled_matrix();
    let map = filled_map();

    group.bench_function("matrix_dense_scan", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..SIDE {
                for j in 0..SIDE {
                    sum += matrix[black_box([i, j])];
                }
            }
            black_box(sum)
        })
    });

    group.bench_function("hashmap_dense_scan", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..SIDE {
                for j in 0..SIDE {
                    sum += map.get(&black_box([i, j])).copied().unwrap_or(0);
                }
            }
            black_box(sum)
        })
    });

    group.bench_function("matrix_iterate", |b| {
        b.iter(|| black_box(matrix.iter().map(|(_, v)| *v).sum::<u64>()))
    });

    group.bench_function("matrix_len", |b| b.iter(|| black_box(matrix.len())));

    group.finish();
}

criterion_group!(benches, write_benchmark, read_benchmark);
criterion_main!(benches);
