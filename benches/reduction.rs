use criterion::{criterion_group, criterion_main, Criterion};
use rowspace::{ef, inverse, null_space, qr_algorithm, qr_factorize, rref, Matrix, Scalar};

// ---------------------------------------------------------------------------
// Helpers: well-conditioned integer matrices
// ---------------------------------------------------------------------------

fn diag_dominant(n: usize) -> Matrix {
    Matrix::from_fn(n, n, |i, j| {
        let off = ((i * 7 + j * 3) % 5) as i64 - 2;
        Scalar::int(if i == j { 4 * n as i64 + off } else { off })
    })
}

fn rank_deficient(n: usize) -> Matrix {
    Matrix::from_fn(n, n + 2, |i, j| Scalar::int(((i % 3 + 1) * (j + 1)) as i64))
}

// ---------------------------------------------------------------------------
// Row reduction
// ---------------------------------------------------------------------------

fn echelon(c: &mut Criterion) {
    let mut g = c.benchmark_group("echelon");
    for n in [4, 8, 16] {
        let exact = diag_dominant(n);
        let float = exact.to_inexact();
        g.bench_function(format!("exact_{n}"), |b| b.iter(|| ef(std::hint::black_box(&exact))));
        g.bench_function(format!("float_{n}"), |b| b.iter(|| ef(std::hint::black_box(&float))));
    }
    g.finish();
}

fn reduced(c: &mut Criterion) {
    let mut g = c.benchmark_group("rref");
    let a = diag_dominant(8);
    g.bench_function("from_matrix_8", |b| b.iter(|| rref(std::hint::black_box(&a))));
    let stage = ef(&a);
    g.bench_function("from_echelon_8", |b| b.iter(|| rref(std::hint::black_box(&stage))));
    g.finish();
}

// ---------------------------------------------------------------------------
// Derived queries
// ---------------------------------------------------------------------------

fn queries(c: &mut Criterion) {
    let mut g = c.benchmark_group("queries");
    let a = diag_dominant(8);
    g.bench_function("inverse_8", |b| b.iter(|| inverse(std::hint::black_box(&a))));
    let d = rank_deficient(6);
    g.bench_function("null_space_6x8", |b| b.iter(|| null_space(std::hint::black_box(&d))));
    g.finish();
}

fn qr(c: &mut Criterion) {
    let mut g = c.benchmark_group("qr");
    let a = diag_dominant(4);
    g.bench_function("factorize_exact_4", |b| b.iter(|| qr_factorize(std::hint::black_box(&a))));
    let f = a.to_inexact();
    g.bench_function("factorize_float_4", |b| b.iter(|| qr_factorize(std::hint::black_box(&f))));
    let s = Matrix::from_ints(3, 3, &[2, -1, 0, -1, 2, -1, 0, -1, 2]).unwrap();
    g.bench_function("algorithm_3", |b| b.iter(|| qr_algorithm(std::hint::black_box(&s))));
    g.finish();
}

criterion_group!(benches, echelon, reduced, queries, qr);
criterion_main!(benches);
