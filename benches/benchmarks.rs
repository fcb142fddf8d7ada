//! Benchmarks for ringfold element, polynomial and matrix operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ringfold::{
    chinese_remainder, DenseMatrix, Element, IntegerMod, IntegerModN, MatrixRing, Monomial,
    MonomialMonoid, PolynomialRing, Rational, Rationals, Trace,
};

// Largest prime below 2^63, exercises the i128 product path
type Big = IntegerModN<9223372036854775783>;

fn bench_modn_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("ModN Operations");

    let a: Element<'static, Big> = Element::of(123456789123456789);
    let b: Element<'static, Big> = Element::of(987654321987654321);

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(a) + black_box(b))
    });

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b))
    });

    group.bench_function("inverse", |bencher| bencher.iter(|| black_box(a).inv()));

    group.bench_function("pow_small", |bencher| {
        bencher.iter(|| black_box(a).pow(1000))
    });

    group.bench_function("pow_large", |bencher| {
        bencher.iter(|| black_box(a).pow(9223372036854775782))
    });

    let z = IntegerMod::new(998244353);
    let x = Element::new(123456789, &z);
    group.bench_function("runtime_modulus_mul", |bencher| {
        bencher.iter(|| black_box(x) * black_box(x))
    });

    group.finish();
}

fn bench_rational_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rational Operations");

    let q = Rationals;
    let a = Element::new(Rational::new(355, 113).unwrap(), &q);
    let b = Element::new(Rational::new(-22, 7).unwrap(), &q);

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(a) + black_box(b))
    });

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b))
    });

    group.finish();
}

fn bench_polynomial_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial Operations");

    let ring = PolynomialRing::new(IntegerModN::<998244353>, MonomialMonoid::<u8>::new());
    for terms in [4usize, 16, 64] {
        let p = ring.from_terms((0..terms).map(|i| {
            let m: Monomial<u8> = Monomial::new()
                .with_power(0, (i % 8) as u32)
                .with_power(1, (i / 8) as u32);
            (i as i64 + 1, m)
        }));
        let p = Element::new(p, &ring);

        group.bench_with_input(BenchmarkId::new("mul", terms), &p, |bencher, p| {
            bencher.iter(|| black_box(p) * black_box(p))
        });

        group.bench_with_input(BenchmarkId::new("add", terms), &p, |bencher, p| {
            bencher.iter(|| black_box(p) + black_box(p))
        });
    }

    group.finish();
}

fn bench_matrix_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Matrix Operations");

    for n in [4usize, 16, 32] {
        let ring = MatrixRing::new(IntegerModN::<998244353>, n);
        let raw = DenseMatrix::from_fn(n, n, |r, c| ((r * 31 + c * 17) % 97) as i64 + (r == c) as i64);
        let m = Element::new(raw, &ring);

        group.bench_with_input(BenchmarkId::new("mul", n), &m, |bencher, m| {
            bencher.iter(|| black_box(m) * black_box(m))
        });

        group.bench_with_input(BenchmarkId::new("inverse", n), &m, |bencher, m| {
            bencher.iter(|| black_box(m).inv())
        });
    }

    group.finish();
}

fn bench_containers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Containers");

    for len in [8usize, 64] {
        let symbols: Vec<u8> = (0..len).map(|i| (i % 3) as u8).collect();
        let mut rotated = symbols.clone();
        rotated.rotate_left(len / 2);
        let t = Trace::from(symbols);
        let u = Trace::from(rotated);

        group.bench_with_input(BenchmarkId::new("trace_eq", len), &(t, u), |bencher, (t, u)| {
            bencher.iter(|| black_box(t) == black_box(u))
        });
    }

    group.bench_function("chinese_remainder", |bencher| {
        bencher.iter(|| chinese_remainder(black_box(&[(2, 3), (3, 4), (1, 5), (6, 7), (10, 11)])))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_modn_operations,
    bench_rational_operations,
    bench_polynomial_operations,
    bench_matrix_operations,
    bench_containers,
);
criterion_main!(benches);
