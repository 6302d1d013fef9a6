use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pallas::{Affine, Group, Projective, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> ScalarField {
    ScalarField::random(rng)
}

fn bench_projective_double(c: &mut Criterion) {
    let g = Projective::generator();
    c.bench_function("projective_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_projective_add(c: &mut Criterion) {
    let g = Projective::generator();
    let h = g.double();
    c.bench_function("projective_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_projective_scalar_mul_windowed(c: &mut Criterion) {
    let g = Projective::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("projective_scalar_mul_windowed", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul_windowed(black_box(&scalar))))
    });
}

fn bench_mul_generator(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("mul_generator", |bencher| {
        bencher.iter(|| black_box(Affine::mul_generator(black_box(&scalar))))
    });
}

fn bench_double_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(43);
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);
    let point = Affine::mul_generator(&random_scalar(&mut rng));

    c.bench_function("double_scalar_mul_basepoint", |bencher| {
        bencher.iter(|| {
            black_box(Affine::double_scalar_mul_basepoint(
                black_box(&a),
                black_box(&b),
                black_box(&point),
            ))
        })
    });
}

fn bench_decompress(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(44);
    let point = Affine::mul_generator(&random_scalar(&mut rng));
    let compressed = point.compress().expect("finite point");

    c.bench_function("decompress", |bencher| {
        bencher.iter(|| black_box(Affine::decompress(black_box(&compressed))))
    });
}

criterion_group!(
    benches,
    bench_projective_double,
    bench_projective_add,
    bench_projective_scalar_mul_windowed,
    bench_mul_generator,
    bench_double_scalar_mul,
    bench_decompress
);
criterion_main!(benches);
