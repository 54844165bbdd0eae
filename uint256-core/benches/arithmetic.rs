//! Benchmarks for the three hot paths: wide multiplication, long division,
//! and Barrett reduction.

use criterion::BatchSize;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use uint256_core::U256;
use uint256_core::div;
use uint256_core::mul;
use uint256_core::reduce;

criterion_main!(benches);
criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = wide_multiplication, long_division, barrett_reduction
);

fn random_u256(rng: &mut StdRng) -> U256 {
    U256([rng.random(), rng.random(), rng.random(), rng.random()])
}

fn wide_multiplication(criterion: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let x = random_u256(&mut rng);
    let y = random_u256(&mut rng);

    criterion.bench_function("umul 256x256", |b| b.iter(|| mul::umul(x, y)));
    criterion.bench_function("wrapping_square", |b| b.iter(|| x.wrapping_square()));
}

fn long_division(criterion: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let x = random_u256(&mut rng);
    let single_word = U256::from_u64(rng.random());
    let full_width = random_u256(&mut rng);

    criterion.bench_function("udivrem by one word", |b| {
        b.iter_batched(
            || [0u64; 4],
            |mut quot| div::udivrem(&mut quot, &x.0, single_word),
            BatchSize::SmallInput,
        )
    });
    criterion.bench_function("udivrem knuth", |b| {
        b.iter_batched(
            || [0u64; 4],
            |mut quot| div::udivrem(&mut quot, &x.0, full_width),
            BatchSize::SmallInput,
        )
    });
}

fn barrett_reduction(criterion: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let x = random_u256(&mut rng);
    let y = random_u256(&mut rng);
    let m = U256([rng.random(), rng.random(), rng.random(), rng.random() | (1 << 63)]);
    let product = mul::umul(x, y);
    let mu = reduce::reciprocal(m);

    criterion.bench_function("reciprocal", |b| b.iter(|| reduce::reciprocal(m)));
    criterion.bench_function("reduce 512 to 256", |b| {
        b.iter(|| reduce::reduce(&product, m, &mu))
    });
}
