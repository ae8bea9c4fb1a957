use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand_twister::*;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut mt1 = Mt19937::with_seed(1);
    c.bench_function("Mt19937::next_word", move |b| b.iter(|| mt1.next_word()));
    let mut mt2 = Mt19937_64::with_seed(1);
    c.bench_function("Mt19937_64::next_word", move |b| b.iter(|| mt2.next_word()));
    let mut mt3 = Mt19937::with_seed(1);
    c.bench_function("Mt19937::discard(624)", move |b| b.iter(|| mt3.discard(black_box(624))));
    let mut mt4 = Mt19937_64::with_seed(1);
    c.bench_function("Mt19937_64::next_real2", move |b| b.iter(|| mt4.next_real2()));
    c.bench_function("Mt19937::seed_array", |b| b.iter(|| Mt19937::with_key(black_box(&[0x123, 0x234, 0x345, 0x456]))));
    let mut well = Well512a::new([0x9e37_79b9; 16]);
    c.bench_function("Well512a::next", move |b| b.iter(|| well.next()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
