use naclkit::Nonce;
use naclkit::box_::{generate_keypair, precompute, seal, seal_after_precomputation};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_precompute(c: &mut Criterion) {
    let alice = generate_keypair();
    let bob = generate_keypair();

    c.bench_function("box precompute", |b| {
        b.iter(|| precompute(black_box(&bob.public_key), &alice.private_key))
    });
}

pub fn bench_box_seal(c: &mut Criterion) {
    let alice = generate_keypair();
    let bob = generate_keypair();
    let nonce = Nonce::from_bytes([0u8; 24]);
    let message = [0u8; 64];
    let shared = precompute(&bob.public_key, &alice.private_key);

    c.bench_function("box seal 64 bytes", |b| {
        b.iter(|| seal(black_box(&message), &nonce, &bob.public_key, &alice.private_key))
    });

    c.bench_function("box seal_after_precomputation 64 bytes", |b| {
        b.iter(|| seal_after_precomputation(black_box(&message), &nonce, &shared))
    });
}

criterion_group!(benches, bench_precompute, bench_box_seal);
criterion_main!(benches);
