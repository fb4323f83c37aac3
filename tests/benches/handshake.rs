//! Host-to-applet round trips over the loopback channel

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use se25519_algorithms::montgomery::x25519_base;
use se25519_algorithms::MontgomeryPoint;
use se25519_host::convert::{card_point_from_montgomery, montgomery_from_card_x};
use se25519_tests::fixtures;

fn bench_requests(c: &mut Criterion) {
    let mut group = c.benchmark_group("Applet");
    let sk = fixtures::bytes32(fixtures::ALICE_SK);
    let bob = fixtures::point(fixtures::BOB_PK);

    let mut client = fixtures::client(60);
    group.bench_function("GenerateKeypair", |b| {
        b.iter(|| client.generate_keypair().unwrap())
    });
    group.bench_function("LoadPrivateKey", |b| {
        b.iter(|| client.set_private_key(black_box(&sk)).unwrap())
    });
    client.set_private_key(&sk).unwrap();
    group.bench_function("ComputeSharedSecret", |b| {
        b.iter(|| client.shared_secret(black_box(&bob)).unwrap())
    });
    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Host");
    let pk = MontgomeryPoint(x25519_base(&fixtures::bytes32(fixtures::BOB_SK)));
    let lifted = card_point_from_montgomery(&pk).unwrap();

    group.bench_function("Lift", |b| {
        b.iter(|| card_point_from_montgomery(black_box(&pk)).unwrap())
    });
    group.bench_function("ClearCofactor", |b| {
        b.iter(|| montgomery_from_card_x(black_box(&lifted[..32])).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_requests, bench_conversions);
criterion_main!(benches);
