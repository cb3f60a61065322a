//! Token operation benchmarks
//!
//! Measures the hot paths a wallet or requester hits per deep link:
//! canonical encoding, signing, verification and the transport codec.
//!
//! Run with: `cargo bench --bench token_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wallet_link::token::{canonical, deserialize, serialize};
use wallet_link::{
    deep_link::query, Address, Keypair, LinkWalletRequest, Token, TokenWithSig, VerifyOptions,
};

fn sample_claims(keypair: &Keypair) -> Token {
    Token::new(
        1_610_000_000,
        keypair.address().to_b58(),
        "com.tacos",
        "com.helium.mobile.wallet",
        "tacos://",
        "Tacos",
    )
}

fn signed_token(keypair: &Keypair) -> TokenWithSig {
    let claims = sample_claims(keypair);
    let signature = keypair.sign_bytes(&canonical::encode(&claims)).to_vec();
    TokenWithSig::new(claims, signature)
}

/// Benchmark canonical message encoding
fn bench_canonical_encode(c: &mut Criterion) {
    let keypair = Keypair::from_seed(&[7u8; 32]);
    let claims = sample_claims(&keypair);

    let mut group = c.benchmark_group("canonical");
    group.throughput(Throughput::Bytes(canonical::encode(&claims).len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| black_box(canonical::encode(black_box(&claims))))
    });
    group.finish();
}

/// Benchmark token signing
fn bench_sign(c: &mut Criterion) {
    let keypair = Keypair::from_seed(&[7u8; 32]);
    let claims = sample_claims(&keypair);

    c.bench_function("token_sign", |b| {
        b.iter(|| {
            let message = canonical::encode(black_box(&claims));
            black_box(keypair.sign_bytes(&message))
        })
    });
}

/// Benchmark full token verification
fn bench_verify(c: &mut Criterion) {
    let keypair = Keypair::from_seed(&[7u8; 32]);
    let token = signed_token(&keypair);
    let options = VerifyOptions::default();

    c.bench_function("token_verify", |b| {
        b.iter(|| black_box(wallet_link::verify_token(black_box(&token), &options)))
    });
}

/// Benchmark address decoding
fn bench_address_decode(c: &mut Criterion) {
    let address = Keypair::from_seed(&[7u8; 32]).address().to_b58();

    c.bench_function("address_from_b58", |b| {
        b.iter(|| black_box(Address::from_b58(black_box(&address))))
    });
}

/// Benchmark transport serialize/deserialize
fn bench_transport(c: &mut Criterion) {
    let token = signed_token(&Keypair::from_seed(&[7u8; 32]));
    let text = serialize(&token).unwrap();

    let mut group = c.benchmark_group("transport");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("serialize", |b| {
        b.iter(|| black_box(serialize(black_box(&token))))
    });
    group.bench_function("deserialize", |b| {
        b.iter(|| black_box(deserialize(black_box(&text))))
    });
    group.finish();
}

/// Benchmark deep-link query encoding
fn bench_query(c: &mut Criterion) {
    let request = LinkWalletRequest::new("com.tacos", "tacos://callback?x=1", "Tacos & Co");
    let text = query::stringify(&request);

    c.bench_function("query_stringify", |b| {
        b.iter(|| black_box(query::stringify(black_box(&request))))
    });
    c.bench_function("query_parse", |b| {
        b.iter(|| black_box(query::parse(black_box(&text))))
    });
}

criterion_group!(
    benches,
    bench_canonical_encode,
    bench_sign,
    bench_verify,
    bench_address_decode,
    bench_transport,
    bench_query,
);

criterion_main!(benches);
