use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use engine::{HomomorphicEngine, LweBitEngine};
use keyring::codec::{blob, ciphertext};

fn bench_blob_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("blob_codec");

    let mut engine: LweBitEngine = LweBitEngine::new([0u8; 32]);
    let (sk, ck) = engine.generate_key_pair(110, &[123, 456, 789]).unwrap();

    let blobs: [(&str, Vec<u8>); 2] = [
        ("secret_key", engine.serialize_secret_key(&sk).unwrap()),
        ("cloud_key", engine.serialize_cloud_key(&ck).unwrap()),
    ];

    for (name, bytes) in blobs.iter() {
        let text: String = blob::encode(bytes);
        group.bench_with_input(BenchmarkId::new("encode", name), bytes, |b, bytes| {
            b.iter(|| blob::encode(black_box(bytes)))
        });
        group.bench_with_input(BenchmarkId::new("decode", name), &text, |b, text| {
            b.iter(|| blob::decode(black_box(text)).unwrap())
        });
    }

    group.finish();
}

fn bench_ciphertext_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("ciphertext_codec");

    let mut engine: LweBitEngine = LweBitEngine::new([0u8; 32]);
    let (sk, _) = engine.generate_key_pair(110, &[123, 456, 789]).unwrap();
    let ct = engine.encrypt_bit(true, &sk).unwrap();
    let samples: Vec<i32> = engine.ciphertext_samples(&ct).to_vec();
    let text: String = ciphertext::encode(&samples);

    group.bench_function("encode", |b| b.iter(|| ciphertext::encode(black_box(&samples))));
    group.bench_function("decode", |b| {
        b.iter(|| ciphertext::decode(black_box(&text), samples.len()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_blob_codec, bench_ciphertext_codec);
criterion_main!(benches);
