use crate::{EngineError, HomomorphicEngine, LweBitEngine, encode_bit};

const SEED: [u32; 3] = [123, 456, 789];

#[test]
fn encrypt_decrypt_bits() {
    let mut engine = LweBitEngine::new([0u8; 32]);
    let (sk, _ck) = engine.generate_key_pair(110, &SEED).unwrap();

    for bit in [true, false, true, true, false] {
        let ct = engine.encrypt_bit(bit, &sk).unwrap();
        assert_eq!(ct.n(), sk.n());
        assert_eq!(engine.decrypt_bit(&ct, &sk).unwrap(), bit);
    }
}

#[test]
fn phase_is_close_to_message() {
    let mut engine = LweBitEngine::new([3u8; 32]);
    let (sk, _) = engine.generate_key_pair(110, &SEED).unwrap();
    let ct = engine.encrypt_bit(true, &sk).unwrap();
    let noise = ct.phase(&sk).wrapping_sub(encode_bit(true));
    // 6 sigma at 2^-15 is below 2^20 on the 32-bit torus.
    assert!(noise.unsigned_abs() < 1 << 20);
}

#[test]
fn cloud_key_decrypts_to_secret_bits() {
    let mut engine = LweBitEngine::new([0u8; 32]);
    let (sk, ck) = engine.generate_key_pair(110, &SEED).unwrap();
    assert_eq!(ck.len(), sk.n());
    ck.keys
        .iter()
        .zip(sk.data.iter())
        .for_each(|(ct, s)| assert_eq!(ct.decrypt_bit(&sk), *s == 1));
}

#[test]
fn key_generation_is_deterministic_in_seed() {
    let mut a = LweBitEngine::new([0u8; 32]);
    let mut b = LweBitEngine::new([9u8; 32]);
    let (sk_a, ck_a) = a.generate_key_pair(110, &SEED).unwrap();
    let (sk_b, ck_b) = b.generate_key_pair(110, &SEED).unwrap();
    assert_eq!(a.serialize_secret_key(&sk_a).unwrap(), b.serialize_secret_key(&sk_b).unwrap());
    assert_eq!(ck_a, ck_b);

    let (sk_c, _) = a.generate_key_pair(110, &[1, 2, 3]).unwrap();
    assert_ne!(a.serialize_secret_key(&sk_a).unwrap(), a.serialize_secret_key(&sk_c).unwrap());
}

#[test]
fn generation_errors() {
    let mut engine = LweBitEngine::new([0u8; 32]);
    assert!(matches!(
        engine.generate_key_pair(256, &SEED),
        Err(EngineError::UnsupportedSecurityLevel(256))
    ));
    assert!(matches!(
        engine.generate_key_pair(110, &[0u32; 9]),
        Err(EngineError::SeedTooLong { len: 9, max: 8 })
    ));
}

#[test]
fn samples_roundtrip_through_engine() {
    let mut engine = LweBitEngine::new([0u8; 32]);
    let (sk, _) = engine.generate_key_pair(110, &SEED).unwrap();
    let ct = engine.encrypt_bit(false, &sk).unwrap();
    let samples = engine.ciphertext_samples(&ct).to_vec();
    assert_eq!(samples.len(), engine.ciphertext_len(&sk));

    let rebuilt = engine.ciphertext_from_samples(samples.clone(), &sk).unwrap();
    assert_eq!(rebuilt, ct);

    let short = samples[..samples.len() - 1].to_vec();
    assert!(matches!(
        engine.ciphertext_from_samples(short, &sk),
        Err(EngineError::DimensionMismatch { .. })
    ));
}
