mod common;

use common::{SEED, test_engine};
use keyring::{
    Bit, DotenvStore, EnvStore, KeyStore, Keyring, KeyringError, MemoryStore, Stage, SECRET_KEY_ENTRY,
    ciphertext_entry,
};
use serial_test::{parallel, serial};

fn roundtrip<S: KeyStore>(store: S) {
    let mut keyring = Keyring::new(test_engine(), store);
    let names = keyring.ensure_keys(110, &SEED).unwrap();
    let n = keyring.ciphertext_len(&names.secret).unwrap();

    for bit in [Bit::One, Bit::Zero] {
        let token = keyring.encrypt_bit(bit, &names.secret).unwrap();
        assert_eq!(keyring.decrypt_bit(&token, &names.secret, n).unwrap(), bit);
    }
}

#[test]
#[parallel]
fn roundtrip_memory_store() {
    roundtrip(MemoryStore::new());
}

#[test]
#[parallel]
fn roundtrip_dotenv_store() {
    let dir = tempfile::tempdir().unwrap();
    roundtrip(DotenvStore::new(dir.path().join(".env")));
}

#[test]
#[serial]
fn roundtrip_env_store() {
    roundtrip(EnvStore::new("KEYRING_E2E_"));
}

#[test]
#[parallel]
fn keys_survive_reopening_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");

    let token = {
        let mut keyring = Keyring::new(test_engine(), DotenvStore::new(&path));
        keyring.ensure_keys(110, &SEED).unwrap();
        keyring.encrypt_bit(Bit::One, SECRET_KEY_ENTRY).unwrap()
    };

    let keyring = Keyring::new(test_engine(), DotenvStore::new(&path));
    let n = keyring.ciphertext_len(SECRET_KEY_ENTRY).unwrap();
    assert_eq!(keyring.decrypt_bit(&token, SECRET_KEY_ENTRY, n).unwrap(), Bit::One);
}

#[test]
#[parallel]
fn ciphertext_is_full_range_decimal() {
    let mut keyring = Keyring::new(test_engine(), MemoryStore::new());
    keyring.ensure_keys(110, &SEED).unwrap();
    let n = keyring.ciphertext_len(SECRET_KEY_ENTRY).unwrap();
    let token = keyring.encrypt_bit(Bit::One, SECRET_KEY_ENTRY).unwrap();

    let samples: Vec<i64> = token.split(',').map(|t| t.parse().unwrap()).collect();
    assert_eq!(samples.len(), n);
    assert!(samples.iter().any(|x| *x < 0));
    assert!(samples.iter().any(|x| x.abs() > 9));
}

#[test]
#[parallel]
fn truncated_ciphertext_is_rejected() {
    let mut keyring = Keyring::new(test_engine(), MemoryStore::new());
    keyring.ensure_keys(110, &SEED).unwrap();
    let n = keyring.ciphertext_len(SECRET_KEY_ENTRY).unwrap();
    let token = keyring.encrypt_bit(Bit::One, SECRET_KEY_ENTRY).unwrap();

    let truncated = token.rsplit_once(',').unwrap().0;
    let err = keyring.decrypt_bit(truncated, SECRET_KEY_ENTRY, n).unwrap_err();
    assert!(matches!(
        err,
        KeyringError::LengthMismatch { expected, actual } if expected == n && actual == n - 1
    ));
}

#[test]
#[parallel]
fn malformed_ciphertext_is_rejected() {
    let mut keyring = Keyring::new(test_engine(), MemoryStore::new());
    keyring.ensure_keys(110, &SEED).unwrap();
    let n = keyring.ciphertext_len(SECRET_KEY_ENTRY).unwrap();
    let token = keyring.encrypt_bit(Bit::Zero, SECRET_KEY_ENTRY).unwrap();

    let corrupted = token.replacen(',', ",x", 1);
    assert!(matches!(
        keyring.decrypt_bit(&corrupted, SECRET_KEY_ENTRY, n),
        Err(KeyringError::MalformedToken { index: 1, .. })
    ));
}

#[test]
#[parallel]
fn expected_length_must_match_key() {
    let mut keyring = Keyring::new(test_engine(), MemoryStore::new());
    keyring.ensure_keys(110, &SEED).unwrap();
    let token = keyring.encrypt_bit(Bit::One, SECRET_KEY_ENTRY).unwrap();
    let short = token.rsplit_once(',').unwrap().0;
    let n = keyring.ciphertext_len(SECRET_KEY_ENTRY).unwrap();

    assert!(matches!(
        keyring.decrypt_bit(short, SECRET_KEY_ENTRY, n - 1),
        Err(KeyringError::Engine {
            stage: Stage::CiphertextImport,
            ..
        })
    ));
}

#[test]
#[parallel]
fn stored_ciphertext_roundtrip() {
    let mut keyring = Keyring::new(test_engine(), MemoryStore::new());
    keyring.ensure_keys(110, &SEED).unwrap();

    let slot = ciphertext_entry("message");
    assert_eq!(slot, "CIPHERTEXT_MESSAGE");
    let token = keyring.encrypt_bit_into(Bit::One, SECRET_KEY_ENTRY, &slot).unwrap();
    assert_eq!(keyring.store().get(&slot).unwrap(), token);
    assert_eq!(keyring.decrypt_stored_bit(&slot, SECRET_KEY_ENTRY).unwrap(), Bit::One);
}

#[test]
#[parallel]
fn missing_key() {
    let mut keyring = Keyring::new(test_engine(), MemoryStore::new());
    assert!(matches!(
        keyring.encrypt_bit(Bit::One, SECRET_KEY_ENTRY),
        Err(KeyringError::KeyNotFound(name)) if name == SECRET_KEY_ENTRY
    ));
    assert!(matches!(
        keyring.decrypt_bit("1,2", "secret", 2),
        Err(KeyringError::KeyNotFound(_))
    ));
}

#[test]
#[parallel]
fn corrupted_key_entry() {
    let mut store = MemoryStore::new();
    store.set(SECRET_KEY_ENTRY, "%%%").unwrap();
    let mut keyring = Keyring::new(test_engine(), store);
    assert!(matches!(
        keyring.encrypt_bit(Bit::One, SECRET_KEY_ENTRY),
        Err(KeyringError::Decoding { .. })
    ));

    // Valid base64, but not a key export.
    keyring.store_mut().set(SECRET_KEY_ENTRY, "AAAA").unwrap();
    assert!(matches!(
        keyring.encrypt_bit(Bit::One, SECRET_KEY_ENTRY),
        Err(KeyringError::Engine {
            stage: Stage::KeyImport,
            ..
        })
    ));
}
