use sampling::source::{SEED_WORDS, Source, new_seed, seed_from_words};

use crate::{
    CloudKey, EngineError, EngineResult, HomomorphicEngine, LweCiphertext, LweSecret, ParameterSet, ReaderFrom, WriterTo,
    encode_bit,
};

/// [`HomomorphicEngine`] over binary-key LWE on the 32-bit torus.
///
/// Key generation is a pure function of `(security_level, seed)`.
/// Encryption draws its randomness from sources owned by the engine.
pub struct LweBitEngine {
    source_xa: Source,
    source_xe: Source,
}

impl LweBitEngine {
    pub fn new(seed: [u8; 32]) -> Self {
        let mut source: Source = Source::new(seed);
        Self {
            source_xa: source.branch(),
            source_xe: source.branch(),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(new_seed())
    }
}

impl Default for LweBitEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn check_dimension(expected: usize, actual: usize) -> EngineResult<()> {
    if expected != actual {
        return Err(EngineError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

fn read_exact<T: ReaderFrom>(bytes: &[u8]) -> EngineResult<T> {
    let mut reader: &[u8] = bytes;
    let value: T = T::read_from(&mut reader)?;
    if !reader.is_empty() {
        return Err(EngineError::InvalidData(format!(
            "{} trailing bytes after key",
            reader.len()
        )));
    }
    Ok(value)
}

fn write_all<T: WriterTo>(value: &T) -> EngineResult<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    value.write_to(&mut buf)?;
    Ok(buf)
}

impl HomomorphicEngine for LweBitEngine {
    type SecretKey = LweSecret;
    type CloudKey = CloudKey;
    type Ciphertext = LweCiphertext;

    fn generate_key_pair(&mut self, security_level: u32, seed: &[u32]) -> EngineResult<(LweSecret, CloudKey)> {
        let params: ParameterSet = ParameterSet::for_security_level(security_level)?;
        let seed: [u8; 32] = seed_from_words(seed).ok_or(EngineError::SeedTooLong {
            len: seed.len(),
            max: SEED_WORDS,
        })?;

        let mut source: Source = Source::new(seed);
        let mut source_xs: Source = source.branch();
        let mut source_xa: Source = source.branch();
        let mut source_xe: Source = source.branch();

        let mut sk: LweSecret = LweSecret::alloc(params);
        sk.fill_binary_prob(0.5, &mut source_xs);

        let mut ck: CloudKey = CloudKey::alloc(params);
        ck.encrypt_sk(&sk, &mut source_xa, &mut source_xe)?;

        Ok((sk, ck))
    }

    fn encrypt_bit(&mut self, bit: bool, sk: &LweSecret) -> EngineResult<LweCiphertext> {
        let mut ct: LweCiphertext = LweCiphertext::alloc(sk.n());
        ct.encrypt_sk(
            encode_bit(bit),
            sk,
            &mut self.source_xa,
            &mut self.source_xe,
            sk.params.noise_stdev,
        )?;
        Ok(ct)
    }

    fn decrypt_bit(&self, ct: &LweCiphertext, sk: &LweSecret) -> EngineResult<bool> {
        check_dimension(sk.n(), ct.n())?;
        Ok(ct.decrypt_bit(sk))
    }

    fn serialize_secret_key(&self, sk: &LweSecret) -> EngineResult<Vec<u8>> {
        write_all(sk)
    }

    fn serialize_cloud_key(&self, ck: &CloudKey) -> EngineResult<Vec<u8>> {
        write_all(ck)
    }

    fn deserialize_secret_key(&self, bytes: &[u8]) -> EngineResult<LweSecret> {
        read_exact(bytes)
    }

    fn deserialize_cloud_key(&self, bytes: &[u8]) -> EngineResult<CloudKey> {
        read_exact(bytes)
    }

    fn secret_key_params(&self, sk: &LweSecret) -> ParameterSet {
        sk.params
    }

    fn cloud_key_params(&self, ck: &CloudKey) -> ParameterSet {
        ck.params
    }

    fn ciphertext_len(&self, sk: &LweSecret) -> usize {
        sk.params.ciphertext_len()
    }

    fn ciphertext_samples<'a>(&self, ct: &'a LweCiphertext) -> &'a [i32] {
        ct.samples()
    }

    fn ciphertext_from_samples(&self, samples: Vec<i32>, sk: &LweSecret) -> EngineResult<LweCiphertext> {
        check_dimension(self.ciphertext_len(sk), samples.len())?;
        LweCiphertext::from_samples(samples)
    }
}
