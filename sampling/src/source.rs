use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::RngCore;
use rand_distr::{Distribution, Normal};

const MAXF64: f64 = 9007199254740992.0;

/// Number of `u32` words a [`Source`] seed can hold.
pub const SEED_WORDS: usize = 8;

/// Deterministic randomness source backed by ChaCha8.
pub struct Source {
    source: ChaCha8Rng,
}

/// Draws a fresh 32-byte seed from the operating system.
pub fn new_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

/// Packs up to [`SEED_WORDS`] words little-endian into a 32-byte seed.
///
/// Unused bytes stay zero, so `[1]` and `[1, 0]` map to the same seed.
/// Returns `None` if `words` does not fit.
pub fn seed_from_words(words: &[u32]) -> Option<[u8; 32]> {
    if words.len() > SEED_WORDS {
        return None;
    }
    let mut seed = [0u8; 32];
    seed.chunks_exact_mut(4)
        .zip(words)
        .for_each(|(chunk, w)| chunk.copy_from_slice(&w.to_le_bytes()));
    Some(seed)
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    /// Uniform element of the 32-bit torus.
    #[inline(always)]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Returns `true` with probability `prob`.
    #[inline(always)]
    pub fn next_bool(&mut self, prob: f64) -> bool {
        self.next_f64(0.0, 1.0) < prob
    }

    /// Samples `dist`, rejecting draws whose magnitude exceeds `bound`.
    pub fn next_normal(&mut self, dist: &Normal<f64>, bound: f64) -> f64 {
        loop {
            let x: f64 = dist.sample(self);
            if x.abs() <= bound {
                return x;
            }
        }
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
