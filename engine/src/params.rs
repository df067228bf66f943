use std::io::{Read, Result, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use rand_distr::Normal;

use crate::{EngineError, EngineResult, ReaderFrom, WriterTo};

/// Largest security level the default parameter table covers.
pub const MAX_SECURITY_LEVEL: u32 = 128;

/// Upper bound on the LWE dimension accepted when importing keys.
pub const MAX_LWE_DIMENSION: usize = 1 << 16;

const DEFAULT_LWE_DIMENSION: usize = 630;

/// 2^-15, as a fraction of the torus.
const DEFAULT_NOISE_STDEV: f64 = 3.0517578125e-5;

/// LWE parameters shared by a key pair and every ciphertext it produces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSet {
    pub security_level: u32,
    pub n: usize,
    /// Noise standard deviation, as a fraction of the torus.
    pub noise_stdev: f64,
}

impl ParameterSet {
    pub fn for_security_level(security_level: u32) -> EngineResult<Self> {
        if security_level == 0 || security_level > MAX_SECURITY_LEVEL {
            return Err(EngineError::UnsupportedSecurityLevel(security_level));
        }
        Ok(Self {
            security_level,
            n: DEFAULT_LWE_DIMENSION,
            noise_stdev: DEFAULT_NOISE_STDEV,
        })
    }

    /// Number of torus samples in a ciphertext: the body and `n` mask entries.
    pub fn ciphertext_len(&self) -> usize {
        self.n + 1
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.n == 0 || self.n > MAX_LWE_DIMENSION {
            return Err(format!("lwe dimension {} out of range", self.n));
        }
        if !self.noise_stdev.is_finite() || self.noise_stdev <= 0.0 {
            return Err(format!("noise stdev {} is not positive", self.noise_stdev));
        }
        Ok(())
    }
}

/// Centered Gaussian of standard deviation `sigma`.
pub(crate) fn gaussian(sigma: f64) -> EngineResult<Normal<f64>> {
    Normal::new(0.0, sigma).map_err(|e| EngineError::InvalidParameters(e.to_string()))
}

impl WriterTo for ParameterSet {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u32::<LittleEndian>(self.security_level)?;
        writer.write_u64::<LittleEndian>(self.n as u64)?;
        writer.write_f64::<LittleEndian>(self.noise_stdev)
    }
}

impl ReaderFrom for ParameterSet {
    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let params = Self {
            security_level: reader.read_u32::<LittleEndian>()?,
            n: reader.read_u64::<LittleEndian>()? as usize,
            noise_stdev: reader.read_f64::<LittleEndian>()?,
        };
        params
            .validate()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(params)
    }
}
