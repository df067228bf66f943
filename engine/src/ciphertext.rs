use std::io::{Read, Result, Write};

use crate::params::MAX_LWE_DIMENSION;
use crate::serialization::write_i32_vec;
use crate::{EngineError, EngineResult, ReaderFrom, WriterTo};

use byteorder::{LittleEndian, ReadBytesExt};

/// LWE sample on the 32-bit torus.
///
/// `data[0]` is the body, `data[1..]` the mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LweCiphertext {
    pub(crate) data: Vec<i32>,
}

impl LweCiphertext {
    pub fn alloc(n: usize) -> Self {
        Self { data: vec![0; n + 1] }
    }

    /// Wraps raw samples; fails on an empty vector, which has no body.
    pub fn from_samples(data: Vec<i32>) -> EngineResult<Self> {
        if data.is_empty() {
            return Err(EngineError::DimensionMismatch {
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self { data })
    }

    pub fn n(&self) -> usize {
        self.data.len() - 1
    }

    pub fn body(&self) -> i32 {
        self.data[0]
    }

    pub fn mask(&self) -> &[i32] {
        &self.data[1..]
    }

    pub fn samples(&self) -> &[i32] {
        &self.data
    }
}

impl WriterTo for LweCiphertext {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_i32_vec(writer, &self.data)
    }
}

impl ReaderFrom for LweCiphertext {
    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let len: usize = reader.read_u64::<LittleEndian>()? as usize;
        if len == 0 || len > MAX_LWE_DIMENSION + 1 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid ciphertext len={}", len),
            ));
        }
        let mut data: Vec<i32> = vec![0; len];
        reader.read_i32_into::<LittleEndian>(&mut data)?;
        Ok(Self { data })
    }
}
