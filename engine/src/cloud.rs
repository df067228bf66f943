use std::io::{Read, Result, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use sampling::source::Source;

use crate::serialization::read_tag;
use crate::{EngineResult, LweCiphertext, LweSecret, ParameterSet, ReaderFrom, WriterTo, encode_bit};

pub(crate) const TAG_CLOUD_KEY: u8 = 0x43;

/// Public evaluation material: one encryption of each secret coefficient.
///
/// Gate evaluation is not implemented; the key is generated, exported and
/// imported alongside the secret.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudKey {
    pub(crate) params: ParameterSet,
    pub(crate) keys: Vec<LweCiphertext>,
}

impl CloudKey {
    pub fn alloc(params: ParameterSet) -> Self {
        Self {
            keys: (0..params.n).map(|_| LweCiphertext::alloc(params.n)).collect(),
            params,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn encrypt_sk(&mut self, sk: &LweSecret, source_xa: &mut Source, source_xe: &mut Source) -> EngineResult<()> {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.keys.len(), sk.n());
        }

        let sigma: f64 = self.params.noise_stdev;
        self.keys
            .iter_mut()
            .zip(sk.data.iter())
            .try_for_each(|(ct, s)| ct.encrypt_sk(encode_bit(*s == 1), sk, source_xa, source_xe, sigma))
    }
}

impl WriterTo for CloudKey {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u8(TAG_CLOUD_KEY)?;
        self.params.write_to(writer)?;
        writer.write_u64::<LittleEndian>(self.keys.len() as u64)?;
        for key in &self.keys {
            key.write_to(writer)?;
        }
        Ok(())
    }
}

impl ReaderFrom for CloudKey {
    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        read_tag(reader, TAG_CLOUD_KEY)?;
        let params: ParameterSet = ParameterSet::read_from(reader)?;
        let len: usize = reader.read_u64::<LittleEndian>()? as usize;
        if len != params.n {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("params.n={} != read len={}", params.n, len),
            ));
        }
        let mut keys: Vec<LweCiphertext> = Vec::with_capacity(len);
        for _ in 0..len {
            let key = LweCiphertext::read_from(reader)?;
            if key.n() != params.n {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("params.n={} != ciphertext n={}", params.n, key.n()),
                ));
            }
            keys.push(key);
        }
        Ok(Self { params, keys })
    }
}
