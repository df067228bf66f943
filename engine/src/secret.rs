use std::fmt;
use std::io::{Read, Result, Write};

use byteorder::WriteBytesExt;
use sampling::source::Source;
use zeroize::Zeroize;

use crate::serialization::{read_i32_vec, read_tag, write_i32_vec};
use crate::{ParameterSet, ReaderFrom, WriterTo};

pub(crate) const TAG_SECRET_KEY: u8 = 0x53;

/// Binary LWE secret. Coefficients are wiped when the key is dropped.
#[derive(Clone, PartialEq)]
pub struct LweSecret {
    pub(crate) params: ParameterSet,
    pub(crate) data: Vec<i32>,
}

impl LweSecret {
    pub fn alloc(params: ParameterSet) -> Self {
        Self {
            data: vec![0; params.n],
            params,
        }
    }

    pub fn n(&self) -> usize {
        self.data.len()
    }

    pub fn fill_binary_prob(&mut self, prob: f64, source: &mut Source) {
        self.data
            .iter_mut()
            .for_each(|x| *x = source.next_bool(prob) as i32);
    }
}

impl Drop for LweSecret {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl fmt::Debug for LweSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LweSecret")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl WriterTo for LweSecret {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u8(TAG_SECRET_KEY)?;
        self.params.write_to(writer)?;
        write_i32_vec(writer, &self.data)
    }
}

impl ReaderFrom for LweSecret {
    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        read_tag(reader, TAG_SECRET_KEY)?;
        let params: ParameterSet = ParameterSet::read_from(reader)?;
        let data: Vec<i32> = read_i32_vec(reader, params.n)?;
        let sk = Self { params, data };
        if sk.data.iter().any(|x| *x != 0 && *x != 1) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "secret coefficient is not binary",
            ));
        }
        Ok(sk)
    }
}
