use std::io::{Read, Result, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

pub trait WriterTo {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()>;
}

pub trait ReaderFrom: Sized {
    fn read_from<R: Read>(reader: &mut R) -> Result<Self>;
}

/// Writes a length-prefixed vector of torus samples.
pub(crate) fn write_i32_vec<W: Write>(writer: &mut W, data: &[i32]) -> Result<()> {
    writer.write_u64::<LittleEndian>(data.len() as u64)?;
    data.iter().try_for_each(|x| writer.write_i32::<LittleEndian>(*x))
}

/// Reads a length-prefixed vector whose length must equal `expected`.
pub(crate) fn read_i32_vec<R: Read>(reader: &mut R, expected: usize) -> Result<Vec<i32>> {
    let len: usize = reader.read_u64::<LittleEndian>()? as usize;
    if len != expected {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("expected len={} != read len={}", expected, len),
        ));
    }
    let mut data: Vec<i32> = vec![0; len];
    reader.read_i32_into::<LittleEndian>(&mut data)?;
    Ok(data)
}

pub(crate) fn read_tag<R: Read>(reader: &mut R, expected: u8) -> Result<()> {
    let tag: u8 = reader.read_u8()?;
    if tag != expected {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid tag {tag:#04x}, expected {expected:#04x}"),
        ));
    }
    Ok(())
}
