use std::fmt;
use std::str::FromStr;

use crate::KeyringError;

/// A plaintext bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b { Bit::One } else { Bit::Zero }
    }
}

impl From<Bit> for bool {
    fn from(b: Bit) -> Self {
        b == Bit::One
    }
}

impl From<Bit> for u8 {
    fn from(b: Bit) -> Self {
        b as u8
    }
}

impl TryFrom<u8> for Bit {
    type Error = KeyringError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            _ => Err(KeyringError::InvalidBit(v.to_string())),
        }
    }
}

impl FromStr for Bit {
    type Err = KeyringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Bit::Zero),
            "1" => Ok(Bit::One),
            _ => Err(KeyringError::InvalidBit(s.to_string())),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
