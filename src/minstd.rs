use core::fmt;
use crate::engine::{impl_rand_core, Engine};
use crate::error::{EngineError, ParseError};
use crate::text::{TextIo, TextReader};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

const MODULUS: u64 = 2147483647;
const MULTIPLIER: u64 = 16807;

/// Park & Miller "minimal standard" multiplicative congruential generator.
/// Used to expand a scalar seed into the state of larger engines.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "u64", into = "u64"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Minstd {
    x: u32,
}

impl Default for Minstd {
    fn default() -> Self {
        Minstd { x: 1 }
    }
}

impl Minstd {
    /// Creates a generator from a seed. The seed is reduced modulo 2**31 - 1;
    /// 0 is a fixed point of the recurrence and is mapped to 1.
    pub fn new(seed: u64) -> Self {
        let mut minstd = Self::default();
        minstd.seed(seed);
        minstd
    }

    pub fn seed(&mut self, seed: u64) {
        let x = seed % MODULUS;
        self.x = if x == 0 { 1 } else { x as u32 };
    }

    /// Generator with state x in [1, 2**31 - 2].
    pub fn from_state(x: u64) -> Result<Self, EngineError> {
        if x == 0 || x >= MODULUS {
            return Err(EngineError::OutOfRange { name: "x", value: x.min(i64::MAX as u64) as i64, modulus: MODULUS as i64 });
        }
        Ok(Minstd { x: x as u32 })
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> u32 {
        self.x
    }
}

impl TryFrom<u64> for Minstd {
    type Error = EngineError;
    fn try_from(x: u64) -> Result<Self, EngineError> {
        Self::from_state(x)
    }
}

impl From<Minstd> for u64 {
    fn from(minstd: Minstd) -> u64 {
        minstd.x as u64
    }
}

impl Engine for Minstd {
    type Output = u32;
    const MIN: u32 = 1;
    const MAX: u32 = (MODULUS - 1) as u32;

    #[inline]
    fn next(&mut self) -> u32 {
        self.x = ((self.x as u64 * MULTIPLIER) % MODULUS) as u32;
        self.x
    }

    fn name(&self) -> String {
        "minstd".to_string()
    }
}

impl_rand_core!(Minstd);

impl fmt::Display for Minstd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[minstd ({})]", self.x)
    }
}

impl TextIo for Minstd {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str("[minstd (")?;
        let x: u64 = reader.number()?;
        reader.delim_str(")]")?;
        Ok(Minstd::from_state(x)?)
    }
}

impl core::str::FromStr for Minstd {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}
