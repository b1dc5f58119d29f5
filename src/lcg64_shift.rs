use core::fmt;
use crate::engine::{impl_rand_core, Engine, Parallel};
use crate::error::{EngineError, ParseError};
use crate::lcg64::{Lcg64, Lcg64Parameter};
use crate::text::{TextIo, TextReader};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// The shifted variant runs the same underlying LCG.
pub type Lcg64ShiftParameter = Lcg64Parameter;

/// 64-bit LCG with a xorshift output transformation.
/// The state is the LCG value r; output is a mix of the state after stepping.
/// Period is 2**64 with the built-in parameters. Supports O(log n) jumps
/// and leapfrog splitting into parallel streams.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Lcg64Shift {
    lcg: Lcg64,
}

impl Lcg64Shift {
    /// Default parameters with state set to seed.
    pub fn new(seed: u64) -> Self {
        Lcg64Shift { lcg: Lcg64::new(seed) }
    }

    /// Custom parameters with state 0.
    pub fn with_parameter(parameter: Lcg64ShiftParameter) -> Self {
        Lcg64Shift { lcg: Lcg64::with_parameter(parameter) }
    }

    pub fn from_parts(parameter: Lcg64ShiftParameter, r: u64) -> Self {
        Lcg64Shift { lcg: Lcg64::from_parts(parameter, r) }
    }

    #[inline]
    pub fn parameter(&self) -> Lcg64ShiftParameter {
        self.lcg.parameter()
    }

    #[inline]
    pub fn state(&self) -> u64 {
        self.lcg.state()
    }

    /// Sets the state. Parameters are kept.
    pub fn seed(&mut self, seed: u64) {
        self.lcg.seed(seed);
    }

    /// Resets parameters and state to the default-constructed engine.
    pub fn seed_default(&mut self) {
        *self = Self::default();
    }

    /// Builds the state from two draws of another engine, high word first.
    pub fn seed_from<G: Engine>(&mut self, g: &mut G) {
        self.lcg.seed_from(g);
    }
}

impl Engine for Lcg64Shift {
    type Output = u64;
    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;

    #[inline]
    fn next(&mut self) -> u64 {
        let mut t = self.lcg.step();
        t ^= t >> 17;
        t ^= t << 31;
        t ^= t >> 8;
        t
    }

    fn discard(&mut self, n: u64) {
        self.lcg.discard(n);
    }

    fn name(&self) -> String {
        "lcg64_shift".to_string()
    }
}

impl Parallel for Lcg64Shift {
    fn split(&mut self, s: u32, n: u32) -> Result<(), EngineError> {
        self.lcg.split(s, n)
    }

    fn jump2(&mut self, s: u32) {
        self.lcg.jump2(s);
    }
}

impl_rand_core!(Lcg64Shift);

impl fmt::Display for Lcg64Shift {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[lcg64_shift ")?;
        self.lcg.write_body(f)?;
        write!(f, "]")
    }
}

impl TextIo for Lcg64Shift {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str("[lcg64_shift ")?;
        Ok(Lcg64Shift { lcg: Lcg64::read_body(reader)? })
    }
}

impl core::str::FromStr for Lcg64Shift {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}
