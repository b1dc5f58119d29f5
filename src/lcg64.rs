use core::fmt;
use wrapping_arithmetic::wrappit;
use crate::engine::{check_split, impl_rand_core, Engine, Parallel};
use crate::error::{EngineError, ParseError};
use crate::lcg::{geometric_sum, get_jump, get_state};
use crate::text::{read_tuple, TextIo, TextReader};
use crate::bits::Word;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Multiplier and increment of a 64-bit LCG.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Lcg64Parameter {
    pub a: u64,
    pub b: u64,
}

impl Lcg64Parameter {
    pub const DEFAULT: Lcg64Parameter = Lcg64Parameter { a: crate::LCG64_DEFAULT_A, b: 1 };
    /// Multipliers from L'Ecuyer's tables of good lattice structure.
    pub const LECUYER1: Lcg64Parameter = Lcg64Parameter { a: 2862933555777941757, b: 1 };
    pub const LECUYER2: Lcg64Parameter = Lcg64Parameter { a: 3202034522624059733, b: 1 };
    pub const LECUYER3: Lcg64Parameter = Lcg64Parameter { a: 3935559000370003845, b: 1 };
}

impl Default for Lcg64Parameter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Plain 64-bit linear congruential generator r = a r + b (mod 2**64).
/// Output is the state after stepping. Low bits have short periods, so
/// prefer `Lcg64Shift` unless bit-exact LCG output is needed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Lcg64 {
    parameter: Lcg64Parameter,
    r: u64,
}

impl Lcg64 {
    /// Default parameters with state set to seed.
    pub fn new(seed: u64) -> Self {
        Lcg64 { parameter: Lcg64Parameter::DEFAULT, r: seed }
    }

    /// Custom parameters with state 0.
    pub fn with_parameter(parameter: Lcg64Parameter) -> Self {
        Lcg64 { parameter, r: 0 }
    }

    pub fn from_parts(parameter: Lcg64Parameter, r: u64) -> Self {
        Lcg64 { parameter, r }
    }

    #[inline]
    pub fn parameter(&self) -> Lcg64Parameter {
        self.parameter
    }

    #[inline]
    pub fn state(&self) -> u64 {
        self.r
    }

    /// Sets the state. Parameters are kept.
    pub fn seed(&mut self, seed: u64) {
        self.r = seed;
    }

    /// Resets parameters and state to the default-constructed engine.
    pub fn seed_default(&mut self) {
        *self = Self::default();
    }

    /// Builds the state from two draws of another engine, high word first.
    #[wrappit]
    pub fn seed_from<G: Engine>(&mut self, g: &mut G) {
        let mut r: u64 = 0;
        for _ in 0 .. 2 {
            r = (r << 32) + g.next().to_u64();
        }
        self.r = r;
    }

    /// Advances to the next state and returns it.
    #[wrappit] #[inline]
    pub(crate) fn step(&mut self) -> u64 {
        self.r = self.parameter.a * self.r + self.parameter.b;
        self.r
    }

    /// Steps the state back by one application of the current parameters.
    pub(crate) fn backward(&mut self) {
        // The affine map has order 2**64, so 2**64 - 1 steps invert one step.
        self.r = get_state(self.parameter.a, self.parameter.b, self.r, u64::MAX);
    }

    /// Text body shared with the mixed variant: `(a b) (r)`.
    pub(crate) fn write_body(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {}) ({})", self.parameter.a, self.parameter.b, self.r)
    }

    /// Reads the text body after the name. The parameter block is optional;
    /// a bare status uses the defaults.
    pub(crate) fn read_body(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        let mut lookahead = reader.clone();
        let parameter = match read_tuple::<u64, 2>(&mut lookahead) {
            Ok([a, b]) => {
                *reader = lookahead;
                reader.delim(' ')?;
                Lcg64Parameter { a, b }
            }
            Err(_) => Lcg64Parameter::DEFAULT,
        };
        let [r] = read_tuple::<u64, 1>(reader)?;
        reader.delim(']')?;
        Ok(Lcg64 { parameter, r })
    }
}

impl Engine for Lcg64 {
    type Output = u64;
    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;

    #[inline]
    fn next(&mut self) -> u64 {
        self.step()
    }

    fn discard(&mut self, n: u64) {
        if n >= 1 << 32 {
            tracing::trace!(steps = n, "lcg64 jump ahead");
        }
        self.r = get_state(self.parameter.a, self.parameter.b, self.r, n);
    }

    fn name(&self) -> String {
        "lcg64".to_string()
    }
}

impl Parallel for Lcg64 {
    fn split(&mut self, s: u32, n: u32) -> Result<(), EngineError> {
        check_split(s, n)?;
        if s > 1 {
            self.jump(n as u64 + 1);
            let a = self.parameter.a;
            let b = self.parameter.b.wrapping_mul(geometric_sum(a, s as u64));
            let (a, _) = get_jump(a, 0, s as u64);
            self.parameter = Lcg64Parameter { a, b };
            self.backward();
            tracing::debug!(streams = s, index = n, "lcg64 split");
        }
        Ok(())
    }

    #[wrappit]
    fn jump2(&mut self, s: u32) {
        let mut m = self.parameter.a;
        let mut p = self.parameter.b;
        for _ in 0 .. s {
            p = (m + 1) * p;
            m *= m;
        }
        self.r = m * self.r + p;
    }
}

impl_rand_core!(Lcg64);

impl fmt::Display for Lcg64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[lcg64 ")?;
        self.write_body(f)?;
        write!(f, "]")
    }
}

impl TextIo for Lcg64 {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str("[lcg64 ")?;
        Self::read_body(reader)
    }
}

impl core::str::FromStr for Lcg64 {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}
