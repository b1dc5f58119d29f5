use core::fmt;
use crate::engine::{impl_rand_core, Engine, Parallel};
use crate::error::{EngineError, ParseError};
use crate::modular::reduce_2147483647;
use crate::mrg::{Mrg, MrgParameter};
use crate::text::{TextIo, TextReader};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Primitive root modulo 2**31 - 1 used as the output base.
pub const YARN_GENERATOR: u64 = 123567893;

/// g**n modulo 2**31 - 1.
fn power(n: u64) -> u64 {
    let mut p = 1;
    let mut t = YARN_GENERATOR;
    let mut n = n;
    while n > 0 {
        if n & 1 == 1 {
            p = reduce_2147483647(p * t);
        }
        t = reduce_2147483647(t * t);
        n >>= 1;
    }
    p
}

/// "Yet another random number" generator: a multiple recursive generator
/// of order K whose output x is replaced by g**x (mod 2**31 - 1), with 0 kept.
/// The exponentiation breaks the linear structure of the outputs while
/// jumps and splits still act on the underlying recurrence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Yarn<const K: usize> {
    mrg: Mrg<K>,
}

pub type Yarn2 = Yarn<2>;
pub type Yarn3 = Yarn<3>;
pub type Yarn4 = Yarn<4>;

impl<const K: usize> Default for Yarn<K> where MrgParameter<K>: Default {
    fn default() -> Self {
        Yarn { mrg: Mrg::default() }
    }
}

impl<const K: usize> Yarn<K> {
    pub fn with_parameter(parameter: MrgParameter<K>) -> Self {
        Yarn { mrg: Mrg::with_parameter(parameter) }
    }

    pub fn from_parts(parameter: MrgParameter<K>, status: [i64; K]) -> Result<Self, EngineError> {
        Ok(Yarn { mrg: Mrg::from_parts(parameter, status)? })
    }

    #[inline]
    pub fn parameter(&self) -> MrgParameter<K> {
        self.mrg.parameter()
    }

    /// Status of the underlying recurrence.
    #[inline]
    pub fn state(&self) -> [i32; K] {
        self.mrg.state()
    }

    pub fn seed(&mut self, seed: u64) {
        self.mrg.seed(seed);
    }

    pub fn seed_status(&mut self, s: [i64; K]) {
        self.mrg.seed_status(s);
    }

    pub fn seed_from<G: Engine>(&mut self, g: &mut G) {
        self.mrg.seed_from(g);
    }
}

impl<const K: usize> Engine for Yarn<K> {
    type Output = i32;
    const MIN: i32 = 0;
    const MAX: i32 = (crate::MRG_MODULUS - 1) as i32;

    #[inline]
    fn next(&mut self) -> i32 {
        match self.mrg.step() {
            0 => 0,
            x => power(x as u64) as i32,
        }
    }

    fn discard(&mut self, n: u64) {
        self.mrg.discard(n);
    }

    fn name(&self) -> String {
        format!("yarn{}", K)
    }
}

impl<const K: usize> Parallel for Yarn<K> {
    fn split(&mut self, s: u32, n: u32) -> Result<(), EngineError> {
        self.mrg.split(s, n)
    }

    fn jump2(&mut self, s: u32) {
        self.mrg.jump2(s);
    }
}

impl_rand_core!(Yarn2);
impl_rand_core!(Yarn3);
impl_rand_core!(Yarn4);

impl<const K: usize> fmt::Display for Yarn<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[yarn{} ", K)?;
        self.mrg.write_body(f)?;
        write!(f, "]")
    }
}

impl<const K: usize> TextIo for Yarn<K> where MrgParameter<K>: Default {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str(&format!("[yarn{} ", K))?;
        Ok(Yarn { mrg: Mrg::read_body(reader, MrgParameter::default())? })
    }
}

impl<const K: usize> core::str::FromStr for Yarn<K> where MrgParameter<K>: Default {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}
