use core::fmt;
use crate::bits::Word;
use crate::engine::{impl_rand_core, Engine};
use crate::error::{EngineError, ParseError};
use crate::text::{TextIo, TextReader};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

const N: usize = 312;
const M: usize = 156;
const MATRIX_A: u64 = 0xB5026F5AA96619E9;
/// Most significant 33 bits.
const UPPER_MASK: u64 = 0xFFFFFFFF80000000;
/// Least significant 31 bits.
const LOWER_MASK: u64 = 0x7FFFFFFF;

/// 64-bit Mersenne Twister (Matsumoto and Nishimura), period 2**19937 - 1.
/// Has no parameters and no jump ahead; `discard` iterates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "TwisterFields", into = "TwisterFields"))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mt19937_64 {
    mti: usize,
    mt: Box<[u64; N]>,
}

/// Serialized form of `Mt19937_64`, checked on the way in.
#[cfg(feature = "serde")]
#[derive(Clone, Serialize, Deserialize)]
pub struct TwisterFields {
    mti: u32,
    mt: Vec<u64>,
}

#[cfg(feature = "serde")]
impl TryFrom<TwisterFields> for Mt19937_64 {
    type Error = EngineError;
    fn try_from(fields: TwisterFields) -> Result<Self, EngineError> {
        Mt19937_64::from_state(fields.mti as usize, &fields.mt)
    }
}

#[cfg(feature = "serde")]
impl From<Mt19937_64> for TwisterFields {
    fn from(rng: Mt19937_64) -> Self {
        TwisterFields { mti: rng.mti as u32, mt: rng.mt.to_vec() }
    }
}

impl Default for Mt19937_64 {
    fn default() -> Self {
        Self::new(5489)
    }
}

impl Mt19937_64 {
    pub fn new(seed: u64) -> Self {
        let mut rng = Mt19937_64 { mti: N, mt: Box::new([0; N]) };
        rng.seed(seed);
        rng
    }

    /// Engine with an explicit state: the word index in [0, 312] and 312 words.
    pub fn from_state(mti: usize, mt: &[u64]) -> Result<Self, EngineError> {
        let mt: [u64; N] = mt.try_into().map_err(|_| EngineError::WrongLength { expected: N, found: mt.len() })?;
        if mti > N {
            return Err(EngineError::InvalidRing("index out of range"));
        }
        Ok(Mt19937_64 { mti, mt: Box::new(mt) })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.mti
    }

    #[inline]
    pub fn words(&self) -> &[u64; N] {
        &self.mt
    }

    /// Standard initialization by the Knuth multiplier 6364136223846793005.
    pub fn seed(&mut self, seed: u64) {
        self.mt[0] = seed;
        for i in 1 .. N {
            let x = self.mt[i - 1];
            self.mt[i] = 6364136223846793005u64.wrapping_mul(x ^ (x >> 62)).wrapping_add(i as u64);
        }
        self.mti = N;
    }

    /// Resets to the default seed 5489.
    pub fn seed_default(&mut self) {
        self.seed(5489);
    }

    /// Seeds with a 64-bit value assembled from two draws, high word first.
    pub fn seed_from<G: Engine>(&mut self, g: &mut G) {
        let mut r: u64 = 0;
        for _ in 0 .. 2 {
            r = (r << 32).wrapping_add(g.next().to_u64());
        }
        self.seed(r);
    }

    /// Regenerates all N words.
    fn twist(&mut self) {
        let mt = &mut self.mt;
        for i in 0 .. N {
            let x = (mt[i] & UPPER_MASK) | (mt[(i + 1) % N] & LOWER_MASK);
            let xa = if x & 1 == 0 { x >> 1 } else { (x >> 1) ^ MATRIX_A };
            mt[i] = mt[(i + M) % N] ^ xa;
        }
        self.mti = 0;
    }
}

impl Engine for Mt19937_64 {
    type Output = u64;
    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;

    #[inline]
    fn next(&mut self) -> u64 {
        if self.mti >= N {
            self.twist();
        }
        let mut x = self.mt[self.mti];
        self.mti += 1;
        x ^= (x >> 29) & 0x5555555555555555;
        x ^= (x << 17) & 0x71D67FFFEDA60000;
        x ^= (x << 37) & 0xFFF7EEE000000000;
        x ^= x >> 43;
        x
    }

    fn name(&self) -> String {
        "mt19937_64".to_string()
    }
}

impl_rand_core!(Mt19937_64);

impl fmt::Display for Mt19937_64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[mt19937_64 () ({}", self.mti)?;
        for x in self.mt.iter() {
            write!(f, " {}", x)?;
        }
        write!(f, ")]")
    }
}

impl TextIo for Mt19937_64 {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str("[mt19937_64 () (")?;
        let mti: usize = reader.number()?;
        let mut mt = Vec::with_capacity(N);
        for _ in 0 .. N {
            reader.delim(' ')?;
            mt.push(reader.number()?);
        }
        reader.delim(')')?;
        reader.delim(']')?;
        Ok(Mt19937_64::from_state(mti, &mt)?)
    }
}

impl core::str::FromStr for Mt19937_64 {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}
