//! Parallel-stream random number engines and distributions.
//!
//! Engines implement [`Engine`]; those with a cheap jump-ahead also implement
//! [`Parallel`], which splits one sequence into interleaved substreams
//! (leapfrog) or fast-forwards it (block splitting). All engines print and
//! parse as text, and all of them plug into `rand_core`.

pub mod bits;
pub mod canonical;
pub mod dist;
pub mod domain;
pub mod engine;
pub mod error;
pub mod lagfib;
pub mod lcg;
pub mod lcg64;
pub mod lcg64_shift;
pub mod minstd;
pub mod modular;
pub mod mrg;
pub mod mrg5s;
pub mod mt19937_64;
pub mod special;
pub mod text;
pub mod yarn;

pub use canonical::{generate_canonical, uniformcc, uniformco, uniformoc, uniformoo, Canonical};
pub use engine::{Engine, Parallel};
pub use error::{DistError, EngineError, ParseError};
pub use lagfib::{presets, FourTapXor, LagFib2Plus, LagFib2Xor, LagFib4Xor, LaggedFibonacci, Rule, TwoTapPlus, TwoTapXor};
pub use lcg64::{Lcg64, Lcg64Parameter};
pub use lcg64_shift::{Lcg64Shift, Lcg64ShiftParameter};
pub use minstd::Minstd;
pub use mrg::{Mrg, Mrg2, Mrg3, Mrg4, MrgParameter};
pub use mrg5s::{Mrg5s, Mrg5sParameter};
pub use mt19937_64::Mt19937_64;
pub use text::{TextIo, TextReader};
pub use yarn::{Yarn, Yarn2, Yarn3, Yarn4};
pub use rand_core::{RngCore, SeedableRng};

// 64-bit LCG multipliers from Steele, G. and Vigna, S.,
// Computationally Easy, Spectrally Good Multipliers for
// Congruential Pseudorandom Number Generators (2020).
// They drive the pseudo-random loops of the unit tests.
#[cfg(test)] pub(crate) const LCG_M64_1: u64 = 0xd1342543de82ef95;
#[cfg(test)] pub(crate) const LCG_M64_2: u64 = 0xaf251af3b0f025b5;
#[cfg(test)] pub(crate) const LCG_M64_3: u64 = 0xb564ef22ec7aece5;
#[cfg(test)] pub(crate) const LCG_M64_4: u64 = 0xf7c2ebc08f67f2b5;

/// Default multiplier of the 64-bit LCGs.
pub const LCG64_DEFAULT_A: u64 = 18145460002477866997;

/// Prime modulus 2^31 - 21069 of the 5-term multiple recursive generator.
pub const MRG5S_MODULUS: i64 = 2147462579;

/// Mersenne prime modulus 2^31 - 1 of the multiple recursive generators.
pub const MRG_MODULUS: i64 = 2147483647;
