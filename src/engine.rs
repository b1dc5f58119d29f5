use crate::bits::Word;
use crate::error::EngineError;

/// Uniform random number engine.
///
/// An engine is a value holding a parameter block and a status block.
/// `next` steps the status and returns a word in `[MIN, MAX]`.
/// Two engines compare equal iff both blocks are componentwise equal,
/// in which case they produce identical sequences forever.
pub trait Engine {
    type Output: Word;
    const MIN: Self::Output;
    const MAX: Self::Output;

    /// Advances to the next state and returns its output.
    fn next(&mut self) -> Self::Output;

    /// Advances the engine by n steps.
    fn discard(&mut self, n: u64) {
        for _ in 0 .. n {
            self.next();
        }
    }

    /// Name used in the text form.
    fn name(&self) -> String;
}

/// Engine that can be divided into non-overlapping parallel streams.
pub trait Parallel: Engine {
    /// Becomes stream n of s leapfrog streams: afterwards the engine returns
    /// elements n, n + s, n + 2 s, ... of the sequence it would have returned.
    fn split(&mut self, s: u32, n: u32) -> Result<(), EngineError>;

    /// Advances by 2**s steps.
    fn jump2(&mut self, s: u32);

    /// Advances by n steps, equivalent to discard(n).
    fn jump(&mut self, n: u64) {
        self.discard(n);
    }
}

/// Validates split arguments shared by all parallel engines.
pub(crate) fn check_split(s: u32, n: u32) -> Result<(), EngineError> {
    if s < 1 || n >= s {
        tracing::debug!(streams = s, index = n, "rejected split");
        return Err(EngineError::InvalidSplit { streams: s, index: n });
    }
    Ok(())
}

/// Implements `rand_core` traits for an engine with `Default` and scalar `seed(u64)`.
/// Generic engines pass their generics in brackets: `impl_rand_core!([T: Bound] Engine<T>)`.
/// Outputs narrower than 64 bits are concatenated from several draws.
macro_rules! impl_rand_core {
    ([$($g:tt)*] $t:ty) => {
        impl<$($g)*> rand_core::RngCore for $t {
            fn next_u32(&mut self) -> u32 {
                $crate::engine::draw_bits(self, 32) as u32
            }

            fn next_u64(&mut self) -> u64 {
                $crate::engine::draw_bits(self, 64)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                let bytes = dest.len();
                let mut i = 0;
                while i < bytes {
                    let x = self.next_u64();
                    let j = bytes.min(i + 8);
                    // Always use Little-Endian.
                    dest[i .. j].copy_from_slice(&x.to_le_bytes()[0 .. (j - i)]);
                    i = j;
                }
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl<$($g)*> rand_core::SeedableRng for $t {
            type Seed = [u8; 8];

            /// Seeds through the engine's scalar seed.
            fn from_seed(seed: Self::Seed) -> Self {
                // Always use Little-Endian.
                let mut engine = <$t>::default();
                engine.seed(u64::from_le_bytes(seed));
                engine
            }

            fn seed_from_u64(state: u64) -> Self {
                Self::from_seed(state.to_le_bytes())
            }
        }
    };
    ($t:ty) => {
        impl_rand_core!([] $t);
    };
}

pub(crate) use impl_rand_core;

/// Collects `bits` random bits, most significant first.
/// Engines whose range is not a power of two contribute their low 16 bits per draw.
pub(crate) fn draw_bits<E: Engine>(engine: &mut E, bits: u32) -> u64 {
    let range = E::MAX.to_u64() - E::MIN.to_u64();
    let width = if range == u64::MAX { 64 } else if (range + 1).is_power_of_two() { (range + 1).trailing_zeros() } else { 16 };
    let mut x: u64 = 0;
    let mut have = 0;
    while have < bits {
        let v = engine.next().to_u64() - E::MIN.to_u64();
        x = if width >= 64 { v } else { (x << width) | (v & ((1u64 << width) - 1)) };
        have += width;
    }
    if bits >= 64 { x } else { x & ((1u64 << bits) - 1) }
}
