use core::fmt::{Debug, Display};
use core::str::FromStr;
use num_traits::{PrimInt, WrappingAdd};

// Fixed-width word utilities shared by the engines.

/// An engine output word. Values are always non-negative,
/// so every word widens losslessly to u64.
pub trait Word: Copy + Eq + Debug + Display + FromStr + Send + Sync + 'static {
    /// Number of value bits (31 for i32, as only non-negative values occur).
    const BITS: u32;
    fn to_u64(self) -> u64;
}

impl Word for u32 {
    const BITS: u32 = 32;
    #[inline] fn to_u64(self) -> u64 { self as u64 }
}

impl Word for u64 {
    const BITS: u32 = 64;
    #[inline] fn to_u64(self) -> u64 { self }
}

impl Word for i32 {
    const BITS: u32 = 31;
    #[inline] fn to_u64(self) -> u64 { self as u32 as u64 }
}

/// Unsigned word stored in a lagged Fibonacci ring.
/// Addition wraps modulo 2**BITS.
pub trait RingWord: Word + PrimInt + WrappingAdd {
    const ZERO: Self;
    const ONES: Self;
}

impl RingWord for u32 {
    const ZERO: Self = 0;
    const ONES: Self = u32::MAX;
}

impl RingWord for u64 {
    const ZERO: Self = 0;
    const ONES: Self = u64::MAX;
}

/// Smallest power of two that is >= n. ceil_pow2(0) = 0.
pub const fn ceil_pow2(n: u32) -> u32 {
    if n == 0 { 0 } else { n.next_power_of_two() }
}

/// Index mask of a ring sized ceil_pow2(n).
pub const fn mask(n: u32) -> u32 {
    ceil_pow2(n).wrapping_sub(1)
}
