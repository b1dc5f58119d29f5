use core::fmt;
use core::marker::PhantomData;
use crate::bits::{ceil_pow2, RingWord, Word};
use crate::engine::{impl_rand_core, Engine};
use crate::error::{EngineError, ParseError};
use crate::minstd::Minstd;
use crate::text::{TextIo, TextReader};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Combination rule of a lagged Fibonacci generator.
pub trait Rule: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Number of taps.
    const TAPS: usize;
    /// Name prefix in the text form.
    const PREFIX: &'static str;
    /// Taps of the default-constructed engine.
    const DEFAULT_TAPS: &'static [u32];
    /// Combines the ring words at the given tap positions.
    fn combine<T: RingWord>(ring: &[T], index: u32, taps: &[u32], mask: u32) -> T;
}

/// r[i] = r[i - A] + r[i - B] (mod 2**w).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TwoTapPlus;

/// r[i] = r[i - A] xor r[i - B].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TwoTapXor;

/// r[i] = r[i - A] xor r[i - B] xor r[i - C] xor r[i - D].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FourTapXor;

#[inline]
fn tap<T: RingWord>(ring: &[T], index: u32, lag: u32, mask: u32) -> T {
    ring[(index.wrapping_sub(lag) & mask) as usize]
}

impl Rule for TwoTapPlus {
    const TAPS: usize = 2;
    const PREFIX: &'static str = "lagfib2plus";
    const DEFAULT_TAPS: &'static [u32] = &[168, 521];

    #[inline]
    fn combine<T: RingWord>(ring: &[T], index: u32, taps: &[u32], mask: u32) -> T {
        tap(ring, index, taps[0], mask).wrapping_add(&tap(ring, index, taps[1], mask))
    }
}

impl Rule for TwoTapXor {
    const TAPS: usize = 2;
    const PREFIX: &'static str = "lagfib2xor";
    const DEFAULT_TAPS: &'static [u32] = &[168, 521];

    #[inline]
    fn combine<T: RingWord>(ring: &[T], index: u32, taps: &[u32], mask: u32) -> T {
        tap(ring, index, taps[0], mask) ^ tap(ring, index, taps[1], mask)
    }
}

impl Rule for FourTapXor {
    const TAPS: usize = 4;
    const PREFIX: &'static str = "lagfib4xor";
    const DEFAULT_TAPS: &'static [u32] = &[471, 1586, 6988, 9689];

    #[inline]
    fn combine<T: RingWord>(ring: &[T], index: u32, taps: &[u32], mask: u32) -> T {
        tap(ring, index, taps[0], mask) ^ tap(ring, index, taps[1], mask) ^
        tap(ring, index, taps[2], mask) ^ tap(ring, index, taps[3], mask)
    }
}

/// Lagged Fibonacci generator over a power-of-two ring of words.
/// The ring holds the last tap_max outputs; the newest is at `index`.
/// When tap_max equals the ring size, the oldest lag reads the slot that
/// the step is about to overwrite, which still holds the value it needs.
/// There is no closed-form jump ahead, so `discard` iterates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(
    try_from = "RingFields<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"),
))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaggedFibonacci<T: RingWord, R: Rule> {
    taps: Box<[u32]>,
    index: u32,
    ring: Box<[T]>,
    #[cfg_attr(feature = "serde", serde(skip))]
    rule: PhantomData<R>,
}

/// Serialized form of a lagged Fibonacci engine, checked by `from_state`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub struct RingFields<T> {
    taps: Vec<u32>,
    index: u32,
    ring: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: RingWord, R: Rule> TryFrom<RingFields<T>> for LaggedFibonacci<T, R> {
    type Error = EngineError;
    fn try_from(fields: RingFields<T>) -> Result<Self, EngineError> {
        Self::from_state(&fields.taps, fields.index, fields.ring)
    }
}

pub type LagFib2Plus<T> = LaggedFibonacci<T, TwoTapPlus>;
pub type LagFib2Xor<T> = LaggedFibonacci<T, TwoTapXor>;
pub type LagFib4Xor<T> = LaggedFibonacci<T, FourTapXor>;

/// Largest supported ring, enough for the period 2**19937 - 1 lags.
pub const MAX_RING: u32 = 1 << 15;

/// Checks tap count, ordering and size, returning the ring size.
fn validate_taps<R: Rule>(taps: &[u32]) -> Result<u32, EngineError> {
    let reject = |reason: &'static str| {
        tracing::debug!(?taps, reason, "rejected lagged Fibonacci taps");
        Err(EngineError::InvalidTaps { taps: taps.to_vec(), reason })
    };
    if taps.len() != R::TAPS {
        return reject("wrong number of taps");
    }
    if taps.iter().any(|&x| x == 0) {
        return reject("taps must be positive");
    }
    if taps.windows(2).any(|w| w[0] >= w[1]) {
        return reject("taps must be strictly increasing");
    }
    if taps[R::TAPS - 1] > MAX_RING {
        return reject("largest tap exceeds the maximum ring size");
    }
    Ok(ceil_pow2(taps[R::TAPS - 1]))
}

impl<T: RingWord, R: Rule> Default for LaggedFibonacci<T, R> {
    fn default() -> Self {
        Self::with_valid_taps(R::DEFAULT_TAPS)
    }
}

impl<T: RingWord, R: Rule> LaggedFibonacci<T, R> {
    /// Engine with the given taps in increasing order, seeded with 0.
    pub fn new(taps: &[u32]) -> Result<Self, EngineError> {
        validate_taps::<R>(taps)?;
        Ok(Self::with_valid_taps(taps))
    }

    /// Construction from known good taps.
    fn with_valid_taps(taps: &[u32]) -> Self {
        let size = ceil_pow2(taps[taps.len() - 1]) as usize;
        let mut engine = LaggedFibonacci {
            taps: taps.into(),
            index: 0,
            ring: vec![T::ZERO; size].into_boxed_slice(),
            rule: PhantomData,
        };
        engine.seed(0);
        engine
    }

    /// Engine with an explicit state. The ring must have exactly the ring size.
    pub fn from_state(taps: &[u32], index: u32, ring: Vec<T>) -> Result<Self, EngineError> {
        let size = validate_taps::<R>(taps)?;
        if ring.len() != size as usize {
            return Err(EngineError::InvalidRing("ring length must equal the ring size"));
        }
        if index >= size {
            return Err(EngineError::InvalidRing("index out of range"));
        }
        Ok(LaggedFibonacci { taps: taps.into(), index, ring: ring.into_boxed_slice(), rule: PhantomData })
    }

    #[inline]
    pub fn taps(&self) -> &[u32] {
        &self.taps
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn ring(&self) -> &[T] {
        &self.ring
    }

    #[inline]
    fn tap_max(&self) -> u32 {
        self.taps[self.taps.len() - 1]
    }

    #[inline]
    fn mask(&self) -> u32 {
        self.ring.len() as u32 - 1
    }

    /// Seeds from the minimal standard generator started at s.
    pub fn seed(&mut self, seed: u64) {
        self.seed_from(&mut Minstd::new(seed));
    }

    /// Fills the first tap_max words one bit at a time, most significant bit first.
    /// A bit is set when a draw of g lies above the midpoint of its range.
    pub fn seed_from<G: Engine>(&mut self, g: &mut G) {
        let min = G::MIN.to_u64();
        let half = (G::MAX.to_u64() - min) / 2;
        let tap_max = self.tap_max() as usize;
        for (i, x) in self.ring.iter_mut().enumerate() {
            let mut r = T::ZERO;
            if i < tap_max {
                for _ in 0 .. T::BITS {
                    r = r << 1;
                    if g.next().to_u64() - min > half {
                        r = r | T::one();
                    }
                }
            }
            *x = r;
        }
        self.index = self.tap_max() - 1;
    }

    /// Name with word width and taps, such as `lagfib2xor_64_168_521`.
    fn text_name(&self) -> String {
        let mut name = format!("{}_{}", R::PREFIX, T::BITS);
        for tap in self.taps.iter() {
            name.push_str(&format!("_{}", tap));
        }
        name
    }
}

impl<T: RingWord, R: Rule> Engine for LaggedFibonacci<T, R> {
    type Output = T;
    const MIN: T = T::ZERO;
    const MAX: T = T::ONES;

    #[inline]
    fn next(&mut self) -> T {
        let mask = self.mask();
        self.index = (self.index + 1) & mask;
        let x = R::combine(&self.ring, self.index, &self.taps, mask);
        self.ring[self.index as usize] = x;
        x
    }

    fn name(&self) -> String {
        self.text_name()
    }
}

impl_rand_core!([T: RingWord, R: Rule] LaggedFibonacci<T, R>);

impl<T: RingWord, R: Rule> fmt::Display for LaggedFibonacci<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} ({}", self.text_name(), self.index)?;
        for x in self.ring.iter() {
            write!(f, " {}", x)?;
        }
        write!(f, ")]")
    }
}

/// Parses `prefix_width_tap1_..._tapk` into taps, checking prefix and width.
fn parse_name<T: RingWord, R: Rule>(name: &str) -> Result<Vec<u32>, ParseError> {
    let unknown = || ParseError::UnknownName(name.to_string());
    let rest = name.strip_prefix(R::PREFIX).and_then(|rest| rest.strip_prefix('_')).ok_or_else(unknown)?;
    let mut fields = rest.split('_');
    let width: u32 = fields.next().and_then(|w| w.parse().ok()).ok_or_else(unknown)?;
    if width != T::BITS {
        return Err(ParseError::WordWidth { found: width, expected: T::BITS });
    }
    let taps = fields.map(|t| t.parse::<u32>()).collect::<Result<Vec<_>, _>>().map_err(|_| unknown())?;
    if taps.len() != R::TAPS {
        return Err(unknown());
    }
    Ok(taps)
}

impl<T: RingWord, R: Rule> TextIo for LaggedFibonacci<T, R> {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim('[')?;
        let taps = parse_name::<T, R>(reader.token()?)?;
        let size = validate_taps::<R>(&taps)?;
        reader.delim(' ')?;
        reader.delim('(')?;
        let index: u32 = reader.number()?;
        let mut ring = Vec::new();
        for _ in 0 .. size {
            reader.delim(' ')?;
            ring.push(reader.number::<T>()?);
        }
        reader.delim(')')?;
        reader.delim(']')?;
        Ok(Self::from_state(&taps, index, ring)?)
    }
}

impl<T: RingWord, R: Rule> core::str::FromStr for LaggedFibonacci<T, R> {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}

/// Two-tap lags (A, B) at Mersenne exponent periods. (103, 250) is r250.
pub const TWO_TAP_LAGS: [[u32; 2]; 9] = [
    [103, 250], [168, 521], [273, 607], [418, 1279], [1029, 2281],
    [576, 3217], [2098, 4423], [4187, 9689], [9842, 19937],
];

/// Four-tap lags (A, B, C, D) at Mersenne exponent periods, Ziff's last.
pub const FOUR_TAP_LAGS: [[u32; 4]; 9] = [
    [168, 205, 242, 521], [147, 239, 515, 607], [418, 705, 992, 1279],
    [305, 610, 915, 2281], [576, 871, 1461, 3217], [1419, 1736, 2053, 4423],
    [471, 2032, 4064, 9689], [3860, 7083, 11580, 19937], [471, 1586, 6988, 9689],
];

macro_rules! presets {
    ($($name:ident: $t:ty = [$($tap:expr),+];)+) => {
        $(
            pub fn $name() -> $t {
                <$t>::with_valid_taps(&[$($tap),+])
            }
        )+

        /// Names of all preset constructors.
        pub const NAMES: &[&str] = &[$(stringify!($name)),+];

        /// Builds the preset called `name` and seeds it with `seed`.
        pub fn by_name(name: &str, seed: u64) -> Option<Box<dyn rand_core::RngCore + Send>> {
            match name {
                $(stringify!($name) => {
                    let mut engine = $name();
                    engine.seed(seed);
                    Some(Box::new(engine))
                })+
                _ => None,
            }
        }
    };
}

/// Named presets, each seeded with 0.
pub mod presets {
    use super::*;

    presets! {
        lagfib2plus_32_168_521: LagFib2Plus<u32> = [168, 521];
        lagfib2plus_32_273_607: LagFib2Plus<u32> = [273, 607];
        lagfib2plus_32_418_1279: LagFib2Plus<u32> = [418, 1279];
        lagfib2plus_32_1029_2281: LagFib2Plus<u32> = [1029, 2281];
        lagfib2plus_32_576_3217: LagFib2Plus<u32> = [576, 3217];
        lagfib2plus_32_2098_4423: LagFib2Plus<u32> = [2098, 4423];
        lagfib2plus_32_4187_9689: LagFib2Plus<u32> = [4187, 9689];
        lagfib2plus_32_9842_19937: LagFib2Plus<u32> = [9842, 19937];
        lagfib2plus_64_168_521: LagFib2Plus<u64> = [168, 521];
        lagfib2plus_64_273_607: LagFib2Plus<u64> = [273, 607];
        lagfib2plus_64_418_1279: LagFib2Plus<u64> = [418, 1279];
        lagfib2plus_64_1029_2281: LagFib2Plus<u64> = [1029, 2281];
        lagfib2plus_64_576_3217: LagFib2Plus<u64> = [576, 3217];
        lagfib2plus_64_2098_4423: LagFib2Plus<u64> = [2098, 4423];
        lagfib2plus_64_4187_9689: LagFib2Plus<u64> = [4187, 9689];
        lagfib2plus_64_9842_19937: LagFib2Plus<u64> = [9842, 19937];

        r250_32: LagFib2Xor<u32> = [103, 250];
        r250_64: LagFib2Xor<u64> = [103, 250];
        lagfib2xor_32_168_521: LagFib2Xor<u32> = [168, 521];
        lagfib2xor_32_273_607: LagFib2Xor<u32> = [273, 607];
        lagfib2xor_32_418_1279: LagFib2Xor<u32> = [418, 1279];
        lagfib2xor_32_1029_2281: LagFib2Xor<u32> = [1029, 2281];
        lagfib2xor_32_576_3217: LagFib2Xor<u32> = [576, 3217];
        lagfib2xor_32_2098_4423: LagFib2Xor<u32> = [2098, 4423];
        lagfib2xor_32_4187_9689: LagFib2Xor<u32> = [4187, 9689];
        lagfib2xor_32_9842_19937: LagFib2Xor<u32> = [9842, 19937];
        lagfib2xor_64_168_521: LagFib2Xor<u64> = [168, 521];
        lagfib2xor_64_273_607: LagFib2Xor<u64> = [273, 607];
        lagfib2xor_64_418_1279: LagFib2Xor<u64> = [418, 1279];
        lagfib2xor_64_1029_2281: LagFib2Xor<u64> = [1029, 2281];
        lagfib2xor_64_576_3217: LagFib2Xor<u64> = [576, 3217];
        lagfib2xor_64_2098_4423: LagFib2Xor<u64> = [2098, 4423];
        lagfib2xor_64_4187_9689: LagFib2Xor<u64> = [4187, 9689];
        lagfib2xor_64_9842_19937: LagFib2Xor<u64> = [9842, 19937];

        lagfib4xor_32_168_205_242_521: LagFib4Xor<u32> = [168, 205, 242, 521];
        lagfib4xor_32_147_239_515_607: LagFib4Xor<u32> = [147, 239, 515, 607];
        lagfib4xor_32_418_705_992_1279: LagFib4Xor<u32> = [418, 705, 992, 1279];
        lagfib4xor_32_305_610_915_2281: LagFib4Xor<u32> = [305, 610, 915, 2281];
        lagfib4xor_32_576_871_1461_3217: LagFib4Xor<u32> = [576, 871, 1461, 3217];
        lagfib4xor_32_1419_1736_2053_4423: LagFib4Xor<u32> = [1419, 1736, 2053, 4423];
        lagfib4xor_32_471_2032_4064_9689: LagFib4Xor<u32> = [471, 2032, 4064, 9689];
        lagfib4xor_32_3860_7083_11580_19937: LagFib4Xor<u32> = [3860, 7083, 11580, 19937];
        lagfib4xor_32_471_1586_6988_9689: LagFib4Xor<u32> = [471, 1586, 6988, 9689];
        lagfib4xor_64_168_205_242_521: LagFib4Xor<u64> = [168, 205, 242, 521];
        lagfib4xor_64_147_239_515_607: LagFib4Xor<u64> = [147, 239, 515, 607];
        lagfib4xor_64_418_705_992_1279: LagFib4Xor<u64> = [418, 705, 992, 1279];
        lagfib4xor_64_305_610_915_2281: LagFib4Xor<u64> = [305, 610, 915, 2281];
        lagfib4xor_64_576_871_1461_3217: LagFib4Xor<u64> = [576, 871, 1461, 3217];
        lagfib4xor_64_1419_1736_2053_4423: LagFib4Xor<u64> = [1419, 1736, 2053, 4423];
        lagfib4xor_64_471_2032_4064_9689: LagFib4Xor<u64> = [471, 2032, 4064, 9689];
        lagfib4xor_64_3860_7083_11580_19937: LagFib4Xor<u64> = [3860, 7083, 11580, 19937];
        lagfib4xor_64_471_1586_6988_9689: LagFib4Xor<u64> = [471, 1586, 6988, 9689];
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use rand_core::RngCore;

    #[test] pub fn run_tests() {
        // Every catalogued lag set passes validation.
        for lags in TWO_TAP_LAGS.iter() {
            assert!(LagFib2Xor::<u32>::new(lags).is_ok());
            assert!(LagFib2Plus::<u64>::new(lags).is_ok());
        }
        for lags in FOUR_TAP_LAGS.iter() {
            assert!(LagFib4Xor::<u64>::new(lags).is_ok());
        }
        assert_eq!(presets::NAMES.len(), 52);
        assert_eq!(presets::lagfib2xor_64_168_521().name(), "lagfib2xor_64_168_521");
        assert_eq!(presets::lagfib4xor_32_471_1586_6988_9689().name(), "lagfib4xor_32_471_1586_6988_9689");
        assert_eq!(presets::r250_32().ring().len(), 256);
        assert_eq!(presets::lagfib2plus_64_9842_19937().ring().len(), 32768);
        for name in presets::NAMES.iter() {
            assert!(presets::by_name(name, 1).is_some());
        }
        assert!(presets::by_name("lagfib2plus_64_1_2", 1).is_none());
        let mut boxed = presets::by_name("r250_64", 9).unwrap();
        let mut plain = presets::r250_64();
        plain.seed(9);
        assert_eq!(boxed.next_u64(), plain.next_u64());

        assert!(matches!(LagFib2Xor::<u32>::new(&[250, 103]), Err(EngineError::InvalidTaps { .. })));
        assert!(matches!(LagFib2Xor::<u32>::new(&[0, 103]), Err(EngineError::InvalidTaps { .. })));
        assert!(matches!(LagFib2Xor::<u32>::new(&[100, 32769]), Err(EngineError::InvalidTaps { .. })));
        assert!(LagFib2Xor::<u32>::new(&[100, MAX_RING]).is_ok());
        assert!(matches!(LagFib4Xor::<u32>::new(&[1, 2]), Err(EngineError::InvalidTaps { .. })));

        // Seeding: ring words beyond tap_max stay zero, index is tap_max - 1.
        let rng = presets::lagfib2plus_32_168_521();
        assert_eq!(rng.index(), 520);
        assert!(rng.ring()[521 ..].iter().all(|&x| x == 0));
        assert!(rng.ring()[.. 521].iter().any(|&x| x != 0));
        assert_eq!(rng, LagFib2Plus::<u32>::default());

        // The first output combines the seeded words at the lags.
        let mut rng = presets::lagfib2xor_64_168_521();
        let expected = rng.ring()[(521 - 168) % 1024] ^ rng.ring()[0];
        assert_eq!(rng.next(), expected);
        assert_eq!(rng.index(), 521);

        let mut rng = presets::lagfib2plus_64_273_607();
        let expected = rng.ring()[606 + 1 - 273].wrapping_add(rng.ring()[0]);
        assert_eq!(rng.next(), expected);

        // Zero is a fixed point of xor recurrences.
        let mut rng = LagFib4Xor::<u64>::from_state(&[471, 1586, 6988, 9689], 9688, vec![0; 16384]).unwrap();
        for _ in 0 .. 100000 { assert_eq!(rng.next(), 0); }

        assert!(LagFib2Xor::<u32>::from_state(&[103, 250], 0, vec![0; 250]).is_err());
        assert!(LagFib2Xor::<u32>::from_state(&[103, 250], 256, vec![0; 256]).is_err());

        // Text round-trip mid-stream.
        let mut rng = presets::r250_32();
        rng.seed(12345);
        rng.discard(1000);
        let text = rng.to_text();
        assert!(text.starts_with("[lagfib2xor_32_103_250 ("));
        let mut copy: LagFib2Xor<u32> = text.parse().unwrap();
        assert_eq!(copy, rng);
        for _ in 0 .. 1000 { assert_eq!(copy.next(), rng.next()); }

        // Width and name are checked against the target type.
        assert_eq!(text.parse::<LagFib2Xor<u64>>(), Err(ParseError::WordWidth { found: 32, expected: 64 }));
        assert!(matches!(text.parse::<LagFib2Plus<u32>>(), Err(ParseError::UnknownName(_))));

        let mut target = presets::r250_32();
        let mut reader = TextReader::new("[lagfib2xor_32_103_250 (3 1 2)]");
        assert!(target.read_into(&mut reader).is_err());
        assert_eq!(target, presets::r250_32());

        // A huge ring named in a short record is refused before any allocation.
        assert!(matches!(
            "[lagfib2xor_64_1_1073741823 (0)]".parse::<LagFib2Xor<u64>>(),
            Err(ParseError::Invalid(EngineError::InvalidTaps { .. }))
        ));
        assert!(matches!("[lagfib2xor_64_1_32768 (0)]".parse::<LagFib2Xor<u64>>(), Err(ParseError::Expected { .. })));
    }

    /// Steps the recurrence over a plain history of every output.
    fn reference<R: Rule>(engine: &LaggedFibonacci<u32, R>, steps: usize) -> Vec<u32> {
        let taps = engine.taps();
        let tap_max = *taps.last().unwrap() as usize;
        let ring = engine.ring();
        let mask = ring.len() - 1;
        // Oldest first: x_(n - tap_max) ... x_(n - 1).
        let mut history: Vec<u32> = (0 .. tap_max)
            .map(|k| ring[(engine.index() as usize + 1 + ring.len() - tap_max + k) & mask])
            .collect();
        for _ in 0 .. steps {
            let n = history.len();
            let x = R::combine(&history, n as u32, taps, u32::MAX);
            history.push(x);
        }
        history.split_off(tap_max)
    }

    #[test] pub fn full_ring_taps() {
        // Largest tap equal to the ring size.
        let mut rng = LagFib2Xor::<u32>::new(&[100, 512]).unwrap();
        rng.seed(77);
        assert_eq!(rng.ring().len(), 512);
        let expected = reference(&rng, 5000);
        let actual: Vec<u32> = (0 .. 5000).map(|_| rng.next()).collect();
        assert_eq!(actual, expected);

        let mut rng = LagFib2Plus::<u32>::new(&[168, 521]).unwrap();
        rng.seed(78);
        let expected = reference(&rng, 5000);
        let actual: Vec<u32> = (0 .. 5000).map(|_| rng.next()).collect();
        assert_eq!(actual, expected);

        let mut rng = LagFib4Xor::<u32>::new(&[3, 5, 7, 8]).unwrap();
        rng.seed(79);
        let expected = reference(&rng, 1000);
        let actual: Vec<u32> = (0 .. 1000).map(|_| rng.next()).collect();
        assert_eq!(actual, expected);
        let copy: LagFib4Xor<u32> = rng.to_text().parse().unwrap();
        assert_eq!(copy, rng);
    }
}
