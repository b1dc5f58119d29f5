use core::fmt;
use crate::bits::Word;
use crate::engine::{check_split, impl_rand_core, Engine, Parallel};
use crate::error::{EngineError, ParseError};
use crate::modular::{gauss, matrix_mult, matrix_pow, matrix_vec_mult, modulo_inverse, mul_mod, reduce_2147483647, residue, sub_mod, Matrix};
use crate::text::{read_tuple, TextIo, TextReader};
use crate::MRG_MODULUS;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

const M: i64 = MRG_MODULUS;

const COEFFICIENT_NAMES: [&str; 4] = ["a1", "a2", "a3", "a4"];
const STATUS_NAMES: [&str; 4] = ["r1", "r2", "r3", "r4"];

fn check_range<const K: usize>(names: &[&'static str; 4], values: &[i64; K]) -> Result<[i32; K], EngineError> {
    let mut out = [0; K];
    for (i, (&value, x)) in values.iter().zip(out.iter_mut()).enumerate() {
        if !(0 .. M).contains(&value) {
            let name = names[i.min(3)];
            tracing::debug!(name, value, order = K, "mrg component out of range");
            return Err(EngineError::OutOfRange { name, value, modulus: M });
        }
        *x = value as i32;
    }
    Ok(out)
}

/// Recurrence coefficients a1 ... aK, each in [0, m).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MrgParameter<const K: usize> {
    a: [i32; K],
}

impl<const K: usize> MrgParameter<K> {
    pub fn new(a: [i64; K]) -> Result<Self, EngineError> {
        Ok(MrgParameter { a: check_range(&COEFFICIENT_NAMES, &a)? })
    }

    #[inline]
    pub fn coefficients(&self) -> [i32; K] {
        self.a
    }
}

// Coefficient sets from L'Ecuyer, Blouin and Couture,
// A search for good multiple recursive random number generators (1993).
impl MrgParameter<2> {
    pub const LECUYER1: Self = MrgParameter { a: [1498809829, 1160990996] };
    pub const LECUYER2: Self = MrgParameter { a: [46325, 1084587] };
}

impl MrgParameter<3> {
    pub const LECUYER1: Self = MrgParameter { a: [2021422057, 1826992351, 1977753457] };
    pub const LECUYER2: Self = MrgParameter { a: [1476728729, 0, 1155643113] };
    pub const LECUYER3: Self = MrgParameter { a: [65338, 0, 64636] };
}

impl MrgParameter<4> {
    pub const LECUYER1: Self = MrgParameter { a: [2001982722, 1412284257, 1155380217, 1668339922] };
    pub const LECUYER2: Self = MrgParameter { a: [64886, 0, 0, 64322] };
}

macro_rules! default_parameter {
    ($($k:literal),+) => {
        $(impl Default for MrgParameter<$k> {
            fn default() -> Self {
                Self::LECUYER1
            }
        })+
    };
}

default_parameter!(2, 3, 4);

/// Multiple recursive generator of order K modulo the Mersenne prime m = 2**31 - 1.
/// x_n = a1 x_(n-1) + ... + aK x_(n-K) (mod m), period up to m**K - 1.
/// The status holds the last K values, r1 newest.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "MrgFields", into = "MrgFields"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mrg<const K: usize> {
    parameter: MrgParameter<K>,
    r: [i32; K],
}

pub type Mrg2 = Mrg<2>;
pub type Mrg3 = Mrg<3>;
pub type Mrg4 = Mrg<4>;

/// Serialized form of an `Mrg`, checked on the way in.
#[cfg(feature = "serde")]
#[derive(Clone, Serialize, Deserialize)]
pub struct MrgFields {
    parameter: Vec<i64>,
    r: Vec<i64>,
}

#[cfg(feature = "serde")]
fn fixed<const K: usize>(values: &[i64]) -> Result<[i64; K], EngineError> {
    <[i64; K]>::try_from(values).map_err(|_| EngineError::WrongLength { expected: K, found: values.len() })
}

#[cfg(feature = "serde")]
impl<const K: usize> TryFrom<MrgFields> for Mrg<K> {
    type Error = EngineError;
    fn try_from(fields: MrgFields) -> Result<Self, EngineError> {
        let parameter = MrgParameter::new(fixed(&fields.parameter)?)?;
        Mrg::from_parts(parameter, fixed(&fields.r)?)
    }
}

#[cfg(feature = "serde")]
impl<const K: usize> From<Mrg<K>> for MrgFields {
    fn from(rng: Mrg<K>) -> Self {
        MrgFields {
            parameter: rng.parameter.a.iter().map(|&x| x as i64).collect(),
            r: rng.r.iter().map(|&x| x as i64).collect(),
        }
    }
}

impl<const K: usize> Default for Mrg<K> where MrgParameter<K>: Default {
    fn default() -> Self {
        Self::with_parameter(MrgParameter::default())
    }
}

impl<const K: usize> Mrg<K> {
    /// Custom parameters with the default status (0, 1, ..., 1).
    pub fn with_parameter(parameter: MrgParameter<K>) -> Self {
        let mut r = [1; K];
        r[0] = 0;
        Mrg { parameter, r }
    }

    /// Engine with explicit status (r1 ... rK). Components must lie in [0, m).
    pub fn from_parts(parameter: MrgParameter<K>, status: [i64; K]) -> Result<Self, EngineError> {
        let r = check_range(&STATUS_NAMES, &status)?;
        Ok(Mrg { parameter, r })
    }

    #[inline]
    pub fn parameter(&self) -> MrgParameter<K> {
        self.parameter
    }

    #[inline]
    pub fn state(&self) -> [i32; K] {
        self.r
    }

    /// Sets r1 = s mod m and the older values to 1.
    pub fn seed(&mut self, seed: u64) {
        self.r = [1; K];
        self.r[0] = (seed % M as u64) as i32;
    }

    /// Sets each status component to si mod m.
    pub fn seed_status(&mut self, s: [i64; K]) {
        self.r = s.map(|s| residue(s, M) as i32);
    }

    /// Draws each status component from another engine.
    pub fn seed_from<G: Engine>(&mut self, g: &mut G) {
        for x in self.r.iter_mut() {
            *x = (g.next().to_u64() % M as u64) as i32;
        }
    }

    #[inline]
    pub(crate) fn step(&mut self) -> i32 {
        let mut t: u64 = 0;
        for (&a, &r) in self.parameter.a.iter().zip(self.r.iter()) {
            t += reduce_2147483647(a as u64 * r as u64);
        }
        let t = reduce_2147483647(t) as i32;
        self.r.copy_within(0 .. K - 1, 1);
        self.r[0] = t;
        t
    }

    /// Companion matrix of the recurrence acting on (r1 ... rK).
    fn companion(&self) -> Matrix<K> {
        let mut c = [[0; K]; K];
        for (j, &a) in self.parameter.a.iter().enumerate() {
            c[0][j] = a as i64;
        }
        for i in 1 .. K {
            c[i][i - 1] = 1;
        }
        c
    }

    fn apply(&mut self, matrix: &Matrix<K>) {
        let v = matrix_vec_mult(matrix, &self.r.map(|x| x as i64), M);
        self.r = v.map(|x| x as i32);
    }

    /// Steps the status back by one, solving the recurrence for the oldest value.
    fn backward(&mut self) -> Result<(), EngineError> {
        let a = self.parameter.a.map(|x| x as i64);
        let r = self.r.map(|x| x as i64);
        let t = match a.iter().rposition(|&x| x != 0) {
            Some(k) => {
                let mut t = r[K - 1 - k];
                for j in 0 .. k {
                    t = sub_mod(t, mul_mod(a[j], r[K - k + j], M), M);
                }
                mul_mod(t, modulo_inverse(a[k], M)?, M)
            }
            None => 0,
        };
        self.r.copy_within(1 .., 0);
        self.r[K - 1] = t as i32;
        Ok(())
    }

    /// Leapfrog transformation on a copy, so failure leaves self unchanged.
    fn leapfrog(&self, s: u32, n: u32) -> Result<Self, EngineError> {
        let mut rng = *self;
        let mut q = vec![0i64; 2 * K];
        rng.jump(n as u64 + 1);
        q[0] = rng.r[0] as i64;
        for x in q.iter_mut().skip(1) {
            rng.jump(s as u64);
            *x = rng.r[0] as i64;
        }
        // q_(K+i) = a1 q_(K-1+i) + ... + aK q_i for i = 0 .. K.
        let mut system = [[0; K]; K];
        let mut rhs = [0; K];
        for i in 0 .. K {
            for j in 0 .. K {
                system[i][j] = q[K - 1 + i - j];
            }
            rhs[i] = q[K + i];
        }
        let a = gauss(&system, &rhs, M)?;
        rng.parameter = MrgParameter { a: a.map(|x| x as i32) };
        for (i, x) in rng.r.iter_mut().enumerate() {
            *x = q[K - 1 - i] as i32;
        }
        for _ in 0 .. K {
            rng.backward()?;
        }
        Ok(rng)
    }

    /// Text body `(a1 ... aK) (r1 ... rK)`.
    pub(crate) fn write_body(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}) ({})", join(&self.parameter.a), join(&self.r))
    }

    /// Reads the text body after the name. A single tuple is the status
    /// with the default parameters.
    pub(crate) fn read_body(reader: &mut TextReader<'_>, default: MrgParameter<K>) -> Result<Self, ParseError> {
        let first = read_tuple::<i64, K>(reader)?;
        let (parameter, r) = if reader.delim(' ').is_ok() {
            let r = read_tuple::<i64, K>(reader)?;
            (MrgParameter::new(first)?, r)
        } else {
            (default, first)
        };
        reader.delim(']')?;
        Ok(Mrg::from_parts(parameter, r)?)
    }
}

fn join(values: &[i32]) -> String {
    values.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" ")
}

impl<const K: usize> Engine for Mrg<K> {
    type Output = i32;
    const MIN: i32 = 0;
    const MAX: i32 = (M - 1) as i32;

    #[inline]
    fn next(&mut self) -> i32 {
        self.step()
    }

    fn discard(&mut self, n: u64) {
        if n < 16 {
            for _ in 0 .. n { self.step(); }
        } else {
            if n >= 1 << 32 {
                tracing::trace!(steps = n, order = K, "mrg jump ahead");
            }
            let jump = matrix_pow(&self.companion(), n, M);
            self.apply(&jump);
        }
    }

    fn name(&self) -> String {
        format!("mrg{}", K)
    }
}

impl<const K: usize> Parallel for Mrg<K> {
    fn split(&mut self, s: u32, n: u32) -> Result<(), EngineError> {
        check_split(s, n)?;
        if s > 1 {
            *self = self.leapfrog(s, n).map_err(|error| {
                tracing::debug!(%error, streams = s, index = n, order = K, "mrg split failed");
                error
            })?;
            tracing::debug!(streams = s, index = n, order = K, "mrg split");
        }
        Ok(())
    }

    fn jump2(&mut self, s: u32) {
        let mut jump = self.companion();
        for _ in 0 .. s {
            jump = matrix_mult(&jump, &jump, M);
        }
        self.apply(&jump);
    }
}

impl_rand_core!(Mrg2);
impl_rand_core!(Mrg3);
impl_rand_core!(Mrg4);

impl<const K: usize> fmt::Display for Mrg<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[mrg{} ", K)?;
        self.write_body(f)?;
        write!(f, "]")
    }
}

impl<const K: usize> TextIo for Mrg<K> where MrgParameter<K>: Default {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str(&format!("[mrg{} ", K))?;
        Self::read_body(reader, MrgParameter::default())
    }
}

impl<const K: usize> core::str::FromStr for Mrg<K> where MrgParameter<K>: Default {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::minstd::Minstd;

    /// Naive recurrence on i64 values.
    fn reference<const K: usize>(rng: &Mrg<K>, steps: usize) -> Vec<i32> {
        let a = rng.parameter().coefficients();
        let mut r: Vec<i64> = rng.state().iter().map(|&x| x as i64).collect();
        let mut out = Vec::new();
        for _ in 0 .. steps {
            let t = a.iter().zip(r.iter()).map(|(&a, &r)| a as i64 * r % M).sum::<i64>() % M;
            r.insert(0, t);
            r.truncate(K);
            out.push(t as i32);
        }
        out
    }

    fn check<const K: usize>(parameters: &[MrgParameter<K>], rnd: &mut dyn FnMut() -> u64)
    where MrgParameter<K>: Default {
        for &parameter in parameters {
            for _ in 0 .. 1<<4 {
                let mut status = [0i64; K];
                for x in status.iter_mut() { *x = (rnd() % M as u64) as i64; }
                let rng = Mrg::from_parts(parameter, status).unwrap();

                let mut a = rng;
                let expected = reference(&rng, 40);
                for &x in expected.iter() {
                    assert_eq!(a.next(), x);
                }

                // Matrix jumps agree with stepping.
                let n = rnd() % 200;
                let mut a = rng;
                let mut b = rng;
                for _ in 0 .. n { a.next(); }
                b.discard(n);
                assert_eq!(a, b);
                let s = (rnd() % 8) as u32;
                let mut a = rng;
                let mut b = rng;
                a.jump2(s);
                b.discard(1 << s);
                assert_eq!(a, b);

                // Backward undoes a step.
                let mut a = rng;
                a.step();
                a.backward().unwrap();
                assert_eq!(a, rng);

                let streams = (rnd() % 5) as u32 + 2;
                let index = (rnd() % streams as u64) as u32;
                let mut base = rng;
                let sequence: Vec<i32> = (0 .. streams * 6).map(|_| base.next()).collect();
                let mut leaf = rng;
                leaf.split(streams, index).unwrap();
                for k in 0 .. 6 {
                    assert_eq!(leaf.next(), sequence[(index + k * streams) as usize]);
                }
                let copy: Mrg<K> = leaf.to_text().parse().unwrap();
                assert_eq!(copy, leaf);
            }
        }
    }

    #[test] pub fn run_tests() {
        let mut r: u64 = 3;
        let mut rnd = move || -> u64 { r = r.wrapping_mul(crate::LCG_M64_4).wrapping_add(0xffff); r >> 16 };

        check(&[MrgParameter::<2>::LECUYER1, MrgParameter::<2>::LECUYER2], &mut rnd);
        check(&[MrgParameter::<3>::LECUYER1, MrgParameter::<3>::LECUYER2, MrgParameter::<3>::LECUYER3], &mut rnd);
        check(&[MrgParameter::<4>::LECUYER1, MrgParameter::<4>::LECUYER2], &mut rnd);

        // Default status (0, 1, ..., 1): the first output is the sum of the older coefficients.
        let mut rng = Mrg3::default();
        assert_eq!(rng.state(), [0, 1, 1]);
        assert_eq!(rng.next() as i64, (1826992351 + 1977753457) % M);
        assert_eq!(rng.name(), "mrg3");

        let mut rng = Mrg2::default();
        rng.seed(M as u64 + 5);
        assert_eq!(rng.state(), [5, 1]);
        rng.seed_status([-1, M + 2]);
        assert_eq!(rng.state(), [(M - 1) as i32, 2]);
        let mut g = Minstd::new(9);
        let mut h = g;
        rng.seed_from(&mut g);
        assert_eq!(rng.state(), [h.next() as i32, h.next() as i32]);

        assert_eq!(Mrg4::default().to_text(), "[mrg4 (2001982722 1412284257 1155380217 1668339922) (0 1 1 1)]");
        assert_eq!("[mrg2 (7 8)]".parse::<Mrg2>().unwrap(), Mrg2::from_parts(MrgParameter::<2>::LECUYER1, [7, 8]).unwrap());
        assert!("[mrg2 (7 8 9)]".parse::<Mrg2>().is_err());
        assert!("[mrg3 (7 8)]".parse::<Mrg2>().is_err());
        assert!(matches!(
            "[mrg2 (1 2) (2147483647 0)]".parse::<Mrg2>(),
            Err(ParseError::Invalid(EngineError::OutOfRange { name: "r1", .. }))
        ));
        assert_eq!(MrgParameter::<3>::new([0, -1, 0]), Err(EngineError::OutOfRange { name: "a2", value: -1, modulus: M }));

        let mut rng = Mrg2::default();
        assert_eq!(rng.split(0, 0), Err(EngineError::InvalidSplit { streams: 0, index: 0 }));
    }
}
