use core::fmt;
use crate::bits::Word;
use crate::engine::{check_split, impl_rand_core, Engine, Parallel};
use crate::error::{EngineError, ParseError};
use crate::modular::{gauss, matrix_mult, matrix_pow, matrix_vec_mult, modulo_inverse, mul_mod, reduce_2147462579, residue, sub_mod, Matrix};
use crate::text::{read_tuple, TextIo, TextReader};
use crate::MRG5S_MODULUS;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

const M: i64 = MRG5S_MODULUS;

fn check_range(names: &[&'static str; 5], values: &[i64; 5]) -> Result<[i32; 5], EngineError> {
    let mut out = [0; 5];
    for ((&name, &value), x) in names.iter().zip(values.iter()).zip(out.iter_mut()) {
        if !(0 .. M).contains(&value) {
            tracing::debug!(name, value, "mrg5s component out of range");
            return Err(EngineError::OutOfRange { name, value, modulus: M });
        }
        *x = value as i32;
    }
    Ok(out)
}

/// Recurrence coefficients a1 ... a5, each in [0, m).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[i64; 5]", into = "[i64; 5]"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mrg5sParameter {
    a: [i32; 5],
}

impl Mrg5sParameter {
    /// Maximal period coefficients, the default.
    pub const TRNG0: Mrg5sParameter = Mrg5sParameter { a: [1053223373, 1530818118, 1612122482, 133497989, 573245311] };
    pub const TRNG1: Mrg5sParameter = Mrg5sParameter { a: [2068619238, 2138332912, 671754166, 1442240992, 1526958817] };

    pub fn new(a: [i64; 5]) -> Result<Self, EngineError> {
        Ok(Mrg5sParameter { a: check_range(&["a1", "a2", "a3", "a4", "a5"], &a)? })
    }

    #[inline]
    pub fn coefficients(&self) -> [i32; 5] {
        self.a
    }
}

impl Default for Mrg5sParameter {
    fn default() -> Self {
        Self::TRNG0
    }
}

impl TryFrom<[i64; 5]> for Mrg5sParameter {
    type Error = EngineError;
    fn try_from(a: [i64; 5]) -> Result<Self, EngineError> {
        Self::new(a)
    }
}

impl From<Mrg5sParameter> for [i64; 5] {
    fn from(parameter: Mrg5sParameter) -> Self {
        parameter.a.map(|x| x as i64)
    }
}

/// Serialized form of `Mrg5s`, checked on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub struct Mrg5sFields {
    parameter: Mrg5sParameter,
    r: [i64; 5],
}

#[cfg(feature = "serde")]
impl TryFrom<Mrg5sFields> for Mrg5s {
    type Error = EngineError;
    fn try_from(fields: Mrg5sFields) -> Result<Self, EngineError> {
        Mrg5s::from_parts(fields.parameter, fields.r)
    }
}

/// Multiple recursive generator of order 5 modulo the prime m = 2**31 - 21069.
/// x_n = a1 x_(n-1) + ... + a5 x_(n-5) (mod m), period up to m**5 - 1.
/// The status holds the last five values, r1 newest.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "Mrg5sFields"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mrg5s {
    parameter: Mrg5sParameter,
    r: [i32; 5],
}

impl Default for Mrg5s {
    fn default() -> Self {
        Mrg5s { parameter: Mrg5sParameter::TRNG0, r: [0, 1, 1, 1, 1] }
    }
}

impl Mrg5s {
    /// Default parameters seeded with s.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self::default();
        rng.seed(seed);
        rng
    }

    /// Custom parameters with the default status.
    pub fn with_parameter(parameter: Mrg5sParameter) -> Self {
        Mrg5s { parameter, ..Self::default() }
    }

    /// Engine with explicit status (r1 ... r5). Components must lie in [0, m).
    pub fn from_parts(parameter: Mrg5sParameter, status: [i64; 5]) -> Result<Self, EngineError> {
        let r = check_range(&["r1", "r2", "r3", "r4", "r5"], &status)?;
        Ok(Mrg5s { parameter, r })
    }

    #[inline]
    pub fn parameter(&self) -> Mrg5sParameter {
        self.parameter
    }

    #[inline]
    pub fn state(&self) -> [i32; 5] {
        self.r
    }

    /// Sets r1 = s mod m and the older values to 1.
    pub fn seed(&mut self, seed: u64) {
        self.r = [(seed % M as u64) as i32, 1, 1, 1, 1];
    }

    /// Sets each status component to si mod m.
    pub fn seed5(&mut self, s1: i64, s2: i64, s3: i64, s4: i64, s5: i64) {
        self.r = [s1, s2, s3, s4, s5].map(|s| residue(s, M) as i32);
    }

    /// Resets parameters and status to the default-constructed engine.
    pub fn seed_default(&mut self) {
        *self = Self::default();
    }

    /// Draws each status component from another engine.
    pub fn seed_from<G: Engine>(&mut self, g: &mut G) {
        for x in self.r.iter_mut() {
            *x = (g.next().to_u64() % M as u64) as i32;
        }
    }

    #[inline]
    fn step(&mut self) {
        let mut t: u64 = 0;
        for (&a, &r) in self.parameter.a.iter().zip(self.r.iter()) {
            t += reduce_2147462579(a as u64 * r as u64);
        }
        let t = reduce_2147462579(t) as i32;
        self.r = [t, self.r[0], self.r[1], self.r[2], self.r[3]];
    }

    /// Companion matrix of the recurrence acting on (r1 ... r5).
    fn companion(&self) -> Matrix<5> {
        let mut c = [[0; 5]; 5];
        for (j, &a) in self.parameter.a.iter().enumerate() {
            c[0][j] = a as i64;
        }
        for i in 1 .. 5 {
            c[i][i - 1] = 1;
        }
        c
    }

    fn apply(&mut self, matrix: &Matrix<5>) {
        let v = matrix_vec_mult(matrix, &self.r.map(|x| x as i64), M);
        self.r = v.map(|x| x as i32);
    }

    /// Steps the status back by one, solving the recurrence for the oldest value.
    fn backward(&mut self) -> Result<(), EngineError> {
        let a = self.parameter.a.map(|x| x as i64);
        let r = self.r.map(|x| x as i64);
        // Largest k with a_k != 0: x_(n-5+k) determines x_(n-5).
        let t = match a.iter().rposition(|&x| x != 0) {
            Some(k) => {
                let mut t = r[4 - k];
                for j in 0 .. k {
                    t = sub_mod(t, mul_mod(a[j], r[5 - k + j], M), M);
                }
                mul_mod(t, modulo_inverse(a[k], M)?, M)
            }
            None => 0,
        };
        self.r = [self.r[1], self.r[2], self.r[3], self.r[4], t as i32];
        Ok(())
    }

    /// Leapfrog transformation on a copy, so failure leaves self unchanged.
    fn leapfrog(&self, s: u32, n: u32) -> Result<Self, EngineError> {
        let mut rng = *self;
        let mut q = [0i64; 10];
        rng.jump(n as u64 + 1);
        q[0] = rng.r[0] as i64;
        for x in q.iter_mut().skip(1) {
            rng.jump(s as u64);
            *x = rng.r[0] as i64;
        }
        // q_(5+i) = a1 q_(4+i) + ... + a5 q_i for i = 0 .. 5.
        let mut system = [[0; 5]; 5];
        let mut rhs = [0; 5];
        for i in 0 .. 5 {
            for j in 0 .. 5 {
                system[i][j] = q[4 + i - j];
            }
            rhs[i] = q[5 + i];
        }
        let a = gauss(&system, &rhs, M)?;
        rng.parameter = Mrg5sParameter { a: a.map(|x| x as i32) };
        rng.r = [q[4], q[3], q[2], q[1], q[0]].map(|x| x as i32);
        for _ in 0 .. 5 {
            rng.backward()?;
        }
        Ok(rng)
    }
}

impl Engine for Mrg5s {
    type Output = i32;
    const MIN: i32 = 0;
    const MAX: i32 = (M - 1) as i32;

    #[inline]
    fn next(&mut self) -> i32 {
        self.step();
        self.r[0]
    }

    fn discard(&mut self, n: u64) {
        if n < 16 {
            for _ in 0 .. n { self.step(); }
        } else {
            if n >= 1 << 32 {
                tracing::trace!(steps = n, "mrg5s jump ahead");
            }
            let jump = matrix_pow(&self.companion(), n, M);
            self.apply(&jump);
        }
    }

    fn name(&self) -> String {
        "mrg5s".to_string()
    }
}

impl Parallel for Mrg5s {
    fn split(&mut self, s: u32, n: u32) -> Result<(), EngineError> {
        check_split(s, n)?;
        if s > 1 {
            *self = self.leapfrog(s, n).map_err(|error| {
                tracing::debug!(%error, streams = s, index = n, "mrg5s split failed");
                error
            })?;
            tracing::debug!(streams = s, index = n, "mrg5s split");
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

impl_rand_core!(Mrg5s);

impl fmt::Display for Mrg5s {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a1, a2, a3, a4, a5] = self.parameter.a;
        let [r1, r2, r3, r4, r5] = self.r;
        write!(f, "[mrg5s ({} {} {} {} {}) ({} {} {} {} {})]", a1, a2, a3, a4, a5, r1, r2, r3, r4, r5)
    }
}

impl TextIo for Mrg5s {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str("[mrg5s ")?;
        let first = read_tuple::<i64, 5>(reader)?;
        // A second tuple means the first one was the parameter block.
        let (parameter, r) = if reader.delim(' ').is_ok() {
            let r = read_tuple::<i64, 5>(reader)?;
            (Mrg5sParameter::new(first)?, r)
        } else {
            (Mrg5sParameter::TRNG0, first)
        };
        reader.delim(']')?;
        Ok(Mrg5s::from_parts(parameter, r)?)
    }
}

impl core::str::FromStr for Mrg5s {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        // All-ones status steps to the coefficient sum.
        let mut rng = Mrg5s::default();
        rng.seed5(1, 1, 1, 1, 1);
        assert_eq!(rng.next(), 607982115);
        assert_eq!(rng.state(), [607982115, 1, 1, 1, 1]);

        assert_eq!(Mrg5s::default().next(), 1702221321);

        rng.seed5(-1, M, 2 * M + 3, 0, i64::MIN);
        assert_eq!(rng.state()[.. 4], [(M - 1) as i32, 0, 3, 0]);
        assert!((0 .. M as i32).contains(&rng.state()[4]));

        let mut r: u64 = 0;
        let mut rnd = || -> u64 { r = r.wrapping_mul(crate::LCG_M64_4).wrapping_add(0xffff); r };

        for parameter in [Mrg5sParameter::TRNG0, Mrg5sParameter::TRNG1] {
            for _ in 0 .. 1<<4 {
                let mut rng = Mrg5s::with_parameter(parameter);
                rng.seed(rnd());

                let n = rnd() & 0x1ff;
                let mut a = rng;
                let mut b = rng;
                for _ in 0 .. n { a.next(); }
                b.discard(n);
                assert_eq!(a, b);

                let s = (rnd() % 10) as u32;
                let mut a = rng;
                let mut b = rng;
                a.jump2(s);
                b.jump(1 << s);
                assert_eq!(a, b);

                let mut a = rng;
                a.step();
                a.backward().unwrap();
                assert_eq!(a, rng);

                let streams = (rnd() % 5) as u32 + 2;
                let index = (rnd() % streams as u64) as u32;
                let mut base = rng;
                let sequence: Vec<i32> = (0 .. streams * 8).map(|_| base.next()).collect();
                let mut leaf = rng;
                leaf.split(streams, index).unwrap();
                for k in 0 .. 8 {
                    assert_eq!(leaf.next(), sequence[(index + k * streams) as usize]);
                }
                let copy: Mrg5s = leaf.to_text().parse().unwrap();
                assert_eq!(copy, leaf);
            }
        }

        assert!(Mrg5sParameter::new([0, 0, 0, 0, M]).is_err());
        assert_eq!(
            Mrg5s::from_parts(Mrg5sParameter::TRNG1, [1, 2, -3, 4, 5]),
            Err(EngineError::OutOfRange { name: "r3", value: -3, modulus: M })
        );

        let mut rng = Mrg5s::new(9);
        assert!(rng.split(2, 2).is_err());
        assert_eq!(rng, Mrg5s::new(9));

        assert_eq!(
            Mrg5s::default().to_text(),
            "[mrg5s (1053223373 1530818118 1612122482 133497989 573245311) (0 1 1 1 1)]"
        );
        assert_eq!("[mrg5s (0 1 1 1 1)]".parse::<Mrg5s>().unwrap(), Mrg5s::default());
        let bad = format!("[mrg5s (1 2 3 4 5) (1 2 3 4 {})]", M);
        assert!(matches!(bad.parse::<Mrg5s>(), Err(ParseError::Invalid(EngineError::OutOfRange { .. }))));
    }
}
