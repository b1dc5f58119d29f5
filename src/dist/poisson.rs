use crate::canonical::uniformco;
use crate::engine::Engine;
use crate::error::DistError;
use crate::special::{gamma_q, ln_gamma};
use super::{float_record, positive, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Largest tabulated value of the distribution function.
const MAX_TABLE: i32 = 1 << 12;

/// Mean mu > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 1]", into = "[f64; 1]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoissonParam {
    mu: f64,
}

impl PoissonParam {
    pub fn new(mu: f64) -> Result<Self, DistError> {
        Ok(PoissonParam { mu: positive("mu", mu)? })
    }
    #[inline] pub fn mu(&self) -> f64 { self.mu }
}

/// Poisson distribution with mean mu on the integers 0, 1, 2, ...
/// Sampling inverts a table of P(X <= x) for x below max(7, 2 mu),
/// and searches the distribution function beyond it.
#[derive(Clone, Debug)]
pub struct Poisson {
    param: PoissonParam,
    table: Vec<f64>,
}

impl PartialEq for Poisson {
    fn eq(&self, other: &Self) -> bool {
        self.param == other.param
    }
}

impl Default for Poisson {
    fn default() -> Self {
        Self::from_param(PoissonParam { mu: 1.0 })
    }
}

impl Poisson {
    pub fn new(mu: f64) -> Result<Self, DistError> {
        Ok(Self::from_param(PoissonParam::new(mu)?))
    }

    pub fn from_param(param: PoissonParam) -> Self {
        let mut poisson = Poisson { param, table: Vec::new() };
        poisson.tabulate();
        poisson
    }

    pub fn mu(&self) -> f64 { self.param.mu }

    /// The table ends with 1 so every uniform variate finds an entry.
    fn tabulate(&mut self) {
        let mu = self.param.mu;
        let len = (2.0 * mu).ceil().max(7.0).min(MAX_TABLE as f64) as i32;
        self.table = (0 .. len).map(|x| self.cdf(x)).collect();
        self.table.push(1.0);
    }

    /// P(X = x).
    pub fn pdf(&self, x: i32) -> f64 {
        if x < 0 {
            return 0.0;
        }
        let mu = self.param.mu;
        (-mu - ln_gamma(x as f64 + 1.0) + x as f64 * mu.ln()).exp()
    }

    /// P(X <= x).
    pub fn cdf(&self, x: i32) -> f64 {
        if x < 0 {
            return 0.0;
        }
        gamma_q(x as f64 + 1.0, self.param.mu)
    }

    /// Smallest x >= from with cdf(x) > u, by doubling and bisection.
    fn search_tail(&self, u: f64, from: i32) -> i32 {
        let (mut lo, mut hi) = (from - 1, from);
        let mut step = 1;
        while self.cdf(hi) <= u {
            if hi == i32::MAX {
                return hi;
            }
            lo = hi;
            hi = hi.saturating_add(step);
            step = step.saturating_mul(2);
        }
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.cdf(mid) > u { hi = mid; } else { lo = mid; }
        }
        hi
    }
}

impl Distribution for Poisson {
    type Output = i32;
    type Param = PoissonParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> i32 {
        let u: f64 = uniformco(engine);
        let x = self.table.partition_point(|&p| p <= u) as i32;
        let last = self.table.len() as i32 - 1;
        if x >= last {
            self.search_tail(u, last)
        } else {
            x
        }
    }
    fn min(&self) -> i32 { 0 }
    fn max(&self) -> i32 { i32::MAX }
    fn param(&self) -> PoissonParam { self.param }
    fn set_param(&mut self, param: PoissonParam) {
        self.param = param;
        self.tabulate();
    }
}

float_record!(Poisson, PoissonParam, "poisson", 1, [mu], Poisson::new);

#[cfg(test)] mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::text::TextIo;
    use crate::{Lcg64Shift, Mrg5s};

    #[test] pub fn run_tests() {
        let d = Poisson::new(3.0).unwrap();
        assert_relative_eq!(d.pdf(0), (-3.0f64).exp(), max_relative = 1e-13);
        assert_relative_eq!(d.pdf(2), 4.5 * (-3.0f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(d.cdf(1), 4.0 * (-3.0f64).exp(), max_relative = 1e-12);
        assert_eq!(d.pdf(-1), 0.0);
        assert_eq!(d.cdf(-1), 0.0);
        let total: f64 = (0 .. 40).map(|x| d.pdf(x)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-13);
        for x in 0 .. 30 {
            let partial: f64 = (0 ..= x).map(|k| d.pdf(k)).sum();
            assert_relative_eq!(d.cdf(x), partial, epsilon = 1e-13);
        }

        // Frequencies against the mass function.
        let mut rng = Lcg64Shift::new(21);
        let n = 100000;
        let mut counts = [0usize; 12];
        let mut sum = 0i64;
        for _ in 0 .. n {
            let x = d.sample(&mut rng);
            assert!(x >= 0);
            sum += x as i64;
            counts[(x as usize).min(11)] += 1;
        }
        assert!((sum as f64 / n as f64 - 3.0).abs() < 0.03);
        for (x, &count) in counts.iter().enumerate().take(8) {
            let expected = d.pdf(x as i32) * n as f64;
            assert!((count as f64 - expected).abs() < 5.0 * expected.sqrt() + 1.0, "x = {}: {} vs {}", x, count, expected);
        }

        // Beyond the table the distribution function is searched directly.
        assert_eq!(d.search_tail(d.cdf(9) - 1e-12, 7), 9);
        assert_eq!(d.search_tail(d.cdf(9), 7), 10);
        assert_eq!(d.search_tail(0.0, 7), 7);

        // Large means are tabulated only up to a bound.
        let big = Poisson::new(5000.0).unwrap();
        assert_eq!(big.table.len(), MAX_TABLE as usize + 1);
        let mut rng = Mrg5s::new(2);
        let mean = (0 .. 2000).map(|_| big.sample(&mut rng) as f64).sum::<f64>() / 2000.0;
        assert!((mean - 5000.0).abs() < 10.0);

        let mut e = Poisson::default();
        e.set_param(d.param());
        assert_eq!(e, d);
        assert_eq!(e.table, d.table);
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(f64::NAN).is_err());
        assert_eq!(d.to_text(), "[poisson (3.0)]");
        assert_eq!("[poisson (3.0)]".parse::<Poisson>().unwrap(), d);
    }
}
