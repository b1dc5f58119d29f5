use core::fmt;
use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::{DistError, ParseError};
use crate::special::{beta_i, inv_beta_i, ln_beta};
use crate::text::{TextIo, TextReader};
use super::{is_probability, read_record, write_record, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Numerator and denominator degrees of freedom, both at least 1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "(i32, i32)", into = "(i32, i32)"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnedecorFParam {
    n: i32,
    m: i32,
}

impl SnedecorFParam {
    pub fn new(n: i32, m: i32) -> Result<Self, DistError> {
        for (name, value) in [("n", n), ("m", m)] {
            if value < 1 {
                tracing::debug!(name, value, "rejected distribution parameter");
                return Err(DistError::InvalidParameter { name, requirement: "at least 1" });
            }
        }
        Ok(SnedecorFParam { n, m })
    }
    #[inline] pub fn n(&self) -> i32 { self.n }
    #[inline] pub fn m(&self) -> i32 { self.m }
}

impl TryFrom<(i32, i32)> for SnedecorFParam {
    type Error = DistError;
    fn try_from((n, m): (i32, i32)) -> Result<Self, DistError> {
        Self::new(n, m)
    }
}

impl From<SnedecorFParam> for (i32, i32) {
    fn from(param: SnedecorFParam) -> Self {
        (param.n, param.m)
    }
}

/// Snedecor's F distribution, the ratio of two scaled chi-square variates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnedecorF {
    param: SnedecorFParam,
}

impl Default for SnedecorF {
    fn default() -> Self {
        SnedecorF { param: SnedecorFParam { n: 1, m: 1 } }
    }
}

impl SnedecorF {
    pub fn new(n: i32, m: i32) -> Result<Self, DistError> {
        Ok(SnedecorF { param: SnedecorFParam::new(n, m)? })
    }
    pub fn from_param(param: SnedecorFParam) -> Self { SnedecorF { param } }
    pub fn n(&self) -> i32 { self.param.n }
    pub fn m(&self) -> i32 { self.param.m }

    fn invert(&self, u: f64) -> f64 {
        let (n, m) = (self.param.n as f64, self.param.m as f64);
        let t = inv_beta_i(u, 0.5 * n, 0.5 * m);
        m * t / (n * (1.0 - t))
    }
}

impl Distribution for SnedecorF {
    type Output = f64;
    type Param = SnedecorFParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.invert(uniformoo(engine))
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> SnedecorFParam { self.param }
    fn set_param(&mut self, param: SnedecorFParam) { self.param = param; }
}

impl Continuous for SnedecorF {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let (n, m) = (self.param.n as f64, self.param.m as f64);
        let log_density = 0.5 * (n * (n * x).ln() + m * m.ln() - (n + m) * (n * x + m).ln());
        (log_density - x.ln() - ln_beta(0.5 * n, 0.5 * m)).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        let (n, m) = (self.param.n as f64, self.param.m as f64);
        beta_i(n * x / (m + n * x), 0.5 * n, 0.5 * m)
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        if u == 1.0 {
            return f64::INFINITY;
        }
        self.invert(u)
    }
}

impl fmt::Display for SnedecorF {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_record(f, "snedecor_f", &[self.param.n.to_string(), self.param.m.to_string()])
    }
}

impl TextIo for SnedecorF {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        let [n, m] = read_record::<i32, 2>(reader, "snedecor_f")?;
        Ok(SnedecorF::new(n, m)?)
    }
}

impl core::str::FromStr for SnedecorF {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}
