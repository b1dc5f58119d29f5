use core::fmt;
use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::{DistError, ParseError};
use crate::special::{gamma_p, inv_gamma_p};
use crate::text::{TextIo, TextReader};
use super::gamma::unit_gamma_pdf;
use super::{is_probability, read_record, write_record, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Degrees of freedom nu >= 1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "i32", into = "i32"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChiSquareParam {
    nu: i32,
}

impl ChiSquareParam {
    pub fn new(nu: i32) -> Result<Self, DistError> {
        if nu < 1 {
            tracing::debug!(nu, "rejected distribution parameter");
            return Err(DistError::InvalidParameter { name: "nu", requirement: "at least 1" });
        }
        Ok(ChiSquareParam { nu })
    }
    #[inline] pub fn nu(&self) -> i32 { self.nu }
}

impl TryFrom<i32> for ChiSquareParam {
    type Error = DistError;
    fn try_from(nu: i32) -> Result<Self, DistError> {
        Self::new(nu)
    }
}

impl From<ChiSquareParam> for i32 {
    fn from(param: ChiSquareParam) -> i32 {
        param.nu
    }
}

/// Chi-square distribution: the sum of nu squared standard normal variates,
/// a gamma law with shape nu / 2 and scale 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChiSquare {
    param: ChiSquareParam,
}

impl Default for ChiSquare {
    fn default() -> Self {
        ChiSquare { param: ChiSquareParam { nu: 1 } }
    }
}

impl ChiSquare {
    pub fn new(nu: i32) -> Result<Self, DistError> {
        Ok(ChiSquare { param: ChiSquareParam::new(nu)? })
    }
    pub fn from_param(param: ChiSquareParam) -> Self { ChiSquare { param } }
    pub fn nu(&self) -> i32 { self.param.nu }

    #[inline]
    fn kappa(&self) -> f64 {
        0.5 * self.param.nu as f64
    }
}

impl Distribution for ChiSquare {
    type Output = f64;
    type Param = ChiSquareParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        2.0 * inv_gamma_p(self.kappa(), uniformoo(engine))
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> ChiSquareParam { self.param }
    fn set_param(&mut self, param: ChiSquareParam) { self.param = param; }
}

impl Continuous for ChiSquare {
    fn pdf(&self, x: f64) -> f64 {
        0.5 * unit_gamma_pdf(self.kappa(), 0.5 * x)
    }

    fn cdf(&self, x: f64) -> f64 {
        gamma_p(self.kappa(), 0.5 * x)
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        2.0 * inv_gamma_p(self.kappa(), u)
    }
}

impl fmt::Display for ChiSquare {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_record(f, "chi_square", &[self.param.nu.to_string()])
    }
}

impl TextIo for ChiSquare {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        let [nu] = read_record::<i32, 1>(reader, "chi_square")?;
        Ok(ChiSquare::new(nu)?)
    }
}

impl core::str::FromStr for ChiSquare {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::dist::testing::{check_density, check_inverse};

    #[test] pub fn run_tests() {
        // Two degrees of freedom: exponential with mean 2.
        let d = ChiSquare::new(2).unwrap();
        assert_relative_eq!(d.cdf(3.0), 1.0 - (-1.5f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(d.pdf(0.0), 0.5, max_relative = 1e-12);

        assert_relative_eq!(ChiSquare::new(1).unwrap().icdf(0.95), 3.841458820694124, max_relative = 1e-10);
        let d = ChiSquare::new(10).unwrap();
        assert_relative_eq!(d.icdf(0.95), 18.307038053275146, max_relative = 1e-10);
        assert_eq!(d.icdf(0.0), 0.0);
        assert_eq!(d.icdf(1.0), f64::INFINITY);
        assert_eq!(d.cdf(-2.0), 0.0);
        check_inverse(&d, 1e-12);
        check_density(&d, 1e-8);

        assert!(ChiSquare::new(0).is_err());
        assert_eq!(d.to_text(), "[chi_square (10)]");
        assert_eq!("[chi_square (10)]".parse::<ChiSquare>().unwrap(), d);
    }
}
