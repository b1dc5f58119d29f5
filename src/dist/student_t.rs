use core::fmt;
use std::f64::consts::PI;
use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::{DistError, ParseError};
use crate::special::{beta_i, inv_beta_i, ln_gamma};
use crate::text::{TextIo, TextReader};
use super::{is_probability, read_record, write_record, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Degrees of freedom nu >= 1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "i32", into = "i32"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentTParam {
    nu: i32,
}

impl StudentTParam {
    pub fn new(nu: i32) -> Result<Self, DistError> {
        if nu < 1 {
            tracing::debug!(nu, "rejected distribution parameter");
            return Err(DistError::InvalidParameter { name: "nu", requirement: "at least 1" });
        }
        Ok(StudentTParam { nu })
    }
    #[inline] pub fn nu(&self) -> i32 { self.nu }
}

impl TryFrom<i32> for StudentTParam {
    type Error = DistError;
    fn try_from(nu: i32) -> Result<Self, DistError> {
        Self::new(nu)
    }
}

impl From<StudentTParam> for i32 {
    fn from(param: StudentTParam) -> i32 {
        param.nu
    }
}

/// Student's t distribution with integer degrees of freedom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentT {
    param: StudentTParam,
}

impl Default for StudentT {
    fn default() -> Self {
        StudentT { param: StudentTParam { nu: 1 } }
    }
}

impl StudentT {
    pub fn new(nu: i32) -> Result<Self, DistError> {
        Ok(StudentT { param: StudentTParam::new(nu)? })
    }
    pub fn from_param(param: StudentTParam) -> Self { StudentT { param } }
    pub fn nu(&self) -> i32 { self.param.nu }

    /// Inversion through the symmetric incomplete beta function, for u in (0, 1).
    fn invert(&self, u: f64) -> f64 {
        let nu = self.param.nu as f64;
        let t = inv_beta_i(u, 0.5 * nu, 0.5 * nu);
        (nu / (t * (1.0 - t))).sqrt() * (t - 0.5)
    }
}

impl Distribution for StudentT {
    type Output = f64;
    type Param = StudentTParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.invert(uniformoo(engine))
    }
    fn min(&self) -> f64 { f64::NEG_INFINITY }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> StudentTParam { self.param }
    fn set_param(&mut self, param: StudentTParam) { self.param = param; }
}

impl Continuous for StudentT {
    fn pdf(&self, x: f64) -> f64 {
        let nu = self.param.nu as f64;
        let norm = (ln_gamma(0.5 * (nu + 1.0)) - ln_gamma(0.5 * nu)).exp() / (PI * nu).sqrt();
        norm * (1.0 + x * x / nu).powf(-0.5 * (nu + 1.0))
    }

    fn cdf(&self, x: f64) -> f64 {
        let nu = self.param.nu as f64;
        if x.is_infinite() {
            return if x > 0.0 { 1.0 } else { 0.0 };
        }
        let s = (x * x + nu).sqrt();
        beta_i((x + s) / (2.0 * s), 0.5 * nu, 0.5 * nu)
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        if u == 0.0 {
            return f64::NEG_INFINITY;
        }
        if u == 1.0 {
            return f64::INFINITY;
        }
        self.invert(u)
    }
}

impl fmt::Display for StudentT {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_record(f, "student_t", &[self.param.nu.to_string()])
    }
}

impl TextIo for StudentT {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        let [nu] = read_record::<i32, 1>(reader, "student_t")?;
        Ok(StudentT::new(nu)?)
    }
}

impl core::str::FromStr for StudentT {
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
        // nu = 1 is the standard Cauchy law.
        let d = StudentT::new(1).unwrap();
        assert_relative_eq!(d.cdf(1.0), 0.75, epsilon = 1e-13);
        assert_relative_eq!(d.icdf(0.75), 1.0, epsilon = 1e-10);
        assert_relative_eq!(d.pdf(0.0), 1.0 / PI, epsilon = 1e-14);

        let d = StudentT::new(7).unwrap();
        assert_relative_eq!(d.cdf(0.0), 0.5, epsilon = 1e-14);
        assert_relative_eq!(d.icdf(0.975), 2.364624251592785, epsilon = 1e-9);
        assert_relative_eq!(d.icdf(0.1), -d.icdf(0.9), epsilon = 1e-10);
        assert_eq!(d.icdf(0.0), f64::NEG_INFINITY);
        assert_eq!(d.icdf(1.0), f64::INFINITY);
        crate::domain::clear();
        assert!(d.icdf(f64::NAN).is_nan());
        assert!(crate::domain::last_error().is_some());
        crate::domain::clear();
        check_inverse(&d, 1e-12);
        check_density(&d, 1e-9);

        assert!(StudentT::new(0).is_err());
        assert_eq!(d.to_text(), "[student_t (7)]");
        assert_eq!("[student_t (7)]".parse::<StudentT>().unwrap(), d);
        assert!("[student_t (7.5)]".parse::<StudentT>().is_err());
    }
}
