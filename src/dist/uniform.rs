use core::fmt;
use crate::canonical::uniformco;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::{DistError, ParseError};
use crate::text::{TextIo, TextReader};
use super::{finite, float_record, is_probability, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// The standard uniform law on [0, 1). It has no parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Uniform01;

impl Distribution for Uniform01 {
    type Output = f64;
    type Param = ();

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        uniformco(engine)
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { 1.0 }
    fn param(&self) {}
    fn set_param(&mut self, _param: ()) {}
}

impl Continuous for Uniform01 {
    fn pdf(&self, x: f64) -> f64 {
        if (0.0 ..= 1.0).contains(&x) { 1.0 } else { 0.0 }
    }

    fn cdf(&self, x: f64) -> f64 {
        x.clamp(0.0, 1.0)
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        u
    }
}

impl fmt::Display for Uniform01 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[uniform01 ()]")
    }
}

impl TextIo for Uniform01 {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str("[uniform01 ()]")?;
        Ok(Uniform01)
    }
}

impl core::str::FromStr for Uniform01 {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}

/// Interval [a, b) with a < b.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformParam {
    a: f64,
    b: f64,
}

impl UniformParam {
    pub fn new(a: f64, b: f64) -> Result<Self, DistError> {
        let a = finite("a", a)?;
        let b = finite("b", b)?;
        if a >= b {
            tracing::debug!(a, b, "rejected distribution parameter");
            return Err(DistError::InvalidParameter { name: "b", requirement: "greater than a" });
        }
        Ok(UniformParam { a, b })
    }
    #[inline] pub fn a(&self) -> f64 { self.a }
    #[inline] pub fn b(&self) -> f64 { self.b }
    #[inline] pub fn width(&self) -> f64 { self.b - self.a }
}

/// Uniform distribution on an interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uniform {
    param: UniformParam,
}

impl Default for Uniform {
    fn default() -> Self {
        Uniform { param: UniformParam { a: 0.0, b: 1.0 } }
    }
}

impl Uniform {
    pub fn new(a: f64, b: f64) -> Result<Self, DistError> {
        Ok(Uniform { param: UniformParam::new(a, b)? })
    }
    pub fn from_param(param: UniformParam) -> Self { Uniform { param } }
    pub fn a(&self) -> f64 { self.param.a }
    pub fn b(&self) -> f64 { self.param.b }
}

impl Distribution for Uniform {
    type Output = f64;
    type Param = UniformParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.param.width() * uniformco::<f64, E>(engine) + self.param.a
    }
    fn min(&self) -> f64 { self.param.a }
    fn max(&self) -> f64 { self.param.b }
    fn param(&self) -> UniformParam { self.param }
    fn set_param(&mut self, param: UniformParam) { self.param = param; }
}

impl Continuous for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.param.a || x > self.param.b {
            return 0.0;
        }
        1.0 / self.param.width()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.param.a {
            0.0
        } else if x >= self.param.b {
            1.0
        } else {
            (x - self.param.a) / self.param.width()
        }
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        self.param.width() * u + self.param.a
    }
}

float_record!(Uniform, UniformParam, "uniform", 2, [a, b], Uniform::new);

#[cfg(test)] mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::dist::testing::{check_density, check_inverse};
    use crate::Minstd;

    #[test] pub fn run_tests() {
        let d = Uniform01;
        assert_eq!(d.cdf(-1.0), 0.0);
        assert_eq!(d.cdf(0.25), 0.25);
        assert_eq!(d.icdf(0.75), 0.75);
        assert_eq!(d.to_text(), "[uniform01 ()]");
        assert_eq!("[uniform01 ()]".parse::<Uniform01>().unwrap(), d);
        check_inverse(&d, 0.0);

        let d = Uniform::new(-2.0, 6.0).unwrap();
        assert_eq!(d.pdf(0.0), 0.125);
        assert_eq!(d.pdf(7.0), 0.0);
        assert_eq!(d.cdf(2.0), 0.5);
        assert_eq!(d.icdf(0.0), -2.0);
        assert_eq!(d.icdf(1.0), 6.0);
        assert_relative_eq!(d.icdf(0.3), 0.4, epsilon = 1e-15);
        check_inverse(&d, 1e-15);
        check_density(&d, 1e-12);

        let mut rng = Minstd::new(1);
        for _ in 0 .. 10000 {
            let x = d.sample(&mut rng);
            assert!((-2.0 .. 6.0).contains(&x));
        }

        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, 1.0).is_err());
        assert_eq!(d.to_text(), "[uniform (-2.0 6.0)]");
        assert_eq!("[uniform (-2.0 6.0)]".parse::<Uniform>().unwrap(), d);
        assert!("[uniform (6.0 -2.0)]".parse::<Uniform>().is_err());
    }
}
