use crate::canonical::uniformoc;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use super::{float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Mean mu > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 1]", into = "[f64; 1]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialParam {
    mu: f64,
}

impl ExponentialParam {
    pub fn new(mu: f64) -> Result<Self, DistError> {
        Ok(ExponentialParam { mu: positive("mu", mu)? })
    }
    #[inline] pub fn mu(&self) -> f64 { self.mu }
}

/// Exponential distribution with mean mu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponential {
    param: ExponentialParam,
}

impl Default for Exponential {
    fn default() -> Self {
        Exponential { param: ExponentialParam { mu: 1.0 } }
    }
}

impl Exponential {
    pub fn new(mu: f64) -> Result<Self, DistError> {
        Ok(Exponential { param: ExponentialParam::new(mu)? })
    }
    pub fn from_param(param: ExponentialParam) -> Self { Exponential { param } }
    pub fn mu(&self) -> f64 { self.param.mu }
}

impl Distribution for Exponential {
    type Output = f64;
    type Param = ExponentialParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        -self.param.mu * uniformoc::<f64, E>(engine).ln()
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> ExponentialParam { self.param }
    fn set_param(&mut self, param: ExponentialParam) { self.param = param; }
}

impl Continuous for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        (-x / self.param.mu).exp() / self.param.mu
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -(-x / self.param.mu).exp_m1()
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        if u == 1.0 {
            return f64::INFINITY;
        }
        -self.param.mu * (-u).ln_1p()
    }
}

float_record!(Exponential, ExponentialParam, "exponential", 1, [mu], Exponential::new);
