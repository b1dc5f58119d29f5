use std::f64::consts::{FRAC_1_SQRT_2, PI};
use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use crate::special::{erfc, inv_phi};
use super::{finite, float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Mean mu and standard deviation sigma > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalParam {
    mu: f64,
    sigma: f64,
}

impl NormalParam {
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistError> {
        Ok(NormalParam { mu: finite("mu", mu)?, sigma: positive("sigma", sigma)? })
    }
    #[inline] pub fn mu(&self) -> f64 { self.mu }
    #[inline] pub fn sigma(&self) -> f64 { self.sigma }
}

/// Gaussian distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal {
    param: NormalParam,
}

impl Default for Normal {
    fn default() -> Self {
        Normal { param: NormalParam { mu: 0.0, sigma: 1.0 } }
    }
}

impl Normal {
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistError> {
        Ok(Normal { param: NormalParam::new(mu, sigma)? })
    }
    pub fn from_param(param: NormalParam) -> Self { Normal { param } }
    pub fn mu(&self) -> f64 { self.param.mu }
    pub fn sigma(&self) -> f64 { self.param.sigma }
}

impl Distribution for Normal {
    type Output = f64;
    type Param = NormalParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.icdf(uniformoo(engine))
    }
    fn min(&self) -> f64 { f64::NEG_INFINITY }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> NormalParam { self.param }
    fn set_param(&mut self, param: NormalParam) { self.param = param; }
}

impl Continuous for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let t = (x - self.param.mu) / self.param.sigma;
        (-0.5 * t * t).exp() / ((2.0 * PI).sqrt() * self.param.sigma)
    }

    fn cdf(&self, x: f64) -> f64 {
        0.5 * erfc((self.param.mu - x) / self.param.sigma * FRAC_1_SQRT_2)
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        inv_phi(u) * self.param.sigma + self.param.mu
    }
}

float_record!(Normal, NormalParam, "normal", 2, [mu, sigma], Normal::new);
