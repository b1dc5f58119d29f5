use std::f64::consts::{FRAC_1_SQRT_2, PI};
use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use crate::special::{erfc, inv_phi};
use super::{finite, float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Mean mu and standard deviation sigma > 0 of the underlying normal law.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LognormalParam {
    mu: f64,
    sigma: f64,
}

impl LognormalParam {
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistError> {
        Ok(LognormalParam { mu: finite("mu", mu)?, sigma: positive("sigma", sigma)? })
    }
    #[inline] pub fn mu(&self) -> f64 { self.mu }
    #[inline] pub fn sigma(&self) -> f64 { self.sigma }
}

/// Law of exp(X) for normal X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lognormal {
    param: LognormalParam,
}

impl Default for Lognormal {
    fn default() -> Self {
        Lognormal { param: LognormalParam { mu: 0.0, sigma: 1.0 } }
    }
}

impl Lognormal {
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistError> {
        Ok(Lognormal { param: LognormalParam::new(mu, sigma)? })
    }
    pub fn from_param(param: LognormalParam) -> Self { Lognormal { param } }
    pub fn mu(&self) -> f64 { self.param.mu }
    pub fn sigma(&self) -> f64 { self.param.sigma }
}

impl Distribution for Lognormal {
    type Output = f64;
    type Param = LognormalParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.icdf(uniformoo(engine))
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> LognormalParam { self.param }
    fn set_param(&mut self, param: LognormalParam) { self.param = param; }
}

impl Continuous for Lognormal {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let t = (x.ln() - self.param.mu) / self.param.sigma;
        (-0.5 * t * t).exp() / ((2.0 * PI).sqrt() * self.param.sigma * x)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        0.5 * erfc((self.param.mu - x.ln()) / self.param.sigma * FRAC_1_SQRT_2)
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        if u == 0.0 {
            return 0.0;
        }
        if u == 1.0 {
            return f64::INFINITY;
        }
        (inv_phi(u) * self.param.sigma + self.param.mu).exp()
    }
}

float_record!(Lognormal, LognormalParam, "lognormal", 2, [mu, sigma], Lognormal::new);
