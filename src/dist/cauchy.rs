use std::f64::consts::PI;
use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use super::{finite, float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Scale theta > 0 and location eta.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CauchyParam {
    theta: f64,
    eta: f64,
}

impl CauchyParam {
    pub fn new(theta: f64, eta: f64) -> Result<Self, DistError> {
        Ok(CauchyParam { theta: positive("theta", theta)?, eta: finite("eta", eta)? })
    }
    #[inline] pub fn theta(&self) -> f64 { self.theta }
    #[inline] pub fn eta(&self) -> f64 { self.eta }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cauchy {
    param: CauchyParam,
}

impl Default for Cauchy {
    fn default() -> Self {
        Cauchy { param: CauchyParam { theta: 1.0, eta: 0.0 } }
    }
}

impl Cauchy {
    pub fn new(theta: f64, eta: f64) -> Result<Self, DistError> {
        Ok(Cauchy { param: CauchyParam::new(theta, eta)? })
    }
    pub fn from_param(param: CauchyParam) -> Self { Cauchy { param } }
    pub fn theta(&self) -> f64 { self.param.theta }
    pub fn eta(&self) -> f64 { self.param.eta }
}

impl Distribution for Cauchy {
    type Output = f64;
    type Param = CauchyParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.icdf(uniformoo(engine))
    }
    fn min(&self) -> f64 { f64::NEG_INFINITY }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> CauchyParam { self.param }
    fn set_param(&mut self, param: CauchyParam) { self.param = param; }
}

impl Continuous for Cauchy {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.param.eta) / self.param.theta;
        1.0 / (PI * self.param.theta * (1.0 + z * z))
    }

    fn cdf(&self, x: f64) -> f64 {
        ((x - self.param.eta) / self.param.theta).atan() / PI + 0.5
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
        self.param.eta - self.param.theta / (PI * u).tan()
    }
}

float_record!(Cauchy, CauchyParam, "cauchy", 2, [theta, eta], Cauchy::new);
