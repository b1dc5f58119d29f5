use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use super::{finite, float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Scale theta > 0 and location eta.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtremeValueParam {
    theta: f64,
    eta: f64,
}

impl ExtremeValueParam {
    pub fn new(theta: f64, eta: f64) -> Result<Self, DistError> {
        Ok(ExtremeValueParam { theta: positive("theta", theta)?, eta: finite("eta", eta)? })
    }
    #[inline] pub fn theta(&self) -> f64 { self.theta }
    #[inline] pub fn eta(&self) -> f64 { self.eta }
}

/// Gumbel law of the minimum, with cdf 1 - exp(-e^z) for z = (x - eta) / theta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtremeValue {
    param: ExtremeValueParam,
}

impl Default for ExtremeValue {
    fn default() -> Self {
        ExtremeValue { param: ExtremeValueParam { theta: 1.0, eta: 0.0 } }
    }
}

impl ExtremeValue {
    pub fn new(theta: f64, eta: f64) -> Result<Self, DistError> {
        Ok(ExtremeValue { param: ExtremeValueParam::new(theta, eta)? })
    }
    pub fn from_param(param: ExtremeValueParam) -> Self { ExtremeValue { param } }
    pub fn theta(&self) -> f64 { self.param.theta }
    pub fn eta(&self) -> f64 { self.param.eta }
}

impl Distribution for ExtremeValue {
    type Output = f64;
    type Param = ExtremeValueParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.icdf(uniformoo(engine))
    }
    fn min(&self) -> f64 { f64::NEG_INFINITY }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> ExtremeValueParam { self.param }
    fn set_param(&mut self, param: ExtremeValueParam) { self.param = param; }
}

impl Continuous for ExtremeValue {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.param.eta) / self.param.theta;
        (z - z.exp()).exp() / self.param.theta
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.param.eta) / self.param.theta;
        -(-z.exp()).exp_m1()
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
        self.param.eta + self.param.theta * (-(-u).ln_1p()).ln()
    }
}

float_record!(ExtremeValue, ExtremeValueParam, "extreme_value", 2, [theta, eta], ExtremeValue::new);
