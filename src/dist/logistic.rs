use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use super::{finite, float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Scale theta > 0 and location eta.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogisticParam {
    theta: f64,
    eta: f64,
}

impl LogisticParam {
    pub fn new(theta: f64, eta: f64) -> Result<Self, DistError> {
        Ok(LogisticParam { theta: positive("theta", theta)?, eta: finite("eta", eta)? })
    }
    #[inline] pub fn theta(&self) -> f64 { self.theta }
    #[inline] pub fn eta(&self) -> f64 { self.eta }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Logistic {
    param: LogisticParam,
}

impl Default for Logistic {
    fn default() -> Self {
        Logistic { param: LogisticParam { theta: 1.0, eta: 0.0 } }
    }
}

impl Logistic {
    pub fn new(theta: f64, eta: f64) -> Result<Self, DistError> {
        Ok(Logistic { param: LogisticParam::new(theta, eta)? })
    }
    pub fn from_param(param: LogisticParam) -> Self { Logistic { param } }
    pub fn theta(&self) -> f64 { self.param.theta }
    pub fn eta(&self) -> f64 { self.param.eta }
}

impl Distribution for Logistic {
    type Output = f64;
    type Param = LogisticParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.icdf(uniformoo(engine))
    }
    fn min(&self) -> f64 { f64::NEG_INFINITY }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> LogisticParam { self.param }
    fn set_param(&mut self, param: LogisticParam) { self.param = param; }
}

impl Continuous for Logistic {
    fn pdf(&self, x: f64) -> f64 {
        // Written in terms of e^-|z| so that it never overflows.
        let z = ((x - self.param.eta) / self.param.theta).abs();
        let e = (-z).exp();
        e / (self.param.theta * (1.0 + e) * (1.0 + e))
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.param.eta) / self.param.theta;
        1.0 / (1.0 + (-z).exp())
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
        self.param.eta - self.param.theta * ((1.0 - u) / u).ln()
    }
}

float_record!(Logistic, LogisticParam, "logistic", 2, [theta, eta], Logistic::new);
