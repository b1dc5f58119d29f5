use crate::canonical::uniformoc;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use super::{float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Exponent gamma > 0 and lower cutoff theta > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerlawParam {
    gamma: f64,
    theta: f64,
}

impl PowerlawParam {
    pub fn new(gamma: f64, theta: f64) -> Result<Self, DistError> {
        Ok(PowerlawParam { gamma: positive("gamma", gamma)?, theta: positive("theta", theta)? })
    }
    #[inline] pub fn gamma(&self) -> f64 { self.gamma }
    #[inline] pub fn theta(&self) -> f64 { self.theta }
}

/// Density proportional to x^-(gamma + 1) on [theta, inf).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Powerlaw {
    param: PowerlawParam,
}

impl Default for Powerlaw {
    fn default() -> Self {
        Powerlaw { param: PowerlawParam { gamma: 1.0, theta: 1.0 } }
    }
}

impl Powerlaw {
    pub fn new(gamma: f64, theta: f64) -> Result<Self, DistError> {
        Ok(Powerlaw { param: PowerlawParam::new(gamma, theta)? })
    }
    pub fn from_param(param: PowerlawParam) -> Self { Powerlaw { param } }
    pub fn gamma(&self) -> f64 { self.param.gamma }
    pub fn theta(&self) -> f64 { self.param.theta }
}

impl Distribution for Powerlaw {
    type Output = f64;
    type Param = PowerlawParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.param.theta * uniformoc::<f64, E>(engine).powf(-1.0 / self.param.gamma)
    }
    fn min(&self) -> f64 { self.param.theta }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> PowerlawParam { self.param }
    fn set_param(&mut self, param: PowerlawParam) { self.param = param; }
}

impl Continuous for Powerlaw {
    fn pdf(&self, x: f64) -> f64 {
        let PowerlawParam { gamma, theta } = self.param;
        if x < theta {
            return 0.0;
        }
        gamma / theta * (x / theta).powf(-gamma - 1.0)
    }

    fn cdf(&self, x: f64) -> f64 {
        let PowerlawParam { gamma, theta } = self.param;
        if x <= theta {
            return 0.0;
        }
        1.0 - (x / theta).powf(-gamma)
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        if u == 1.0 {
            return f64::INFINITY;
        }
        self.param.theta * (1.0 - u).powf(-1.0 / self.param.gamma)
    }
}

float_record!(Powerlaw, PowerlawParam, "powerlaw", 2, [gamma, theta], Powerlaw::new);
