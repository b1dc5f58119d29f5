use crate::canonical::uniformoc;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use super::{float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Tail exponent gamma > 0 and scale theta > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParetoParam {
    gamma: f64,
    theta: f64,
}

impl ParetoParam {
    pub fn new(gamma: f64, theta: f64) -> Result<Self, DistError> {
        Ok(ParetoParam { gamma: positive("gamma", gamma)?, theta: positive("theta", theta)? })
    }
    #[inline] pub fn gamma(&self) -> f64 { self.gamma }
    #[inline] pub fn theta(&self) -> f64 { self.theta }
}

/// Pareto distribution of the second kind (Lomax), supported on [0, inf).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pareto {
    param: ParetoParam,
}

impl Default for Pareto {
    fn default() -> Self {
        Pareto { param: ParetoParam { gamma: 1.0, theta: 1.0 } }
    }
}

impl Pareto {
    pub fn new(gamma: f64, theta: f64) -> Result<Self, DistError> {
        Ok(Pareto { param: ParetoParam::new(gamma, theta)? })
    }
    pub fn from_param(param: ParetoParam) -> Self { Pareto { param } }
    pub fn gamma(&self) -> f64 { self.param.gamma }
    pub fn theta(&self) -> f64 { self.param.theta }
}

impl Distribution for Pareto {
    type Output = f64;
    type Param = ParetoParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        let ParetoParam { gamma, theta } = self.param;
        theta * uniformoc::<f64, E>(engine).powf(-1.0 / gamma) - theta
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> ParetoParam { self.param }
    fn set_param(&mut self, param: ParetoParam) { self.param = param; }
}

impl Continuous for Pareto {
    fn pdf(&self, x: f64) -> f64 {
        let ParetoParam { gamma, theta } = self.param;
        if x < 0.0 {
            return 0.0;
        }
        gamma / theta * (1.0 + x / theta).powf(-gamma - 1.0)
    }

    fn cdf(&self, x: f64) -> f64 {
        let ParetoParam { gamma, theta } = self.param;
        if x <= 0.0 {
            return 0.0;
        }
        1.0 - (1.0 + x / theta).powf(-gamma)
    }

    fn icdf(&self, u: f64) -> f64 {
        let ParetoParam { gamma, theta } = self.param;
        if !is_probability(u) {
            return domain_error();
        }
        if u == 1.0 {
            return f64::INFINITY;
        }
        theta * ((1.0 - u).powf(-1.0 / gamma) - 1.0)
    }
}

float_record!(Pareto, ParetoParam, "pareto", 2, [gamma, theta], Pareto::new);
