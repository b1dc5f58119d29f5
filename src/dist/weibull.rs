use crate::canonical::uniformoc;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use super::{float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Scale theta > 0 and shape beta > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeibullParam {
    theta: f64,
    beta: f64,
}

impl WeibullParam {
    pub fn new(theta: f64, beta: f64) -> Result<Self, DistError> {
        Ok(WeibullParam { theta: positive("theta", theta)?, beta: positive("beta", beta)? })
    }
    #[inline] pub fn theta(&self) -> f64 { self.theta }
    #[inline] pub fn beta(&self) -> f64 { self.beta }
}

/// Weibull distribution; shape 1 is the exponential law.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weibull {
    param: WeibullParam,
}

impl Default for Weibull {
    fn default() -> Self {
        Weibull { param: WeibullParam { theta: 1.0, beta: 1.0 } }
    }
}

impl Weibull {
    pub fn new(theta: f64, beta: f64) -> Result<Self, DistError> {
        Ok(Weibull { param: WeibullParam::new(theta, beta)? })
    }
    pub fn from_param(param: WeibullParam) -> Self { Weibull { param } }
    pub fn theta(&self) -> f64 { self.param.theta }
    pub fn beta(&self) -> f64 { self.param.beta }
}

impl Distribution for Weibull {
    type Output = f64;
    type Param = WeibullParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.param.theta * (-uniformoc::<f64, E>(engine).ln()).powf(1.0 / self.param.beta)
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> WeibullParam { self.param }
    fn set_param(&mut self, param: WeibullParam) { self.param = param; }
}

impl Continuous for Weibull {
    fn pdf(&self, x: f64) -> f64 {
        let WeibullParam { theta, beta } = self.param;
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return if beta == 1.0 {
                1.0 / theta
            } else if beta > 1.0 {
                0.0
            } else {
                domain_error()
            };
        }
        let t = (x / theta).powf(beta - 1.0);
        beta / theta * t * (-t * x / theta).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -(-(x / self.param.theta).powf(self.param.beta)).exp_m1()
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        if u == 1.0 {
            return f64::INFINITY;
        }
        self.param.theta * (-(-u).ln_1p()).powf(1.0 / self.param.beta)
    }
}

float_record!(Weibull, WeibullParam, "weibull", 2, [theta, beta], Weibull::new);
