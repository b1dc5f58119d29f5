use std::f64::consts::{FRAC_1_SQRT_2, FRAC_2_PI};
use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use crate::special::erf;
use super::{float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Scale theta > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 1]", into = "[f64; 1]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaxwellParam {
    theta: f64,
}

impl MaxwellParam {
    pub fn new(theta: f64) -> Result<Self, DistError> {
        Ok(MaxwellParam { theta: positive("theta", theta)? })
    }
    #[inline] pub fn theta(&self) -> f64 { self.theta }
}

/// Maxwell-Boltzmann speed distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Maxwell {
    param: MaxwellParam,
}

impl Default for Maxwell {
    fn default() -> Self {
        Maxwell { param: MaxwellParam { theta: 1.0 } }
    }
}

impl Maxwell {
    pub fn new(theta: f64) -> Result<Self, DistError> {
        Ok(Maxwell { param: MaxwellParam::new(theta)? })
    }
    pub fn from_param(param: MaxwellParam) -> Self { Maxwell { param } }
    pub fn theta(&self) -> f64 { self.param.theta }

    /// Safeguarded Newton iteration on cdf(x) = u for u in (0, 1).
    fn invert(&self, u: f64) -> f64 {
        let theta = self.param.theta;
        let mut lo = 0.0;
        let mut hi = 4.0 * theta;
        while self.cdf(hi) < u {
            lo = hi;
            hi *= 2.0;
        }
        // Start at the mean.
        let mut x = 2.0 * theta * FRAC_2_PI.sqrt();
        if x <= lo || x >= hi {
            x = 0.5 * (lo + hi);
        }
        for _ in 0 .. 100 {
            let f = self.cdf(x) - u;
            if f == 0.0 {
                break;
            }
            if f < 0.0 { lo = x; } else { hi = x; }
            let p = self.pdf(x);
            let mut next = if p > 0.0 { x - f / p } else { lo - 1.0 };
            if next <= lo || next >= hi {
                next = 0.5 * (lo + hi);
            }
            let done = (next - x).abs() <= 4.0 * f64::EPSILON * x;
            x = next;
            if done {
                break;
            }
        }
        x
    }
}

impl Distribution for Maxwell {
    type Output = f64;
    type Param = MaxwellParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.invert(uniformoo(engine))
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> MaxwellParam { self.param }
    fn set_param(&mut self, param: MaxwellParam) { self.param = param; }
}

impl Continuous for Maxwell {
    fn pdf(&self, x: f64) -> f64 {
        let theta = self.param.theta;
        if x < 0.0 {
            return 0.0;
        }
        let z = x / theta;
        FRAC_2_PI.sqrt() * z * z * (-0.5 * z * z).exp() / theta
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = x / self.param.theta;
        erf(z * FRAC_1_SQRT_2) - FRAC_2_PI.sqrt() * z * (-0.5 * z * z).exp()
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
        self.invert(u)
    }
}

float_record!(Maxwell, MaxwellParam, "maxwell", 1, [theta], Maxwell::new);
