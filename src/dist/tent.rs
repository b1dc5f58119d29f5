use crate::canonical::uniformcc;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use super::{finite, float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Mode m and half width d > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TentParam {
    m: f64,
    d: f64,
}

impl TentParam {
    pub fn new(m: f64, d: f64) -> Result<Self, DistError> {
        Ok(TentParam { m: finite("m", m)?, d: positive("d", d)? })
    }
    #[inline] pub fn m(&self) -> f64 { self.m }
    #[inline] pub fn d(&self) -> f64 { self.d }
}

/// Symmetric triangular distribution on [m - d, m + d].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tent {
    param: TentParam,
}

impl Default for Tent {
    fn default() -> Self {
        Tent { param: TentParam { m: 0.0, d: 1.0 } }
    }
}

impl Tent {
    pub fn new(m: f64, d: f64) -> Result<Self, DistError> {
        Ok(Tent { param: TentParam::new(m, d)? })
    }
    pub fn from_param(param: TentParam) -> Self { Tent { param } }
    pub fn m(&self) -> f64 { self.param.m }
    pub fn d(&self) -> f64 { self.param.d }
}

impl Distribution for Tent {
    type Output = f64;
    type Param = TentParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.icdf(uniformcc(engine))
    }
    fn min(&self) -> f64 { self.param.m - self.param.d }
    fn max(&self) -> f64 { self.param.m + self.param.d }
    fn param(&self) -> TentParam { self.param }
    fn set_param(&mut self, param: TentParam) { self.param = param; }
}

impl Continuous for Tent {
    fn pdf(&self, x: f64) -> f64 {
        let TentParam { m, d } = self.param;
        let t = (x - m).abs();
        if t >= d {
            return 0.0;
        }
        (1.0 - t / d) / d
    }

    fn cdf(&self, x: f64) -> f64 {
        let TentParam { m, d } = self.param;
        let t = x - m;
        if t <= -d {
            0.0
        } else if t >= d {
            1.0
        } else if t <= 0.0 {
            0.5 * (d + t) * (d + t) / (d * d)
        } else {
            1.0 - 0.5 * (d - t) * (d - t) / (d * d)
        }
    }

    fn icdf(&self, u: f64) -> f64 {
        let TentParam { m, d } = self.param;
        if !is_probability(u) {
            return domain_error();
        }
        if u < 0.5 {
            m - d + d * (2.0 * u).sqrt()
        } else {
            m + d - d * (2.0 * (1.0 - u)).sqrt()
        }
    }
}

float_record!(Tent, TentParam, "tent", 2, [m, d], Tent::new);
