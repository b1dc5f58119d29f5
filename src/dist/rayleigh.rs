use crate::canonical::uniformoc;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use super::{float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Scale nu > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 1]", into = "[f64; 1]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayleighParam {
    nu: f64,
}

impl RayleighParam {
    pub fn new(nu: f64) -> Result<Self, DistError> {
        Ok(RayleighParam { nu: positive("nu", nu)? })
    }
    #[inline] pub fn nu(&self) -> f64 { self.nu }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rayleigh {
    param: RayleighParam,
}

impl Default for Rayleigh {
    fn default() -> Self {
        Rayleigh { param: RayleighParam { nu: 1.0 } }
    }
}

impl Rayleigh {
    pub fn new(nu: f64) -> Result<Self, DistError> {
        Ok(Rayleigh { param: RayleighParam::new(nu)? })
    }
    pub fn from_param(param: RayleighParam) -> Self { Rayleigh { param } }
    pub fn nu(&self) -> f64 { self.param.nu }
}

impl Distribution for Rayleigh {
    type Output = f64;
    type Param = RayleighParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.param.nu * (-2.0 * uniformoc::<f64, E>(engine).ln()).sqrt()
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> RayleighParam { self.param }
    fn set_param(&mut self, param: RayleighParam) { self.param = param; }
}

impl Continuous for Rayleigh {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let nu2 = self.param.nu * self.param.nu;
        x / nu2 * (-0.5 * x * x / nu2).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let nu2 = self.param.nu * self.param.nu;
        -(-0.5 * x * x / nu2).exp_m1()
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        if u == 1.0 {
            return f64::INFINITY;
        }
        self.param.nu * (-2.0 * (-u).ln_1p()).sqrt()
    }
}

float_record!(Rayleigh, RayleighParam, "rayleigh", 1, [nu], Rayleigh::new);
