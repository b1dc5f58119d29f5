use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use crate::special::{gamma_p, inv_gamma_p, ln_gamma};
use super::{float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Shape kappa > 0 and scale theta > 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GammaParam {
    kappa: f64,
    theta: f64,
}

impl GammaParam {
    pub fn new(kappa: f64, theta: f64) -> Result<Self, DistError> {
        Ok(GammaParam { kappa: positive("kappa", kappa)?, theta: positive("theta", theta)? })
    }
    #[inline] pub fn kappa(&self) -> f64 { self.kappa }
    #[inline] pub fn theta(&self) -> f64 { self.theta }
}

/// Gamma distribution with density x**(kappa - 1) exp(-x / theta) / (Gamma(kappa) theta**kappa).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gamma {
    param: GammaParam,
}

impl Default for Gamma {
    fn default() -> Self {
        Gamma { param: GammaParam { kappa: 1.0, theta: 1.0 } }
    }
}

impl Gamma {
    pub fn new(kappa: f64, theta: f64) -> Result<Self, DistError> {
        Ok(Gamma { param: GammaParam::new(kappa, theta)? })
    }
    pub fn from_param(param: GammaParam) -> Self { Gamma { param } }
    pub fn kappa(&self) -> f64 { self.param.kappa }
    pub fn theta(&self) -> f64 { self.param.theta }
}

/// Density of the unit-scale gamma law, shared with the chi-square law.
pub(crate) fn unit_gamma_pdf(kappa: f64, x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    if x == 0.0 {
        return if kappa < 1.0 { f64::INFINITY } else if kappa == 1.0 { 1.0 } else { 0.0 };
    }
    ((kappa - 1.0) * x.ln() - x - ln_gamma(kappa)).exp()
}

impl Distribution for Gamma {
    type Output = f64;
    type Param = GammaParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        self.param.theta * inv_gamma_p(self.param.kappa, uniformoo(engine))
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { f64::INFINITY }
    fn param(&self) -> GammaParam { self.param }
    fn set_param(&mut self, param: GammaParam) { self.param = param; }
}

impl Continuous for Gamma {
    fn pdf(&self, x: f64) -> f64 {
        let theta = self.param.theta;
        unit_gamma_pdf(self.param.kappa, x / theta) / theta
    }

    fn cdf(&self, x: f64) -> f64 {
        gamma_p(self.param.kappa, x / self.param.theta)
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        self.param.theta * inv_gamma_p(self.param.kappa, u)
    }
}

float_record!(Gamma, GammaParam, "gamma", 2, [kappa, theta], Gamma::new);

#[cfg(test)] mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::dist::testing::{check_density, check_inverse};
    use crate::dist::Exponential;
    use crate::text::TextIo;
    use crate::Mrg5s;

    #[test] pub fn run_tests() {
        // kappa = 1 is the exponential law.
        let d = Gamma::new(1.0, 2.0).unwrap();
        let e = Exponential::new(2.0).unwrap();
        for &x in [0.1, 1.0, 3.0, 10.0].iter() {
            assert_relative_eq!(d.cdf(x), e.cdf(x), max_relative = 1e-12);
            assert_relative_eq!(d.pdf(x), e.pdf(x), max_relative = 1e-12);
        }
        assert_eq!(d.pdf(0.0), 0.5);
        assert_eq!(d.pdf(-1.0), 0.0);
        assert_eq!(d.cdf(-1.0), 0.0);
        assert_eq!(d.icdf(0.0), 0.0);
        assert_eq!(d.icdf(1.0), f64::INFINITY);
        assert_eq!(Gamma::new(0.5, 1.0).unwrap().pdf(0.0), f64::INFINITY);
        crate::domain::clear();
        assert!(d.icdf(1.5).is_nan());
        assert!(crate::domain::last_error().is_some());
        crate::domain::clear();

        let d = Gamma::new(2.5, 1.5).unwrap();
        check_inverse(&d, 1e-12);
        check_density(&d, 1e-8);

        let mut rng = Mrg5s::new(11);
        let n = 50000;
        let mean = (0 .. n).map(|_| d.sample(&mut rng)).sum::<f64>() / n as f64;
        assert!((mean - 3.75).abs() < 0.1);

        assert!(Gamma::new(0.0, 1.0).is_err());
        assert!(Gamma::new(1.0, -1.0).is_err());
        assert_eq!(d.to_text(), "[gamma (2.5 1.5)]");
        assert_eq!("[gamma (2.5 1.5)]".parse::<Gamma>().unwrap(), d);
    }
}
