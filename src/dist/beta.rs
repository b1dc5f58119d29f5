use crate::canonical::uniformoo;
use crate::domain::domain_error;
use crate::engine::Engine;
use crate::error::DistError;
use crate::special::{beta, beta_i_norm, inv_beta_i_norm};
use super::{float_record, is_probability, positive, Continuous, Distribution};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Shape parameters alpha, beta > 0, with the normalization B(alpha, beta) cached.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Clone, Copy, Debug)]
pub struct BetaParam {
    alpha: f64,
    beta: f64,
    norm: f64,
}

impl BetaParam {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, DistError> {
        let alpha = positive("alpha", alpha)?;
        let beta = positive("beta", beta)?;
        Ok(BetaParam { alpha, beta, norm: self::beta(alpha, beta) })
    }

    #[inline] pub fn alpha(&self) -> f64 { self.alpha }
    #[inline] pub fn beta(&self) -> f64 { self.beta }
    /// B(alpha, beta).
    #[inline] pub fn norm(&self) -> f64 { self.norm }

    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), DistError> {
        *self = Self::new(alpha, self.beta)?;
        Ok(())
    }

    pub fn set_beta(&mut self, beta: f64) -> Result<(), DistError> {
        *self = Self::new(self.alpha, beta)?;
        Ok(())
    }
}

// The cached norm is a function of the shapes.
impl PartialEq for BetaParam {
    fn eq(&self, other: &Self) -> bool {
        self.alpha == other.alpha && self.beta == other.beta
    }
}

/// Beta distribution on [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beta {
    param: BetaParam,
}

impl Default for Beta {
    fn default() -> Self {
        Beta { param: BetaParam { alpha: 1.0, beta: 1.0, norm: 1.0 } }
    }
}

impl Beta {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, DistError> {
        Ok(Beta { param: BetaParam::new(alpha, beta)? })
    }
    pub fn from_param(param: BetaParam) -> Self { Beta { param } }
    pub fn alpha(&self) -> f64 { self.param.alpha }
    pub fn beta(&self) -> f64 { self.param.beta }
}

impl Distribution for Beta {
    type Output = f64;
    type Param = BetaParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> f64 {
        inv_beta_i_norm(uniformoo(engine), self.param.alpha, self.param.beta, self.param.norm)
    }
    fn min(&self) -> f64 { 0.0 }
    fn max(&self) -> f64 { 1.0 }
    fn param(&self) -> BetaParam { self.param }
    fn set_param(&mut self, param: BetaParam) { self.param = param; }
}

impl Continuous for Beta {
    fn pdf(&self, x: f64) -> f64 {
        let BetaParam { alpha, beta, norm } = self.param;
        if !(0.0 ..= 1.0).contains(&x) {
            return 0.0;
        }
        // Poles at the ends for shapes below 1.
        if (x == 0.0 && alpha < 1.0) || (x == 1.0 && beta < 1.0) {
            return domain_error();
        }
        x.powf(alpha - 1.0) * (1.0 - x).powf(beta - 1.0) / norm
    }

    fn cdf(&self, x: f64) -> f64 {
        beta_i_norm(x, self.param.alpha, self.param.beta, self.param.norm)
    }

    fn icdf(&self, u: f64) -> f64 {
        if !is_probability(u) {
            return domain_error();
        }
        inv_beta_i_norm(u, self.param.alpha, self.param.beta, self.param.norm)
    }
}

float_record!(Beta, BetaParam, "beta", 2, [alpha, beta], Beta::new);

#[cfg(test)] mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::dist::testing::{check_density, check_inverse};
    use crate::text::TextIo;

    #[test] pub fn run_tests() {
        let d = Beta::new(2.0, 5.0).unwrap();
        assert_eq!(d.cdf(0.0), 0.0);
        assert_eq!(d.cdf(1.0), 1.0);
        assert_eq!(d.icdf(0.0), 0.0);
        assert_eq!(d.icdf(1.0), 1.0);
        assert!((d.icdf(d.cdf(0.3)) - 0.3).abs() <= 1e-8);
        assert_relative_eq!(d.pdf(0.3), 30.0 * 0.3 * 0.7f64.powi(4), max_relative = 1e-12);
        assert_eq!(d.pdf(-0.1), 0.0);
        check_inverse(&d, 1e-12);
        check_density(&d, 1e-9);

        let arcsine = Beta::new(0.5, 0.5).unwrap();
        crate::domain::clear();
        assert!(arcsine.pdf(0.0).is_nan());
        assert!(crate::domain::last_error().is_some());
        crate::domain::clear();
        assert!(arcsine.icdf(-0.5).is_nan());
        crate::domain::clear();
        check_inverse(&arcsine, 1e-12);

        // Equality looks at both shapes.
        assert_ne!(Beta::new(2.0, 5.0).unwrap(), Beta::new(2.0, 6.0).unwrap());
        assert_eq!(d.alpha(), 2.0);

        let mut p = d.param();
        p.set_beta(3.0).unwrap();
        assert_relative_eq!(p.norm(), 1.0 / 12.0, max_relative = 1e-12);
        assert!(p.set_alpha(-1.0).is_err());
        assert_eq!(p.alpha(), 2.0);

        assert_eq!(d.to_text(), "[beta (2.0 5.0)]");
        assert_eq!("[beta (2.0 5.0)]".parse::<Beta>().unwrap(), d);
    }
}
