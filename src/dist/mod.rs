//! Probability distributions driven by the engines.
//!
//! A distribution is a value holding a validated parameter block. Sampling
//! borrows an engine for one call; most laws sample by inversion,
//! `icdf(uniformoo(engine))`. Arguments outside the domain of `pdf` or
//! `icdf` produce NaN and raise the thread-local flag in [`crate::domain`].
//!
//! Every distribution round-trips through text as `[kind (fields)]`.

use core::fmt;
use core::str::FromStr;
use crate::engine::Engine;
use crate::error::{DistError, ParseError};
use crate::text::{read_tuple, TextReader};

pub mod bernoulli;
pub mod beta;
pub mod cauchy;
pub mod chi_square;
pub mod correlated_normal;
pub mod discrete;
pub mod exponential;
pub mod extreme_value;
pub mod gamma;
pub mod logistic;
pub mod lognormal;
pub mod maxwell;
pub mod normal;
pub mod pareto;
pub mod poisson;
pub mod powerlaw;
pub mod rayleigh;
pub mod snedecor_f;
pub mod student_t;
pub mod tent;
pub mod uniform;
pub mod weibull;

pub use bernoulli::{Bernoulli, BernoulliParam};
pub use beta::{Beta, BetaParam};
pub use cauchy::{Cauchy, CauchyParam};
pub use chi_square::{ChiSquare, ChiSquareParam};
pub use correlated_normal::{CorrelatedNormal, CorrelatedNormalParam};
pub use discrete::{Discrete, DiscreteParam};
pub use exponential::{Exponential, ExponentialParam};
pub use extreme_value::{ExtremeValue, ExtremeValueParam};
pub use gamma::{Gamma, GammaParam};
pub use logistic::{Logistic, LogisticParam};
pub use lognormal::{Lognormal, LognormalParam};
pub use maxwell::{Maxwell, MaxwellParam};
pub use normal::{Normal, NormalParam};
pub use pareto::{Pareto, ParetoParam};
pub use poisson::{Poisson, PoissonParam};
pub use powerlaw::{Powerlaw, PowerlawParam};
pub use rayleigh::{Rayleigh, RayleighParam};
pub use snedecor_f::{SnedecorF, SnedecorFParam};
pub use student_t::{StudentT, StudentTParam};
pub use tent::{Tent, TentParam};
pub use uniform::{Uniform, Uniform01, UniformParam};
pub use weibull::{Weibull, WeibullParam};

/// A sampler for a probability law.
pub trait Distribution {
    type Output;
    type Param: Clone + PartialEq;

    /// Draws one sample, consuming engine output.
    fn sample<E: Engine>(&self, engine: &mut E) -> Self::Output;

    /// Lower bound of the support.
    fn min(&self) -> Self::Output;

    /// Upper bound of the support.
    fn max(&self) -> Self::Output;

    fn param(&self) -> Self::Param;

    /// Replaces the parameter block, recomputing any cached constants.
    fn set_param(&mut self, param: Self::Param);
}

/// A law on the real line with density, distribution function and its inverse.
pub trait Continuous: Distribution<Output = f64> {
    fn pdf(&self, x: f64) -> f64;
    fn cdf(&self, x: f64) -> f64;
    /// Inverse of `cdf`. Infinite supports map 0 and 1 to signed infinity.
    fn icdf(&self, u: f64) -> f64;
}

/// True for probabilities that `icdf` accepts. NaN is rejected.
#[inline]
pub(crate) fn is_probability(u: f64) -> bool {
    (0.0 ..= 1.0).contains(&u)
}

/// Requires a strictly positive, finite parameter.
pub(crate) fn positive(name: &'static str, x: f64) -> Result<f64, DistError> {
    if x > 0.0 && x.is_finite() {
        Ok(x)
    } else {
        tracing::debug!(name, value = x, "rejected distribution parameter");
        Err(DistError::InvalidParameter { name, requirement: "positive and finite" })
    }
}

/// Requires a finite parameter.
pub(crate) fn finite(name: &'static str, x: f64) -> Result<f64, DistError> {
    if x.is_finite() {
        Ok(x)
    } else {
        tracing::debug!(name, value = x, "rejected distribution parameter");
        Err(DistError::InvalidParameter { name, requirement: "finite" })
    }
}

/// Writes `[kind (f1 f2 ...)]`.
pub(crate) fn write_record(f: &mut fmt::Formatter, kind: &str, fields: &[String]) -> fmt::Result {
    write!(f, "[{} ({})]", kind, fields.join(" "))
}

/// Reads `[kind (f1 f2 ...)]` with N fields.
pub(crate) fn read_record<T: FromStr + Copy + Default, const N: usize>(reader: &mut TextReader<'_>, kind: &str) -> Result<[T; N], ParseError> {
    reader.ignore_spaces();
    reader.delim('[')?;
    reader.delim_str(kind)?;
    reader.delim(' ')?;
    let fields = read_tuple::<T, N>(reader)?;
    reader.delim(']')?;
    Ok(fields)
}

/// Text form and `FromStr` for a distribution whose parameters are all floats.
/// `$new` builds the distribution from the fields in order. The parameter
/// block also converts to and from an array of its fields, validating on
/// the way in; serde goes through that array.
macro_rules! float_record {
    ($dist:ty, $param:ty, $kind:literal, $n:literal, [$($field:ident),+], $new:path) => {
        impl TryFrom<[f64; $n]> for $param {
            type Error = $crate::error::DistError;
            fn try_from([$($field),+]: [f64; $n]) -> Result<Self, Self::Error> {
                Ok($crate::dist::Distribution::param(&$new($($field),+)?))
            }
        }

        impl From<$param> for [f64; $n] {
            fn from(param: $param) -> Self {
                [$(param.$field()),+]
            }
        }

        impl core::fmt::Display for $dist {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                let param = self.param();
                $crate::dist::write_record(f, $kind, &[$($crate::text::float_text(param.$field())),+])
            }
        }

        impl $crate::text::TextIo for $dist {
            fn read_text(reader: &mut $crate::text::TextReader<'_>) -> Result<Self, $crate::error::ParseError> {
                let [$($field),+] = $crate::dist::read_record::<f64, $n>(reader, $kind)?;
                Ok($new($($field),+)?)
            }
        }

        impl core::str::FromStr for $dist {
            type Err = $crate::error::ParseError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::text::TextIo>::from_text(s)
            }
        }
    };
}

pub(crate) use float_record;
