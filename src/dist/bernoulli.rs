use core::fmt;
use core::str::FromStr;
use crate::canonical::uniformco;
use crate::engine::Engine;
use crate::error::{DistError, ParseError};
use crate::text::{float_text, TextIo, TextReader};
use super::Distribution;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Success probability p in [0, 1] and the two outcome values.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(
    try_from = "(f64, T, T)",
    into = "(f64, T, T)",
    bound(serialize = "T: Copy + Serialize", deserialize = "T: Copy + Deserialize<'de>"),
))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BernoulliParam<T> {
    p: f64,
    head: T,
    tail: T,
}

impl<T: Copy> BernoulliParam<T> {
    pub fn new(p: f64, head: T, tail: T) -> Result<Self, DistError> {
        if !(0.0 ..= 1.0).contains(&p) {
            tracing::debug!(p, "rejected distribution parameter");
            return Err(DistError::InvalidParameter { name: "p", requirement: "in [0, 1]" });
        }
        Ok(BernoulliParam { p, head, tail })
    }
    #[inline] pub fn p(&self) -> f64 { self.p }
    #[inline] pub fn head(&self) -> T { self.head }
    #[inline] pub fn tail(&self) -> T { self.tail }
}

impl<T: Copy> TryFrom<(f64, T, T)> for BernoulliParam<T> {
    type Error = DistError;
    fn try_from((p, head, tail): (f64, T, T)) -> Result<Self, DistError> {
        Self::new(p, head, tail)
    }
}

impl<T> From<BernoulliParam<T>> for (f64, T, T) {
    fn from(param: BernoulliParam<T>) -> Self {
        (param.p, param.head, param.tail)
    }
}

/// Two-point distribution: head with probability p, tail otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bernoulli<T> {
    param: BernoulliParam<T>,
}

impl<T: Copy + PartialEq> Bernoulli<T> {
    pub fn new(p: f64, head: T, tail: T) -> Result<Self, DistError> {
        Ok(Bernoulli { param: BernoulliParam::new(p, head, tail)? })
    }
    pub fn from_param(param: BernoulliParam<T>) -> Self { Bernoulli { param } }
    pub fn p(&self) -> f64 { self.param.p }
    pub fn head(&self) -> T { self.param.head }
    pub fn tail(&self) -> T { self.param.tail }

    /// Probability mass at x.
    pub fn pdf(&self, x: &T) -> f64 {
        if *x == self.param.head {
            self.param.p
        } else if *x == self.param.tail {
            1.0 - self.param.p
        } else {
            0.0
        }
    }

    /// Cumulative mass with head ordered before tail.
    pub fn cdf(&self, x: &T) -> f64 {
        if *x == self.param.head {
            self.param.p
        } else if *x == self.param.tail {
            1.0
        } else {
            0.0
        }
    }
}

impl<T: Copy + PartialEq> Distribution for Bernoulli<T> {
    type Output = T;
    type Param = BernoulliParam<T>;

    fn sample<E: Engine>(&self, engine: &mut E) -> T {
        if uniformco::<f64, E>(engine) < self.param.p { self.param.head } else { self.param.tail }
    }
    fn min(&self) -> T { self.param.head }
    fn max(&self) -> T { self.param.tail }
    fn param(&self) -> BernoulliParam<T> { self.param }
    fn set_param(&mut self, param: BernoulliParam<T>) { self.param = param; }
}

impl<T: fmt::Display> fmt::Display for Bernoulli<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields = [float_text(self.param.p), self.param.head.to_string(), self.param.tail.to_string()];
        super::write_record(f, "bernoulli", &fields)
    }
}

impl<T: Copy + PartialEq + FromStr + fmt::Display> TextIo for Bernoulli<T> {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str("[bernoulli (")?;
        let p: f64 = reader.number()?;
        reader.delim(' ')?;
        let head: T = reader.number()?;
        reader.delim(' ')?;
        let tail: T = reader.number()?;
        reader.delim_str(")]")?;
        Ok(Bernoulli::new(p, head, tail)?)
    }
}

impl<T: Copy + PartialEq + FromStr + fmt::Display> FromStr for Bernoulli<T> {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}
