use core::fmt;
use crate::canonical::uniformoo;
use crate::engine::Engine;
use crate::error::{DistError, ParseError};
use crate::special::inv_phi;
use crate::text::{float_text, TextIo, TextReader};
use super::Distribution;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Symmetric positive definite covariance matrix of dimension d, row major,
/// with its lower triangular Cholesky factor H (C = H H^T).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
#[derive(Clone, Debug)]
pub struct CorrelatedNormalParam {
    d: usize,
    covariance: Vec<f64>,
    factor: Vec<f64>,
}

// The factor is a function of the covariance.
impl PartialEq for CorrelatedNormalParam {
    fn eq(&self, other: &Self) -> bool {
        self.covariance == other.covariance
    }
}

fn reject(requirement: &'static str) -> DistError {
    tracing::debug!(requirement, "rejected covariance matrix");
    DistError::InvalidParameter { name: "covariance", requirement }
}

impl CorrelatedNormalParam {
    /// Covariance entries in row-major order; the length must be a square.
    pub fn new(covariance: &[f64]) -> Result<Self, DistError> {
        let d = (covariance.len() as f64).sqrt().round() as usize;
        if d == 0 || d * d != covariance.len() {
            return Err(reject("a non-empty square matrix"));
        }
        if covariance.iter().any(|c| !c.is_finite()) {
            return Err(reject("finite"));
        }
        for i in 0 .. d {
            for j in 0 .. i {
                let (a, b) = (covariance[i * d + j], covariance[j * d + i]);
                if (a - b).abs() > 1e-12 * a.abs().max(b.abs()).max(1.0) {
                    return Err(reject("symmetric"));
                }
            }
        }
        let factor = cholesky(covariance, d).ok_or_else(|| reject("positive definite"))?;
        Ok(CorrelatedNormalParam { d, covariance: covariance.to_vec(), factor })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.d
    }

    pub fn covariance(&self) -> &[f64] {
        &self.covariance
    }

    /// Lower triangular H with C = H H^T, row major.
    pub fn factor(&self) -> &[f64] {
        &self.factor
    }
}

/// Cholesky-Banachiewicz factorization; None unless the matrix is positive definite.
fn cholesky(c: &[f64], d: usize) -> Option<Vec<f64>> {
    let mut h = vec![0.0; d * d];
    for i in 0 .. d {
        for k in 0 ..= i {
            let t: f64 = (0 .. k).map(|j| h[i * d + j] * h[k * d + j]).sum();
            if i == k {
                let s = c[i * d + i] - t;
                if s <= 0.0 {
                    return None;
                }
                h[i * d + i] = s.sqrt();
            } else {
                h[i * d + k] = (c[i * d + k] - t) / h[k * d + k];
            }
        }
    }
    Some(h)
}

impl TryFrom<Vec<f64>> for CorrelatedNormalParam {
    type Error = DistError;
    fn try_from(covariance: Vec<f64>) -> Result<Self, DistError> {
        Self::new(&covariance)
    }
}

impl From<CorrelatedNormalParam> for Vec<f64> {
    fn from(param: CorrelatedNormalParam) -> Self {
        param.covariance
    }
}

/// Multivariate normal distribution with zero mean and a given covariance.
/// Each sample is a whole vector H z of d correlated components, where z
/// holds d independent standard normal variates drawn by inversion.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelatedNormal {
    param: CorrelatedNormalParam,
}

impl CorrelatedNormal {
    pub fn new(covariance: &[f64]) -> Result<Self, DistError> {
        Ok(CorrelatedNormal { param: CorrelatedNormalParam::new(covariance)? })
    }
    pub fn from_param(param: CorrelatedNormalParam) -> Self { CorrelatedNormal { param } }
    pub fn dimension(&self) -> usize { self.param.d }

    /// Writes one sample into `out[.. d]`. A shorter slice receives the
    /// leading components; the engine always advances by d draws.
    pub fn sample_into<E: Engine>(&self, engine: &mut E, out: &mut [f64]) {
        let d = self.param.d;
        let z: Vec<f64> = (0 .. d).map(|_| inv_phi(uniformoo(engine))).collect();
        for (i, y) in out.iter_mut().take(d).enumerate() {
            let row = &self.param.factor[i * d ..= i * d + i];
            *y = row.iter().zip(z.iter()).map(|(h, z)| h * z).sum();
        }
    }
}

impl Distribution for CorrelatedNormal {
    type Output = Vec<f64>;
    type Param = CorrelatedNormalParam;

    fn sample<E: Engine>(&self, engine: &mut E) -> Vec<f64> {
        let mut out = vec![0.0; self.param.d];
        self.sample_into(engine, &mut out);
        out
    }
    fn min(&self) -> Vec<f64> { vec![f64::NEG_INFINITY; self.param.d] }
    fn max(&self) -> Vec<f64> { vec![f64::INFINITY; self.param.d] }
    fn param(&self) -> CorrelatedNormalParam { self.param.clone() }
    fn set_param(&mut self, param: CorrelatedNormalParam) { self.param = param; }
}

impl fmt::Display for CorrelatedNormal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[correlated_normal ({}", self.param.d)?;
        for &c in self.param.covariance.iter() {
            write!(f, " {}", float_text(c))?;
        }
        write!(f, ")]")
    }
}

impl TextIo for CorrelatedNormal {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str("[correlated_normal (")?;
        let d: usize = reader.number()?;
        let mut covariance = Vec::new();
        for _ in 0 .. d.saturating_mul(d) {
            reader.delim(' ')?;
            covariance.push(reader.number::<f64>()?);
        }
        reader.delim(')')?;
        reader.delim(']')?;
        Ok(CorrelatedNormal::new(&covariance)?)
    }
}

impl core::str::FromStr for CorrelatedNormal {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}
