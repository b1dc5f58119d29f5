use core::fmt;
use crate::canonical::uniformco;
use crate::engine::Engine;
use crate::error::{DistError, ParseError};
use crate::text::{float_text, TextIo, TextReader};
use super::Distribution;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Non-negative weights of the outcomes 0 .. n, stored as the leaves of a
/// complete binary tree of partial sums so a single weight updates in O(log n).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteParam {
    n: usize,
    /// Node i has children 2 i + 1 and 2 i + 2; leaves start at `offset`.
    tree: Vec<f64>,
}

fn weight(name: &'static str, p: f64) -> Result<f64, DistError> {
    if p >= 0.0 && p.is_finite() {
        Ok(p)
    } else {
        tracing::debug!(name, value = p, "rejected distribution parameter");
        Err(DistError::InvalidParameter { name, requirement: "non-negative and finite" })
    }
}

impl DiscreteParam {
    /// Weights need not be normalized but must not all be zero.
    pub fn new(weights: &[f64]) -> Result<Self, DistError> {
        if weights.is_empty() || weights.len() > i32::MAX as usize {
            tracing::debug!(n = weights.len(), "rejected distribution parameter");
            return Err(DistError::InvalidParameter { name: "weights", requirement: "non-empty" });
        }
        let n = weights.len();
        let offset = n.next_power_of_two() - 1;
        let mut tree = vec![0.0; 2 * offset + 1];
        for (leaf, &p) in tree[offset ..].iter_mut().zip(weights) {
            *leaf = weight("weight", p)?;
        }
        for i in (0 .. offset).rev() {
            tree[i] = tree[2 * i + 1] + tree[2 * i + 2];
        }
        if tree[0] <= 0.0 || !tree[0].is_finite() {
            tracing::debug!(total = tree[0], "rejected distribution parameter");
            return Err(DistError::InvalidParameter { name: "weights", requirement: "of positive finite total" });
        }
        Ok(DiscreteParam { n, tree })
    }

    /// n outcomes of equal weight.
    pub fn uniform(n: usize) -> Result<Self, DistError> {
        Self::new(&vec![1.0; n])
    }

    #[inline]
    fn offset(&self) -> usize {
        self.tree.len() / 2
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn weights(&self) -> &[f64] {
        &self.tree[self.offset() .. self.offset() + self.n]
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.tree[0]
    }

    /// Changes the weight of outcome x, updating the partial sums above it.
    /// The total must stay positive.
    pub fn set_weight(&mut self, x: usize, p: f64) -> Result<(), DistError> {
        if x >= self.n {
            return Err(DistError::InvalidParameter { name: "outcome", requirement: "below the number of outcomes" });
        }
        let p = weight("weight", p)?;
        let mut tree = self.tree.clone();
        let mut i = self.offset() + x;
        tree[i] = p;
        while i > 0 {
            i = (i - 1) / 2;
            tree[i] = tree[2 * i + 1] + tree[2 * i + 2];
        }
        if tree[0] <= 0.0 || !tree[0].is_finite() {
            return Err(DistError::InvalidParameter { name: "weights", requirement: "of positive finite total" });
        }
        self.tree = tree;
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for DiscreteParam {
    type Error = DistError;
    fn try_from(weights: Vec<f64>) -> Result<Self, DistError> {
        Self::new(&weights)
    }
}

impl From<DiscreteParam> for Vec<f64> {
    fn from(param: DiscreteParam) -> Self {
        param.weights().to_vec()
    }
}

/// Distribution on 0 .. n with probabilities proportional to given weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Discrete {
    param: DiscreteParam,
}

impl Discrete {
    pub fn new(weights: &[f64]) -> Result<Self, DistError> {
        Ok(Discrete { param: DiscreteParam::new(weights)? })
    }
    pub fn from_param(param: DiscreteParam) -> Self { Discrete { param } }

    /// Changes one weight without rebuilding the whole table.
    pub fn set_weight(&mut self, x: usize, p: f64) -> Result<(), DistError> {
        self.param.set_weight(x, p)
    }

    /// P(X = x).
    pub fn pdf(&self, x: i32) -> f64 {
        if x < 0 || x as usize >= self.param.n {
            return 0.0;
        }
        self.param.weights()[x as usize] / self.param.total()
    }

    /// P(X <= x).
    pub fn cdf(&self, x: i32) -> f64 {
        if x < 0 {
            return 0.0;
        }
        if x as usize >= self.param.n - 1 {
            return 1.0;
        }
        self.param.weights()[..= x as usize].iter().sum::<f64>() / self.param.total()
    }
}

impl Distribution for Discrete {
    type Output = i32;
    type Param = DiscreteParam;

    /// Descends the tree, never into a subtree of zero weight.
    fn sample<E: Engine>(&self, engine: &mut E) -> i32 {
        let tree = &self.param.tree;
        let offset = self.param.offset();
        let mut u = uniformco::<f64, E>(engine) * tree[0];
        let mut i = 0;
        while i < offset {
            let (left, right) = (tree[2 * i + 1], tree[2 * i + 2]);
            if u < left || right <= 0.0 {
                i = 2 * i + 1;
            } else {
                u -= left;
                i = 2 * i + 2;
            }
        }
        (i - offset) as i32
    }
    fn min(&self) -> i32 { 0 }
    fn max(&self) -> i32 { self.param.n as i32 - 1 }
    fn param(&self) -> DiscreteParam { self.param.clone() }
    fn set_param(&mut self, param: DiscreteParam) { self.param = param; }
}

impl fmt::Display for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[discrete ({}", self.param.n)?;
        for &p in self.param.weights() {
            write!(f, " {}", float_text(p))?;
        }
        write!(f, ")]")
    }
}

impl TextIo for Discrete {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError> {
        reader.ignore_spaces();
        reader.delim_str("[discrete (")?;
        let n: usize = reader.number()?;
        let mut weights = Vec::new();
        for _ in 0 .. n {
            reader.delim(' ')?;
            weights.push(reader.number::<f64>()?);
        }
        reader.delim(')')?;
        reader.delim(']')?;
        Ok(Discrete::new(&weights)?)
    }
}

impl core::str::FromStr for Discrete {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s)
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::Lcg64Shift;

    fn frequencies(d: &Discrete, seed: u64, n: usize) -> Vec<f64> {
        let mut rng = Lcg64Shift::new(seed);
        let mut counts = vec![0usize; d.param().len()];
        for _ in 0 .. n {
            counts[d.sample(&mut rng) as usize] += 1;
        }
        counts.iter().map(|&c| c as f64 / n as f64).collect()
    }

    #[test] pub fn run_tests() {
        let d = Discrete::new(&[1.0, 0.0, 3.0, 4.0, 2.0]).unwrap();
        assert_eq!(d.param().total(), 10.0);
        assert_eq!(d.param().weights(), &[1.0, 0.0, 3.0, 4.0, 2.0]);
        assert_eq!(d.pdf(2), 0.3);
        assert_eq!(d.pdf(5), 0.0);
        assert_eq!(d.pdf(-1), 0.0);
        assert_relative_eq!(d.cdf(2), 0.4, epsilon = 1e-15);
        assert_eq!(d.cdf(4), 1.0);
        assert_eq!(d.cdf(-1), 0.0);
        assert_eq!((d.min(), d.max()), (0, 4));

        let f = frequencies(&d, 3, 100000);
        assert_eq!(f[1], 0.0);
        for x in 0 .. 5 {
            assert!((f[x] - d.pdf(x as i32)).abs() < 0.01, "x = {}: {}", x, f[x]);
        }

        // A single update moves all the mass.
        let mut d = Discrete::new(&[1.0, 1.0, 1.0]).unwrap();
        d.set_weight(0, 0.0).unwrap();
        d.set_weight(2, 0.0).unwrap();
        assert_eq!(d.param().total(), 1.0);
        let mut rng = Lcg64Shift::new(8);
        for _ in 0 .. 100 {
            assert_eq!(d.sample(&mut rng), 1);
        }
        assert!(d.set_weight(1, 0.0).is_err());
        assert_eq!(d.pdf(1), 1.0);
        assert!(d.set_weight(3, 1.0).is_err());
        assert!(d.set_weight(0, -1.0).is_err());

        let single = Discrete::from_param(DiscreteParam::uniform(1).unwrap());
        assert_eq!(single.sample(&mut rng), 0);

        assert!(Discrete::new(&[]).is_err());
        assert!(Discrete::new(&[0.0, 0.0]).is_err());
        assert!(Discrete::new(&[1.0, f64::NAN]).is_err());

        let d = Discrete::new(&[0.25, 0.5, 0.25]).unwrap();
        assert_eq!(d.to_text(), "[discrete (3 0.25 0.5 0.25)]");
        assert_eq!("[discrete (3 0.25 0.5 0.25)]".parse::<Discrete>().unwrap(), d);
        assert!("[discrete (3 0.25 0.5)]".parse::<Discrete>().is_err());
        assert!("[discrete (2 0.0 0.0)]".parse::<Discrete>().is_err());
    }
}
