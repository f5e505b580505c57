//! Decision boundary sampling for external rendering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result, Weights, utils::linspace};

/// # Overview
///
/// Points `(x1, x2)` tracing `w1*x1 + w2*x2 + bias = 0` over an x1 range.
///
/// Derived from a weight vector on demand; never stored by the learner.
///
/// # Examples
///
/// ```
/// use perceptron_rs::{Boundary, Weights};
///
/// let line = Boundary::sample(&Weights::new(0.0, 1.0, -1.0), 10.0, 3).unwrap();
/// assert_eq!(line.points(), &[(-10.0, -10.0), (0.0, 0.0), (10.0, 10.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Boundary {
    points: Vec<(f64, f64)>
}

impl Boundary {
    /// # Overview
    ///
    /// Samples `k` evenly spaced x1 values over `[-bound, bound]` and solves
    /// `x2 = -(w1*x1 + bias) / w2` for each.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateBoundary`] when `w2 == 0`.
    pub fn sample(w: &Weights, bound: f64, k: usize) -> Result<Self> {
        if w.w2 == 0.0 {
            return Err(Error::DegenerateBoundary);
        }
        let points = linspace(-bound, bound, k)
            .into_iter()
            .map(|x1| (x1, -(w.w1 * x1 + w.bias) / w.w2))
            .collect();
        Ok(Self {
            points
        })
    }

    #[inline]
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// x1 values of the samples.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }
}

impl Weights {
    /// # Overview
    ///
    /// Shorthand for [`Boundary::sample`].
    #[inline]
    pub fn boundary(&self, bound: f64, k: usize) -> Result<Boundary> {
        Boundary::sample(self, bound, k)
    }
}
