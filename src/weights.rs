//! Weight vectors and the affine decision function they define.

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Label, LabeledPoint, Point, Result,
    utils::{random_bias, random_nonzero_unit}
};

/// # Overview
///
/// A triple `(bias, w1, w2)` defining `h(x1, x2) = bias + w1*x1 + w2*x2`.
///
/// Used both for the learner's candidate and for the reference function
/// that labels a generated dataset.
///
/// # Examples
///
/// ```
/// use perceptron_rs::{Label, Point, Weights};
///
/// let w = Weights::new(-1.0, 1.0, 0.5);
/// assert_eq!(w.classify(&Point::new(1.0, 0.0)), Label::Positive);
/// assert_eq!(w.classify(&Point::new(0.0, 0.0)), Label::Negative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weights {
    pub bias: f64,
    pub w1:   f64,
    pub w2:   f64
}

impl Default for Weights {
    /// Fixed non-zero starting triple `(1, 1, 1)`.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl Weights {
    #[inline]
    #[must_use]
    pub const fn new(bias: f64, w1: f64, w2: f64) -> Self {
        Self {
            bias,
            w1,
            w2
        }
    }

    /// All-zero weights.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// # Overview
    ///
    /// Random weights: integer bias in `[-bias_range, bias_range)`, both
    /// weights in `(0, 1)`.
    pub fn random<R: Rng>(bias_range: u32, rng: &mut R) -> Self {
        let bias = random_bias(rng, bias_range);
        let w1 = random_nonzero_unit(rng);
        let w2 = random_nonzero_unit(rng);
        Self::new(bias, w1, w2)
    }

    /// # Overview
    ///
    /// Random reference function for labeling a dataset.
    ///
    /// Same law as [`Weights::random`]; the result always passes
    /// [`Weights::validate_reference`].
    #[inline]
    pub fn random_reference<R: Rng>(bias_range: u32, rng: &mut R) -> Self {
        Self::random(bias_range, rng)
    }

    /// # Overview
    ///
    /// Rejects reference weights with a zero `w1` or `w2`.
    pub fn validate_reference(&self) -> Result<()> {
        if !self.bias.is_finite() || !self.w1.is_finite() || !self.w2.is_finite() {
            return Err(Error::invalid("reference", "weights must be finite"));
        }
        if self.w1 == 0.0 {
            return Err(Error::invalid("reference.w1", "must be non-zero"));
        }
        if self.w2 == 0.0 {
            return Err(Error::invalid("reference.w2", "must be non-zero"));
        }
        Ok(())
    }

    /// Value of `h` at `p`.
    #[inline(always)]
    #[must_use]
    pub fn value(&self, p: &Point) -> f64 {
        self.bias + self.w1 * p.x1 + self.w2 * p.x2
    }

    /// Sign of `h` at `p`, with zero counted as positive.
    #[inline]
    #[must_use]
    pub fn classify(&self, p: &Point) -> Label {
        Label::from_value(self.value(p))
    }

    /// True when `h` puts `lp` on the wrong side.
    #[inline]
    #[must_use]
    pub fn misclassifies(&self, lp: &LabeledPoint) -> bool {
        self.classify(&lp.point) != lp.label
    }

    /// # Overview
    ///
    /// Mistake-driven update `w <- w + y * [1, x1, x2]`.
    #[inline]
    pub fn update(&mut self, lp: &LabeledPoint) {
        let y = lp.label.sign();
        self.bias += y;
        self.w1 += y * lp.point.x1;
        self.w2 += y * lp.point.x2;
    }

    /// Euclidean norm of `(bias, w1, w2)`.
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f64 {
        (self.bias * self.bias + self.w1 * self.w1 + self.w2 * self.w2).sqrt()
    }

    /// Returns the triple as `[bias, w1, w2]`.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        [self.bias, self.w1, self.w2]
    }
}

impl From<[f64; 3]> for Weights {
    fn from([bias, w1, w2]: [f64; 3]) -> Self {
        Self::new(bias, w1, w2)
    }
}

impl From<(f64, f64, f64)> for Weights {
    fn from((bias, w1, w2): (f64, f64, f64)) -> Self {
        Self::new(bias, w1, w2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng_from_seed;

    #[test]
    fn update_positive_and_negative() {
        let mut w = Weights::new(0.0, 1.0, 1.0);
        w.update(&LabeledPoint::new(-5.0, 5.0, Label::Negative));
        assert_eq!(w, Weights::new(-1.0, 6.0, -4.0));

        w.update(&LabeledPoint::new(2.0, 3.0, Label::Positive));
        assert_eq!(w, Weights::new(0.0, 8.0, -1.0));
    }

    #[test]
    fn boundary_point_counts_as_positive() {
        let w = Weights::zero();
        assert!(!w.misclassifies(&LabeledPoint::new(1.0, 1.0, Label::Positive)));
        assert!(w.misclassifies(&LabeledPoint::new(1.0, 1.0, Label::Negative)));
    }

    #[test]
    fn reference_rejects_zero_weights() {
        assert!(Weights::new(1.0, 0.0, 1.0).validate_reference().is_err());
        assert!(Weights::new(1.0, 1.0, 0.0).validate_reference().is_err());
        assert!(Weights::new(0.0, 1.0, 1.0).validate_reference().is_ok());
    }

    #[test]
    fn random_reference_is_valid() {
        let mut rng = rng_from_seed(11);
        for _ in 0..200 {
            let w = Weights::random_reference(10, &mut rng);
            assert!(w.validate_reference().is_ok());
            assert!((-10.0..10.0).contains(&w.bias));
        }
    }

    #[test]
    fn default_is_fixed_nonzero() {
        assert_eq!(Weights::default().to_array(), [1.0, 1.0, 1.0]);
    }
}
