//! Immutable labeled point sets.

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Config, Error, Label, LabeledPoint, Point, Result, Weights};

/// # Overview
///
/// An ordered, immutable sequence of labeled points.
///
/// Order is stable and is the order the learner scans in.
///
/// # Examples
///
/// ```
/// use perceptron_rs::{Config, Dataset, Weights, utils::rng_from_seed};
///
/// let config = Config::builder().points(30).build().unwrap();
/// let reference = Weights::new(2.0, 0.5, -0.25);
/// let data = Dataset::generate(&config, reference, &mut rng_from_seed(1)).unwrap();
///
/// assert_eq!(data.len(), 30);
/// assert!(data.iter().all(|lp| reference.classify(&lp.point) == lp.label));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<LabeledPoint>", into = "Vec<LabeledPoint>")
)]
pub struct Dataset {
    points: Vec<LabeledPoint>
}

impl Dataset {
    /// # Overview
    ///
    /// Wraps already-labeled points. Fails on an empty list.
    pub fn new(points: Vec<LabeledPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid("points", "dataset cannot be empty"));
        }
        Ok(Self {
            points
        })
    }

    /// # Overview
    ///
    /// Builds a dataset from `(x1, x2, label)` triples with labels in
    /// {-1, +1}.
    pub fn from_triples(triples: &[(f64, f64, i8)]) -> Result<Self> {
        let points = triples
            .iter()
            .map(|&(x1, x2, y)| Label::try_from(y).map(|label| LabeledPoint::new(x1, x2, label)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }

    /// # Overview
    ///
    /// Labels each point by the sign of `reference`.
    pub fn label_points(points: &[Point], reference: Weights) -> Result<Self> {
        reference.validate_reference()?;
        let labeled = points
            .iter()
            .map(|&point| LabeledPoint {
                point,
                label: reference.classify(&point)
            })
            .collect();
        Self::new(labeled)
    }

    /// # Overview
    ///
    /// Draws `config.n_points` points uniformly from `[-bound, bound]^2`
    /// and labels them by `reference`.
    ///
    /// Coordinates are integer-valued unless the config is continuous.
    pub fn generate<R: Rng>(config: &Config, reference: Weights, rng: &mut R) -> Result<Self> {
        config.validate()?;
        reference.validate_reference()?;

        let r = config.bound;
        let points: Vec<Point> = if config.integer_coords {
            let ri = r.floor() as i64;
            if ri < 1 {
                return Err(Error::invalid("bound", "integer coordinates need bound >= 1"));
            }
            (0..config.n_points)
                .map(|_| {
                    Point::new(
                        rng.random_range(-ri..=ri) as f64,
                        rng.random_range(-ri..=ri) as f64
                    )
                })
                .collect()
        } else {
            (0..config.n_points)
                .map(|_| {
                    // scaling the unit range keeps the sampled span finite for any bound
                    Point::new(
                        rng.random_range(-1.0..=1.0) * r,
                        rng.random_range(-1.0..=1.0) * r
                    )
                })
                .collect()
        };

        log::debug!(
            "generated {} points in [-{r}, {r}] against reference {:?}",
            points.len(),
            reference
        );
        Self::label_points(&points, reference)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed dataset.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&LabeledPoint> {
        self.points.get(i)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, LabeledPoint> {
        self.points.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Number of points with the given label.
    #[must_use]
    pub fn count(&self, label: Label) -> usize {
        self.points.iter().filter(|lp| lp.label == label).count()
    }

    /// # Overview
    ///
    /// Index of the first point `w` misclassifies, in dataset order.
    #[inline]
    #[must_use]
    pub fn first_misclassified(&self, w: &Weights) -> Option<usize> {
        self.points.iter().position(|lp| w.misclassifies(lp))
    }

    /// Number of points `w` misclassifies.
    #[must_use]
    pub fn misclassified(&self, w: &Weights) -> usize {
        self.points.iter().filter(|lp| w.misclassifies(lp)).count()
    }

    /// Fraction of points `w` classifies correctly (0.0 to 1.0).
    #[must_use]
    pub fn accuracy(&self, w: &Weights) -> f64 {
        1.0 - self.misclassified(w) as f64 / self.len() as f64
    }

    /// Largest norm of an augmented point `[1, x1, x2]`.
    #[must_use]
    pub fn max_norm(&self) -> f64 {
        self.points
            .iter()
            .map(|lp| lp.point.augmented_norm())
            .fold(0.0, f64::max)
    }

    /// # Overview
    ///
    /// Signed margin of `separator` over the dataset in augmented space.
    ///
    /// Positive only when `separator` classifies every point strictly.
    /// Returns `None` for an all-zero separator.
    #[must_use]
    pub fn margin(&self, separator: &Weights) -> Option<f64> {
        let norm = separator.norm();
        if norm == 0.0 {
            return None;
        }
        self.points
            .iter()
            .map(|lp| lp.label.sign() * separator.value(&lp.point) / norm)
            .reduce(f64::min)
    }
}

impl TryFrom<Vec<LabeledPoint>> for Dataset {
    type Error = Error;

    fn try_from(points: Vec<LabeledPoint>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<Dataset> for Vec<LabeledPoint> {
    fn from(data: Dataset) -> Self {
        data.points
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LabeledPoint;
    type IntoIter = core::slice::Iter<'a, LabeledPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// # Overview
///
/// Novikoff bound `(R_max / gamma)^2` on the number of corrections a
/// learner starting from zero weights can make on `dataset`.
///
/// `None` when `separator` does not strictly separate the data.
#[must_use]
pub fn convergence_bound(dataset: &Dataset, separator: &Weights) -> Option<f64> {
    let gamma = dataset.margin(separator)?;
    if gamma <= 0.0 {
        return None;
    }
    let r = dataset.max_norm();
    Some((r / gamma).powi(2))
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn deserialize_rejects_empty() {
        let result: core::result::Result<Dataset, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_goes_through_constructor() {
        let data = Dataset::from_triples(&[(1.0, 2.0, 1), (-3.0, 4.0, -1)]).unwrap();
        let json = serde_json::to_string(&data).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
