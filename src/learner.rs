//! Mistake-driven perceptron learner.
//!
//! The learner moves through three phases: `Scanning` the dataset in order
//! for the first misclassified point, `Correcting` its weights against that
//! point (which restarts the scan from the first point), and `Converged`
//! once a full scan finds nothing to correct. `Correcting` is instantaneous
//! and is reported as [`Step::Corrected`].
//!
//! On data that is not linearly separable the learner never converges.
//! [`FitOptions::max_corrections`] bounds such runs.

use rand::Rng;

use crate::{
    Config, Dataset, LabeledPoint, Weights,
    training::{FitOptions, FitResult, Snapshot}
};

/// # Overview
///
/// Where the learner is in its scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Next point to examine.
    Scanning { cursor: usize },
    Converged
}

/// # Overview
///
/// Outcome of advancing the learner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The examined point was classified correctly; the scan continues.
    Scanning { index: usize },
    /// The point at `index` was misclassified and the weights were updated.
    Corrected {
        index:     usize,
        point:     LabeledPoint,
        weights:   Weights,
        iteration: usize
    },
    /// A full scan found no misclassified point.
    Converged { weights: Weights, iterations: usize }
}

impl Step {
    #[inline]
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// # Overview
///
/// Perceptron learner over a borrowed dataset.
///
/// Owns its weight vector and correction counter; the dataset is only
/// read, so several learners may share one.
///
/// # Examples
///
/// ```
/// use perceptron_rs::{Dataset, Perceptron, Step, Weights};
///
/// let data = Dataset::from_triples(&[
///     (5.0, 5.0, 1),
///     (5.0, -5.0, 1),
///     (-5.0, 5.0, -1),
///     (-5.0, -5.0, -1)
/// ])
/// .unwrap();
///
/// let mut p = Perceptron::new(&data, Weights::new(0.0, 1.0, 1.0));
/// while !p.step().is_converged() {}
///
/// assert_eq!(p.iterations(), 1);
/// assert_eq!(p.weights(), Weights::new(-1.0, 6.0, -4.0));
/// ```
#[derive(Debug, Clone)]
pub struct Perceptron<'a> {
    data:       &'a Dataset,
    weights:    Weights,
    iterations: usize,
    phase:      Phase
}

impl<'a> Perceptron<'a> {
    /// # Overview
    ///
    /// Creates a learner in the `Scanning` phase with zero corrections.
    pub fn new(data: &'a Dataset, weights: Weights) -> Self {
        Self {
            data,
            weights,
            iterations: 0,
            phase: Phase::Scanning {
                cursor: 0
            }
        }
    }

    /// # Overview
    ///
    /// Creates a learner with random initial weights.
    pub fn random<R: Rng>(data: &'a Dataset, bias_range: u32, rng: &mut R) -> Self {
        Self::new(data, Weights::random(bias_range, rng))
    }

    /// # Overview
    ///
    /// Starts from the config's initial weights, or random ones drawn from
    /// its bias range when none are set.
    pub fn from_config<R: Rng>(data: &'a Dataset, config: &Config, rng: &mut R) -> Self {
        match config.initial_weights {
            Some(w) => Self::new(data, w),
            None => Self::random(data, config.bias_range, rng)
        }
    }

    #[inline]
    #[must_use]
    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Corrections applied so far.
    #[inline]
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.phase == Phase::Converged
    }

    #[inline]
    #[must_use]
    pub fn dataset(&self) -> &'a Dataset {
        self.data
    }

    /// Current state for an observer.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            iteration: self.iterations,
            weights:   self.weights,
            converged: self.is_converged()
        }
    }

    /// # Overview
    ///
    /// Examines one point.
    ///
    /// A misclassified point is corrected immediately and the scan restarts
    /// from the first point. Reaching the end of the dataset without a
    /// correction converges. Once converged, further calls change nothing.
    pub fn tick(&mut self) -> Step {
        let cursor = match self.phase {
            Phase::Converged => return self.converged_step(),
            Phase::Scanning {
                cursor
            } => cursor
        };

        let Some(&lp) = self.data.get(cursor) else {
            self.phase = Phase::Converged;
            return self.converged_step();
        };

        if self.weights.misclassifies(&lp) {
            self.weights.update(&lp);
            self.iterations += 1;
            self.phase = Phase::Scanning {
                cursor: 0
            };
            log::debug!(
                "correction {} on point {cursor} {:?}: weights now {:?}",
                self.iterations,
                lp,
                self.weights
            );
            return Step::Corrected {
                index:     cursor,
                point:     lp,
                weights:   self.weights,
                iteration: self.iterations
            };
        }

        log::trace!("point {cursor} classified correctly");
        let next = cursor + 1;
        if next >= self.data.len() {
            self.phase = Phase::Converged;
            log::info!("converged after {} corrections", self.iterations);
            return self.converged_step();
        }
        self.phase = Phase::Scanning {
            cursor: next
        };
        Step::Scanning {
            index: cursor
        }
    }

    /// # Overview
    ///
    /// Scans until a correction is made or the learner converges.
    ///
    /// Never returns [`Step::Scanning`].
    pub fn step(&mut self) -> Step {
        loop {
            match self.tick() {
                Step::Scanning {
                    ..
                } => continue,
                other => return other
            }
        }
    }

    /// # Overview
    ///
    /// Runs the learner until it converges, hits the correction cap, or the
    /// callback asks to stop.
    ///
    /// With no cap this does not return on non-separable data.
    pub fn fit(&mut self, mut opts: FitOptions) -> FitResult {
        let mut history = Vec::new();
        let mut stopped = false;

        loop {
            if let Some(max) = opts.max_corrections
                && self.iterations >= max
                && !self.is_converged()
            {
                if self.data.first_misclassified(&self.weights).is_none() {
                    self.phase = Phase::Converged;
                    log::info!("converged after {} corrections", self.iterations);
                } else {
                    log::warn!(
                        "stopped unconverged at correction cap {max}, {} points misclassified",
                        self.data.misclassified(&self.weights)
                    );
                }
                break;
            }

            match self.step() {
                Step::Corrected {
                    weights, ..
                } => {
                    if opts.record_history {
                        history.push(weights);
                    }
                    if opts.every_correction
                        && let Some(ref mut callback) = opts.callback
                        && !callback(&self.snapshot())
                    {
                        stopped = true;
                        break;
                    }
                }
                _ => break
            }
        }

        if !stopped && let Some(ref mut callback) = opts.callback {
            callback(&self.snapshot());
        }

        FitResult::with_history(
            self.iterations,
            self.weights,
            self.is_converged(),
            stopped,
            history
        )
    }

    /// # Overview
    ///
    /// Restarts from `weights` with the counter at zero.
    pub fn reset(&mut self, weights: Weights) {
        self.weights = weights;
        self.iterations = 0;
        self.phase = Phase::Scanning {
            cursor: 0
        };
    }

    /// Number of points the current weights misclassify.
    #[must_use]
    pub fn misclassified(&self) -> usize {
        self.data.misclassified(&self.weights)
    }

    /// Fraction of points the current weights classify correctly.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.data.accuracy(&self.weights)
    }

    fn converged_step(&self) -> Step {
        Step::Converged {
            weights:    self.weights,
            iterations: self.iterations
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> Dataset {
        Dataset::from_triples(&[(5.0, 5.0, 1), (5.0, -5.0, 1), (-5.0, 5.0, -1), (-5.0, -5.0, -1)])
            .unwrap()
    }

    #[test]
    fn tick_walks_points_in_order() {
        let data = scenario_a();
        let mut p = Perceptron::new(&data, Weights::new(0.0, 1.0, 1.0));

        assert_eq!(p.tick(), Step::Scanning {
            index: 0
        });
        assert_eq!(p.tick(), Step::Scanning {
            index: 1
        });
        match p.tick() {
            Step::Corrected {
                index,
                weights,
                iteration,
                ..
            } => {
                assert_eq!(index, 2);
                assert_eq!(weights, Weights::new(-1.0, 6.0, -4.0));
                assert_eq!(iteration, 1);
            }
            other => panic!("expected correction, got {other:?}")
        }
        assert_eq!(p.phase(), Phase::Scanning {
            cursor: 0
        });
    }

    #[test]
    fn converged_is_terminal() {
        let data = scenario_a();
        let mut p = Perceptron::new(&data, Weights::new(0.0, 1.0, 0.0));
        let first = p.step();
        assert!(first.is_converged());

        let again = p.tick();
        assert_eq!(first, again);
        assert_eq!(p.iterations(), 0);
    }

    #[test]
    fn single_point_boundary_converges_immediately() {
        let data = Dataset::from_triples(&[(1.0, 1.0, 1)]).unwrap();
        let mut p = Perceptron::new(&data, Weights::zero());

        assert_eq!(p.step(), Step::Converged {
            weights:    Weights::zero(),
            iterations: 0
        });
    }

    #[test]
    fn fit_reports_history() {
        let data = scenario_a();
        let mut p = Perceptron::new(&data, Weights::new(0.0, 1.0, 1.0));
        let result = p.fit(FitOptions::new().with_history());

        assert!(result.converged);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.history, vec![Weights::new(-1.0, 6.0, -4.0)]);
        assert_eq!(p.misclassified(), 0);
        assert!((p.accuracy() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cap_reached_on_separating_weights_converges() {
        let data = scenario_a();
        let mut p = Perceptron::new(&data, Weights::new(0.0, 1.0, 1.0));
        let result = p.fit(FitOptions::new().with_max_corrections(1));

        assert!(result.converged);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn reset_clears_counter() {
        let data = scenario_a();
        let mut p = Perceptron::new(&data, Weights::new(0.0, 1.0, 1.0));
        p.fit(FitOptions::new());
        p.reset(Weights::default());

        assert_eq!(p.iterations(), 0);
        assert!(!p.is_converged());
        assert_eq!(p.weights(), Weights::default());
    }

    #[test]
    fn from_config_uses_initial_weights() {
        let data = scenario_a();
        let config = Config::builder()
            .points(4)
            .initial_weights((2.0, 3.0, 4.0))
            .build()
            .unwrap();
        let p = Perceptron::from_config(&data, &config, &mut crate::utils::rng_from_seed(1));
        assert_eq!(p.weights(), Weights::new(2.0, 3.0, 4.0));
    }
}
