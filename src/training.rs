//! Training options, snapshot callbacks, and results.

use crate::{Boundary, Config, Result, Weights};

/// # Overview
///
/// The learner's state as published to an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Corrections applied so far.
    pub iteration: usize,
    /// Weights after the latest correction.
    pub weights:   Weights,
    /// True on the terminal snapshot of a converged run.
    pub converged: bool
}

impl Snapshot {
    /// # Overview
    ///
    /// Samples the decision boundary for these weights.
    #[inline]
    pub fn boundary(&self, bound: f64, k: usize) -> Result<Boundary> {
        Boundary::sample(&self.weights, bound, k)
    }
}

/// Snapshot callback type for training.
///
/// Return `false` to stop training early.
pub type SnapshotCallback = Box<dyn FnMut(&Snapshot) -> bool + Send>;

/// Options for running a learner to convergence.
#[derive(Default)]
pub struct FitOptions {
    /// Stop after this many corrections even if unconverged. `None` runs
    /// until convergence, which never happens on non-separable data.
    pub max_corrections:  Option<usize>,
    /// Publish a snapshot after every correction, not only at the end.
    pub every_correction: bool,
    /// Keep the weights after every correction in [`FitResult::history`].
    pub record_history:   bool,
    pub callback:         Option<SnapshotCallback>
}

impl core::fmt::Debug for FitOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FitOptions")
            .field("max_corrections", &self.max_corrections)
            .field("every_correction", &self.every_correction)
            .field("record_history", &self.record_history)
            .field("callback", &self.callback.as_ref().map(|_| "..."))
            .finish()
    }
}

impl FitOptions {
    /// Unbounded run with no observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options matching a config's `draw_every` flag.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            every_correction: config.draw_every,
            ..Self::default()
        }
    }

    /// Caps the number of corrections.
    #[must_use]
    pub fn with_max_corrections(mut self, max: usize) -> Self {
        self.max_corrections = Some(max);
        self
    }

    /// Publishes a snapshot after every correction.
    #[must_use]
    pub fn every_correction(mut self) -> Self {
        self.every_correction = true;
        self
    }

    /// Records the weights after each correction.
    #[must_use]
    pub fn with_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    /// Sets snapshot callback.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let opts = FitOptions::new()
    ///     .every_correction()
    ///     .with_callback(|snap| {
    ///         println!("iteration {}: {:?}", snap.iteration, snap.weights);
    ///         true  // continue training
    ///     });
    /// ```
    #[must_use]
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Snapshot) -> bool + Send + 'static
    {
        self.callback = Some(Box::new(callback));
        self
    }
}

/// Result of running a learner.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// Total corrections applied.
    pub iterations:    usize,
    /// Final weights.
    pub weights:       Weights,
    /// Whether a full scan found no misclassified point.
    pub converged:     bool,
    /// Whether the callback asked to stop.
    pub stopped_early: bool,
    /// Weights after each correction, when requested.
    pub history:       Vec<Weights>
}

impl FitResult {
    /// Creates FitResult with weight history.
    #[must_use]
    pub fn with_history(
        iterations: usize,
        weights: Weights,
        converged: bool,
        stopped_early: bool,
        history: Vec<Weights>
    ) -> Self {
        Self {
            iterations,
            weights,
            converged,
            stopped_early,
            history
        }
    }
}
