//! Parallel learners over a shared dataset using rayon.

use rayon::prelude::*;

use crate::{Dataset, Perceptron, Weights, training::FitOptions, training::FitResult};

/// # Overview
///
/// Runs one independent learner per starting weight vector.
///
/// Each learner is capped at `max_corrections`; results come back in the
/// order of `starts`.
pub fn fit_many(data: &Dataset, starts: &[Weights], max_corrections: usize) -> Vec<FitResult> {
    starts
        .par_iter()
        .map(|&w| {
            Perceptron::new(data, w).fit(FitOptions::new().with_max_corrections(max_corrections))
        })
        .collect()
}

/// # Overview
///
/// Parallel count of points `w` misclassifies.
pub fn misclassified_parallel(data: &Dataset, w: &Weights) -> usize {
    data.as_slice()
        .par_iter()
        .filter(|lp| w.misclassifies(lp))
        .count()
}
