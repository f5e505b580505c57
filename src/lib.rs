//! # Perceptron
//!
//! The classical perceptron learning algorithm on labeled 2-D points.
//!
//! A [`Perceptron`] scans a [`Dataset`] in order for the first point its
//! current [`Weights`] misclassify, moves the weights towards that point,
//! and restarts the scan, until a full pass finds no mistake. Boundary
//! lines for plotting are derived on demand with [`Boundary::sample`].
//!
//! # Features
//!
//! - `parallel`: independent learners over a shared dataset via rayon
//! - `serde`: Serialization support
//!
//! # Examples
//!
//! ```
//! use perceptron_rs::{Config, Dataset, FitOptions, Perceptron, Weights, utils::rng_from_seed};
//!
//! let config = Config::builder().points(40).build().unwrap();
//! let mut rng = rng_from_seed(42);
//!
//! let reference = Weights::new(0.5, 1.0, -2.0);
//! let data = Dataset::generate(&config, reference, &mut rng).unwrap();
//!
//! let mut learner = Perceptron::from_config(&data, &config, &mut rng);
//! let result = learner.fit(FitOptions::from_config(&config));
//!
//! assert!(result.converged);
//! assert_eq!(data.misclassified(&result.weights), 0);
//! ```

mod boundary;
mod config;
mod dataset;
pub mod error;
mod learner;
mod point;
pub mod training;
pub mod utils;
mod weights;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use boundary::Boundary;
pub use config::{
    Config, ConfigBuilder, DEFAULT_BIAS_RANGE, DEFAULT_BOUND, DEFAULT_BOUNDARY_SAMPLES
};
pub use dataset::{Dataset, convergence_bound};
pub use error::{Error, Result};
pub use learner::{Perceptron, Phase, Step};
pub use point::{Label, LabeledPoint, Point};
pub use training::{FitOptions, FitResult, Snapshot, SnapshotCallback};
pub use weights::Weights;
