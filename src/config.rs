//! Configuration and builder for dataset generation and training runs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Weights,
    error::{Error, Result}
};

/// Default coordinate bound `R`.
pub const DEFAULT_BOUND: f64 = 20.0;

/// Default range for random biases.
pub const DEFAULT_BIAS_RANGE: u32 = 10;

/// Default number of x1 samples along a drawn boundary.
pub const DEFAULT_BOUNDARY_SAMPLES: usize = 100;

/// # Overview
///
/// Parameters for generating a dataset and starting a learner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
#[must_use]
pub struct Config {
    pub n_points:         usize,
    pub bound:            f64,
    pub bias_range:       u32,
    pub integer_coords:   bool,
    pub initial_weights:  Option<Weights>,
    pub draw_every:       bool,
    pub boundary_samples: usize
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.n_points == 0 {
            return Err(Error::invalid("n_points", "must be >= 1"));
        }
        if !self.bound.is_finite() || self.bound <= 0.0 {
            return Err(Error::invalid("bound", "must be finite and > 0"));
        }
        if let Some(w) = self.initial_weights
            && !(w.bias.is_finite() && w.w1.is_finite() && w.w2.is_finite())
        {
            return Err(Error::invalid("initial_weights", "must be finite"));
        }
        Ok(())
    }
}

/// Unvalidated wire form of [`Config`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawConfig {
    n_points:         usize,
    bound:            f64,
    bias_range:       u32,
    integer_coords:   bool,
    initial_weights:  Option<Weights>,
    draw_every:       bool,
    boundary_samples: usize
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let config = Config {
            n_points:         raw.n_points,
            bound:            raw.bound,
            bias_range:       raw.bias_range,
            integer_coords:   raw.integer_coords,
            initial_weights:  raw.initial_weights,
            draw_every:       raw.draw_every,
            boundary_samples: raw.boundary_samples
        };
        config.validate()?;
        Ok(config)
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    n_points:         Option<usize>,
    bound:            Option<f64>,
    bias_range:       Option<u32>,
    integer_coords:   Option<bool>,
    initial_weights:  Option<Option<Weights>>,
    draw_every:       bool,
    boundary_samples: Option<usize>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the number of points to generate (must be >= 1).
    pub fn points(mut self, n: usize) -> Self {
        self.n_points = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the coordinate bound `R` (default: 20).
    pub fn bound(mut self, r: f64) -> Self {
        self.bound = Some(r);
        self
    }

    /// # Overview
    ///
    /// Sets the random bias range (default: 10).
    pub fn bias_range(mut self, range: u32) -> Self {
        self.bias_range = Some(range);
        self
    }

    /// # Overview
    ///
    /// Draws real-valued coordinates instead of integers.
    pub fn continuous(mut self) -> Self {
        self.integer_coords = Some(false);
        self
    }

    /// # Overview
    ///
    /// Sets the starting weights (default: `(1, 1, 1)`).
    pub fn initial_weights(mut self, w: impl Into<Weights>) -> Self {
        self.initial_weights = Some(Some(w.into()));
        self
    }

    /// # Overview
    ///
    /// Draws the starting weights at random from `bias_range`.
    pub fn random_initial_weights(mut self) -> Self {
        self.initial_weights = Some(None);
        self
    }

    /// # Overview
    ///
    /// Publishes a snapshot after every correction, not only at the end.
    pub fn draw_every(mut self, on: bool) -> Self {
        self.draw_every = on;
        self
    }

    /// # Overview
    ///
    /// Sets how many x1 values a boundary snapshot samples (default: 100).
    pub fn boundary_samples(mut self, k: usize) -> Self {
        self.boundary_samples = Some(k);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            n_points:         self
                .n_points
                .ok_or(Error::invalid("n_points", "is required"))?,
            bound:            self.bound.unwrap_or(DEFAULT_BOUND),
            bias_range:       self.bias_range.unwrap_or(DEFAULT_BIAS_RANGE),
            integer_coords:   self.integer_coords.unwrap_or(true),
            initial_weights:  self.initial_weights.unwrap_or(Some(Weights::default())),
            draw_every:       self.draw_every,
            boundary_samples: self.boundary_samples.unwrap_or(DEFAULT_BOUNDARY_SAMPLES)
        };
        config.validate()?;
        Ok(config)
    }
}
