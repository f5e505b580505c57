//! Points and their {-1, +1} labels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// An ordered pair `(x1, x2)` of real coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x1: f64,
    pub x2: f64
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x1: f64, x2: f64) -> Self {
        Self {
            x1,
            x2
        }
    }

    /// Euclidean norm of the augmented vector `[1, x1, x2]`.
    #[inline]
    #[must_use]
    pub fn augmented_norm(&self) -> f64 {
        (1.0 + self.x1 * self.x1 + self.x2 * self.x2).sqrt()
    }
}

/// # Overview
///
/// Which side of a linear boundary a point falls on.
///
/// A value of the decision function that is exactly zero counts as
/// `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    Negative,
    Positive
}

impl Label {
    /// Label for a decision value: `< 0` is negative, everything else
    /// positive.
    #[inline]
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// `-1.0` or `+1.0`.
    #[inline]
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0
        }
    }
}

impl From<Label> for i8 {
    fn from(label: Label) -> Self {
        match label {
            Label::Negative => -1,
            Label::Positive => 1
        }
    }
}

impl TryFrom<i8> for Label {
    type Error = crate::Error;

    fn try_from(value: i8) -> crate::Result<Self> {
        match value {
            -1 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            _ => Err(crate::Error::invalid("label", "must be -1 or +1"))
        }
    }
}

/// # Overview
///
/// A point together with its label.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabeledPoint {
    pub point: Point,
    pub label: Label
}

impl LabeledPoint {
    #[inline]
    #[must_use]
    pub const fn new(x1: f64, x2: f64, label: Label) -> Self {
        Self {
            point: Point::new(x1, x2),
            label
        }
    }
}
