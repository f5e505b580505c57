//! Error types for perceptron learning.

use core::fmt;

/// # Overview
///
/// Errors that can occur when building datasets or sampling boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A construction input is out of range.
    InvalidParameter {
        name:   &'static str,
        reason: &'static str
    },
    /// Boundary sampling requested while `w2 == 0`.
    DegenerateBoundary
}

impl Error {
    #[inline]
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            reason
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                reason
            } => write!(f, "invalid parameter `{name}`: {reason}"),
            Self::DegenerateBoundary => {
                write!(f, "degenerate boundary: w2 is zero, line cannot be solved for x2")
            }
        }
    }
}

impl std::error::Error for Error {}

/// # Overview
///
/// Result type for perceptron operations.
pub type Result<T> = core::result::Result<T, Error>;
