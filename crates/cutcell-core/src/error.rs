//! Error types for core index and dimensionality conversions.

use std::error::Error;
use std::fmt;

/// Errors from constructing core types out of untrusted values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Only two- and three-dimensional grids are supported.
    UnsupportedDimension {
        /// The requested number of axes.
        ndim: usize,
    },
    /// An offset component lies outside `{-1, 0, 1}`.
    OffsetOutOfRange {
        /// The offending components.
        components: [i32; 3],
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDimension { ndim } => {
                write!(f, "unsupported dimensionality {ndim}, expected 2 or 3")
            }
            Self::OffsetOutOfRange { components } => {
                write!(
                    f,
                    "offset {components:?} has a component outside {{-1, 0, 1}}"
                )
            }
        }
    }
}

impl Error for CoreError {}
