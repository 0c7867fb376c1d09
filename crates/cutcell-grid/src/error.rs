//! Error types for grid construction and checked access.

use cutcell_core::{IntVect, Offset};
use std::fmt;

/// Errors arising from grid construction or checked cell access.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// `lo > hi` on some axis.
    EmptyBox {
        /// Lower corner.
        lo: IntVect,
        /// Upper corner.
        hi: IntVect,
    },
    /// The box extent is inconsistent with its dimensionality.
    InvalidDimension {
        /// What went wrong.
        reason: String,
    },
    /// A cell lies outside the container's box.
    CellOutOfBounds {
        /// The offending cell.
        cell: IntVect,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A component index is not below the component count.
    ComponentOutOfRange {
        /// Requested component.
        comp: usize,
        /// Number of components stored.
        ncomp: usize,
    },
    /// A container was requested with zero components per cell.
    ZeroComponents,
    /// A centroid offset is non-finite or outside `[-0.5, 0.5]`.
    CentroidOutOfRange {
        /// The cell being written.
        cell: IntVect,
        /// Axis of the offending component.
        axis: usize,
        /// The rejected value.
        value: f64,
    },
    /// Two cells passed as neighbours are not within one cell of each other.
    NotAdjacent {
        /// First cell.
        a: IntVect,
        /// Second cell.
        b: IntVect,
    },
    /// `a` reaches `a + offset` but the neighbour does not reach back.
    AsymmetricConnectivity {
        /// The cell whose flag reports the connection.
        cell: IntVect,
        /// Direction of the one-sided connection.
        offset: Offset,
    },
    /// Buffer sizes, boxes, or component counts disagree.
    SizeMismatch {
        /// What disagreed.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBox { lo, hi } => write!(f, "empty box: lo {lo} exceeds hi {hi}"),
            Self::InvalidDimension { reason } => write!(f, "invalid dimension: {reason}"),
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
            Self::ComponentOutOfRange { comp, ncomp } => {
                write!(f, "component {comp} out of range for {ncomp} components")
            }
            Self::ZeroComponents => write!(f, "cell arrays need at least one component"),
            Self::CentroidOutOfRange { cell, axis, value } => {
                write!(
                    f,
                    "centroid offset {value} on axis {axis} at cell {cell} is outside [-0.5, 0.5]"
                )
            }
            Self::NotAdjacent { a, b } => write!(f, "cells {a} and {b} are not adjacent"),
            Self::AsymmetricConnectivity { cell, offset } => {
                write!(
                    f,
                    "cell {cell} is connected along {offset} but the neighbour does not connect back"
                )
            }
            Self::SizeMismatch { reason } => write!(f, "size mismatch: {reason}"),
        }
    }
}

impl std::error::Error for GridError {}
