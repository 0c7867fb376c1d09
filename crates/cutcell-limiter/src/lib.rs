//! Monotonicity-preserving slope limiting on grids with cut cells.
//!
//! Given an unlimited linear reconstruction (a slope per axis) of a cell's
//! value, the limiter finds the largest factor in `[0, 1]` such that the
//! scaled reconstruction, evaluated at the true centroid of every
//! connected neighbour, stays within the minimum and maximum of the
//! neighbourhood's cell averages.
//!
//! # Pipeline (per cell and component)
//!
//! 1. [`neighborhood_bounds`] scans the 3x3(x3) block once and collects the
//!    local min/max over connected neighbours.
//! 2. [`centroid_limiter`] scans it again, predicts the value at each
//!    connected neighbour's centroid, and keeps the smallest
//!    [`alpha_stencil`] factor over out-of-range predictions.
//!
//! The same factor is returned for every axis. [`limit_slopes`] runs the
//! pipeline over a whole box, optionally in parallel (`parallel` feature).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alpha;
pub mod bounds;
pub mod centroid_limiter;
pub mod sweep;

pub use alpha::{alpha_stencil, alpha_stencil_with_tolerance, DEFAULT_RELATIVE_TOLERANCE};
pub use bounds::{neighborhood_bounds, NeighborhoodBounds};
pub use centroid_limiter::{
    centroid_limiter, CentroidLimiter, CentroidLimiterBuilder, LimitOutcome, LimiterInputs,
    DEFAULT_BOUNDS_SLACK,
};
pub use sweep::{apply_limiter, limit_slopes, SweepReport};
