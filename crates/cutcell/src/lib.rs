//! Cutcell: monotonicity-preserving slope limiting for cut-cell grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all cutcell sub-crates. For most users, adding `cutcell` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cutcell::prelude::*;
//!
//! // A 3x3 grid; the centre cell reaches its four face neighbours only.
//! let bx = IndexBox::new_2d(3, 3).unwrap();
//! let centre = IntVect::new_2d(1, 1);
//! let mut flags = FlagArray::all_regular(bx);
//! for (i, j) in [(0, 0), (2, 0), (0, 2), (2, 2)] {
//!     flags.cut_between(centre, IntVect::new_2d(i, j)).unwrap();
//! }
//!
//! let field = CellArray::from_fn(bx, 1, |c, _| match (c.i(), c.j()) {
//!     (0, 1) => 0.5,
//!     (2, 1) => 1.5,
//!     _ => 1.0,
//! })
//! .unwrap();
//! let centroids = CentroidArray::new(bx);
//!
//! let alpha = centroid_limiter(
//!     centre,
//!     0,
//!     SpaceDim::Two,
//!     &field,
//!     &flags,
//!     &[0.6, 0.6],
//!     &centroids,
//! );
//! assert!((alpha[0] - 5.0 / 6.0).abs() < 1e-12);
//! assert_eq!(alpha[0], alpha[1]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cutcell-core` | Indices, offsets, dimensionality, accessor traits |
//! | [`grid`] | `cutcell-grid` | Index boxes, cell arrays, flags, centroids |
//! | [`limiter`] | `cutcell-limiter` | Alpha computation, bounds, limiter, sweeps |
//!
//! # Features
//!
//! - `parallel`: run [`limiter::limit_slopes`] over rayon.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`cutcell-core`).
///
/// Contains [`types::IntVect`], [`types::Offset`], [`types::SpaceDim`] and
/// the accessor traits [`types::FieldAccess`], [`types::Connectivity`],
/// [`types::CentroidAccess`].
pub use cutcell_core as types;

/// Structured grid storage (`cutcell-grid`).
///
/// Dense containers implementing the accessor traits over an
/// [`grid::IndexBox`].
pub use cutcell_grid as grid;

/// The slope limiter (`cutcell-limiter`).
///
/// [`limiter::centroid_limiter`] for one cell, [`limiter::CentroidLimiter`]
/// for configured tolerances, [`limiter::limit_slopes`] for whole boxes.
pub use cutcell_limiter as limiter;

/// Common imports for typical cutcell usage.
///
/// ```rust
/// use cutcell::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use cutcell_core::{
        AxisTuple, CentroidAccess, Connectivity, FieldAccess, IntVect, Offset, SpaceDim,
    };

    // Errors
    pub use cutcell_core::CoreError;
    pub use cutcell_grid::GridError;

    // Grid
    pub use cutcell_grid::{CellArray, CellFlag, CentroidArray, FlagArray, IndexBox};

    // Limiter
    pub use cutcell_limiter::{
        alpha_stencil, apply_limiter, centroid_limiter, limit_slopes, neighborhood_bounds,
        CentroidLimiter, LimitOutcome, LimiterInputs, NeighborhoodBounds, SweepReport,
    };
}
