//! Core types and traits for cut-cell slope limiting.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: cell
//! indices and neighbour offsets, dimensionality and stencil
//! enumeration, the read-only accessor traits through which the limiter
//! sees field, connectivity, and centroid data, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dim;
pub mod error;
pub mod id;
pub mod traits;

pub use dim::{AxisTuple, SpaceDim};
pub use error::CoreError;
pub use id::{IntVect, Offset};
pub use traits::{CentroidAccess, Connectivity, FieldAccess};
