//! Structured grid storage for cut-cell computations.
//!
//! This crate provides the dense, box-shaped containers that implement the
//! accessor traits from `cutcell-core`:
//!
//! - [`IndexBox`]: inclusive 2D/3D index range with canonical ordering
//! - [`CellArray`]: multi-component real field over a box
//! - [`CellFlag`] / [`FlagArray`]: per-cell type and neighbour connectivity
//! - [`CentroidArray`]: per-cell centroid displacement from the cell centre
//!
//! All containers are read-only from the limiter's point of view and can
//! be shared across threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell_array;
pub mod centroid;
pub mod error;
pub mod flag;
pub mod index_box;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell_array::CellArray;
pub use centroid::CentroidArray;
pub use error::GridError;
pub use flag::{CellFlag, FlagArray};
pub use index_box::IndexBox;
