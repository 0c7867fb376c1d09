//! Read-only accessor traits consumed by the limiter.
//!
//! The limiter never owns grid data. Every piece of context (cell values,
//! connectivity, centroid offsets) is reached through one of these traits,
//! so a caller can hand in dense arrays, sparse maps, or views into a
//! larger pipeline without copying. Index validity is the caller's
//! responsibility.

use crate::id::{IntVect, Offset};

/// Access to a multi-component cell-average field.
pub trait FieldAccess {
    /// Value of component `comp` at `cell`.
    fn value(&self, cell: IntVect, comp: usize) -> f64;
}

/// Geometry-aware reachability between a cell and its stencil neighbours.
///
/// A neighbour is connected when it can be reached from `cell` without
/// crossing a cut (blocked) face.
pub trait Connectivity {
    /// Whether the neighbour at `cell + offset` is reachable from `cell`.
    fn is_connected(&self, cell: IntVect, offset: Offset) -> bool;
}

/// Displacement of each cell's geometric centroid from its nominal centre.
///
/// Offsets are in local cell-width units, roughly within `[-0.5, 0.5]`.
/// Regular cells report zero on every axis.
pub trait CentroidAccess {
    /// Centroid offset of `cell` along `axis`.
    fn centroid(&self, cell: IntVect, axis: usize) -> f64;
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn value(&self, cell: IntVect, comp: usize) -> f64 {
        (**self).value(cell, comp)
    }
}

impl<T: Connectivity + ?Sized> Connectivity for &T {
    fn is_connected(&self, cell: IntVect, offset: Offset) -> bool {
        (**self).is_connected(cell, offset)
    }
}

impl<T: CentroidAccess + ?Sized> CentroidAccess for &T {
    fn centroid(&self, cell: IntVect, axis: usize) -> f64 {
        (**self).centroid(cell, axis)
    }
}
