//! Local value bounds over the connected neighbourhood of a cell.

use cutcell_core::{Connectivity, FieldAccess, IntVect, SpaceDim};

/// Result of scanning a cell's connected neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborhoodBounds {
    /// Smallest value among the cell and its connected neighbours.
    pub q_min: f64,
    /// Largest value among the cell and its connected neighbours.
    pub q_max: f64,
    /// Number of connected neighbours (excluding the cell itself).
    pub connected: usize,
    /// Per axis, how many of the two face neighbours lying along only that
    /// axis are connected (0..=2). Always 0 for the third axis in 2D.
    ///
    /// Diagnostic only; the limiting factor does not depend on it.
    pub cuts: [u8; 3],
}

impl NeighborhoodBounds {
    /// Bounds containing only `state`, with no connected neighbours.
    pub fn isolated(state: f64) -> Self {
        Self {
            q_min: state,
            q_max: state,
            connected: 0,
            cuts: [0; 3],
        }
    }

    /// Whether `q` lies in `[q_min - slack, q_max + slack]`.
    pub fn contains(&self, q: f64, slack: f64) -> bool {
        q <= self.q_max + slack && q >= self.q_min - slack
    }

    /// `q_max - q_min`.
    pub fn span(&self) -> f64 {
        self.q_max - self.q_min
    }
}

/// Collect the min/max of component `comp` over `cell` and every stencil
/// neighbour that `connectivity` reports reachable.
///
/// A cell with no connected neighbours yields bounds collapsed to its own
/// value.
pub fn neighborhood_bounds<F, C>(
    cell: IntVect,
    comp: usize,
    dim: SpaceDim,
    field: &F,
    connectivity: &C,
) -> NeighborhoodBounds
where
    F: FieldAccess + ?Sized,
    C: Connectivity + ?Sized,
{
    let mut bounds = NeighborhoodBounds::isolated(field.value(cell, comp));

    for offset in dim.neighbour_offsets() {
        if !connectivity.is_connected(cell, offset) {
            continue;
        }
        if let Some(axis) = offset.aligned_axis() {
            bounds.cuts[axis] += 1;
        }
        let q = field.value(cell + offset, comp);
        bounds.q_max = bounds.q_max.max(q);
        bounds.q_min = bounds.q_min.min(q);
        bounds.connected += 1;
    }

    bounds
}
