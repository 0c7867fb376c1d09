//! Per-cell centroid offsets.

use crate::error::GridError;
use crate::index_box::IndexBox;
use cutcell_core::{CentroidAccess, IntVect};

/// Largest admissible centroid displacement, in cell widths.
pub const MAX_CENTROID_OFFSET: f64 = 0.5;

/// Displacement of each cell's geometric centroid from its nominal centre.
///
/// Starts at zero everywhere (all cells regular). Cells outside the box
/// read as zero.
#[derive(Clone, Debug, PartialEq)]
pub struct CentroidArray {
    bx: IndexBox,
    data: Vec<[f64; 3]>,
}

impl CentroidArray {
    /// All-zero centroid offsets over `bx`.
    pub fn new(bx: IndexBox) -> Self {
        Self {
            bx,
            data: vec![[0.0; 3]; bx.num_cells()],
        }
    }

    /// The box this array covers.
    pub fn index_box(&self) -> IndexBox {
        self.bx
    }

    /// Offset of `cell`, or `None` outside the box.
    pub fn get(&self, cell: IntVect) -> Option<[f64; 3]> {
        self.bx.linear_index(cell).map(|n| self.data[n])
    }

    /// Set the offset of `cell`.
    ///
    /// Every component must be finite and within `[-0.5, 0.5]`.
    pub fn set(&mut self, cell: IntVect, offset: [f64; 3]) -> Result<(), GridError> {
        let n = self
            .bx
            .linear_index(cell)
            .ok_or_else(|| GridError::CellOutOfBounds {
                cell,
                bounds: self.bx.describe(),
            })?;
        for (axis, &value) in offset.iter().enumerate() {
            if !value.is_finite() || value.abs() > MAX_CENTROID_OFFSET {
                return Err(GridError::CentroidOutOfRange { cell, axis, value });
            }
        }
        self.data[n] = offset;
        Ok(())
    }

    /// Number of cells with a non-zero offset on any axis.
    pub fn displaced_count(&self) -> usize {
        self.data
            .iter()
            .filter(|c| c.iter().any(|&v| v != 0.0))
            .count()
    }
}

impl CentroidAccess for CentroidArray {
    fn centroid(&self, cell: IntVect, axis: usize) -> f64 {
        self.get(cell).map_or(0.0, |c| c[axis])
    }
}
