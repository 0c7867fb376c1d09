//! Dense multi-component real storage over an [`IndexBox`].

use crate::error::GridError;
use crate::index_box::IndexBox;
use cutcell_core::{FieldAccess, IntVect};

/// A multi-component cell field stored contiguously.
///
/// Layout is component-fastest: all components of one cell are adjacent,
/// and cells follow the box's canonical order. For vector quantities such
/// as slopes, component `comp * ndim + axis` holds axis `axis` of field
/// component `comp`.
#[derive(Clone, Debug, PartialEq)]
pub struct CellArray {
    bx: IndexBox,
    ncomp: usize,
    data: Vec<f64>,
}

impl CellArray {
    /// A zero-filled array with `ncomp` components per cell.
    ///
    /// Returns `Err(GridError::ZeroComponents)` if `ncomp == 0`.
    pub fn new(bx: IndexBox, ncomp: usize) -> Result<Self, GridError> {
        Self::filled(bx, ncomp, 0.0)
    }

    /// An array with every entry set to `value`.
    pub fn filled(bx: IndexBox, ncomp: usize, value: f64) -> Result<Self, GridError> {
        if ncomp == 0 {
            return Err(GridError::ZeroComponents);
        }
        Ok(Self {
            bx,
            ncomp,
            data: vec![value; bx.num_cells() * ncomp],
        })
    }

    /// Build an array by evaluating `f(cell, comp)` for every entry.
    pub fn from_fn(
        bx: IndexBox,
        ncomp: usize,
        mut f: impl FnMut(IntVect, usize) -> f64,
    ) -> Result<Self, GridError> {
        if ncomp == 0 {
            return Err(GridError::ZeroComponents);
        }
        let mut data = Vec::with_capacity(bx.num_cells() * ncomp);
        for cell in bx.cells() {
            for comp in 0..ncomp {
                data.push(f(cell, comp));
            }
        }
        Ok(Self { bx, ncomp, data })
    }

    /// Wrap an existing buffer laid out in canonical, component-fastest order.
    pub fn from_vec(bx: IndexBox, ncomp: usize, data: Vec<f64>) -> Result<Self, GridError> {
        if ncomp == 0 {
            return Err(GridError::ZeroComponents);
        }
        let expected = bx.num_cells() * ncomp;
        if data.len() != expected {
            return Err(GridError::SizeMismatch {
                reason: format!(
                    "buffer has {} entries, box {} with {ncomp} components needs {expected}",
                    data.len(),
                    bx.describe(),
                ),
            });
        }
        Ok(Self { bx, ncomp, data })
    }

    /// The box this array covers.
    pub fn index_box(&self) -> IndexBox {
        self.bx
    }

    /// Components per cell.
    pub fn ncomp(&self) -> usize {
        self.ncomp
    }

    /// Raw storage in canonical order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw storage in canonical order.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    fn offset(&self, cell: IntVect, comp: usize) -> Option<usize> {
        if comp >= self.ncomp {
            return None;
        }
        self.bx.linear_index(cell).map(|n| n * self.ncomp + comp)
    }

    fn checked_offset(&self, cell: IntVect, comp: usize) -> Result<usize, GridError> {
        if comp >= self.ncomp {
            return Err(GridError::ComponentOutOfRange {
                comp,
                ncomp: self.ncomp,
            });
        }
        self.bx
            .linear_index(cell)
            .map(|n| n * self.ncomp + comp)
            .ok_or_else(|| GridError::CellOutOfBounds {
                cell,
                bounds: self.bx.describe(),
            })
    }

    /// Value at `(cell, comp)`, or `None` if either is out of range.
    pub fn get(&self, cell: IntVect, comp: usize) -> Option<f64> {
        self.offset(cell, comp).map(|o| self.data[o])
    }

    /// Value at `(cell, comp)` with a descriptive error when out of range.
    pub fn try_get(&self, cell: IntVect, comp: usize) -> Result<f64, GridError> {
        self.checked_offset(cell, comp).map(|o| self.data[o])
    }

    /// Overwrite the value at `(cell, comp)`.
    pub fn set(&mut self, cell: IntVect, comp: usize, value: f64) -> Result<(), GridError> {
        let o = self.checked_offset(cell, comp)?;
        self.data[o] = value;
        Ok(())
    }

    /// All components of `cell`.
    pub fn cell_values(&self, cell: IntVect) -> Option<&[f64]> {
        let start = self.bx.linear_index(cell)? * self.ncomp;
        Some(&self.data[start..start + self.ncomp])
    }

    /// All components of `cell`, mutably.
    pub fn cell_values_mut(&mut self, cell: IntVect) -> Option<&mut [f64]> {
        let start = self.bx.linear_index(cell)? * self.ncomp;
        Some(&mut self.data[start..start + self.ncomp])
    }
}

impl FieldAccess for CellArray {
    /// # Panics
    ///
    /// Panics if `cell` is outside the box or `comp >= ncomp`. Callers size
    /// arrays to cover the limiter's full stencil (one ghost layer).
    fn value(&self, cell: IntVect, comp: usize) -> f64 {
        match self.offset(cell, comp) {
            Some(o) => self.data[o],
            None => panic!(
                "field access ({cell}, comp {comp}) outside array {} with {} components",
                self.bx.describe(),
                self.ncomp
            ),
        }
    }
}
