//! Inclusive index boxes over 2D and 3D structured grids.

use crate::error::GridError;
use cutcell_core::{IntVect, SpaceDim};

/// An inclusive, axis-aligned range of cell indices.
///
/// Cells are enumerated in canonical order: `i` fastest, then `j`, then
/// `k`. Two-dimensional boxes occupy the single layer `k == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexBox {
    lo: IntVect,
    hi: IntVect,
    dim: SpaceDim,
}

impl IndexBox {
    /// Create a box from inclusive corners.
    ///
    /// Returns `Err(GridError::EmptyBox)` if `lo > hi` on any axis, or
    /// `Err(GridError::InvalidDimension)` if a 2D box leaves the `k == 0` layer.
    pub fn new(lo: IntVect, hi: IntVect, dim: SpaceDim) -> Result<Self, GridError> {
        if !lo.all_le(&hi) {
            return Err(GridError::EmptyBox { lo, hi });
        }
        if dim == SpaceDim::Two && (lo.k() != 0 || hi.k() != 0) {
            return Err(GridError::InvalidDimension {
                reason: format!("2D box must have k == 0, got k range [{}, {}]", lo.k(), hi.k()),
            });
        }
        Ok(Self { lo, hi, dim })
    }

    /// A 2D box covering `[0, nx) x [0, ny)`.
    pub fn new_2d(nx: u32, ny: u32) -> Result<Self, GridError> {
        Self::sized([nx, ny, 1], SpaceDim::Two)
    }

    /// A 3D box covering `[0, nx) x [0, ny) x [0, nz)`.
    pub fn new_3d(nx: u32, ny: u32, nz: u32) -> Result<Self, GridError> {
        Self::sized([nx, ny, nz], SpaceDim::Three)
    }

    fn sized(extent: [u32; 3], dim: SpaceDim) -> Result<Self, GridError> {
        if extent.iter().any(|&n| n == 0 || n > i32::MAX as u32) {
            return Err(GridError::InvalidDimension {
                reason: format!("extent {extent:?} must be in [1, i32::MAX] on every axis"),
            });
        }
        let hi = IntVect::new(
            extent[0] as i32 - 1,
            extent[1] as i32 - 1,
            extent[2] as i32 - 1,
        );
        Self::new(IntVect::ZERO, hi, dim)
    }

    /// Lower corner (inclusive).
    pub fn lo(&self) -> IntVect {
        self.lo
    }

    /// Upper corner (inclusive).
    pub fn hi(&self) -> IntVect {
        self.hi
    }

    /// Dimensionality of the box.
    pub fn dim(&self) -> SpaceDim {
        self.dim
    }

    /// Number of cells along each axis.
    pub fn shape(&self) -> [usize; 3] {
        let len = |axis: usize| (self.hi.axis(axis) - self.lo.axis(axis) + 1) as usize;
        [len(0), len(1), len(2)]
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.shape().iter().product()
    }

    /// Whether `cell` lies inside the box.
    pub fn contains(&self, cell: IntVect) -> bool {
        self.lo.all_le(&cell) && cell.all_le(&self.hi)
    }

    /// Whether `other` lies entirely inside the box.
    pub fn contains_box(&self, other: &IndexBox) -> bool {
        self.contains(other.lo) && self.contains(other.hi)
    }

    /// Grow the box by `n` cells on every active axis (`k` is not grown in 2D).
    ///
    /// Negative `n` shrinks the box; returns `Err(GridError::EmptyBox)` if it
    /// shrinks past empty.
    pub fn grow(&self, n: i32) -> Result<Self, GridError> {
        let nk = match self.dim {
            SpaceDim::Two => 0,
            SpaceDim::Three => n,
        };
        let lo = IntVect::new(self.lo.i() - n, self.lo.j() - n, self.lo.k() - nk);
        let hi = IntVect::new(self.hi.i() + n, self.hi.j() + n, self.hi.k() + nk);
        Self::new(lo, hi, self.dim)
    }

    /// Position of `cell` in canonical order, or `None` if outside.
    pub fn linear_index(&self, cell: IntVect) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let [nx, ny, _] = self.shape();
        let di = (cell.i() - self.lo.i()) as usize;
        let dj = (cell.j() - self.lo.j()) as usize;
        let dk = (cell.k() - self.lo.k()) as usize;
        Some(di + nx * (dj + ny * dk))
    }

    /// Inverse of [`linear_index`](Self::linear_index).
    pub fn cell_at(&self, index: usize) -> Option<IntVect> {
        if index >= self.num_cells() {
            return None;
        }
        let [nx, ny, _] = self.shape();
        let i = (index % nx) as i32;
        let j = ((index / nx) % ny) as i32;
        let k = (index / (nx * ny)) as i32;
        Some(IntVect::new(
            self.lo.i() + i,
            self.lo.j() + j,
            self.lo.k() + k,
        ))
    }

    /// Iterate over all cells in canonical order.
    pub fn cells(&self) -> impl Iterator<Item = IntVect> + '_ {
        (self.lo.k()..=self.hi.k()).flat_map(move |k| {
            (self.lo.j()..=self.hi.j())
                .flat_map(move |j| (self.lo.i()..=self.hi.i()).map(move |i| IntVect::new(i, j, k)))
        })
    }

    /// Human-readable bounds, used in error messages.
    pub(crate) fn describe(&self) -> String {
        format!("[{}, {}] ({})", self.lo, self.hi, self.dim)
    }
}
