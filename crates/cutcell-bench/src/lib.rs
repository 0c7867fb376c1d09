//! Benchmark profiles and utilities for the cutcell slope limiter.
//!
//! Provides pre-built [`Problem`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 256x256 2D grid (~65K cells) with random cuts
//! - [`stress_profile`]: 64x64x64 3D grid (~262K cells) with random cuts

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cutcell_core::SpaceDim;
use cutcell_grid::{CellArray, GridError, IndexBox};
use cutcell_limiter::{limit_slopes, CentroidLimiter, SweepReport};
use cutcell_test_utils::fixtures::{random_cut_geometry, random_field, Geometry};

/// Fraction of links cut in the benchmark geometries.
pub const CUT_PROBABILITY: f64 = 0.05;

/// A complete limiter input set over a ghosted box.
pub struct Problem {
    /// Cells to limit (the ghosted box shrunk by one layer).
    pub interior: IndexBox,
    /// Flags and centroids over the ghosted box.
    pub geometry: Geometry,
    /// Cell averages over the ghosted box.
    pub field: CellArray,
    /// Unlimited slopes over the ghosted box.
    pub slopes: CellArray,
    /// Field components.
    pub ncomp: usize,
    /// Limiter matching the box dimensionality.
    pub limiter: CentroidLimiter,
}

impl Problem {
    /// Build a seeded problem on `ghosted` with `ncomp` components.
    pub fn new(ghosted: IndexBox, ncomp: usize, seed: u64) -> Result<Self, GridError> {
        let dim = ghosted.dim();
        Ok(Self {
            interior: ghosted.grow(-1)?,
            geometry: random_cut_geometry(ghosted, seed, CUT_PROBABILITY),
            field: random_field(ghosted, ncomp, seed, 0.0, 1.0),
            slopes: random_field(ghosted, ncomp * dim.ndim(), seed ^ 0x9e37, -1.0, 1.0),
            ncomp,
            limiter: CentroidLimiter::new(dim),
        })
    }

    /// Run one full sweep over the interior.
    pub fn sweep(&self) -> Result<(CellArray, SweepReport), GridError> {
        limit_slopes(
            &self.limiter,
            self.interior,
            self.ncomp,
            &self.field,
            &self.geometry.flags,
            &self.geometry.centroids,
            &self.slopes,
        )
    }

    /// Dimensionality of the problem.
    pub fn dim(&self) -> SpaceDim {
        self.limiter.dim()
    }
}

/// Reference profile: 256x256 2D grid with one ghost layer, 2 components.
pub fn reference_profile(seed: u64) -> Result<Problem, GridError> {
    Problem::new(IndexBox::new_2d(258, 258)?, 2, seed)
}

/// Stress profile: 64x64x64 3D grid with one ghost layer, 3 components.
pub fn stress_profile(seed: u64) -> Result<Problem, GridError> {
    Problem::new(IndexBox::new_3d(66, 66, 66)?, 3, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_problem_sweeps() {
        let p = Problem::new(IndexBox::new_2d(12, 10).unwrap(), 1, 42).unwrap();
        let (factors, report) = p.sweep().unwrap();
        assert_eq!(factors.index_box(), p.interior);
        assert_eq!(report.cells, 10 * 8);
        assert_eq!(p.dim(), SpaceDim::Two);
    }

    #[test]
    fn profiles_are_deterministic() {
        let a = Problem::new(IndexBox::new_3d(6, 6, 6).unwrap(), 2, 7).unwrap();
        let b = Problem::new(IndexBox::new_3d(6, 6, 6).unwrap(), 2, 7).unwrap();
        assert_eq!(a.field, b.field);
        assert_eq!(a.geometry.flags, b.geometry.flags);
        assert_eq!(a.sweep().unwrap().0, b.sweep().unwrap().0);
    }

    #[test]
    fn reference_profile_shape() {
        let p = reference_profile(1).unwrap();
        assert_eq!(p.interior.num_cells(), 256 * 256);
        assert_eq!(p.slopes.ncomp(), 4);
    }
}
