//! Whole-box limiter sweeps.
//!
//! [`limit_slopes`] evaluates the limiter for every `(cell, component)`
//! pair of a box and returns a factor array in the slope layout
//! (`comp * ndim + axis`). Cells are independent, so with the `parallel`
//! feature the sweep fans out over rayon; the output does not depend on
//! the thread count.

use crate::centroid_limiter::{CentroidLimiter, LimiterInputs};
use cutcell_core::{AxisTuple, CentroidAccess, Connectivity, FieldAccess, IntVect};
use cutcell_grid::{CellArray, GridError, IndexBox};

/// Summary of one sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepReport {
    /// Cells visited.
    pub cells: usize,
    /// `(cell, component)` pairs whose factor is below 1.
    pub limited: usize,
    /// Smallest factor produced (1 if nothing was limited).
    pub min_factor: f64,
}

impl Default for SweepReport {
    fn default() -> Self {
        Self {
            cells: 0,
            limited: 0,
            min_factor: 1.0,
        }
    }
}

impl SweepReport {
    /// Combine two partial reports.
    pub fn merge(self, other: Self) -> Self {
        Self {
            cells: self.cells + other.cells,
            limited: self.limited + other.limited,
            min_factor: self.min_factor.min(other.min_factor),
        }
    }
}

/// Limit every `(cell, component)` pair in `bx`.
///
/// `slopes` carries `ncomp * ndim` components per cell, axis fastest, and
/// must cover `bx`. `field`, `connectivity` and `centroids` must be
/// readable one cell beyond `bx` wherever `connectivity` reports a
/// connection there.
///
/// # Errors
///
/// - [`GridError::InvalidDimension`] if `bx` and `limiter` disagree on
///   dimensionality
/// - [`GridError::ZeroComponents`] if `ncomp == 0`
/// - [`GridError::SizeMismatch`] if `slopes` has the wrong component
///   count or does not cover `bx`
pub fn limit_slopes<F, C, G>(
    limiter: &CentroidLimiter,
    bx: IndexBox,
    ncomp: usize,
    field: &F,
    connectivity: &C,
    centroids: &G,
    slopes: &CellArray,
) -> Result<(CellArray, SweepReport), GridError>
where
    F: FieldAccess + Sync + ?Sized,
    C: Connectivity + Sync + ?Sized,
    G: CentroidAccess + Sync + ?Sized,
{
    let dim = limiter.dim();
    if bx.dim() != dim {
        return Err(GridError::InvalidDimension {
            reason: format!("box is {} but limiter is {}", bx.dim(), dim),
        });
    }
    if ncomp == 0 {
        return Err(GridError::ZeroComponents);
    }
    let stride = ncomp * dim.ndim();
    if slopes.ncomp() != stride {
        return Err(GridError::SizeMismatch {
            reason: format!(
                "slopes have {} components, {ncomp} field components in {dim} need {stride}",
                slopes.ncomp()
            ),
        });
    }
    if !slopes.index_box().contains_box(&bx) {
        return Err(GridError::SizeMismatch {
            reason: format!(
                "slope box [{}, {}] does not cover sweep box [{}, {}]",
                slopes.index_box().lo(),
                slopes.index_box().hi(),
                bx.lo(),
                bx.hi()
            ),
        });
    }

    let inputs = LimiterInputs::new(field, connectivity, centroids);
    let mut factors = CellArray::new(bx, stride)?;

    #[cfg(feature = "parallel")]
    let report = {
        use rayon::prelude::*;

        let cells: Vec<IntVect> = bx.cells().collect();
        factors
            .as_mut_slice()
            .par_chunks_mut(stride)
            .zip(cells.par_iter())
            .map(|(out, &cell)| sweep_cell(limiter, ncomp, cell, &inputs, slopes, out))
            .try_reduce(SweepReport::default, |a, b| Ok(a.merge(b)))?
    };

    #[cfg(not(feature = "parallel"))]
    let report = {
        let mut report = SweepReport::default();
        for (out, cell) in factors.as_mut_slice().chunks_mut(stride).zip(bx.cells()) {
            report = report.merge(sweep_cell(limiter, ncomp, cell, &inputs, slopes, out)?);
        }
        report
    };

    log::debug!(
        "limited {}/{} pairs over {} cells in [{}, {}], min factor {}",
        report.limited,
        report.cells * ncomp,
        report.cells,
        bx.lo(),
        bx.hi(),
        report.min_factor
    );

    Ok((factors, report))
}

/// Limit all components of one cell, writing `ncomp * ndim` factors to `out`.
fn sweep_cell<F, C, G>(
    limiter: &CentroidLimiter,
    ncomp: usize,
    cell: IntVect,
    inputs: &LimiterInputs<'_, F, C, G>,
    slopes: &CellArray,
    out: &mut [f64],
) -> Result<SweepReport, GridError>
where
    F: FieldAccess + ?Sized,
    C: Connectivity + ?Sized,
    G: CentroidAccess + ?Sized,
{
    let ndim = limiter.dim().ndim();
    let mut report = SweepReport {
        cells: 1,
        ..SweepReport::default()
    };
    let mut cell_slopes = AxisTuple::new();

    for comp in 0..ncomp {
        cell_slopes.clear();
        for axis in 0..ndim {
            cell_slopes.push(slopes.try_get(cell, comp * ndim + axis)?);
        }

        let outcome = limiter.limit_with_bounds(cell, comp, inputs, &cell_slopes);
        out[comp * ndim..(comp + 1) * ndim].copy_from_slice(&outcome.factors);

        let alpha = outcome.factor();
        if alpha < 1.0 {
            report.limited += 1;
            report.min_factor = report.min_factor.min(alpha);
            log::trace!(
                "cell {cell} comp {comp}: factor {alpha:.6}, bounds [{}, {}] over {} neighbours",
                outcome.bounds.q_min,
                outcome.bounds.q_max,
                outcome.bounds.connected
            );
        }
    }

    Ok(report)
}

/// Scale `slopes` by `factors`, entry by entry, over the factor box.
///
/// # Errors
///
/// [`GridError::SizeMismatch`] if the component counts differ or `slopes`
/// does not cover the factor box.
pub fn apply_limiter(slopes: &CellArray, factors: &CellArray) -> Result<CellArray, GridError> {
    let bx = factors.index_box();
    let ncomp = factors.ncomp();
    if slopes.ncomp() != ncomp {
        return Err(GridError::SizeMismatch {
            reason: format!(
                "slopes have {} components, factors have {ncomp}",
                slopes.ncomp()
            ),
        });
    }
    if !slopes.index_box().contains_box(&bx) {
        return Err(GridError::SizeMismatch {
            reason: format!(
                "slope box [{}, {}] does not cover factor box [{}, {}]",
                slopes.index_box().lo(),
                slopes.index_box().hi(),
                bx.lo(),
                bx.hi()
            ),
        });
    }

    let mut data = Vec::with_capacity(factors.as_slice().len());
    for (cell, alphas) in bx.cells().zip(factors.as_slice().chunks(ncomp)) {
        for (comp, alpha) in alphas.iter().enumerate() {
            data.push(slopes.try_get(cell, comp)? * alpha);
        }
    }
    CellArray::from_vec(bx, ncomp, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutcell_core::SpaceDim;
    use cutcell_test_utils::fixtures::{planar_cut_geometry, regular_geometry};
    use cutcell_test_utils::MockField;

    fn limiter2() -> CentroidLimiter {
        CentroidLimiter::new(SpaceDim::Two)
    }

    /// Field `x` over a 4x2 interior plus one ghost layer.
    fn ramp() -> (IndexBox, IndexBox, CellArray) {
        let bx = IndexBox::new(IntVect::new_2d(1, 1), IntVect::new_2d(4, 2), SpaceDim::Two).unwrap();
        let ghosted = bx.grow(1).unwrap();
        let field = CellArray::from_fn(ghosted, 1, |c, _| c.i() as f64).unwrap();
        (bx, ghosted, field)
    }

    #[test]
    fn exact_linear_slopes_pass_unchanged() {
        let (bx, ghosted, field) = ramp();
        let geom = regular_geometry(ghosted);
        let slopes = CellArray::from_fn(ghosted, 2, |_, n| if n == 0 { 1.0 } else { 0.0 }).unwrap();

        let (factors, report) = limit_slopes(
            &limiter2(),
            bx,
            1,
            &field,
            &geom.flags,
            &geom.centroids,
            &slopes,
        )
        .unwrap();

        assert_eq!(factors.index_box(), bx);
        assert!(factors.as_slice().iter().all(|&a| a == 1.0));
        assert_eq!(report.cells, 8);
        assert_eq!(report.limited, 0);
        assert_eq!(report.min_factor, 1.0);
    }

    #[test]
    fn steep_slopes_are_limited_everywhere() {
        let (bx, ghosted, field) = ramp();
        let geom = regular_geometry(ghosted);
        let slopes = CellArray::from_fn(ghosted, 2, |_, n| if n == 0 { 2.0 } else { 0.0 }).unwrap();

        let (factors, report) = limit_slopes(
            &limiter2(),
            bx,
            1,
            &field,
            &geom.flags,
            &geom.centroids,
            &slopes,
        )
        .unwrap();

        // prediction 2 against a neighbour difference of 1
        for &a in factors.as_slice() {
            assert!((a - 0.5).abs() < 1e-12, "got {a}");
        }
        assert_eq!(report.limited, 8);
        assert!((report.min_factor - 0.5).abs() < 1e-12);

        let limited = apply_limiter(&slopes, &factors).unwrap();
        assert_eq!(limited.index_box(), bx);
        assert!((limited.get(IntVect::new_2d(2, 1), 0).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(limited.get(IntVect::new_2d(2, 1), 1), Some(0.0));
    }

    #[test]
    fn covered_cells_are_unlimited() {
        let bx = IndexBox::new_2d(6, 3).unwrap();
        let geom = planar_cut_geometry(bx, 3);
        let field = CellArray::from_fn(bx, 1, |c, _| (c.i() * c.i()) as f64).unwrap();
        let slopes = CellArray::filled(bx, 2, 10.0).unwrap();

        let (factors, _) = limit_slopes(
            &limiter2(),
            bx,
            1,
            &field,
            &geom.flags,
            &geom.centroids,
            &slopes,
        )
        .unwrap();

        for cell in bx.cells().filter(|c| c.i() > 3) {
            assert_eq!(factors.get(cell, 0), Some(1.0), "covered cell {cell}");
        }
        assert!(factors.get(IntVect::new_2d(1, 1), 0).unwrap() < 1.0);
    }

    #[test]
    fn works_with_mock_accessors() {
        let bx = IndexBox::new_2d(2, 2).unwrap();
        let field = MockField::uniform(1.0);
        let conn = cutcell_test_utils::MockConnectivity::fully_connected();
        let cent = cutcell_test_utils::MockCentroids::zero();
        let slopes = CellArray::filled(bx, 2, 0.0).unwrap();
        let (factors, report) =
            limit_slopes(&limiter2(), bx, 1, &field, &conn, &cent, &slopes).unwrap();
        assert!(factors.as_slice().iter().all(|&a| a == 1.0));
        assert_eq!(report.cells, 4);
    }

    #[test]
    fn rejects_mismatched_inputs() {
        let (bx, ghosted, field) = ramp();
        let geom = regular_geometry(ghosted);

        let wrong_ncomp = CellArray::new(ghosted, 3).unwrap();
        let r = limit_slopes(&limiter2(), bx, 1, &field, &geom.flags, &geom.centroids, &wrong_ncomp);
        assert!(matches!(r, Err(GridError::SizeMismatch { .. })));

        let small = CellArray::new(IndexBox::new_2d(2, 2).unwrap(), 2).unwrap();
        let r = limit_slopes(&limiter2(), bx, 1, &field, &geom.flags, &geom.centroids, &small);
        assert!(matches!(r, Err(GridError::SizeMismatch { .. })));

        let slopes = CellArray::new(ghosted, 2).unwrap();
        let r = limit_slopes(&limiter2(), bx, 0, &field, &geom.flags, &geom.centroids, &slopes);
        assert_eq!(r.unwrap_err(), GridError::ZeroComponents);

        let three = CentroidLimiter::new(SpaceDim::Three);
        let r = limit_slopes(&three, bx, 1, &field, &geom.flags, &geom.centroids, &slopes);
        assert!(matches!(r, Err(GridError::InvalidDimension { .. })));
    }

    #[test]
    fn apply_limiter_checks_shapes() {
        let bx = IndexBox::new_2d(2, 2).unwrap();
        let slopes = CellArray::filled(bx, 2, 1.0).unwrap();
        let factors = CellArray::filled(bx, 4, 0.5).unwrap();
        assert!(matches!(
            apply_limiter(&slopes, &factors),
            Err(GridError::SizeMismatch { .. })
        ));

        let big = CellArray::filled(IndexBox::new_2d(3, 3).unwrap(), 2, 0.5).unwrap();
        assert!(matches!(
            apply_limiter(&slopes, &big),
            Err(GridError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn report_merge_combines_counts() {
        let a = SweepReport {
            cells: 3,
            limited: 1,
            min_factor: 0.7,
        };
        let b = SweepReport {
            cells: 2,
            limited: 2,
            min_factor: 0.4,
        };
        assert_eq!(
            a.merge(b),
            SweepReport {
                cells: 5,
                limited: 3,
                min_factor: 0.4
            }
        );
        assert_eq!(SweepReport::default().merge(a), a);
    }
}
