//! End-to-end limiter scenarios on grid-backed data.
//!
//! Each test builds flags, centroids and a field with `cutcell-grid`
//! containers and checks the factor against a hand-computed value.

use cutcell_core::{IntVect, SpaceDim};
use cutcell_grid::{CellArray, CentroidArray, FlagArray, IndexBox};
use cutcell_limiter::{
    centroid_limiter, limit_slopes, neighborhood_bounds, CentroidLimiter, LimiterInputs,
};
use cutcell_test_utils::fixtures::{planar_cut_geometry, regular_geometry, WALL_CENTROID_SHIFT};

// ── Helpers ─────────────────────────────────────────────────────

/// 3x3 box whose centre reaches only its four face neighbours.
fn cross_flags() -> FlagArray {
    let bx = IndexBox::new_2d(3, 3).unwrap();
    let mut flags = FlagArray::all_regular(bx);
    let centre = IntVect::new_2d(1, 1);
    for diag in [(0, 0), (2, 0), (0, 2), (2, 2)] {
        flags
            .cut_between(centre, IntVect::new_2d(diag.0, diag.1))
            .unwrap();
    }
    flags
}

/// Linear field `x` sampled at true centroids of the planar-cut geometry.
fn wall_field(bx: IndexBox, wall_i: i32) -> CellArray {
    CellArray::from_fn(bx, 1, |c, _| {
        if c.i() < wall_i {
            c.i() as f64
        } else if c.i() == wall_i {
            c.i() as f64 + WALL_CENTROID_SHIFT
        } else {
            100.0
        }
    })
    .unwrap()
}

// ── Cross stencil ───────────────────────────────────────────────

#[test]
fn cross_stencil_limits_to_five_sixths() {
    let flags = cross_flags();
    let bx = flags.index_box();
    let field = CellArray::from_fn(bx, 1, |c, _| match (c.i(), c.j()) {
        (0, 1) => 0.5,
        (2, 1) => 1.5,
        (1, _) => 1.0,
        _ => 99.0,
    })
    .unwrap();
    let centroids = CentroidArray::new(bx);
    let centre = IntVect::new_2d(1, 1);

    let bounds = neighborhood_bounds(centre, 0, SpaceDim::Two, &field, &flags);
    assert_eq!(bounds.q_min, 0.5);
    assert_eq!(bounds.q_max, 1.5);
    assert_eq!(bounds.connected, 4);
    assert_eq!(bounds.cuts, [2, 2, 0]);

    let alpha = centroid_limiter(
        centre,
        0,
        SpaceDim::Two,
        &field,
        &flags,
        &[0.6, 0.6],
        &centroids,
    );
    assert_eq!(alpha.len(), 2);
    assert!((alpha[0] - 5.0 / 6.0).abs() < 1e-12, "got {}", alpha[0]);
    assert_eq!(alpha[0], alpha[1]);
}

// ── Fully regular neighbourhood ─────────────────────────────────

#[test]
fn flat_regular_neighbourhood() {
    let bx = IndexBox::new_3d(3, 3, 3).unwrap();
    let geom = regular_geometry(bx);
    let field = CellArray::filled(bx, 1, 2.0).unwrap();
    let centre = IntVect::new(1, 1, 1);
    let run = |slopes: &[f64]| {
        centroid_limiter(
            centre,
            0,
            SpaceDim::Three,
            &field,
            &geom.flags,
            slopes,
            &geom.centroids,
        )
    };

    assert_eq!(
        neighborhood_bounds(centre, 0, SpaceDim::Three, &field, &geom.flags).connected,
        26
    );
    assert_eq!(run(&[0.0, 0.0, 0.0]).as_slice(), &[1.0, 1.0, 1.0]);
    // below the absolute slack
    assert_eq!(run(&[1e-14, 0.0, 0.0]).as_slice(), &[1.0, 1.0, 1.0]);
    // any real slope violates the collapsed bounds
    assert_eq!(run(&[0.3, 0.0, 0.0]).as_slice(), &[0.0, 0.0, 0.0]);
    assert_eq!(run(&[0.0, -1e-3, 2.0]).as_slice(), &[0.0, 0.0, 0.0]);
}

// ── Planar wall ─────────────────────────────────────────────────

#[test]
fn exact_reconstruction_next_to_wall_is_unlimited() {
    let bx = IndexBox::new_2d(5, 3).unwrap();
    let geom = planar_cut_geometry(bx, 2);
    let field = wall_field(bx, 2);
    let cut = IntVect::new_2d(2, 1);

    let alpha = centroid_limiter(
        cut,
        0,
        SpaceDim::Two,
        &field,
        &geom.flags,
        &[1.0, 0.0],
        &geom.centroids,
    );
    assert_eq!(alpha.as_slice(), &[1.0, 1.0]);

    let bounds = neighborhood_bounds(cut, 0, SpaceDim::Two, &field, &geom.flags);
    assert_eq!(bounds.connected, 5);
    assert_eq!(bounds.cuts, [1, 2, 0]);
    assert_eq!(bounds.q_max, 1.75);
}

#[test]
fn nominal_centres_over_limit_cut_cell() {
    // Ignoring the centroid shift puts the west neighbour a full cell away,
    // predicting 0.75 against q_min = 1: (1 - 1.75) / (0.75 - 1.75).
    let bx = IndexBox::new_2d(5, 3).unwrap();
    let geom = planar_cut_geometry(bx, 2);
    let field = wall_field(bx, 2);
    let nominal = CentroidArray::new(bx);

    let alpha = centroid_limiter(
        IntVect::new_2d(2, 1),
        0,
        SpaceDim::Two,
        &field,
        &geom.flags,
        &[1.0, 0.0],
        &nominal,
    );
    assert_eq!(alpha[0], 0.75);
}

#[test]
fn sweep_over_wall_geometry() {
    let bx = IndexBox::new_2d(5, 3).unwrap();
    let geom = planar_cut_geometry(bx, 2);
    let field = wall_field(bx, 2);
    let slopes = CellArray::from_fn(bx, 2, |_, n| if n == 0 { 1.0 } else { 0.0 }).unwrap();
    let limiter = CentroidLimiter::new(SpaceDim::Two);

    let (factors, report) = limit_slopes(
        &limiter,
        bx,
        1,
        &field,
        &geom.flags,
        &geom.centroids,
        &slopes,
    )
    .unwrap();
    assert_eq!(report.cells, 15);
    assert_eq!(report.limited, 0);
    assert!(factors.as_slice().iter().all(|&a| a == 1.0));

    let nominal = CentroidArray::new(bx);
    let (_, report) =
        limit_slopes(&limiter, bx, 1, &field, &geom.flags, &nominal, &slopes).unwrap();
    // the three cut cells, plus their regular west neighbours which now
    // predict 2 against q_max = 1.75
    assert_eq!(report.limited, 6);
    assert_eq!(report.min_factor, 0.75);
}

#[test]
fn limit_with_bounds_matches_free_function() {
    let bx = IndexBox::new_2d(5, 3).unwrap();
    let geom = planar_cut_geometry(bx, 2);
    let field = wall_field(bx, 2);
    let limiter = CentroidLimiter::new(SpaceDim::Two);
    let inputs = LimiterInputs::new(&field, &geom.flags, &geom.centroids);

    for cell in bx.cells() {
        let slopes = [0.8 + 0.1 * cell.j() as f64, -0.4];
        let outcome = limiter.limit_with_bounds(cell, 0, &inputs, &slopes);
        let direct = centroid_limiter(
            cell,
            0,
            SpaceDim::Two,
            &field,
            &geom.flags,
            &slopes,
            &geom.centroids,
        );
        assert_eq!(outcome.factors, direct, "cell {cell}");
        assert_eq!(
            outcome.bounds,
            neighborhood_bounds(cell, 0, SpaceDim::Two, &field, &geom.flags)
        );
    }
}
