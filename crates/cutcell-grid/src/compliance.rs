//! Connectivity compliance test helpers.
//!
//! These functions verify that a [`FlagArray`] satisfies the invariants
//! the limiter relies on. Reused across the flag test module.

use crate::flag::FlagArray;
use cutcell_core::{Connectivity, Offset, SpaceDim};

/// Assert that `a` reaching `b` implies `b` reaching `a`.
pub fn assert_connectivity_symmetric(flags: &FlagArray) {
    if let Err(e) = flags.check_symmetry() {
        panic!("connectivity symmetry violated: {e}");
    }
}

/// Assert that no connection leaves the array's box.
pub fn assert_connections_stay_in_box(flags: &FlagArray) {
    let bx = flags.index_box();
    for cell in bx.cells() {
        for o in bx.dim().neighbour_offsets() {
            if flags.is_connected(cell, o) {
                assert!(
                    bx.contains(cell + o),
                    "{cell} connected along {o} to a cell outside the box"
                );
            }
        }
    }
}

/// Assert that covered cells reach no neighbour.
pub fn assert_covered_isolated(flags: &FlagArray) {
    let dim = flags.index_box().dim();
    for (cell, flag) in flags.iter() {
        if flag.is_covered() {
            assert_eq!(
                flag.num_connected(dim),
                0,
                "covered cell {cell} still has connections"
            );
        }
    }
}

/// Assert that 2D arrays never report out-of-plane connections.
pub fn assert_planar_in_2d(flags: &FlagArray) {
    let bx = flags.index_box();
    if bx.dim() != SpaceDim::Two {
        return;
    }
    for cell in bx.cells() {
        for o in SpaceDim::Three.neighbour_offsets().filter(|o| o.axis(2) != 0) {
            assert!(
                !flags.is_connected(cell, o),
                "2D cell {cell} connected out of plane along {o}"
            );
        }
    }
}

/// Assert that every cell in the box reaches itself.
pub fn assert_self_connected(flags: &FlagArray) {
    for cell in flags.index_box().cells() {
        assert!(flags.is_connected(cell, Offset::ZERO));
    }
}

/// Run the full compliance suite.
pub fn run_full_compliance(flags: &FlagArray) {
    assert_connectivity_symmetric(flags);
    assert_connections_stay_in_box(flags);
    assert_covered_isolated(flags);
    assert_planar_in_2d(flags);
    assert_self_connected(flags);
}
