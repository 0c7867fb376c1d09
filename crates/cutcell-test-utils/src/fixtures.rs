//! Reusable geometry and field fixtures.
//!
//! - [`regular_geometry`]: every cell regular, centroids at cell centres.
//! - [`planar_cut_geometry`]: a wall normal to x with a column of cut cells.
//! - [`random_cut_geometry`]: seeded random cuts with displaced centroids.
//! - [`random_field`]: seeded uniform random cell values.

use cutcell_core::{IntVect, Offset};
use cutcell_grid::{CellArray, CentroidArray, FlagArray, IndexBox};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Centroid shift of the cut column in [`planar_cut_geometry`].
pub const WALL_CENTROID_SHIFT: f64 = -0.25;

/// Flags and centroids over one box.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub flags: FlagArray,
    pub centroids: CentroidArray,
}

/// All cells regular.
pub fn regular_geometry(bx: IndexBox) -> Geometry {
    Geometry {
        flags: FlagArray::all_regular(bx),
        centroids: CentroidArray::new(bx),
    }
}

/// Cells with `i > wall_i` are covered; the column `i == wall_i` is cut,
/// with its centroid shifted by [`WALL_CENTROID_SHIFT`] along x.
pub fn planar_cut_geometry(bx: IndexBox, wall_i: i32) -> Geometry {
    let mut geom = regular_geometry(bx);
    let cells: Vec<IntVect> = bx.cells().collect();
    for &cell in &cells {
        if cell.i() > wall_i {
            geom.flags.cover(cell).expect("cell drawn from the fixture box");
        }
    }
    for &cell in cells.iter().filter(|c| c.i() == wall_i) {
        geom.centroids
            .set(cell, [WALL_CENTROID_SHIFT, 0.0, 0.0])
            .expect("shift within admissible range");
    }
    geom
}

/// Each forward link is cut with probability `cut_probability`; every cell
/// left single-valued gets a random centroid within `[-0.4, 0.4]` per
/// active axis.
pub fn random_cut_geometry(bx: IndexBox, seed: u64, cut_probability: f64) -> Geometry {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut geom = regular_geometry(bx);
    let dim = bx.dim();
    let cells: Vec<IntVect> = bx.cells().collect();

    for &cell in &cells {
        // forward half of the stencil so each link is visited once
        for offset in dim
            .neighbour_offsets()
            .filter(|o| o.bit() > Offset::CENTER_BIT)
        {
            let nb = cell + offset;
            if bx.contains(nb) && rng.random::<f64>() < cut_probability {
                geom.flags
                    .cut_between(cell, nb)
                    .expect("adjacent cells inside the fixture box");
            }
        }
    }

    for &cell in &cells {
        let cut = geom.flags.get(cell).is_some_and(|f| f.is_single_valued());
        if !cut {
            continue;
        }
        let mut shift = [0.0; 3];
        for s in shift.iter_mut().take(dim.ndim()) {
            *s = rng.random_range(-0.4..=0.4);
        }
        geom.centroids
            .set(cell, shift)
            .expect("shift within admissible range");
    }
    geom
}

/// `ncomp` components of uniform random values in `[lo, hi)`.
pub fn random_field(bx: IndexBox, ncomp: usize, seed: u64, lo: f64, hi: f64) -> CellArray {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    CellArray::from_fn(bx, ncomp, |_, _| rng.random_range(lo..hi))
        .expect("fixture fields have at least one component")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutcell_core::{CentroidAccess, Connectivity, SpaceDim};

    #[test]
    fn planar_cut_covers_beyond_wall() {
        let bx = IndexBox::new_2d(5, 3).unwrap();
        let g = planar_cut_geometry(bx, 2);
        let east = Offset::new(1, 0, 0).unwrap();
        assert!(g.flags.get(IntVect::new_2d(3, 1)).unwrap().is_covered());
        assert!(g.flags.get(IntVect::new_2d(2, 1)).unwrap().is_single_valued());
        assert!(!g.flags.is_connected(IntVect::new_2d(2, 1), east));
        assert!(g.flags.is_connected(IntVect::new_2d(1, 1), east));
        assert_eq!(g.centroids.centroid(IntVect::new_2d(2, 0), 0), WALL_CENTROID_SHIFT);
        assert!(g.flags.check_symmetry().is_ok());
    }

    #[test]
    fn random_geometry_is_seeded_and_symmetric() {
        let bx = IndexBox::new_3d(4, 4, 3).unwrap();
        let a = random_cut_geometry(bx, 7, 0.2);
        let b = random_cut_geometry(bx, 7, 0.2);
        assert_eq!(a.flags, b.flags);
        assert_eq!(a.centroids, b.centroids);
        assert!(a.flags.check_symmetry().is_ok());
        assert!(a.centroids.displaced_count() > 0);
    }

    #[test]
    fn random_field_in_range() {
        let bx = IndexBox::new_2d(8, 8).unwrap();
        let f = random_field(bx, 2, 42, -1.0, 3.0);
        assert_eq!(f, random_field(bx, 2, 42, -1.0, 3.0));
        assert!(f.as_slice().iter().all(|v| (-1.0..3.0).contains(v)));
        assert_eq!(f.index_box().dim(), SpaceDim::Two);
    }
}
