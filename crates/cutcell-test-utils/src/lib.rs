//! Test utilities and mock accessors for cutcell development.
//!
//! Provides sparse mock implementations of the accessor traits
//! ([`FieldAccess`], [`Connectivity`], [`CentroidAccess`]) for hand-built
//! stencils, and [`fixtures`] for box-shaped geometries and fields.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::{HashMap, HashSet};

use cutcell_core::{CentroidAccess, Connectivity, FieldAccess, IntVect, Offset, SpaceDim};

/// Mock implementation of [`FieldAccess`].
///
/// Every `(cell, comp)` reads a default value unless overridden with
/// [`set`](MockField::set). Unbounded, so any stencil can be addressed.
#[derive(Clone, Debug)]
pub struct MockField {
    default: f64,
    values: HashMap<(IntVect, usize), f64>,
}

impl MockField {
    /// A field reading `value` everywhere.
    pub fn uniform(value: f64) -> Self {
        Self {
            default: value,
            values: HashMap::new(),
        }
    }

    /// Override one entry.
    pub fn set(&mut self, cell: IntVect, comp: usize, value: f64) {
        self.values.insert((cell, comp), value);
    }
}

impl Default for MockField {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

impl FieldAccess for MockField {
    fn value(&self, cell: IntVect, comp: usize) -> f64 {
        self.values
            .get(&(cell, comp))
            .copied()
            .unwrap_or(self.default)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LinkPolicy {
    All,
    Faces(SpaceDim),
    None,
}

/// Mock implementation of [`Connectivity`].
///
/// A base policy (everything, face neighbours only, or nothing) with
/// per-link overrides. Overrides are one-sided: blocking `(cell, offset)`
/// does not touch `(cell + offset, -offset)`. The zero offset always
/// reports connected.
#[derive(Clone, Debug)]
pub struct MockConnectivity {
    policy: LinkPolicy,
    blocked: HashSet<(IntVect, Offset)>,
    allowed: HashSet<(IntVect, Offset)>,
}

impl MockConnectivity {
    fn with_policy(policy: LinkPolicy) -> Self {
        Self {
            policy,
            blocked: HashSet::new(),
            allowed: HashSet::new(),
        }
    }

    /// Every cell reaches every neighbour.
    pub fn fully_connected() -> Self {
        Self::with_policy(LinkPolicy::All)
    }

    /// Every cell reaches only its axis-aligned face neighbours in `dim`.
    pub fn faces_only(dim: SpaceDim) -> Self {
        Self::with_policy(LinkPolicy::Faces(dim))
    }

    /// No cell reaches any neighbour.
    pub fn isolated() -> Self {
        Self::with_policy(LinkPolicy::None)
    }

    /// Disconnect `cell` from the neighbour at `offset`.
    pub fn block(&mut self, cell: IntVect, offset: Offset) {
        self.allowed.remove(&(cell, offset));
        self.blocked.insert((cell, offset));
    }

    /// Connect `cell` to the neighbour at `offset`.
    pub fn allow(&mut self, cell: IntVect, offset: Offset) {
        self.blocked.remove(&(cell, offset));
        self.allowed.insert((cell, offset));
    }

    /// Disconnect both directions of the link between `cell` and
    /// `cell + offset`.
    pub fn block_both(&mut self, cell: IntVect, offset: Offset) {
        self.block(cell, offset);
        self.block(cell + offset, offset.reversed());
    }
}

impl Connectivity for MockConnectivity {
    fn is_connected(&self, cell: IntVect, offset: Offset) -> bool {
        if offset.is_zero() {
            return true;
        }
        if self.blocked.contains(&(cell, offset)) {
            return false;
        }
        if self.allowed.contains(&(cell, offset)) {
            return true;
        }
        match self.policy {
            LinkPolicy::All => true,
            LinkPolicy::Faces(dim) => offset
                .aligned_axis()
                .is_some_and(|axis| axis < dim.ndim()),
            LinkPolicy::None => false,
        }
    }
}

/// Mock implementation of [`CentroidAccess`].
///
/// Centroids default to the cell centre (zero offset).
#[derive(Clone, Debug, Default)]
pub struct MockCentroids {
    offsets: HashMap<IntVect, [f64; 3]>,
}

impl MockCentroids {
    /// Every centroid at its cell centre.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Set the centroid offset of `cell`. Not range-checked.
    pub fn set(&mut self, cell: IntVect, offset: [f64; 3]) {
        self.offsets.insert(cell, offset);
    }
}

impl CentroidAccess for MockCentroids {
    fn centroid(&self, cell: IntVect, axis: usize) -> f64 {
        self.offsets.get(&cell).map_or(0.0, |c| c[axis])
    }
}
