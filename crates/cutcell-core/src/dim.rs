//! Dimensionality and neighbour stencil enumeration.

use crate::error::CoreError;
use crate::id::Offset;
use smallvec::SmallVec;
use std::fmt;

/// Per-axis real tuple sized to the active dimensionality.
///
/// Used for slope vectors and limiter factors. The inline capacity of 3
/// covers both supported dimensionalities without heap allocation.
pub type AxisTuple = SmallVec<[f64; 3]>;

/// Spatial dimensionality of a structured grid.
///
/// Selects the extent of the neighbour stencil: a 3x3 block (third axis
/// collapsed to a single layer) or a full 3x3x3 block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpaceDim {
    /// Two spatial axes; `k` is always 0.
    Two,
    /// Three spatial axes.
    Three,
}

impl SpaceDim {
    /// Number of active spatial axes.
    pub fn ndim(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Number of non-zero neighbour offsets in the stencil (8 or 26).
    pub fn neighbour_count(self) -> usize {
        match self {
            Self::Two => 8,
            Self::Three => 26,
        }
    }

    /// Range of the `k` offset for this dimensionality.
    fn k_range(self) -> std::ops::RangeInclusive<i32> {
        match self {
            Self::Two => 0..=0,
            Self::Three => -1..=1,
        }
    }

    /// Iterate over the non-zero offsets of the stencil.
    ///
    /// Order is deterministic: `k` outermost, then `j`, then `i`, each
    /// running from -1 to 1.
    pub fn neighbour_offsets(self) -> impl Iterator<Item = Offset> {
        self.k_range().flat_map(|dk| {
            (-1..=1).flat_map(move |dj| {
                (-1..=1).filter_map(move |di| {
                    Offset::new(di, dj, dk).filter(|o| !o.is_zero())
                })
            })
        })
    }

    /// An [`AxisTuple`] of length [`ndim`](Self::ndim) filled with `value`.
    pub fn splat(self, value: f64) -> AxisTuple {
        SmallVec::from_elem(value, self.ndim())
    }
}

impl fmt::Display for SpaceDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.ndim())
    }
}

impl TryFrom<usize> for SpaceDim {
    type Error = CoreError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(CoreError::UnsupportedDimension { ndim: other }),
        }
    }
}
