//! Per-cell type and neighbour connectivity flags.

use crate::error::GridError;
use crate::index_box::IndexBox;
use cutcell_core::{Connectivity, IntVect, Offset, SpaceDim};
use std::fmt;

const TYPE_MASK: u32 = 0b11;
const TYPE_REGULAR: u32 = 0;
const TYPE_SINGLE_VALUED: u32 = 1;
const TYPE_COVERED: u32 = 3;
const NGBR_SHIFT: u32 = 5;
const NGBR_MASK: u32 = ((1u32 << 27) - 1) << NGBR_SHIFT;

/// Connectivity bits for every offset of the stencil plus the cell itself.
fn stencil_mask(dim: SpaceDim) -> u32 {
    dim.neighbour_offsets()
        .fold(ngbr_bit(Offset::ZERO), |acc, o| acc | ngbr_bit(o))
}

fn ngbr_bit(offset: Offset) -> u32 {
    1u32 << (NGBR_SHIFT + offset.bit() as u32)
}

/// Type and connectivity of one cell, packed into a 32-bit word.
///
/// The low two bits hold the cell type (regular, single-valued cut cell,
/// covered). Bits 5..32 hold one connectivity bit per [`Offset::bit`]
/// position in the surrounding 3x3x3 block.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellFlag(u32);

impl CellFlag {
    /// A regular cell connected to every stencil neighbour.
    pub fn regular(dim: SpaceDim) -> Self {
        Self(TYPE_REGULAR | stencil_mask(dim))
    }

    /// A cut cell, initially connected to every stencil neighbour.
    pub fn single_valued(dim: SpaceDim) -> Self {
        Self(TYPE_SINGLE_VALUED | stencil_mask(dim))
    }

    /// A cell entirely outside the fluid domain; reaches no neighbour.
    pub fn covered() -> Self {
        Self(TYPE_COVERED)
    }

    /// Raw packed word.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// `true` for a full, uncut cell.
    pub fn is_regular(&self) -> bool {
        self.0 & TYPE_MASK == TYPE_REGULAR
    }

    /// `true` for a cut cell.
    pub fn is_single_valued(&self) -> bool {
        self.0 & TYPE_MASK == TYPE_SINGLE_VALUED
    }

    /// `true` for a covered cell.
    pub fn is_covered(&self) -> bool {
        self.0 & TYPE_MASK == TYPE_COVERED
    }

    /// Whether the neighbour at `offset` is reachable.
    ///
    /// The zero offset always reports connected.
    pub fn is_connected(&self, offset: Offset) -> bool {
        offset.is_zero() || self.0 & ngbr_bit(offset) != 0
    }

    /// Mark the neighbour at `offset` reachable. No-op for the zero offset.
    pub fn set_connected(&mut self, offset: Offset) {
        if !offset.is_zero() {
            self.0 |= ngbr_bit(offset);
        }
    }

    /// Mark the neighbour at `offset` unreachable. No-op for the zero offset.
    pub fn set_disconnected(&mut self, offset: Offset) {
        if !offset.is_zero() {
            self.0 &= !ngbr_bit(offset);
        }
    }

    /// Clear every neighbour connection.
    pub fn set_disconnected_all(&mut self) {
        self.0 &= !NGBR_MASK;
    }

    /// Change the cell type to single-valued, keeping connectivity.
    pub fn set_single_valued(&mut self) {
        self.0 = (self.0 & !TYPE_MASK) | TYPE_SINGLE_VALUED;
    }

    /// Change the cell type to covered and drop every connection.
    pub fn set_covered(&mut self) {
        self.0 = TYPE_COVERED;
    }

    /// Number of connected non-zero offsets within the `dim` stencil.
    pub fn num_connected(&self, dim: SpaceDim) -> usize {
        dim.neighbour_offsets()
            .filter(|o| self.is_connected(*o))
            .count()
    }
}

impl fmt::Debug for CellFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.0 & TYPE_MASK {
            TYPE_REGULAR => "regular",
            TYPE_SINGLE_VALUED => "single_valued",
            TYPE_COVERED => "covered",
            _ => "unknown",
        };
        write!(
            f,
            "CellFlag({kind}, ngbrs={:#029b})",
            (self.0 & NGBR_MASK) >> NGBR_SHIFT
        )
    }
}

/// Per-cell [`CellFlag`] storage over an [`IndexBox`].
///
/// Cells outside the box are never connected. Mutators keep connectivity
/// symmetric: if `a` reaches `b` then `b` reaches `a`.
#[derive(Clone, Debug, PartialEq)]
pub struct FlagArray {
    bx: IndexBox,
    flags: Vec<CellFlag>,
}

impl FlagArray {
    /// Every cell regular; connections leaving the box are removed.
    pub fn all_regular(bx: IndexBox) -> Self {
        let dim = bx.dim();
        let flags = bx
            .cells()
            .map(|cell| {
                let mut flag = CellFlag::regular(dim);
                for o in dim.neighbour_offsets() {
                    if !bx.contains(cell + o) {
                        flag.set_disconnected(o);
                    }
                }
                flag
            })
            .collect();
        Self { bx, flags }
    }

    /// The box this array covers.
    pub fn index_box(&self) -> IndexBox {
        self.bx
    }

    /// Flag at `cell`, or `None` outside the box.
    pub fn get(&self, cell: IntVect) -> Option<CellFlag> {
        self.bx.linear_index(cell).map(|n| self.flags[n])
    }

    fn index_of(&self, cell: IntVect) -> Result<usize, GridError> {
        self.bx
            .linear_index(cell)
            .ok_or_else(|| GridError::CellOutOfBounds {
                cell,
                bounds: self.bx.describe(),
            })
    }

    /// Overwrite the flag at `cell`.
    ///
    /// This does not touch neighbours; use [`check_symmetry`](Self::check_symmetry)
    /// after bulk edits made this way.
    pub fn set(&mut self, cell: IntVect, flag: CellFlag) -> Result<(), GridError> {
        let n = self.index_of(cell)?;
        self.flags[n] = flag;
        Ok(())
    }

    /// Block the connection between two adjacent cells, on both sides.
    ///
    /// Both cells become single-valued unless already covered.
    pub fn cut_between(&mut self, a: IntVect, b: IntVect) -> Result<(), GridError> {
        let offset = Offset::new(b.i() - a.i(), b.j() - a.j(), b.k() - a.k())
            .filter(|o| !o.is_zero())
            .ok_or(GridError::NotAdjacent { a, b })?;
        let na = self.index_of(a)?;
        let nb = self.index_of(b)?;
        for (n, o) in [(na, offset), (nb, offset.reversed())] {
            let flag = &mut self.flags[n];
            flag.set_disconnected(o);
            if !flag.is_covered() {
                flag.set_single_valued();
            }
        }
        Ok(())
    }

    /// Mark `cell` covered and disconnect every neighbour from it.
    pub fn cover(&mut self, cell: IntVect) -> Result<(), GridError> {
        let n = self.index_of(cell)?;
        self.flags[n].set_covered();
        for o in self.bx.dim().neighbour_offsets() {
            if let Some(m) = self.bx.linear_index(cell + o) {
                let flag = &mut self.flags[m];
                flag.set_disconnected(o.reversed());
                if !flag.is_covered() {
                    flag.set_single_valued();
                }
            }
        }
        Ok(())
    }

    /// Verify that every connection is reciprocated and stays in the box.
    pub fn check_symmetry(&self) -> Result<(), GridError> {
        let dim = self.bx.dim();
        for cell in self.bx.cells() {
            for o in dim.neighbour_offsets() {
                if !self.is_connected(cell, o) {
                    continue;
                }
                let back = self
                    .get(cell + o)
                    .is_some_and(|nb| nb.is_connected(o.reversed()));
                if !back {
                    return Err(GridError::AsymmetricConnectivity { cell, offset: o });
                }
            }
        }
        Ok(())
    }

    /// Iterate `(cell, flag)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (IntVect, CellFlag)> + '_ {
        self.bx.cells().zip(self.flags.iter().copied())
    }
}

impl Connectivity for FlagArray {
    fn is_connected(&self, cell: IntVect, offset: Offset) -> bool {
        self.bx.contains(cell + offset)
            && self
                .get(cell)
                .is_some_and(|flag| flag.is_connected(offset))
    }
}
