//! Cell index and neighbour offset types.

use crate::error::CoreError;
use std::fmt;
use std::ops::Add;

/// Index of a cell on a structured grid: `(i, j, k)`.
///
/// Two-dimensional configurations keep `k == 0` for every cell, so a
/// single fixed-size triple covers both dimensionalities without heap
/// allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IntVect(pub [i32; 3]);

impl IntVect {
    /// The origin `(0, 0, 0)`.
    pub const ZERO: Self = Self([0, 0, 0]);

    /// Construct from explicit components.
    pub const fn new(i: i32, j: i32, k: i32) -> Self {
        Self([i, j, k])
    }

    /// Construct a two-dimensional index (`k = 0`).
    pub const fn new_2d(i: i32, j: i32) -> Self {
        Self([i, j, 0])
    }

    /// Component along `axis` (0 = i, 1 = j, 2 = k).
    ///
    /// # Panics
    ///
    /// Panics if `axis >= 3`.
    pub fn axis(&self, axis: usize) -> i32 {
        self.0[axis]
    }

    /// The `i` component.
    pub fn i(&self) -> i32 {
        self.0[0]
    }

    /// The `j` component.
    pub fn j(&self) -> i32 {
        self.0[1]
    }

    /// The `k` component.
    pub fn k(&self) -> i32 {
        self.0[2]
    }

    /// Componentwise `<=`.
    pub fn all_le(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }
}

impl fmt::Display for IntVect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

impl From<[i32; 3]> for IntVect {
    fn from(v: [i32; 3]) -> Self {
        Self(v)
    }
}

impl Add<Offset> for IntVect {
    type Output = IntVect;

    fn add(self, rhs: Offset) -> IntVect {
        IntVect([
            self.0[0] + rhs.di as i32,
            self.0[1] + rhs.dj as i32,
            self.0[2] + rhs.dk as i32,
        ])
    }
}

/// Relative displacement to a cell in the surrounding 3x3(x3) block.
///
/// Every component lies in `{-1, 0, 1}`; construction through
/// [`Offset::new`] enforces this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    di: i8,
    dj: i8,
    dk: i8,
}

impl Offset {
    /// The zero displacement (the cell itself).
    pub const ZERO: Self = Self {
        di: 0,
        dj: 0,
        dk: 0,
    };

    /// Bit index of the zero offset in a 27-entry connectivity mask.
    pub const CENTER_BIT: usize = 13;

    /// Create an offset. Returns `None` if any component is outside `{-1, 0, 1}`.
    pub fn new(di: i32, dj: i32, dk: i32) -> Option<Self> {
        let unit = |v: i32| (-1..=1).contains(&v);
        if unit(di) && unit(dj) && unit(dk) {
            Some(Self {
                di: di as i8,
                dj: dj as i8,
                dk: dk as i8,
            })
        } else {
            None
        }
    }

    /// Rebuild an offset from its [`bit`](Self::bit) index.
    ///
    /// Returns `None` for `bit >= 27`.
    pub fn from_bit(bit: usize) -> Option<Self> {
        if bit >= 27 {
            return None;
        }
        let b = bit as i32;
        Self::new(b % 3 - 1, (b / 3) % 3 - 1, b / 9 - 1)
    }

    /// Displacement along `axis` (0 = i, 1 = j, 2 = k).
    ///
    /// # Panics
    ///
    /// Panics if `axis >= 3`.
    pub fn axis(&self, axis: usize) -> i32 {
        match axis {
            0 => self.di as i32,
            1 => self.dj as i32,
            2 => self.dk as i32,
            _ => panic!("axis {axis} out of range for a 3-component offset"),
        }
    }

    /// Components as an `[i32; 3]` array.
    pub fn to_array(&self) -> [i32; 3] {
        [self.di as i32, self.dj as i32, self.dk as i32]
    }

    /// `true` for the zero displacement.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The opposite displacement (`-self`).
    pub fn reversed(&self) -> Self {
        Self {
            di: -self.di,
            dj: -self.dj,
            dk: -self.dk,
        }
    }

    /// Unique index in `0..27`: `(di+1) + 3(dj+1) + 9(dk+1)`.
    pub fn bit(&self) -> usize {
        (self.di + 1) as usize + 3 * (self.dj + 1) as usize + 9 * (self.dk + 1) as usize
    }

    /// If the offset is non-zero along exactly one axis, that axis.
    pub fn aligned_axis(&self) -> Option<usize> {
        let arr = self.to_array();
        let mut found = None;
        for (axis, v) in arr.iter().enumerate() {
            if *v != 0 {
                if found.is_some() {
                    return None;
                }
                found = Some(axis);
            }
        }
        found
    }
}

impl TryFrom<[i32; 3]> for Offset {
    type Error = CoreError;

    fn try_from(components: [i32; 3]) -> Result<Self, Self::Error> {
        Self::new(components[0], components[1], components[2])
            .ok_or(CoreError::OffsetOutOfRange { components })
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:+}, {:+}, {:+}]", self.di, self.dj, self.dk)
    }
}
