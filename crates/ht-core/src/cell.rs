//! Grid coordinate type.
//!
//! `x` grows East and `y` grows North; `(0, 0)` is the south-west corner.
//! Coordinates are signed so that stepping off the grid is representable and
//! can be rejected with [`Cell::within`] instead of wrapping.

use crate::Direction;

/// A single grid square.  Identity is the coordinate pair.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`.  May lie off-grid.
    #[inline]
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }

    /// `true` if the cell lies on an `size × size` grid.
    #[inline]
    pub fn within(self, size: u32) -> bool {
        let n = size as i64;
        (0..n).contains(&(self.x as i64)) && (0..n).contains(&(self.y as i64))
    }

    /// Row-major index on an `size × size` grid.  Caller guarantees
    /// [`within`][Self::within].
    #[inline]
    pub fn index(self, size: u32) -> usize {
        self.y as usize * size as usize + self.x as usize
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn from_index(index: usize, size: u32) -> Cell {
        let n = size as usize;
        Cell { x: (index % n) as i32, y: (index / n) as i32 }
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell { x, y }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
