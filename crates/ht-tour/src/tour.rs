//! The immutable tour map.

use std::ops::Index;

use ht_core::{Cell, Direction, DirectionSet};

use crate::cyclic_distance;

// ── TourCell ──────────────────────────────────────────────────────────────────

/// Per-cell tour annotation.  Never mutated after construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TourCell {
    /// Unique rank in `[0, N²)` along the cycle.
    pub order: u32,
    /// The default tour edge.
    pub next: Direction,
    /// Alternate on-grid edges considered for shortcutting, in construction
    /// order.  Never contains `next`.
    pub shortcuts: DirectionSet,
}

// ── Tour ──────────────────────────────────────────────────────────────────────

/// A Hamiltonian cycle over every cell of an N×N grid.
///
/// Following [`TourCell::next`] from any cell visits all `N²` cells exactly
/// once and returns to the start.  Construct with
/// [`TourBuilder`][crate::TourBuilder] or [`Tour::from_snapshot`].
///
/// Lookups by [`Cell`] panic when the cell is off-grid; use
/// [`get`][Self::get] for a checked lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    size: u32,
    /// Row-major, indexed by `Cell::index(size)`.
    cells: Vec<TourCell>,
    /// `by_order[k]` is the cell whose order is `k`.
    by_order: Vec<Cell>,
}

impl Tour {
    /// `buildTour(N)`.
    pub fn build(size: u32) -> crate::TourResult<Tour> {
        crate::TourBuilder::new(size).build()
    }

    pub(crate) fn from_parts(size: u32, cells: Vec<TourCell>, by_order: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), by_order.len());
        Self { size, cells, by_order }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Side length `N`.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// `N²`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.within(self.size)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, cell: Cell) -> Option<&TourCell> {
        if self.contains(cell) {
            Some(&self.cells[cell.index(self.size)])
        } else {
            None
        }
    }

    #[inline]
    pub fn order(&self, cell: Cell) -> u32 {
        self[cell].order
    }

    /// The cell reached by following the tour edge out of `cell`.
    #[inline]
    pub fn successor(&self, cell: Cell) -> Cell {
        cell.step(self[cell].next)
    }

    /// The cell with tour order `order`.
    ///
    /// # Panics
    /// Panics if `order >= N²`.
    #[inline]
    pub fn cell_at(&self, order: u32) -> Cell {
        self.by_order[order as usize]
    }

    /// Forward tour distance from `from` to `to`.
    #[inline]
    pub fn distance(&self, from: Cell, to: Cell) -> u32 {
        cyclic_distance(self.order(from), self.order(to), self.cell_count() as u32)
    }

    /// Endless iterator along the tour, starting with `start` itself.
    pub fn walk_from(&self, start: Cell) -> impl Iterator<Item = Cell> + '_ {
        std::iter::successors(Some(start), move |&c| Some(self.successor(c)))
    }

    /// All cells in tour order with their annotations.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &TourCell)> + '_ {
        self.by_order
            .iter()
            .map(move |&c| (c, &self.cells[c.index(self.size)]))
    }
}

impl Index<Cell> for Tour {
    type Output = TourCell;

    #[inline]
    fn index(&self, cell: Cell) -> &TourCell {
        assert!(self.contains(cell), "cell {cell} is outside the {0}x{0} tour", self.size);
        &self.cells[cell.index(self.size)]
    }
}

/// The order grid, north row first, one right-aligned order per cell.
impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.cell_count() - 1).to_string().len();
        let n = self.size as i32;
        for y in (0..n).rev() {
            for x in 0..n {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", self[Cell::new(x, y)].order)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
