//! Serpentine tour construction.
//!
//! # Sweep rule
//!
//! Column `x = 0` is the *spine*: the walk climbs it from `(0, 0)` to
//! `(0, N−1)`, then turns East along the top row to `(N−1, N−1)` and drops
//! South.  Interior rows (`0 < y < N−1`) are swept over columns `1..N`
//! alternating by parity: odd rows run East to the right wall, even rows run
//! West to `x = 1`, each dropping South at its end.  The bottom row runs West
//! all the way back onto the spine at `(0, 0)`, closing the cycle.
//!
//! ```text
//!  N = 4, tour order of each cell:
//!
//!  y=3   3  4  5  6
//!  y=2   2  9  8  7
//!  y=1   1 10 11 12
//!  y=0   0 15 14 13
//!       x=0 1  2  3
//! ```
//!
//! The top interior row is `N−2`, which is even when `N` is even, so it ends at
//! `x = 1` and the bottom interior row (`y = 1`, odd) ends at `x = N−1` above
//! the bottom-row return.  Odd `N` breaks that parity, hence the precondition.

use ht_core::{Cell, Direction, DirectionSet};

use crate::{Tour, TourCell, TourError, TourResult};

/// The tour edge leaving `cell` on a `size × size` grid.
///
/// Defined for every on-grid cell when `size` is even and at least 4.
pub fn serpentine_direction(cell: Cell, size: u32) -> Direction {
    let last = size as i32 - 1;
    let Cell { x, y } = cell;

    if x == 0 {
        return if y == last { Direction::East } else { Direction::North };
    }
    if y == last {
        return if x == last { Direction::South } else { Direction::East };
    }
    if y == 0 {
        return Direction::West;
    }
    if y % 2 == 1 {
        if x == last { Direction::South } else { Direction::East }
    } else if x == 1 {
        Direction::South
    } else {
        Direction::West
    }
}

/// Builds a [`Tour`] in one pass over the serpentine cycle.
///
/// # Example
///
/// ```rust,ignore
/// let tour = TourBuilder::new(6).build()?;
/// assert_eq!(tour.order(Cell::new(0, 0)), 0);
/// ```
pub struct TourBuilder {
    size: u32,
}

impl TourBuilder {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Walk the sweep from `(0, 0)`, stamping each cell with its visitation
    /// order, tour edge, and shortcut directions.
    pub fn build(self) -> TourResult<Tour> {
        let size = self.size;
        if size < 4 || size % 2 != 0 {
            return Err(TourError::UnsupportedGridSize(size));
        }
        let cell_count = size as usize * size as usize;

        let mut slots: Vec<Option<TourCell>> = vec![None; cell_count];
        let mut by_order: Vec<Cell> = Vec::with_capacity(cell_count);

        let mut cell = Cell::ORIGIN;
        for order in 0..cell_count as u32 {
            let slot = &mut slots[cell.index(size)];
            if slot.is_some() {
                return Err(TourError::BrokenCycle { cell });
            }

            let next = serpentine_direction(cell, size);
            let successor = cell.step(next);
            if !successor.within(size) {
                return Err(TourError::BrokenCycle { cell });
            }

            *slot = Some(TourCell {
                order,
                next,
                shortcuts: shortcut_directions(cell, next, size),
            });
            by_order.push(cell);
            cell = successor;
        }

        if cell != Cell::ORIGIN {
            return Err(TourError::BrokenCycle { cell });
        }
        let cells = slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or(TourError::BrokenCycle { cell })?;

        tracing::debug!(size, cell_count, "built serpentine tour");
        Ok(Tour::from_parts(size, cells, by_order))
    }
}

/// Every on-grid direction out of `cell` other than the tour edge.
fn shortcut_directions(cell: Cell, next: Direction, size: u32) -> DirectionSet {
    let successor = cell.step(next);
    Direction::ALL
        .into_iter()
        .filter(|&d| d != next)
        .filter(|&d| {
            let dest = cell.step(d);
            dest.within(size) && dest != successor
        })
        .collect()
}
