//! Flat tour cache.
//!
//! A tour is a pure function of `N`, so caching it is only an optimization.
//! The snapshot stores one `(order, next, shortcuts)` triple per cell in
//! row-major order, with directions encoded by [`Direction::id`].
//! [`Tour::from_snapshot`] re-validates everything a hand-edited or stale
//! file could get wrong before handing out a `Tour`.

use ht_core::{Cell, Direction, DirectionSet};

use crate::{Tour, TourCell, TourError, TourResult};

/// One cached cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapshotCell {
    pub order:     u32,
    pub next:      u8,
    pub shortcuts: Vec<u8>,
}

/// A serializable copy of a [`Tour`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourSnapshot {
    pub size:  u32,
    /// Row-major, length `size²`.
    pub cells: Vec<SnapshotCell>,
}

impl Tour {
    pub fn snapshot(&self) -> TourSnapshot {
        let cells = (0..self.cell_count())
            .map(|i| {
                let tc = &self[Cell::from_index(i, self.size())];
                SnapshotCell {
                    order:     tc.order,
                    next:      tc.next.id(),
                    shortcuts: tc.shortcuts.iter().map(Direction::id).collect(),
                }
            })
            .collect();
        TourSnapshot { size: self.size(), cells }
    }

    /// Rebuild a tour from a cache, checking that it still describes a
    /// single Hamiltonian cycle.
    pub fn from_snapshot(snapshot: &TourSnapshot) -> TourResult<Tour> {
        let size = snapshot.size;
        if size < 4 || size % 2 != 0 {
            return Err(TourError::UnsupportedGridSize(size));
        }
        let cell_count = size as usize * size as usize;
        if snapshot.cells.len() != cell_count {
            return Err(TourError::CorruptSnapshot(format!(
                "expected {cell_count} cells, found {}",
                snapshot.cells.len()
            )));
        }

        let mut cells = Vec::with_capacity(cell_count);
        let mut by_order: Vec<Option<Cell>> = vec![None; cell_count];

        for (i, raw) in snapshot.cells.iter().enumerate() {
            let cell = Cell::from_index(i, size);
            let next = Direction::from_id(raw.next)?;
            if !cell.step(next).within(size) {
                return Err(TourError::CorruptSnapshot(format!(
                    "tour edge {next} leaves the grid at {cell}"
                )));
            }

            let mut shortcuts = DirectionSet::EMPTY;
            for &id in &raw.shortcuts {
                let d = Direction::from_id(id)?;
                if d == next || !cell.step(d).within(size) {
                    return Err(TourError::CorruptSnapshot(format!(
                        "invalid shortcut {d} at {cell}"
                    )));
                }
                shortcuts.insert(d);
            }

            let slot = by_order
                .get_mut(raw.order as usize)
                .ok_or_else(|| TourError::CorruptSnapshot(format!(
                    "order {} at {cell} is out of range", raw.order
                )))?;
            if slot.replace(cell).is_some() {
                return Err(TourError::CorruptSnapshot(format!(
                    "order {} is assigned twice", raw.order
                )));
            }

            cells.push(TourCell { order: raw.order, next, shortcuts });
        }

        // Every order was assigned exactly once (length matches, no duplicates).
        let by_order: Vec<Cell> = by_order.into_iter().flatten().collect();

        for (k, &cell) in by_order.iter().enumerate() {
            let expected = by_order[(k + 1) % cell_count];
            let actual = cell.step(cells[cell.index(size)].next);
            if actual != expected {
                return Err(TourError::CorruptSnapshot(format!(
                    "order {k} at {cell} leads to {actual}, expected {expected}"
                )));
            }
        }

        Ok(Tour::from_parts(size, cells, by_order))
    }
}
