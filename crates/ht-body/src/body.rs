//! Ordered occupied-cell history.
//!
//! # Layout
//!
//! Cells live in a `VecDeque` with the head at the front.  A side index maps
//! each occupied cell to the *sequence number* it was stamped with when it
//! became the head.  Sequence numbers only grow, so a cell's distance from
//! the head is `head_seq - seq`, and both lookups are O(1) without scanning.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use ht_core::Cell;

/// The agent's occupied cells, most recent first.
///
/// Index 0 is the head (the agent's current cell) and the last index is the
/// tail.  All cells are pairwise distinct as long as callers only move into
/// free cells or the current tail.
#[derive(Clone, Debug)]
pub struct Body {
    cells:    VecDeque<Cell>,
    seq:      FxHashMap<Cell, u64>,
    head_seq: u64,
}

impl Body {
    /// A length-1 body sitting on `start`.
    pub fn new(start: Cell) -> Self {
        let mut seq = FxHashMap::default();
        seq.insert(start, 0);
        Self {
            cells: VecDeque::from([start]),
            seq,
            head_seq: 0,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a body has at least its head.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    #[inline]
    pub fn tail(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// `true` once the body covers all `cell_count` cells.
    #[inline]
    pub fn is_full(&self, cell_count: usize) -> bool {
        self.cells.len() >= cell_count
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.seq.contains_key(&cell)
    }

    /// Cells from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// `positionOf(cell)`: steps back from the head (0 = head), or `None`
    /// when the cell is not occupied.
    #[inline]
    pub fn position_of(&self, cell: Cell) -> Option<usize> {
        self.seq.get(&cell).map(|&s| (self.head_seq - s) as usize)
    }

    /// Steps forward from the tail (0 = tail, `len − 1` = head).
    ///
    /// When the body slides, the cell at remaining occupancy `p` is vacated
    /// by the `p + 1`-th move from now.
    #[inline]
    pub fn remaining_occupancy(&self, cell: Cell) -> Option<usize> {
        self.position_of(cell).map(|pos| self.len() - 1 - pos)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move the head onto `cell` and keep the tail (target eaten).
    pub fn grow(&mut self, cell: Cell) {
        debug_assert!(!self.contains(cell), "grow onto occupied cell {cell}");
        self.push_head(cell);
    }

    /// Move the head onto `cell` and drop the tail.  `cell` may be the
    /// current tail, which is vacated in the same tick.
    pub fn advance(&mut self, cell: Cell) {
        if let Some(tail) = self.cells.pop_back() {
            self.seq.remove(&tail);
        }
        debug_assert!(!self.contains(cell), "advance onto occupied cell {cell}");
        self.push_head(cell);
    }

    fn push_head(&mut self, cell: Cell) {
        self.head_seq += 1;
        self.seq.insert(cell, self.head_seq);
        self.cells.push_front(cell);
    }
}
