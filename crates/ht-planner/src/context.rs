//! Read-only state passed to every navigator call.

use ht_body::Body;
use ht_core::Cell;
use ht_tour::Tour;

/// A read-only snapshot of one tick's inputs.
///
/// Built by the round driver once per tick.  All borrows live for the
/// duration of one `plan` call.
#[derive(Clone, Copy)]
pub struct PlanContext<'a> {
    /// The shared, immutable tour.
    pub tour: &'a Tour,

    /// The agent's body, head first.
    pub body: &'a Body,

    /// The cell the agent is planning from.  Normally `body.head()`.
    pub current: Cell,

    /// The cell holding the target this tick.
    pub target: Cell,
}

impl<'a> PlanContext<'a> {
    /// Context planning from the body's head.
    #[inline]
    pub fn new(tour: &'a Tour, body: &'a Body, target: Cell) -> Self {
        Self { tour, body, current: body.head(), target }
    }

    /// Context planning from an explicit `current` cell.
    #[inline]
    pub fn from_cell(tour: &'a Tour, body: &'a Body, current: Cell, target: Cell) -> Self {
        Self { tour, body, current, target }
    }

    /// Forward tour distance from `cell` to the target.
    #[inline]
    pub fn distance_to_target(&self, cell: Cell) -> u32 {
        self.tour.distance(cell, self.target)
    }
}
