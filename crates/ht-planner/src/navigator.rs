//! The `Navigator` trait and the shortcutting planner.

use ht_body::Body;
use ht_core::{Actuator, Cell, Direction};
use ht_tour::Tour;

use crate::{admits, PlanContext};

/// The outcome of one planning call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlannedStep {
    /// Where the agent will be after the move.
    pub cell: Cell,
    /// The direction issued to the actuator.
    pub direction: Direction,
    /// `true` if the move left the default tour edge.
    pub shortcut: bool,
}

/// Pluggable move selection.
///
/// Implementations must issue exactly one move through `actuator` and
/// report it in the returned [`PlannedStep`].  The round driver never moves
/// the agent itself.
///
/// # Thread safety
///
/// Navigators hold no per-round state; all inputs arrive through the
/// [`PlanContext`].  They must be `Send + Sync` so batch runners can share one
/// instance across threads.
pub trait Navigator: Send + Sync {
    fn plan(&self, ctx: &PlanContext<'_>, actuator: &mut dyn Actuator) -> PlannedStep;
}

// ── ShortcutNavigator ─────────────────────────────────────────────────────────

/// Follows the tour, leaving it only for strictly shorter, admitted
/// shortcuts.
///
/// Shortcut directions are tried in construction order and the first one that
/// qualifies wins.  Directions the host reports as blocked via
/// [`Actuator::can_move`] are skipped.
#[derive(Copy, Clone, Debug, Default)]
pub struct ShortcutNavigator;

impl ShortcutNavigator {
    /// The decision without the side effect.
    pub fn choose(&self, ctx: &PlanContext<'_>, actuator: &dyn Actuator) -> PlannedStep {
        let here = ctx.tour[ctx.current];
        let base = ctx.distance_to_target(ctx.current);

        for direction in here.shortcuts.iter() {
            let cell = ctx.current.step(direction);
            if ctx.distance_to_target(cell) < base
                && actuator.can_move(direction)
                && admits(cell, ctx.body, ctx.tour)
            {
                return PlannedStep { cell, direction, shortcut: true };
            }
        }

        PlannedStep {
            cell:      ctx.current.step(here.next),
            direction: here.next,
            shortcut:  false,
        }
    }
}

impl Navigator for ShortcutNavigator {
    fn plan(&self, ctx: &PlanContext<'_>, actuator: &mut dyn Actuator) -> PlannedStep {
        let step = self.choose(ctx, actuator);
        if step.shortcut {
            tracing::trace!(from = %ctx.current, to = %step.cell, dir = %step.direction, "shortcut");
        }
        actuator.issue_move(step.direction);
        step
    }
}

// ── TourFollower ──────────────────────────────────────────────────────────────

/// A [`Navigator`] that never leaves the tour.
///
/// Every round takes the same fixed path, which makes it a useful baseline
/// for comparing how many ticks shortcuts save.
#[derive(Copy, Clone, Debug, Default)]
pub struct TourFollower;

impl Navigator for TourFollower {
    fn plan(&self, ctx: &PlanContext<'_>, actuator: &mut dyn Actuator) -> PlannedStep {
        let direction = ctx.tour[ctx.current].next;
        actuator.issue_move(direction);
        PlannedStep { cell: ctx.current.step(direction), direction, shortcut: false }
    }
}

// ── Free-function entry point ─────────────────────────────────────────────────

/// `planStep(current, body, target, tour)`: choose the next cell with
/// [`ShortcutNavigator`], issue its move, and return the cell.
pub fn plan_step(
    current:  Cell,
    body:     &Body,
    target:   Cell,
    tour:     &Tour,
    actuator: &mut dyn Actuator,
) -> Cell {
    let ctx = PlanContext::from_cell(tour, body, current, target);
    ShortcutNavigator.plan(&ctx, actuator).cell
}
