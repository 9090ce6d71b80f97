//! Round observer trait for progress reporting and data collection.

use ht_core::{Cell, RoundId, Tick};
use ht_planner::PlannedStep;

use crate::RoundSummary;

/// Callbacks invoked by the round loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — shortcut counter
///
/// ```rust,ignore
/// struct ShortcutCounter(u64);
///
/// impl RoundObserver for ShortcutCounter {
///     fn on_step(&mut self, _round: RoundId, _tick: Tick, step: &PlannedStep, _ate: bool) {
///         if step.shortcut {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait RoundObserver {
    /// Called once the body has been seeded, before the first move.
    fn on_round_start(&mut self, _round: RoundId, _start: Cell) {}

    /// Called after each move has been verified and applied to the body.
    ///
    /// `ate` is `true` when the move reached the target.
    fn on_step(&mut self, _round: RoundId, _tick: Tick, _step: &PlannedStep, _ate: bool) {}

    /// Called once the body covers the grid.
    fn on_round_end(&mut self, _summary: &RoundSummary) {}
}

/// A [`RoundObserver`] that does nothing.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}

/// Forwards round events to `tracing`.
///
/// Per-step events are `trace`, shortcuts and targets `debug`, round starts
/// `info`.  Round completion is already logged by the round loop.
pub struct LogObserver;

impl RoundObserver for LogObserver {
    fn on_round_start(&mut self, round: RoundId, start: Cell) {
        tracing::info!(%round, %start, "round started");
    }

    fn on_step(&mut self, round: RoundId, tick: Tick, step: &PlannedStep, ate: bool) {
        tracing::trace!(%round, %tick, cell = %step.cell, dir = %step.direction, "step");
        if step.shortcut {
            tracing::debug!(%round, %tick, cell = %step.cell, dir = %step.direction, "took shortcut");
        }
        if ate {
            tracing::debug!(%round, %tick, cell = %step.cell, "target eaten");
        }
    }
}
