//! One full traversal of the grid.

use ht_body::Body;
use ht_core::{Cell, Host, RoundId, Tick};
use ht_planner::{Navigator, PlanContext};
use ht_tour::Tour;

use crate::{RoundObserver, SimError, SimResult};

/// Outcome of a completed round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round:         RoundId,
    /// Moves issued, equal to the number of ticks the round took.
    pub steps:         u64,
    /// Moves that left the default tour edge.
    pub shortcuts:     u64,
    pub targets_eaten: u64,
    /// Final body length.  `N²` for every completed round.
    pub length:        usize,
}

/// Play one round against `host` until the body covers the grid.
///
/// The host must already be positioned for the round; this function does not
/// call [`Host::reset`].  `step_ceiling` bounds the number of ticks before the
/// round is declared [`SimError::Stalled`].
pub fn play_round<N, H, O>(
    tour:         &Tour,
    navigator:    &N,
    host:         &mut H,
    round:        RoundId,
    step_ceiling: u64,
    observer:     &mut O,
) -> SimResult<RoundSummary>
where
    N: Navigator + ?Sized,
    H: Host,
    O: RoundObserver + ?Sized,
{
    let cell_count = tour.cell_count();

    let start = host.position();
    if !tour.contains(start) {
        return Err(SimError::OffGrid(start));
    }
    let mut body = Body::new(start);
    observer.on_round_start(round, start);

    let mut summary = RoundSummary {
        round,
        steps:         0,
        shortcuts:     0,
        targets_eaten: 0,
        length:        1,
    };
    let mut tick = Tick::ZERO;
    let mut target = query_target(host, &body, tour)?;

    while !body.is_full(cell_count) {
        if tick.0 >= step_ceiling {
            tracing::warn!(%round, steps = tick.0, "round exceeded its step ceiling");
            return Err(SimError::Stalled { round, steps: tick.0 });
        }

        // ① Plan: the navigator issues exactly one move.
        let ctx = PlanContext::new(tour, &body, target);
        let step = navigator.plan(&ctx, host);

        // ② Verify the host actually moved where we planned.
        let reported = host.position();
        if reported != step.cell {
            tracing::warn!(%round, %tick, expected = %step.cell, %reported, "host desync");
            return Err(SimError::HostDesync { round, tick, expected: step.cell, reported });
        }

        // ③ Apply.
        let ate = step.cell == target;
        if ate {
            body.grow(step.cell);
            summary.targets_eaten += 1;
        } else {
            if body.contains(step.cell) && step.cell != body.tail() {
                tracing::warn!(%round, %tick, cell = %step.cell, "self collision");
                return Err(SimError::Collision { round, cell: step.cell });
            }
            body.advance(step.cell);
        }
        if step.shortcut {
            summary.shortcuts += 1;
        }
        observer.on_step(round, tick, &step, ate);
        tick.advance();

        if ate && !body.is_full(cell_count) {
            target = query_target(host, &body, tour)?;
        }
    }

    summary.steps = tick.0;
    summary.length = body.len();
    tracing::info!(
        %round,
        steps = summary.steps,
        shortcuts = summary.shortcuts,
        eaten = summary.targets_eaten,
        "round complete"
    );
    observer.on_round_end(&summary);
    Ok(summary)
}

/// Read the target and reject placements the planner cannot work with.
fn query_target<H: Host>(host: &H, body: &Body, tour: &Tour) -> SimResult<Cell> {
    let target = host.target();
    if !tour.contains(target) {
        return Err(SimError::OffGrid(target));
    }
    if body.contains(target) {
        return Err(SimError::TargetOnBody(target));
    }
    Ok(target)
}
