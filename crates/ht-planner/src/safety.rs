//! Shortcut safety checks.
//!
//! A shortcut is only worth taking if the agent, committing to it and then
//! following the tour forever after, never runs into itself.  Two checks
//! together guarantee that:
//!
//! - [`is_safe`] simulates the tour walk from the candidate against the
//!   current body's vacate schedule.
//! - [`keeps_tail_ahead`] keeps the body ordered along the tour from tail to
//!   head.  Under that ordering every cell ahead of the head up to the tail
//!   is free, so the default edge stays safe even when the body grows.
//!
//! [`admits`] is the conjunction the navigator uses.

use ht_body::Body;
use ht_core::Cell;
use ht_tour::Tour;

/// Walk the tour from `candidate` for `body.len()` steps.
///
/// At step `i` (the walker's `i + 1`-th move from now) a body cell whose
/// remaining occupancy is `p` has been vacated iff `p <= i`.  Returns `false`
/// on the first occupied cell that would still be held, `true` if the walk
/// finishes clean.
pub fn is_safe(candidate: Cell, body: &Body, tour: &Tour) -> bool {
    tour.walk_from(candidate)
        .take(body.len())
        .enumerate()
        .all(|(elapsed, cell)| match body.remaining_occupancy(cell) {
            Some(p) => p <= elapsed,
            None => true,
        })
}

/// `true` if `candidate` lies strictly between the head and the tail going
/// forward along the tour.
///
/// A length-1 body has no tail behind it, so any candidate qualifies.
pub fn keeps_tail_ahead(candidate: Cell, body: &Body, tour: &Tour) -> bool {
    if body.len() == 1 {
        return true;
    }
    let head = body.head();
    tour.distance(head, candidate) < tour.distance(head, body.tail())
}

/// The full admission check for a shortcut destination.
#[inline]
pub fn admits(candidate: Cell, body: &Body, tour: &Tour) -> bool {
    keeps_tail_ahead(candidate, body, tour) && is_safe(candidate, body, tour)
}
