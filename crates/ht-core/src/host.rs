//! Capabilities the navigator consumes from its host environment.
//!
//! The core never drives a real game directly.  The planner needs an
//! [`Actuator`] to issue exactly one move per tick; the round driver also
//! needs a [`Sensor`] to read the agent and target positions.  Tests inject
//! fakes that record commands instead.

use crate::{Cell, Direction};

/// Read-only queries against the host.
pub trait Sensor {
    /// The agent's current cell (`queryPosition`).
    fn position(&self) -> Cell;

    /// The current target cell (`queryTarget`).
    ///
    /// Only called while the grid still has a free cell, so a target always
    /// exists.
    fn target(&self) -> Cell;
}

/// Side-effecting movement primitives.
pub trait Actuator {
    /// Host-side pre-check for a move.  A `false` answer removes `direction`
    /// from consideration as a shortcut.
    fn can_move(&self, direction: Direction) -> bool;

    /// Execute one step in `direction` (`issueMove`).
    fn issue_move(&mut self, direction: Direction);
}

/// A complete host: sensors, actuators, and a round reset hook.
pub trait Host: Sensor + Actuator {
    /// Called by the round driver before each round.  Hosts that reset
    /// themselves externally keep the default no-op.
    fn reset(&mut self) {}
}
