//! `ht-planner` — per-tick move selection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`context`]   | `PlanContext<'a>` — read-only view of tour, body, and target  |
//! | [`safety`]    | `is_safe`, `keeps_tail_ahead`, `admits`                       |
//! | [`navigator`] | `Navigator` trait, `ShortcutNavigator`, `TourFollower`, `plan_step` |
//! | [`recording`] | `RecordingActuator` — test double that records issued moves   |
//!
//! # Decision model
//!
//! Each tick the navigator compares the forward tour distance to the target
//! along the default edge against each shortcut edge.  The first shortcut (in
//! construction order) that is strictly closer *and* admitted by the safety
//! checker wins; otherwise the agent follows the tour.  Exactly one move is
//! issued to the [`Actuator`][ht_core::Actuator] per call.
//!
//! Decisions are pure functions of the context: nothing is cached between
//! ticks, so a navigator is `Send + Sync` and can be shared across rounds.

pub mod context;
pub mod navigator;
pub mod recording;
pub mod safety;


pub use context::PlanContext;
pub use navigator::{plan_step, Navigator, PlannedStep, ShortcutNavigator, TourFollower};
pub use recording::RecordingActuator;
pub use safety::{admits, is_safe, keeps_tail_ahead};
