//! `ht-core` — foundational types for the `ham_tour` grid navigator.
//!
//! This crate is a dependency of every other `ht-*` crate.  It has no `ht-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`cell`]        | `Cell` — an `(x, y)` grid coordinate                  |
//! | [`direction`]   | `Direction`, `DirectionSet`, `delta_of`, `direction_of` |
//! | [`ids`]         | `RoundId`                                             |
//! | [`time`]        | `Tick` — one planner decision                         |
//! | [`config`]      | `GridConfig`                                          |
//! | [`rng`]         | `TargetRng` (seeded target placement)                 |
//! | [`host`]        | `Sensor`, `Actuator`, `Host` capability traits        |
//! | [`error`]       | `HtError`, `HtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod host;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::GridConfig;
pub use direction::{delta_of, direction_of, Direction, DirectionSet};
pub use error::{HtError, HtResult};
pub use host::{Actuator, Host, Sensor};
pub use ids::RoundId;
pub use rng::TargetRng;
pub use time::Tick;
