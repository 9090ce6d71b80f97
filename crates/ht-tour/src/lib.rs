//! `ht-tour` — the fixed Hamiltonian cycle every navigator follows.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`builder`]  | `TourBuilder`, `serpentine_direction` (the sweep rule)      |
//! | [`tour`]     | `Tour` (immutable N×N map), `TourCell`                      |
//! | [`distance`] | `cyclic_distance` — forward distance around the cycle       |
//! | [`snapshot`] | `TourSnapshot` flat cache + validation on reload            |
//! | [`error`]    | `TourError`, `TourResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on snapshot types.         |
//!
//! # Lifecycle
//!
//! A `Tour` is built once per process (or reloaded from a snapshot) and then
//! shared read-only by reference.  It is `Send + Sync`, so any number of
//! rounds, including concurrent ones, can borrow the same instance.

pub mod builder;
pub mod distance;
pub mod error;
pub mod snapshot;
pub mod tour;


pub use builder::{serpentine_direction, TourBuilder};
pub use distance::cyclic_distance;
pub use error::{TourError, TourResult};
pub use snapshot::{SnapshotCell, TourSnapshot};
pub use tour::{Tour, TourCell};
