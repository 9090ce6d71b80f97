//! `ht-sim` — the outer loop that plays rounds against a host.
//!
//! # Round loop
//!
//! ```text
//! host.reset()
//! body   = Body::new(host.position())
//! target = host.target()
//! while body.len() < N²:
//!   ① Plan    — navigator picks the next cell and issues one move.
//!   ② Verify  — host.position() must equal the planned cell.
//!   ③ Apply   — grow if the target was reached (then re-query it),
//!               otherwise advance.
//! ```
//!
//! A round ends deterministically when the body covers the grid.  Exceeding
//! the configured step ceiling is reported as [`SimError::Stalled`], which
//! can only happen if the tour invariant has been broken.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`run_batch`] on Rayon's thread pool.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ht_core::GridConfig;
//! use ht_planner::ShortcutNavigator;
//! use ht_sim::{GridHost, NoopObserver, SessionBuilder};
//!
//! let config = GridConfig::default();
//! let host = GridHost::from_config(&config);
//! let mut session = SessionBuilder::new(config, ShortcutNavigator, host).build()?;
//! let summaries = session.run(&mut NoopObserver)?;
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod grid_host;
pub mod observer;
pub mod round;
pub mod session;

#[cfg(test)]
mod tests;

pub use batch::run_batch;
pub use builder::SessionBuilder;
pub use error::{SimError, SimResult};
pub use grid_host::GridHost;
pub use observer::{LogObserver, NoopObserver, RoundObserver};
pub use round::{play_round, RoundSummary};
pub use session::Session;
