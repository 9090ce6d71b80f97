//! `ht-body` — the agent's trailing body.
//!
//! # Crate layout
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`body`]   | `Body` — ordered cells, head first, O(1) lookups   |
//!
//! A `Body` is round-scoped: the round driver seeds it with the start cell,
//! applies one [`grow`][Body::grow] or [`advance`][Body::advance] per tick,
//! and drops it when the body covers the grid.

pub mod body;


pub use body::Body;
