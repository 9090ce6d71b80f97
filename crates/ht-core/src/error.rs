//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `HtError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `ht-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HtError {
    /// `(dx, dy)` is not one of the four unit vectors.  Programmer error.
    #[error("({dx}, {dy}) is not a unit grid vector")]
    InvalidVector { dx: i32, dy: i32 },

    /// A cached direction token does not name a direction.
    #[error("direction id {0} is out of range")]
    InvalidDirectionId(u8),

    /// The serpentine tour only exists for even `N >= 4`.
    #[error("grid size {0} is unsupported: must be even and at least 4")]
    UnsupportedGridSize(u32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ht-*` crates.
pub type HtResult<T> = Result<T, HtError>;
