//! Tour-subsystem error type.

use thiserror::Error;

use ht_core::{Cell, HtError};

/// Errors produced by `ht-tour`.
///
/// `UnsupportedGridSize` is a startup error.  The other variants are
/// internal-consistency faults: a correct build never produces them and a
/// cached snapshot only does if it was tampered with or written by a
/// different rule.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("grid size {0} is unsupported: must be even and at least 4")]
    UnsupportedGridSize(u32),

    #[error("serpentine walk does not form a single cycle (stopped at {cell})")]
    BrokenCycle { cell: Cell },

    #[error("corrupt tour snapshot: {0}")]
    CorruptSnapshot(String),

    #[error(transparent)]
    Core(#[from] HtError),
}

pub type TourResult<T> = Result<T, TourError>;
