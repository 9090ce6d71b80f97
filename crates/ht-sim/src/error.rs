use thiserror::Error;

use ht_core::{Cell, HtError, RoundId, Tick};
use ht_tour::TourError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] HtError),

    #[error("tour error: {0}")]
    Tour(#[from] TourError),

    #[error("tour is {tour}x{tour} but the configuration asks for {config}x{config}")]
    SizeMismatch { tour: u32, config: u32 },

    #[error("host reported {0}, which is off the grid")]
    OffGrid(Cell),

    #[error("host placed the target at {0}, inside the body")]
    TargetOnBody(Cell),

    #[error("{round} {tick}: planned a move to {expected} but the host reports {reported}")]
    HostDesync {
        round:    RoundId,
        tick:     Tick,
        expected: Cell,
        reported: Cell,
    },

    #[error("{round}: agent ran into its own body at {cell}")]
    Collision { round: RoundId, cell: Cell },

    #[error("{round}: no full traversal after {steps} steps")]
    Stalled { round: RoundId, steps: u64 },
}

pub type SimResult<T> = Result<T, SimError>;
