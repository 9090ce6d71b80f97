//! Session configuration.

use crate::{Cell, HtError, HtResult};

/// Top-level configuration for a navigation session.
///
/// Typically built in code or loaded from JSON by the application crate and
/// passed to the session builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Side length `N` of the square grid.  Must be even and at least 4.
    pub size: u32,

    /// Master RNG seed for target placement.  The same seed always produces
    /// identical rounds.
    pub seed: u64,

    /// Number of rounds a session plays before returning.
    pub rounds: u32,

    /// Ticks a round may take before it is declared stalled.  `None` uses
    /// [`GridConfig::step_ceiling`]'s default.
    pub max_steps_per_round: Option<u64>,

    /// Fixed start cell for every round.  `None` lets the host choose.
    pub start: Option<Cell>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size:                6,
            seed:                42,
            rounds:              1,
            max_steps_per_round: None,
            start:               None,
        }
    }
}

impl GridConfig {
    /// A single-round config for an `size × size` grid.
    pub fn with_size(size: u32) -> Self {
        Self { size, ..Self::default() }
    }

    /// Total number of cells, `N²`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Tick budget for one round.
    ///
    /// Each target costs at most one full lap (`N²` ticks) and there are
    /// `N² − 1` targets, so `N⁴ + N²` is never reached by a healthy round.
    pub fn step_ceiling(&self) -> u64 {
        let cells = self.cell_count() as u64;
        self.max_steps_per_round.unwrap_or(cells * cells + cells)
    }

    /// Check the grid precondition and the optional start cell.
    pub fn validate(&self) -> HtResult<()> {
        if self.size < 4 || self.size % 2 != 0 {
            return Err(HtError::UnsupportedGridSize(self.size));
        }
        if let Some(start) = self.start {
            if !start.within(self.size) {
                return Err(HtError::Config(format!(
                    "start cell {start} lies outside the {0}x{0} grid",
                    self.size
                )));
            }
        }
        if self.max_steps_per_round == Some(0) {
            return Err(HtError::Config("max_steps_per_round must be positive".into()));
        }
        Ok(())
    }
}
