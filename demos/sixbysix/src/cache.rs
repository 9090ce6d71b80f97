//! On-disk tour cache.
//!
//! The tour only depends on the grid size, so a JSON snapshot written once
//! can be reused by every later run.  A cache for the wrong size, or one that
//! no longer validates, is rebuilt and overwritten.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use ht_tour::{Tour, TourSnapshot};

/// Load the tour for `size` from `path`, building and saving it on a miss.
pub fn load_or_build(path: &Path, size: u32) -> Result<Tour> {
    if path.exists() {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading tour cache {}", path.display()))?;
        match serde_json::from_str::<TourSnapshot>(&text) {
            Ok(snapshot) if snapshot.size == size => match Tour::from_snapshot(&snapshot) {
                Ok(tour) => {
                    tracing::info!(path = %path.display(), size, "loaded cached tour");
                    return Ok(tour);
                }
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "discarding invalid tour cache"),
            },
            Ok(snapshot) => {
                tracing::info!(cached = snapshot.size, size, "tour cache is for another grid size");
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "tour cache is not valid JSON"),
        }
    }

    let tour = Tour::build(size)?;
    let json = serde_json::to_string(&tour.snapshot())?;
    fs::write(path, json).with_context(|| format!("writing tour cache {}", path.display()))?;
    tracing::info!(path = %path.display(), size, "built and cached tour");
    Ok(tour)
}
