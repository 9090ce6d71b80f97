//! Independent rounds over many seeds.
//!
//! Every seed gets its own [`GridHost`]; the tour and navigator are shared.
//! With the `parallel` feature the rounds run on Rayon's thread pool.
//! Results come back in seed order either way, so a batch is reproducible
//! regardless of scheduling.

use ht_core::{GridConfig, RoundId, TargetRng};
use ht_planner::Navigator;
use ht_tour::Tour;

use crate::{play_round, GridHost, NoopObserver, RoundSummary, SimError, SimResult};

/// Play one round per seed on a fresh [`GridHost`].
///
/// Round `i` is tagged `RoundId(i)` and places targets from the stream
/// `TargetRng::for_round(config.seed, seeds[i])`.  `config.start` pins the
/// start cell of every round; `config.rounds` is ignored in favour of
/// `seeds.len()`.  The first failing round aborts the batch.
pub fn run_batch<N: Navigator>(
    tour:      &Tour,
    navigator: &N,
    config:    &GridConfig,
    seeds:     &[u64],
) -> SimResult<Vec<RoundSummary>> {
    config.validate()?;
    if tour.size() != config.size {
        return Err(SimError::SizeMismatch { tour: tour.size(), config: config.size });
    }

    let ceiling = config.step_ceiling();
    let run_one = |(i, &seed): (usize, &u64)| -> SimResult<RoundSummary> {
        let mut host = GridHost::new(config.size, TargetRng::for_round(config.seed, seed));
        if let Some(start) = config.start {
            host = host.with_start(start);
        }
        play_round(tour, navigator, &mut host, RoundId(i as u32), ceiling, &mut NoopObserver)
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().enumerate().map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().enumerate().map(run_one).collect()
    }
}
