//! The `Session` struct: a tour, a navigator, and a host played for several
//! rounds.

use ht_core::{GridConfig, Host, RoundId};
use ht_planner::Navigator;
use ht_tour::Tour;

use crate::{play_round, RoundObserver, RoundSummary, SimResult};

/// A configured run against one host.
///
/// The tour is built once and reused for every round.  Before each round the
/// host is [`reset`][Host::reset]; the body is then reseeded from whatever
/// position the host reports.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<N: Navigator, H: Host> {
    pub config:    GridConfig,
    pub tour:      Tour,
    pub navigator: N,
    pub host:      H,
    next_round:    RoundId,
}

impl<N: Navigator, H: Host> Session<N, H> {
    pub(crate) fn new(config: GridConfig, tour: Tour, navigator: N, host: H) -> Self {
        Self { config, tour, navigator, host, next_round: RoundId(0) }
    }

    /// The id the next call to [`run_round`][Self::run_round] will use.
    pub fn next_round(&self) -> RoundId {
        self.next_round
    }

    /// Reset the host and play one round to completion.
    pub fn run_round<O: RoundObserver>(&mut self, observer: &mut O) -> SimResult<RoundSummary> {
        let round = self.next_round;
        self.next_round = round.next();

        self.host.reset();
        play_round(
            &self.tour,
            &self.navigator,
            &mut self.host,
            round,
            self.config.step_ceiling(),
            observer,
        )
    }

    /// Play `config.rounds` rounds, stopping at the first error.
    pub fn run<O: RoundObserver>(&mut self, observer: &mut O) -> SimResult<Vec<RoundSummary>> {
        let mut summaries = Vec::with_capacity(self.config.rounds as usize);
        for _ in 0..self.config.rounds {
            summaries.push(self.run_round(observer)?);
        }
        Ok(summaries)
    }
}
