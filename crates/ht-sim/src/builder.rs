//! Fluent builder for constructing a [`Session`].

use ht_core::{GridConfig, Host};
use ht_planner::Navigator;
use ht_tour::Tour;

use crate::{Session, SimError, SimResult};

/// Fluent builder for [`Session<N, H>`].
///
/// # Required inputs
///
/// - [`GridConfig`]: grid size, seed, rounds, …
/// - `N: Navigator`: the move selection strategy
/// - `H: Host`: the environment rounds are played against
///
/// # Optional inputs
///
/// | Method      | Default                               |
/// |-------------|---------------------------------------|
/// | `.tour(t)`  | `Tour::build(config.size)`            |
///
/// # Example
///
/// ```rust,ignore
/// let host = GridHost::from_config(&config);
/// let mut session = SessionBuilder::new(config, ShortcutNavigator, host)
///     .tour(cached_tour)
///     .build()?;
/// session.run(&mut LogObserver)?;
/// ```
pub struct SessionBuilder<N: Navigator, H: Host> {
    config:    GridConfig,
    tour:      Option<Tour>,
    navigator: N,
    host:      H,
}

impl<N: Navigator, H: Host> SessionBuilder<N, H> {
    pub fn new(config: GridConfig, navigator: N, host: H) -> Self {
        Self { config, tour: None, navigator, host }
    }

    /// Supply a prebuilt tour, for example one restored from a snapshot.
    ///
    /// Its size must match `config.size`.
    pub fn tour(mut self, tour: Tour) -> Self {
        self.tour = Some(tour);
        self
    }

    /// Validate the configuration, build the tour if none was supplied, and
    /// return a ready-to-run [`Session`].
    pub fn build(self) -> SimResult<Session<N, H>> {
        self.config.validate()?;

        let tour = match self.tour {
            Some(tour) => {
                if tour.size() != self.config.size {
                    return Err(SimError::SizeMismatch {
                        tour:   tour.size(),
                        config: self.config.size,
                    });
                }
                tour
            }
            None => Tour::build(self.config.size)?,
        };

        Ok(Session::new(self.config, tour, self.navigator, self.host))
    }
}
