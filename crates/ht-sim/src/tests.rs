//! Unit and integration tests for ht-sim.

use ht_core::{Actuator, Cell, Direction, GridConfig, Host, RoundId, Sensor, TargetRng, Tick};
use ht_planner::{Navigator, PlannedStep, ShortcutNavigator, TourFollower};
use ht_tour::Tour;

use crate::{
    play_round, run_batch, GridHost, NoopObserver, RoundObserver, RoundSummary, SessionBuilder,
    SimError, SimResult,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(x: i32, y: i32) -> Cell {
    Cell::new(x, y)
}

fn six() -> Tour {
    Tour::build(6).unwrap()
}

/// Play round 0 with no observer.
fn play<N: Navigator, H: Host>(
    tour:      &Tour,
    navigator: &N,
    host:      &mut H,
    ceiling:   u64,
) -> SimResult<RoundSummary> {
    play_round(tour, navigator, host, RoundId(0), ceiling, &mut NoopObserver)
}

fn pinned_config(seed: u64) -> GridConfig {
    GridConfig { seed, start: Some(c(0, 0)), ..GridConfig::default() }
}

/// A host that never moves and always reports the same cells.
struct FrozenHost {
    position: Cell,
    target:   Cell,
    issued:   Vec<Direction>,
}

impl FrozenHost {
    fn new(position: Cell, target: Cell) -> Self {
        Self { position, target, issued: Vec::new() }
    }
}

impl Sensor for FrozenHost {
    fn position(&self) -> Cell {
        self.position
    }

    fn target(&self) -> Cell {
        self.target
    }
}

impl Actuator for FrozenHost {
    fn can_move(&self, _direction: Direction) -> bool {
        true
    }

    fn issue_move(&mut self, direction: Direction) {
        self.issued.push(direction);
    }
}

impl Host for FrozenHost {}

/// Counts every observer callback.
#[derive(Default)]
struct Counter {
    starts:    u32,
    steps:     u64,
    shortcuts: u64,
    eaten:     u64,
    ends:      Vec<RoundSummary>,
}

impl RoundObserver for Counter {
    fn on_round_start(&mut self, _round: RoundId, _start: Cell) {
        self.starts += 1;
    }

    fn on_step(&mut self, _round: RoundId, _tick: Tick, step: &PlannedStep, ate: bool) {
        self.steps += 1;
        if step.shortcut {
            self.shortcuts += 1;
        }
        if ate {
            self.eaten += 1;
        }
    }

    fn on_round_end(&mut self, summary: &RoundSummary) {
        self.ends.push(*summary);
    }
}

// ── GridHost ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_host {
    use super::*;

    #[test]
    fn starts_with_one_cell_and_a_free_target() {
        let host = GridHost::new(6, TargetRng::new(3)).with_start(c(0, 0));
        assert_eq!(host.len(), 1);
        assert_eq!(host.position(), c(0, 0));
        let target = host.target();
        assert!(target.within(6));
        assert_ne!(target, c(0, 0));
    }

    #[test]
    fn random_start_is_on_grid() {
        for seed in 0..20 {
            let host = GridHost::new(6, TargetRng::new(seed));
            assert!(host.position().within(6));
            assert_ne!(host.position(), host.target());
        }
    }

    #[test]
    fn place_target_rejects_occupied_and_off_grid_cells() {
        let mut host = GridHost::new(6, TargetRng::new(1)).with_start(c(0, 0));
        assert!(!host.place_target(c(0, 0)));
        assert!(!host.place_target(c(6, 0)));
        assert!(!host.place_target(c(-1, 2)));
        assert!(host.place_target(c(3, 2)));
        assert_eq!(host.target(), c(3, 2));
    }

    #[test]
    fn refuses_moves_off_the_grid() {
        let mut host = GridHost::new(6, TargetRng::new(1)).with_start(c(0, 0));
        assert!(!host.can_move(Direction::South));
        assert!(!host.can_move(Direction::West));
        host.issue_move(Direction::South);
        assert_eq!(host.position(), c(0, 0));
        assert_eq!(host.rejected_moves(), 1);
        assert_eq!(host.moves(), 0);
    }

    #[test]
    fn eating_grows_and_respawns_the_target() {
        let mut host = GridHost::new(6, TargetRng::new(1)).with_start(c(0, 0));
        assert!(host.place_target(c(0, 1)));
        host.issue_move(Direction::North);
        assert_eq!(host.len(), 2);
        assert_eq!(host.position(), c(0, 1));
        let target = host.target();
        assert!(host.snake().all(|cell| cell != target));
    }

    #[test]
    fn sliding_vacates_the_tail() {
        let mut host = GridHost::new(6, TargetRng::new(1)).with_start(c(0, 0));
        assert!(host.place_target(c(0, 1)));
        host.issue_move(Direction::North);
        assert!(host.place_target(c(5, 5)));
        host.issue_move(Direction::East);
        assert_eq!(host.snake().collect::<Vec<_>>(), vec![c(1, 1), c(0, 1)]);
        // (0, 0) is free again.
        assert!(host.place_target(c(0, 0)));
    }

    #[test]
    fn may_step_into_the_departing_tail() {
        let mut host = GridHost::new(6, TargetRng::new(1)).with_start(c(0, 0));
        assert!(host.place_target(c(0, 1)));
        host.issue_move(Direction::North);
        assert!(host.place_target(c(5, 5)));
        // Snake is [(0, 1), (0, 0)]; (0, 0) is the tail.
        assert!(host.can_move(Direction::South));
        host.issue_move(Direction::South);
        assert_eq!(host.snake().collect::<Vec<_>>(), vec![c(0, 0), c(0, 1)]);
        assert_eq!(host.rejected_moves(), 0);
    }

    #[test]
    fn refuses_body_cells_other_than_the_tail() {
        let mut host = GridHost::new(6, TargetRng::new(1)).with_start(c(0, 0));
        for (target, dir) in [(c(0, 1), Direction::North), (c(1, 1), Direction::East)] {
            assert!(host.place_target(target));
            host.issue_move(dir);
        }
        // Snake is [(1, 1), (0, 1), (0, 0)].
        assert!(!host.can_move(Direction::West));
    }

    #[test]
    fn display_draws_the_board() {
        let mut host = GridHost::new(4, TargetRng::new(1)).with_start(c(0, 0));
        assert!(host.place_target(c(0, 1)));
        host.issue_move(Direction::North);
        assert!(host.place_target(c(3, 3)));
        assert_eq!(host.to_string(), "...*\n....\nH...\no...\n");
    }

    #[test]
    fn reset_returns_to_the_pinned_start() {
        let mut host = GridHost::new(6, TargetRng::new(1)).with_start(c(2, 2));
        assert!(host.place_target(c(2, 3)));
        host.issue_move(Direction::North);
        assert_eq!(host.len(), 2);
        host.reset();
        assert_eq!(host.len(), 1);
        assert_eq!(host.position(), c(2, 2));
    }
}

// ── Round loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod round {
    use super::*;

    #[test]
    fn six_by_six_from_origin_fills_the_grid() {
        let tour = six();
        let config = pinned_config(42);
        let mut host = GridHost::from_config(&config);
        assert!(host.place_target(c(3, 2)));

        let summary = play_round(
            &tour,
            &ShortcutNavigator,
            &mut host,
            RoundId(0),
            config.step_ceiling(),
            &mut NoopObserver,
        )
        .unwrap();

        assert_eq!(summary.length, 36);
        assert_eq!(summary.targets_eaten, 35);
        assert!(summary.steps < config.step_ceiling());
        assert_eq!(host.len(), 36);
        assert_eq!(host.rejected_moves(), 0);
        assert_eq!(host.moves(), summary.steps);
    }

    #[test]
    fn only_the_shortcut_navigator_leaves_the_tour() {
        let tour = six();
        let config = pinned_config(42);

        let mut fast_host = GridHost::from_config(&config);
        let fast = play(&tour, &ShortcutNavigator, &mut fast_host, config.step_ceiling()).unwrap();

        let mut slow_host = GridHost::from_config(&config);
        let slow = play(&tour, &TourFollower, &mut slow_host, config.step_ceiling()).unwrap();

        assert_eq!(slow.shortcuts, 0);
        assert_eq!(slow.length, 36);
        assert_eq!(fast.length, 36);
        assert!(fast.shortcuts > 0);
    }

    #[test]
    fn completes_on_larger_grids() {
        for size in [4, 8, 10] {
            let tour = Tour::build(size).unwrap();
            let config = GridConfig { seed: 9, ..GridConfig::with_size(size) };
            let mut host = GridHost::from_config(&config);
            let summary = play(&tour, &ShortcutNavigator, &mut host, config.step_ceiling()).unwrap();
            assert_eq!(summary.length, config.cell_count());
            assert_eq!(summary.targets_eaten as usize, config.cell_count() - 1);
        }
    }

    #[test]
    fn observer_sees_every_step() {
        let tour = six();
        let config = pinned_config(5);
        let mut host = GridHost::from_config(&config);
        let mut counter = Counter::default();

        let ceiling = config.step_ceiling();
        let summary =
            play_round(&tour, &ShortcutNavigator, &mut host, RoundId(4), ceiling, &mut counter).unwrap();

        assert_eq!(counter.starts, 1);
        assert_eq!(counter.steps, summary.steps);
        assert_eq!(counter.shortcuts, summary.shortcuts);
        assert_eq!(counter.eaten, summary.targets_eaten);
        assert_eq!(counter.ends, vec![summary]);
        assert_eq!(summary.round, RoundId(4));
    }

    #[test]
    fn host_that_does_not_move_is_a_desync() {
        let tour = six();
        let mut host = FrozenHost::new(c(0, 0), c(3, 3));
        let err = play(&tour, &ShortcutNavigator, &mut host, 100).unwrap_err();
        match err {
            SimError::HostDesync { tick, expected, reported, .. } => {
                assert_eq!(tick, Tick::ZERO);
                assert_eq!(expected, c(0, 1));
                assert_eq!(reported, c(0, 0));
            }
            other => panic!("expected HostDesync, got {other:?}"),
        }
        assert_eq!(host.issued, vec![Direction::North]);
    }

    #[test]
    fn target_on_the_body_is_rejected() {
        let tour = six();
        let mut host = FrozenHost::new(c(2, 2), c(2, 2));
        let err = play(&tour, &ShortcutNavigator, &mut host, 100).unwrap_err();
        assert!(matches!(err, SimError::TargetOnBody(cell) if cell == c(2, 2)));
        assert!(host.issued.is_empty());
    }

    #[test]
    fn off_grid_positions_are_rejected() {
        let tour = six();
        let mut host = FrozenHost::new(c(9, 9), c(1, 1));
        let err = play(&tour, &ShortcutNavigator, &mut host, 100).unwrap_err();
        assert!(matches!(err, SimError::OffGrid(cell) if cell == c(9, 9)));

        let mut host = FrozenHost::new(c(1, 1), c(-1, 0));
        let err = play(&tour, &ShortcutNavigator, &mut host, 100).unwrap_err();
        assert!(matches!(err, SimError::OffGrid(cell) if cell == c(-1, 0)));
    }

    #[test]
    fn tiny_ceiling_stalls() {
        let tour = six();
        let mut host = GridHost::from_config(&pinned_config(1));
        let err = play_round(&tour, &ShortcutNavigator, &mut host, RoundId(2), 5, &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, SimError::Stalled { round: RoundId(2), steps: 5 }));
    }
}

// ── Session and builder ───────────────────────────────────────────────────────

#[cfg(test)]
mod session {
    use super::*;
    use ht_core::HtError;

    #[test]
    fn runs_every_configured_round() {
        let config = GridConfig { rounds: 3, seed: 7, ..GridConfig::default() };
        let host = GridHost::from_config(&config);
        let mut session = SessionBuilder::new(config, ShortcutNavigator, host).build().unwrap();

        let summaries = session.run(&mut NoopObserver).unwrap();

        assert_eq!(summaries.len(), 3);
        for (i, summary) in summaries.iter().enumerate() {
            assert_eq!(summary.round, RoundId(i as u32));
            assert_eq!(summary.length, 36);
        }
        assert_eq!(session.next_round(), RoundId(3));
    }

    #[test]
    fn each_round_resets_the_host() {
        let config = pinned_config(11);
        let host = GridHost::from_config(&config);
        let mut session = SessionBuilder::new(config, TourFollower, host).build().unwrap();

        let mut counter = Counter::default();
        session.run_round(&mut counter).unwrap();
        session.run_round(&mut counter).unwrap();

        assert_eq!(counter.starts, 2);
        assert_eq!(counter.ends.len(), 2);
        assert!(counter.ends.iter().all(|s| s.length == 36));
    }

    #[test]
    fn configured_ceiling_is_enforced() {
        let config = GridConfig { max_steps_per_round: Some(3), ..pinned_config(1) };
        let host = GridHost::from_config(&config);
        let mut session = SessionBuilder::new(config, ShortcutNavigator, host).build().unwrap();

        let err = session.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Stalled { steps: 3, .. }));
    }

    #[test]
    fn builder_rejects_a_mismatched_tour() {
        let config = GridConfig::default();
        let host = GridHost::from_config(&config);
        let result = SessionBuilder::new(config, ShortcutNavigator, host)
            .tour(Tour::build(8).unwrap())
            .build();
        assert!(matches!(result, Err(SimError::SizeMismatch { tour: 8, config: 6 })));
    }

    #[test]
    fn builder_rejects_an_invalid_config() {
        let config = GridConfig::with_size(5);
        let host = GridHost::new(6, TargetRng::new(0));
        let result = SessionBuilder::new(config, ShortcutNavigator, host).build();
        assert!(matches!(result, Err(SimError::Config(HtError::UnsupportedGridSize(5)))));
    }

    #[test]
    fn builder_accepts_a_prebuilt_tour() {
        let config = pinned_config(2);
        let host = GridHost::from_config(&config);
        let session = SessionBuilder::new(config, ShortcutNavigator, host)
            .tour(six())
            .build()
            .unwrap();
        assert_eq!(session.tour, six());
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use super::*;

    #[test]
    fn same_seeds_give_identical_results() {
        let tour = six();
        let config = GridConfig::default();
        let seeds = [1, 2, 3, 4];

        let a = run_batch(&tour, &ShortcutNavigator, &config, &seeds).unwrap();
        let b = run_batch(&tour, &ShortcutNavigator, &config, &seeds).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        for (i, summary) in a.iter().enumerate() {
            assert_eq!(summary.round, RoundId(i as u32));
            assert_eq!(summary.length, 36);
        }
    }

    #[test]
    fn pinned_start_is_honoured() {
        let tour = six();
        let config = pinned_config(0);
        let summaries = run_batch(&tour, &TourFollower, &config, &[10, 20]).unwrap();
        assert!(summaries.iter().all(|s| s.shortcuts == 0 && s.targets_eaten == 35));
    }

    #[test]
    fn empty_seed_list_is_empty_result() {
        let tour = six();
        let summaries = run_batch(&tour, &ShortcutNavigator, &GridConfig::default(), &[]).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn size_mismatch_is_reported() {
        let tour = Tour::build(4).unwrap();
        let err = run_batch(&tour, &ShortcutNavigator, &GridConfig::default(), &[1]).unwrap_err();
        assert!(matches!(err, SimError::SizeMismatch { tour: 4, config: 6 }));
    }
}
