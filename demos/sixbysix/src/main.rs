//! sixbysix: plays full rounds of the Hamiltonian-cycle navigator on an
//! in-memory grid and compares it with plain tour following.
//!
//! ```text
//! sixbysix [CONFIG.json] [TOUR_CACHE.json]
//! ```
//!
//! Without a config the default 6×6 grid is played for three rounds from the
//! origin.  Any field missing from the JSON keeps its default.

mod cache;
mod logging;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use ht_core::{Cell, GridConfig};
use ht_planner::{ShortcutNavigator, TourFollower};
use ht_sim::{run_batch, GridHost, LogObserver, SessionBuilder};
use ht_tour::Tour;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_ROUNDS: u32 = 3;
const BASELINE_SEEDS: [u64; 4] = [1, 2, 3, 4];

fn load_config(path: Option<&str>) -> Result<GridConfig> {
    let Some(path) = path else {
        return Ok(GridConfig {
            rounds: DEFAULT_ROUNDS,
            start:  Some(Cell::ORIGIN),
            ..GridConfig::default()
        });
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    let config: GridConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    config.validate()?;

    println!("=== sixbysix: Hamiltonian-cycle navigator ===");
    println!(
        "Grid: {0}x{0}  |  Rounds: {1}  |  Seed: {2}  |  Step ceiling: {3}",
        config.size,
        config.rounds,
        config.seed,
        config.step_ceiling()
    );
    println!();

    // 1. Tour, from cache if one was named.
    let tour = match args.get(1) {
        Some(path) => cache::load_or_build(Path::new(path), config.size)?,
        None => Tour::build(config.size)?,
    };
    println!("Tour order (north row first):");
    print!("{tour}");
    println!();

    // 2. Shortcutting session.
    let host = GridHost::from_config(&config);
    let mut session = SessionBuilder::new(config.clone(), ShortcutNavigator, host)
        .tour(tour.clone())
        .build()?;

    let t0 = Instant::now();
    let summaries = session.run(&mut LogObserver)?;
    let elapsed = t0.elapsed();

    println!("{:<8} {:>8} {:>10} {:>8} {:>8}", "Round", "Steps", "Shortcuts", "Eaten", "Length");
    println!("{}", "-".repeat(46));
    for s in &summaries {
        println!(
            "{:<8} {:>8} {:>10} {:>8} {:>8}",
            s.round.0, s.steps, s.shortcuts, s.targets_eaten, s.length
        );
    }
    println!();
    println!("Session complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!(
        "Host: {} moves, {} refused",
        session.host.moves(),
        session.host.rejected_moves()
    );
    println!("Final board:");
    print!("{}", session.host);
    println!();

    // 3. Baseline: same seeds, with and without shortcuts.
    let fast = run_batch(&tour, &ShortcutNavigator, &config, &BASELINE_SEEDS)?;
    let slow = run_batch(&tour, &TourFollower, &config, &BASELINE_SEEDS)?;

    println!("{:<8} {:>12} {:>12}", "Seed", "Shortcuts", "Tour only");
    println!("{}", "-".repeat(34));
    for ((seed, f), s) in BASELINE_SEEDS.iter().zip(&fast).zip(&slow) {
        println!("{:<8} {:>12} {:>12}", seed, f.steps, s.steps);
    }
    let total = |v: &[ht_sim::RoundSummary]| v.iter().map(|r| r.steps).sum::<u64>();
    println!();
    println!(
        "Shortcuts saved {} of {} ticks",
        total(&slow).saturating_sub(total(&fast)),
        total(&slow)
    );

    Ok(())
}
