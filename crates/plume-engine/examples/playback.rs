//! Plume playback: sweep a clock across one day and print what changes.
//!
//! Demonstrates:
//!   1. Loading a scenario document (from a file, or a seeded synthetic one)
//!   2. Building a Timeline with the default EngineConfig
//!   3. Driving query time with a PlaybackClock at 600x
//!   4. Reading positions, emission totals and the leaderboard per frame
//!   5. Printing the reasoning log
//!
//! Run with:
//!   cargo run --example playback -p plume-engine -- [scenario.json] [day]
//!
//! Set `RUST_LOG=plume_engine=debug` for generation build logs.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use plume_core::time::format_clock;
use plume_engine::{ClockEdge, CreditLedger, EngineConfig, PlaybackClock, Timeline};
use plume_test_utils::{synthetic_scenario, SyntheticProfile};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,plume_ingest=warn"));
    fmt().with_env_filter(filter).with_target(false).init();

    let mut args = std::env::args().skip(1);
    let doc: Value = match args.next() {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => synthetic_scenario(&SyntheticProfile::default(), 2024),
    };
    let day: usize = args.next().map(|d| d.parse()).transpose()?.unwrap_or(0);

    let mut timeline = Timeline::new(EngineConfig::default())?;
    timeline.load_day(&doc, day)?;

    // ─── Sweep the day in 15-minute frames ──────────────────────

    let mut clock = PlaybackClock::new(ClockEdge::Clamp).with_multiplier(600.0)?;
    clock.seek(5.0 * 3600.0);
    clock.play();

    let mut ledger = CreditLedger::new();
    while clock.is_playing() {
        let t = clock.tick(Duration::from_millis(1500));
        let frame = timeline.frame(t, &mut ledger);

        let leader = frame
            .leaderboard
            .first()
            .map(|s| format!("{} ({:.1})", s.agent_id, s.score))
            .unwrap_or_else(|| "-".to_string());
        let gained: f64 = frame.leaderboard.iter().map(|s| s.delta).sum();

        println!(
            "{}  moving={:>4}  co2={:>10.1} g  leader={}  +{:.1} credits  [{} us]",
            format_clock(frame.time),
            frame.positions.len(),
            frame.emissions.global_g,
            leader,
            gained,
            frame.metrics.total_us,
        );
    }

    // ─── Totals and reasoning ───────────────────────────────────

    let totals = timeline.emissions_at(clock.time());
    println!("\nemission by mode:");
    for (mode, grams) in &totals.per_mode_g {
        println!("  {mode:<10} {grams:>12.1} g");
    }

    println!("\nreasoning log (first 10):");
    for entry in timeline.reasoning_log().iter().take(10) {
        println!(
            "  {} {:<12} #{} {:<6} {}",
            entry.clock().unwrap_or_else(|| "--:--:--".to_string()),
            entry.agent_id,
            entry.move_index,
            entry.mode,
            entry.reason,
        );
    }

    Ok(())
}
