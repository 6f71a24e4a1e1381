//! Determinism verification over synthetic scenarios.
//!
//! Each test: ingest a seeded scenario → record a clock sweep to
//! `Vec<u8>` → rebuild a fresh timeline from the same document →
//! replay and compare hashes per frame.

use plume_engine::{ClockEdge, EngineConfig, PlaybackClock, Timeline};
use plume_replay::{record_session, replay_and_compare, scenario_hash, ReplayError, ReplayReader};
use plume_test_utils::{synthetic_scenario, SyntheticProfile};
use proptest::prelude::*;
use serde_json::Value;

// ── Helpers ─────────────────────────────────────────────────────

fn fresh_timeline(doc: &Value) -> Timeline {
    let mut t = Timeline::new(EngineConfig::default()).unwrap();
    t.load_json(doc);
    t
}

/// Query times produced by a clamped clock at `multiplier` from 05:00.
fn sweep(multiplier: f64) -> Vec<f64> {
    let mut clock = PlaybackClock::new(ClockEdge::Clamp)
        .with_multiplier(multiplier)
        .unwrap();
    clock.seek(5.0 * 3600.0);
    clock.play();
    let mut times = Vec::new();
    while clock.is_playing() {
        times.push(clock.advance(1.0));
    }
    times
}

fn record(doc: &Value, times: &[f64]) -> Vec<u8> {
    let mut buf = Vec::new();
    record_session(&fresh_timeline(doc), times.iter().copied(), 600.0, &mut buf).unwrap();
    buf
}

// ── Tests ───────────────────────────────────────────────────────

#[test]
fn fresh_timeline_reproduces_every_frame() {
    let doc = synthetic_scenario(&SyntheticProfile::default(), 7);
    let times = sweep(600.0);
    assert!(times.len() > 100);

    let buf = record(&doc, &times);
    let reader = ReplayReader::open(buf.as_slice()).unwrap();
    assert_eq!(replay_and_compare(reader, &fresh_timeline(&doc)).unwrap(), None);
}

#[test]
fn reloading_the_same_document_keeps_the_scenario_hash() {
    let doc = synthetic_scenario(&SyntheticProfile::default(), 99);
    let a = fresh_timeline(&doc);
    let b = fresh_timeline(&doc);
    assert_eq!(
        scenario_hash(a.generation().scenario()),
        scenario_hash(b.generation().scenario())
    );
}

#[test]
fn rewinding_sweeps_replay_too() {
    let doc = synthetic_scenario(&SyntheticProfile::default(), 3);
    let mut times = sweep(1200.0);
    let back: Vec<f64> = times.iter().rev().copied().collect();
    times.extend(back);

    let buf = record(&doc, &times);
    let reader = ReplayReader::open(buf.as_slice()).unwrap();
    assert_eq!(replay_and_compare(reader, &fresh_timeline(&doc)).unwrap(), None);
}

#[test]
fn modified_scenario_is_detected() {
    let doc = synthetic_scenario(&SyntheticProfile::default(), 5);
    let buf = record(&doc, &sweep(3600.0));

    let mut edited = doc.clone();
    edited["meta"]["emission_factors"]["car"] = Value::from(999.0);
    let reader = ReplayReader::open(buf.as_slice()).unwrap();
    assert!(matches!(
        replay_and_compare(reader, &fresh_timeline(&edited)),
        Err(ReplayError::ScenarioMismatch { .. })
    ));
}

#[test]
fn different_seeds_give_different_recordings() {
    let times = sweep(3600.0);
    let a = record(&synthetic_scenario(&SyntheticProfile::default(), 1), &times);
    let b = record(&synthetic_scenario(&SyntheticProfile::default(), 2), &times);
    assert_ne!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn any_seed_and_sweep_replays_cleanly(
        seed in 0u64..100_000,
        times in prop::collection::vec(-1_000.0f64..90_000.0, 1..40),
    ) {
        let profile = SyntheticProfile { agents: 15, ..Default::default() };
        let doc = synthetic_scenario(&profile, seed);
        let buf = record(&doc, &times);
        let reader = ReplayReader::open(buf.as_slice()).unwrap();
        prop_assert_eq!(reader.header().scenario_hash, {
            let t = fresh_timeline(&doc);
            scenario_hash(t.generation().scenario())
        });
        let reader = ReplayReader::open(buf.as_slice()).unwrap();
        prop_assert_eq!(replay_and_compare(reader, &fresh_timeline(&doc)).unwrap(), None);
    }
}
