//! Benchmark profiles and utilities for the Plume timeline engine.
//!
//! Provides pre-built synthetic scenario profiles for benchmarking:
//!
//! - [`reference_profile`]: 1 000 agents, 4 legs each
//! - [`stress_profile`]: 10 000 agents, 6 legs each, longer paths
//! - [`loaded_timeline`]: a [`Timeline`] with a profile already ingested

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plume_core::DAY_SECONDS;
use plume_engine::{EngineConfig, Timeline};
use plume_test_utils::{synthetic_scenario, SyntheticProfile};
use serde_json::Value;

/// Reference profile: a mid-sized city sample (1 000 agents).
pub fn reference_profile() -> SyntheticProfile {
    SyntheticProfile {
        agents: 1_000,
        legs_per_agent: 4,
        points_per_leg: 8,
        ..SyntheticProfile::default()
    }
}

/// Stress profile: 10x the agents, longer days and paths that spill
/// out of the inline path buffer.
pub fn stress_profile() -> SyntheticProfile {
    SyntheticProfile {
        agents: 10_000,
        legs_per_agent: 6,
        points_per_leg: 24,
        ..SyntheticProfile::default()
    }
}

/// Raw scenario document for `profile`.
pub fn scenario_doc(profile: &SyntheticProfile, seed: u64) -> Value {
    synthetic_scenario(profile, seed)
}

/// A timeline with `profile` ingested under the default config.
pub fn loaded_timeline(profile: &SyntheticProfile, seed: u64) -> Timeline {
    let scenario = plume_ingest::load_scenario(&scenario_doc(profile, seed));
    match Timeline::with_scenario(scenario, EngineConfig::default()) {
        Ok(timeline) => timeline,
        Err(e) => unreachable!("default engine config is valid: {e}"),
    }
}

/// Evenly spaced query times covering the day, `frames` of them.
pub fn day_sweep(frames: usize) -> Vec<f64> {
    let step = DAY_SECONDS / frames.max(1) as f64;
    (0..frames).map(|i| i as f64 * step).collect()
}
