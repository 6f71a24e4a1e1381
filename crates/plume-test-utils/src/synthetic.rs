//! Seeded synthetic scenarios.
//!
//! Produces raw scenario JSON shaped like real simulator output: agents
//! commute around a city centre through the day, mixing the `legs` and
//! `timeline` encodings and the tuple/object point forms. The same seed
//! always yields the same document.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};

/// Modes and their emission factors (g/km) used by synthetic scenarios.
pub const SYNTHETIC_MODES: &[(&str, f64)] = &[
    ("car", 171.0),
    ("bus", 97.0),
    ("train", 35.0),
    ("bike", 0.0),
    ("walk", 0.0),
    ("ev", 47.0),
];

/// Shape of a synthetic scenario.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticProfile {
    pub agents: usize,
    pub legs_per_agent: usize,
    pub points_per_leg: usize,
    /// Fraction of agents encoded as event timelines instead of legs.
    pub timeline_share: f64,
    pub center: (f64, f64),
}

impl Default for SyntheticProfile {
    fn default() -> Self {
        Self {
            agents: 100,
            legs_per_agent: 4,
            points_per_leg: 6,
            timeline_share: 0.25,
            center: (4.3517, 50.8503),
        }
    }
}

/// Generate a scenario document for `profile` from `seed`.
pub fn synthetic_scenario(profile: &SyntheticProfile, seed: u64) -> Value {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let factors: serde_json::Map<String, Value> = SYNTHETIC_MODES
        .iter()
        .map(|&(mode, f)| (mode.to_string(), json!(f)))
        .collect();

    let agents: Vec<Value> = (0..profile.agents)
        .map(|i| synthetic_agent(&mut rng, profile, i))
        .collect();

    json!({
        "meta": {
            "emission_factors": factors,
            "date": "2024-05-01",
            "city": "Synthetic",
            "days": 1
        },
        "agents": agents
    })
}

fn synthetic_agent(rng: &mut ChaCha8Rng, profile: &SyntheticProfile, index: usize) -> Value {
    let home_mode = SYNTHETIC_MODES[rng.random_range(0..SYNTHETIC_MODES.len())].0;
    let as_timeline = rng.random_bool(profile.timeline_share.clamp(0.0, 1.0));

    let mut clock = rng.random_range(5.0 * 3600.0..9.0 * 3600.0);
    let mut here = jitter(rng, profile.center, 0.05);
    let mut entries = Vec::with_capacity(profile.legs_per_agent * 2);

    for leg_idx in 0..profile.legs_per_agent {
        let duration = rng.random_range(300.0..3600.0);
        let there = jitter(rng, profile.center, 0.08);
        let mode = if rng.random_bool(0.7) {
            home_mode
        } else {
            SYNTHETIC_MODES[rng.random_range(0..SYNTHETIC_MODES.len())].0
        };

        let path = synthetic_path(rng, here, there, clock, clock + duration, profile, leg_idx);
        let reasoning = if rng.random_bool(0.5) {
            json!([format!("leg {leg_idx}"), format!(" via {mode} ")])
        } else {
            Value::Null
        };

        if as_timeline {
            entries.push(json!({"type": "activity", "time": clock - 60.0}));
            entries.push(json!({
                "type": "move",
                "time": clock,
                "duration": duration,
                "mode": mode,
                "route": path,
                "rationale": reasoning,
            }));
        } else {
            entries.push(json!({
                "start_time": clock,
                "end_time": clock + duration,
                "mode": mode,
                "path": path,
                "reasoning": reasoning,
            }));
        }

        clock += duration + rng.random_range(600.0..7200.0);
        here = there;
    }

    let key = if as_timeline { "timeline" } else { "legs" };
    json!({
        "id": format!("agent-{index:05}"),
        "mode": home_mode,
        key: entries,
    })
}

fn synthetic_path(
    rng: &mut ChaCha8Rng,
    from: (f64, f64),
    to: (f64, f64),
    start: f64,
    end: f64,
    profile: &SyntheticProfile,
    leg_idx: usize,
) -> Value {
    let n = profile.points_per_leg.max(2);
    // Alternate encodings so every run exercises both point forms.
    let timed = leg_idx % 2 == 0;
    let points: Vec<Value> = (0..n)
        .map(|i| {
            let f = i as f64 / (n - 1) as f64;
            let wobble = if i == 0 || i == n - 1 { 0.0 } else { 0.002 };
            let lng = from.0 + (to.0 - from.0) * f + rng.random_range(-wobble..=wobble);
            let lat = from.1 + (to.1 - from.1) * f + rng.random_range(-wobble..=wobble);
            if timed {
                json!([lng, lat, start + (end - start) * f])
            } else {
                json!({"lon": lng, "lat": lat})
            }
        })
        .collect();
    Value::Array(points)
}

fn jitter(rng: &mut ChaCha8Rng, center: (f64, f64), spread: f64) -> (f64, f64) {
    (
        center.0 + rng.random_range(-spread..spread),
        center.1 + rng.random_range(-spread..spread),
    )
}
