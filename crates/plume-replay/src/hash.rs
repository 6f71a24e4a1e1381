//! Hashing utilities for frame and scenario comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of query outputs. These
//! hashes are not cryptographically secure; they are used for fast
//! equality checks during replay comparison.
//!
//! Floats are hashed by bit pattern, so `0.0` and `-0.0` differ and a
//! one-ULP drift is a divergence.

use plume_core::{Leg, Scenario};
use plume_engine::Frame;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Incremental FNV-1a state.
#[derive(Clone, Copy, Debug)]
struct Fnv(u64);

impl Fnv {
    fn new() -> Self {
        Self(FNV_OFFSET)
    }

    #[inline]
    fn byte(&mut self, b: u8) {
        self.0 = (self.0 ^ u64::from(b)).wrapping_mul(FNV_PRIME);
    }

    #[inline]
    fn u64(&mut self, v: u64) {
        for b in v.to_le_bytes() {
            self.byte(b);
        }
    }

    #[inline]
    fn f64(&mut self, v: f64) {
        self.u64(v.to_bits());
    }

    /// Length-prefixed, so `("ab", "c")` and `("a", "bc")` differ.
    fn str(&mut self, s: &str) {
        self.u64(s.len() as u64);
        for &b in s.as_bytes() {
            self.byte(b);
        }
    }

    fn opt_f64(&mut self, v: Option<f64>) {
        match v {
            Some(v) => {
                self.byte(1);
                self.f64(v);
            }
            None => self.byte(0),
        }
    }

    fn opt_str(&mut self, v: Option<&str>) {
        match v {
            Some(s) => {
                self.byte(1);
                self.str(s);
            }
            None => self.byte(0),
        }
    }
}

/// Compute a hash over every output of a frame.
///
/// Covers the query time, positions, emission totals and leaderboard in
/// output order. The generation id and timing metrics are excluded, so
/// a fresh timeline over the same scenario reproduces the same hashes.
pub fn frame_hash(frame: &Frame) -> u64 {
    let mut h = Fnv::new();
    h.f64(frame.time);

    h.u64(frame.positions.len() as u64);
    for p in &frame.positions {
        h.str(p.agent_id.as_str());
        h.f64(p.position.lng);
        h.f64(p.position.lat);
        h.str(p.mode.as_str());
    }

    h.f64(frame.emissions.global_g);
    h.u64(frame.emissions.per_mode_g.len() as u64);
    for (mode, grams) in &frame.emissions.per_mode_g {
        h.str(mode.as_str());
        h.f64(*grams);
    }

    h.u64(frame.leaderboard.len() as u64);
    for row in &frame.leaderboard {
        h.str(row.agent_id.as_str());
        h.f64(row.score);
        h.f64(row.delta);
    }

    h.0
}

/// Fingerprint a canonical scenario.
///
/// Covers emission factors and every agent's id, mode, rationale and
/// legs. Free-form agent attributes and metadata strings are excluded
/// since no query output depends on them.
pub fn scenario_hash(scenario: &Scenario) -> u64 {
    let mut h = Fnv::new();

    let factors = scenario.meta.emission_factors.table();
    h.u64(factors.len() as u64);
    for (mode, factor) in factors.iter() {
        h.str(mode.as_str());
        h.f64(factor);
    }

    h.u64(scenario.agents.len() as u64);
    for agent in &scenario.agents {
        h.str(agent.id.as_str());
        h.opt_str(agent.mode.as_ref().map(|m| m.as_str()));
        h.opt_str(agent.rationale.as_deref());
        h.u64(agent.legs.len() as u64);
        for leg in &agent.legs {
            hash_leg(&mut h, leg);
        }
    }

    h.0
}

fn hash_leg(h: &mut Fnv, leg: &Leg) {
    h.opt_f64(leg.start_time);
    h.opt_f64(leg.end_time);
    h.str(leg.mode.as_str());
    h.f64(leg.distance_km);
    h.f64(leg.emission_g);
    h.opt_str(leg.rationale.as_deref());
    h.u64(leg.path.len() as u64);
    for p in &leg.path {
        h.f64(p.lng);
        h.f64(p.lat);
        h.f64(p.t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_engine::{CreditLedger, EngineConfig, Timeline};
    use plume_test_utils::{agent, CanonicalLeg};

    fn scenario(km: f64) -> Scenario {
        Scenario {
            agents: vec![agent(
                "a",
                [CanonicalLeg::new(0.0, 100.0)
                    .mode("bike")
                    .distance_km(km)
                    .straight((0.0, 0.0), (1.0, 1.0))
                    .build()],
            )],
            ..Scenario::default()
        }
    }

    #[test]
    fn empty_scenario_hash_is_stable_and_nonzero() {
        let h = scenario_hash(&Scenario::default());
        assert_ne!(h, 0);
        assert_eq!(h, scenario_hash(&Scenario::default()));
    }

    #[test]
    fn scenario_hash_sees_leg_changes() {
        assert_eq!(scenario_hash(&scenario(2.0)), scenario_hash(&scenario(2.0)));
        assert_ne!(scenario_hash(&scenario(2.0)), scenario_hash(&scenario(2.5)));
    }

    #[test]
    fn frame_hash_ignores_metrics_and_generation() {
        let t = Timeline::with_scenario(scenario(2.0), EngineConfig::default()).unwrap();
        let mut a = t.frame(50.0, &mut CreditLedger::new());
        let b = t.frame(50.0, &mut CreditLedger::new());
        a.metrics.total_us += 1_000;
        a.generation = a.generation.next();
        assert_eq!(frame_hash(&a), frame_hash(&b));
    }

    #[test]
    fn frame_hash_sees_time_and_delta() {
        let t = Timeline::with_scenario(scenario(2.0), EngineConfig::default()).unwrap();
        let mut ledger = CreditLedger::new();
        let first = t.frame(100.0, &mut ledger);
        let again = t.frame(100.0, &mut ledger);
        // Same time, but the second frame reports a zero delta.
        assert_ne!(frame_hash(&first), frame_hash(&again));
        let later = t.frame(101.0, &mut CreditLedger::new());
        assert_ne!(frame_hash(&first), frame_hash(&later));
    }
}
