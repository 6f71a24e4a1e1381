//! Cumulative emission curves.
//!
//! Built once per scenario generation from every leg's completion event
//! and queried many times per second as the clock advances. A curve is
//! a list of [`CumulativePoint`]s sorted by completion time with a
//! running prefix sum, so "emission as of `t`" is a binary search.

use indexmap::IndexMap;
use plume_core::{Agent, ModeId};
use serde::{Deserialize, Serialize};

// ── CumulativePoint ─────────────────────────────────────────────

/// One step of a cumulative curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    /// Completion time of the leg that produced this step.
    pub t: f64,
    /// Total emission of every leg completed up to and including this step.
    pub emission_g_cum: f64,
}

// ── EmissionCurve ───────────────────────────────────────────────

/// A monotonically non-decreasing step function of emitted mass over time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionCurve {
    points: Vec<CumulativePoint>,
}

impl EmissionCurve {
    /// Build a curve from `(completion_time, emission_g)` events.
    ///
    /// Events are stably sorted by time, so events sharing a completion
    /// time keep their input order.
    pub fn from_events(mut events: Vec<(f64, f64)>) -> Self {
        events.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut running = 0.0;
        let points = events
            .into_iter()
            .map(|(t, g)| {
                running += g;
                CumulativePoint {
                    t,
                    emission_g_cum: running,
                }
            })
            .collect();
        Self { points }
    }

    /// Cumulative emission as of `t`, inclusive.
    ///
    /// A leg completing exactly at `t` is counted. Before the first
    /// completion this is `0`; after the last it is [`total`](Self::total).
    pub fn as_of(&self, t: f64) -> f64 {
        let after = self.points.partition_point(|p| p.t <= t);
        match after.checked_sub(1) {
            Some(i) => self.points[i].emission_g_cum,
            None => 0.0,
        }
    }

    /// Emission once every leg has completed.
    pub fn total(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.emission_g_cum)
    }

    /// The curve's steps in time order.
    pub fn points(&self) -> &[CumulativePoint] {
        &self.points
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no steps.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ── EmissionCurves ──────────────────────────────────────────────

/// The global curve plus one curve per mode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionCurves {
    /// Every leg of every agent.
    pub global: EmissionCurve,
    /// Legs partitioned by mode, in first-seen mode order.
    pub per_mode: IndexMap<ModeId, EmissionCurve>,
}

impl EmissionCurves {
    /// Build the curves in one pass over every leg.
    ///
    /// Legs without a resolvable completion time are skipped.
    pub fn build(agents: &[Agent]) -> Self {
        let mut global = Vec::new();
        let mut by_mode: IndexMap<ModeId, Vec<(f64, f64)>> = IndexMap::new();

        for leg in agents.iter().flat_map(|a| &a.legs) {
            let Some(t) = leg.completion_time() else {
                continue;
            };
            global.push((t, leg.emission_g));
            by_mode
                .entry(leg.mode.clone())
                .or_default()
                .push((t, leg.emission_g));
        }

        Self {
            global: EmissionCurve::from_events(global),
            per_mode: by_mode
                .into_iter()
                .map(|(mode, events)| (mode, EmissionCurve::from_events(events)))
                .collect(),
        }
    }

    /// Global and per-mode emission as of `t`.
    pub fn totals_at(&self, t: f64) -> EmissionTotals {
        EmissionTotals {
            global_g: self.global.as_of(t),
            per_mode_g: self
                .per_mode
                .iter()
                .map(|(mode, curve)| (mode.clone(), curve.as_of(t)))
                .collect(),
        }
    }

    /// Emission once every leg has completed.
    pub fn grand_total(&self) -> f64 {
        self.global.total()
    }
}

/// Emission totals at one query time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionTotals {
    /// Grams emitted by every completed leg.
    pub global_g: f64,
    /// Grams emitted per mode, in first-seen mode order.
    pub per_mode_g: IndexMap<ModeId, f64>,
}
