//! The timeline: current generation plus point-in-time queries.
//!
//! [`Timeline`] is the primary user-facing API. It owns the current
//! [`ScenarioGeneration`] and the [`EngineConfig`], and answers
//! "what does the day look like at `t`" via [`frame()`](Timeline::frame).
//!
//! # Recomputation model
//!
//! Loading a scenario builds a complete new generation and then swaps
//! it in; queries never see a partially built one. Queries take `&self`
//! and touch no state except the caller's [`CreditLedger`].
//!
//! Generations are held in an [`Arc`], so a host can keep reading an old
//! generation (via [`generation()`](Timeline::generation)) while a new
//! one is loaded.

use std::sync::Arc;
use std::time::Instant;

use plume_core::time::clamp_to_day;
use plume_core::{GenerationId, Scenario};
use plume_ingest::IngestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregate::EmissionTotals;
use crate::config::{ConfigError, EngineConfig};
use crate::credit::{score_at, CreditLedger, CreditStanding};
use crate::generation::ScenarioGeneration;
use crate::metrics::QueryMetrics;
use crate::position::{positions_at, AgentPosition};
use crate::reasoning::ReasoningLogEntry;

// Compile-time assertion: Timeline and its generations are Send + Sync.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Timeline>();
        assert_send_sync::<Arc<ScenarioGeneration>>();
    }
};

// ── Frame ───────────────────────────────────────────────────────

/// Everything the rendering layer needs at one query time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// The evaluated time, after clamping.
    pub time: f64,
    /// Generation the frame was computed from.
    pub generation: GenerationId,
    /// Positions of every agent that has one, in agent order.
    pub positions: Vec<AgentPosition>,
    /// Emission as of `time`, global and per mode.
    pub emissions: EmissionTotals,
    /// Agents by descending credit score.
    pub leaderboard: Vec<CreditStanding>,
    /// Timing of this query.
    pub metrics: QueryMetrics,
}

// ── Timeline ────────────────────────────────────────────────────

/// Owns the current scenario generation and answers time queries.
///
/// # Example
///
/// ```
/// use plume_engine::{CreditLedger, EngineConfig, Timeline};
/// use serde_json::json;
///
/// let mut timeline = Timeline::new(EngineConfig::default()).unwrap();
/// timeline.load_json(&json!({
///     "meta": {"emission_factors": {"car": 120}},
///     "agents": [{"id": "a", "mode": "car",
///                 "legs": [{"start": 0, "end": 100, "distance_km": 2,
///                           "path": [[0, 0], [1, 1]]}]}]
/// }));
///
/// let mut ledger = CreditLedger::new();
/// let frame = timeline.frame(100.0, &mut ledger);
/// assert_eq!(frame.emissions.global_g, 240.0);
/// assert_eq!(frame.positions.len(), 1);
/// ```
#[derive(Debug)]
pub struct Timeline {
    generation: Arc<ScenarioGeneration>,
    config: EngineConfig,
}

impl Timeline {
    /// Create a timeline with an empty scenario.
    ///
    /// # Errors
    ///
    /// Returns any error [`EngineConfig::validate`] reports.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            generation: Arc::new(ScenarioGeneration::empty(GenerationId::default())),
            config,
        })
    }

    /// Create a timeline and load `scenario` into it.
    ///
    /// # Errors
    ///
    /// Returns any error [`EngineConfig::validate`] reports.
    pub fn with_scenario(scenario: Scenario, config: EngineConfig) -> Result<Self, ConfigError> {
        let mut timeline = Self::new(config)?;
        timeline.load(scenario);
        Ok(timeline)
    }

    /// Replace the current scenario, returning the new generation's id.
    ///
    /// The new generation is fully built before it replaces the old one.
    /// Callers should [`reset`](CreditLedger::reset) their ledger, since
    /// agents of the old scenario are unrelated to the new ones.
    pub fn load(&mut self, scenario: Scenario) -> GenerationId {
        let id = self.generation.id().next();
        let generation = ScenarioGeneration::build(id, scenario);
        self.generation = Arc::new(generation);
        id
    }

    /// Ingest a scenario document and load it.
    pub fn load_json(&mut self, doc: &Value) -> GenerationId {
        self.load(plume_ingest::load_scenario(doc))
    }

    /// Select day `index` of a (possibly multi-day) document and load it.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::DayOutOfRange`] if the day does not exist;
    /// the current generation is then left untouched.
    pub fn load_day(&mut self, doc: &Value, index: usize) -> Result<GenerationId, IngestError> {
        let scenario = plume_ingest::load_day(doc, index)?;
        Ok(self.load(scenario))
    }

    /// The current generation.
    pub fn generation(&self) -> &Arc<ScenarioGeneration> {
        &self.generation
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The time a query for `t` actually evaluates.
    pub fn query_time(&self, t: f64) -> f64 {
        if self.config.clamp_query_time {
            clamp_to_day(t)
        } else {
            t
        }
    }

    /// Agent positions at `t`.
    pub fn positions_at(&self, t: f64) -> Vec<AgentPosition> {
        positions_at(self.generation.agents(), self.query_time(t))
    }

    /// Emission totals as of `t`.
    pub fn emissions_at(&self, t: f64) -> EmissionTotals {
        self.generation.curves().totals_at(self.query_time(t))
    }

    /// Credit leaderboard at `t`, updating `ledger`.
    pub fn leaderboard(&self, t: f64, ledger: &mut CreditLedger) -> Vec<CreditStanding> {
        score_at(
            self.generation.agents(),
            self.query_time(t),
            &self.config.credit_weights,
            ledger,
        )
    }

    /// The chronological reasoning log of the current scenario.
    pub fn reasoning_log(&self) -> &[ReasoningLogEntry] {
        self.generation.reasoning_log()
    }

    /// Evaluate every per-tick output at `t`.
    pub fn frame(&self, t: f64, ledger: &mut CreditLedger) -> Frame {
        let time = self.query_time(t);
        let agents = self.generation.agents();
        let frame_start = Instant::now();

        let positions = positions_at(agents, time);
        let positions_us = frame_start.elapsed().as_micros() as u64;

        let mark = Instant::now();
        let emissions = self.generation.curves().totals_at(time);
        let emissions_us = mark.elapsed().as_micros() as u64;

        let mark = Instant::now();
        let leaderboard = score_at(agents, time, &self.config.credit_weights, ledger);
        let credits_us = mark.elapsed().as_micros() as u64;

        let metrics = QueryMetrics {
            total_us: frame_start.elapsed().as_micros() as u64,
            positions_us,
            emissions_us,
            credits_us,
            agents_placed: positions.len(),
        };
        if metrics.over_budget(self.config.frame_budget_us) {
            tracing::warn!(
                generation = %self.generation.id(),
                time,
                total_us = metrics.total_us,
                budget_us = self.config.frame_budget_us,
                "frame query exceeded its budget"
            );
        }

        Frame {
            time,
            generation: self.generation.id(),
            positions,
            emissions,
            leaderboard,
            metrics,
        }
    }
}
