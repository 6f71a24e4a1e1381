//! Immutable scenario generations.
//!
//! A [`ScenarioGeneration`] is everything derived from one loaded
//! scenario: the canonical agents, the emission curves, and the
//! reasoning log. It is built in one pass and never patched; loading a
//! different scenario builds a new generation alongside the old one.

use plume_core::{Agent, GenerationId, Scenario};

use crate::aggregate::EmissionCurves;
use crate::reasoning::{build_reasoning_log, ReasoningLogEntry};

/// One fully built, read-only scenario snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioGeneration {
    id: GenerationId,
    scenario: Scenario,
    curves: EmissionCurves,
    reasoning: Vec<ReasoningLogEntry>,
}

impl ScenarioGeneration {
    /// Derive every per-scenario artifact from `scenario`.
    pub fn build(id: GenerationId, scenario: Scenario) -> Self {
        let curves = EmissionCurves::build(&scenario.agents);
        let reasoning = build_reasoning_log(&scenario.agents);
        tracing::info!(
            generation = %id,
            agents = scenario.agents.len(),
            legs = scenario.leg_count(),
            modes = curves.per_mode.len(),
            total_emission_g = curves.grand_total(),
            log_entries = reasoning.len(),
            "built scenario generation"
        );
        Self {
            id,
            scenario,
            curves,
            reasoning,
        }
    }

    /// An empty generation: no agents, zero everywhere.
    pub fn empty(id: GenerationId) -> Self {
        Self {
            id,
            scenario: Scenario::default(),
            curves: EmissionCurves::default(),
            reasoning: Vec::new(),
        }
    }

    /// This generation's id.
    pub fn id(&self) -> GenerationId {
        self.id
    }

    /// The canonical scenario.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Canonical agents in input order.
    pub fn agents(&self) -> &[Agent] {
        &self.scenario.agents
    }

    /// Global and per-mode emission curves.
    pub fn curves(&self) -> &EmissionCurves {
        &self.curves
    }

    /// The chronological reasoning log.
    pub fn reasoning_log(&self) -> &[ReasoningLogEntry] {
        &self.reasoning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_test_utils::{agent, CanonicalLeg};

    #[test]
    fn build_derives_curves_and_log() {
        let scenario = Scenario {
            agents: vec![agent(
                "a",
                [CanonicalLeg::new(0.0, 10.0).emission_g(5.0).rationale("go").build()],
            )],
            ..Scenario::default()
        };
        let g = ScenarioGeneration::build(GenerationId(3), scenario);
        assert_eq!(g.id(), GenerationId(3));
        assert_eq!(g.curves().grand_total(), 5.0);
        assert_eq!(g.reasoning_log().len(), 1);
        assert_eq!(g.agents().len(), 1);
    }

    #[test]
    fn empty_generation_has_nothing() {
        let g = ScenarioGeneration::empty(GenerationId::default());
        assert!(g.agents().is_empty());
        assert!(g.curves().global.is_empty());
        assert!(g.reasoning_log().is_empty());
    }
}
