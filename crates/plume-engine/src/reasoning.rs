//! Reasoning log.
//!
//! Collects the free-text rationale attached to legs (falling back to the
//! agent's own rationale) into one chronological log.

use plume_core::time::format_clock;
use plume_core::{Agent, AgentId, Leg, ModeId};
use serde::{Deserialize, Serialize};

/// One rationale line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReasoningLogEntry {
    /// Agent the leg belongs to.
    pub agent_id: AgentId,
    /// Mode of the leg.
    pub mode: ModeId,
    /// Rationale text with a metrics suffix when available.
    pub reason: String,
    /// Leg start, seconds-of-day.
    pub timestamp: Option<f64>,
    /// Index of the leg within the agent's legs.
    pub move_index: usize,
}

impl ReasoningLogEntry {
    /// The timestamp as `HH:MM:SS`, if it resolved.
    pub fn clock(&self) -> Option<String> {
        self.timestamp.map(format_clock)
    }
}

/// Build the log for every leg of every agent.
///
/// Legs with no non-empty rationale (neither their own nor their
/// agent's) are left out. Entries are ordered by start time; entries
/// without one go last. The sort is stable.
pub fn build_reasoning_log(agents: &[Agent]) -> Vec<ReasoningLogEntry> {
    let mut log: Vec<ReasoningLogEntry> = agents
        .iter()
        .flat_map(|agent| {
            agent.legs.iter().enumerate().filter_map(move |(index, leg)| {
                let text = [leg.rationale.as_deref(), agent.rationale.as_deref()]
                    .into_iter()
                    .flatten()
                    .map(str::trim)
                    .find(|s| !s.is_empty())?;
                Some(ReasoningLogEntry {
                    agent_id: agent.id.clone(),
                    mode: leg.mode.clone(),
                    reason: with_metrics(text, leg),
                    timestamp: leg.start_time,
                    move_index: index,
                })
            })
        })
        .collect();

    log.sort_by(|a, b| {
        let ta = a.timestamp.unwrap_or(f64::INFINITY);
        let tb = b.timestamp.unwrap_or(f64::INFINITY);
        ta.total_cmp(&tb)
    });
    log
}

fn with_metrics(text: &str, leg: &Leg) -> String {
    let mut parts = Vec::with_capacity(2);
    if leg.distance_km > 0.0 {
        parts.push(format!("{:.2} km", leg.distance_km));
    }
    if let Some(secs) = leg.duration().filter(|d| *d > 0.0) {
        parts.push(format!("{:.0} min", secs / 60.0));
    }
    if parts.is_empty() {
        text.to_string()
    } else {
        format!("{text} ({})", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_test_utils::{agent, CanonicalLeg};

    #[test]
    fn leg_rationale_with_metrics() {
        let a = agent(
            "a",
            [CanonicalLeg::new(600.0, 1500.0)
                .mode("bike")
                .distance_km(3.2)
                .rationale("a b")
                .build()],
        );
        let log = build_reasoning_log(&[a]);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].reason, "a b (3.20 km, 15 min)");
        assert_eq!(log[0].mode, ModeId::new("bike"));
        assert_eq!(log[0].clock().as_deref(), Some("00:10:00"));
    }

    #[test]
    fn agent_rationale_is_the_fallback() {
        let mut a = agent(
            "a",
            [
                CanonicalLeg::new(0.0, 0.0).build(),
                CanonicalLeg::new(10.0, 10.0).rationale("own").build(),
            ],
        );
        a.rationale = Some("habit".to_string());
        let log = build_reasoning_log(&[a]);
        let reasons: Vec<&str> = log.iter().map(|e| e.reason.as_str()).collect();
        assert_eq!(reasons, ["habit", "own"]);
        assert_eq!(log[1].move_index, 1);
    }

    #[test]
    fn legs_without_text_are_dropped() {
        let a = agent(
            "a",
            [
                CanonicalLeg::new(0.0, 60.0).rationale("   ").build(),
                CanonicalLeg::new(60.0, 120.0).build(),
            ],
        );
        assert!(build_reasoning_log(&[a]).is_empty());
        assert!(build_reasoning_log(&[agent("ghost", [])]).is_empty());
    }

    #[test]
    fn sorted_by_start_with_untimed_last() {
        let agents = [
            agent(
                "late",
                [CanonicalLeg::with_times(None, Some(5.0)).rationale("no start").build()],
            ),
            agent("b", [CanonicalLeg::new(300.0, 300.0).rationale("second").build()]),
            agent("c", [CanonicalLeg::new(100.0, 100.0).rationale("first").build()]),
        ];
        let reasons: Vec<String> = build_reasoning_log(&agents)
            .into_iter()
            .map(|e| e.reason)
            .collect();
        assert_eq!(reasons, ["first", "second", "no start"]);
    }

    #[test]
    fn distance_only_suffix() {
        let a = agent(
            "a",
            [CanonicalLeg::new(5.0, 5.0).distance_km(1.0).rationale("hop").build()],
        );
        assert_eq!(build_reasoning_log(&[a])[0].reason, "hop (1.00 km)");
    }
}
