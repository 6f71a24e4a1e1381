//! Carbon credit scoring.
//!
//! An agent's score at `t` is the sum, over legs completed by `t`, of
//! `distance_km * weight(mode)`. The "how much did it go up this tick"
//! delta needs the score from the previous query; that memory lives in a
//! [`CreditLedger`] the caller owns and passes to every call.

use plume_core::{Agent, AgentId, CreditWeights};
use serde::{Deserialize, Serialize};

// ── CreditLedger ────────────────────────────────────────────────

/// Per-agent score recorded at the previous query.
///
/// Scores are kept by the agent's position in the scenario's agent list,
/// not by id, since ids need not be unique. One ledger belongs to one
/// query loop. Reset it when the scenario changes, or the first deltas
/// of the new scenario are measured against the old one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreditLedger {
    previous: Vec<Option<f64>>,
}

impl CreditLedger {
    /// An empty ledger; every agent's previous score counts as `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score recorded for the agent at `index` at the last query.
    pub fn previous(&self, index: usize) -> Option<f64> {
        self.previous.get(index).copied().flatten()
    }

    /// Record `score` for the agent at `index`, returning the
    /// non-negative increase over the previously recorded score.
    pub fn record(&mut self, index: usize, score: f64) -> f64 {
        if index >= self.previous.len() {
            self.previous.resize(index + 1, None);
        }
        let before = self.previous[index].replace(score).unwrap_or(0.0);
        (score - before).max(0.0)
    }

    /// Forget every recorded score.
    pub fn reset(&mut self) {
        self.previous.clear();
    }

    /// Number of agents with a recorded score.
    pub fn len(&self) -> usize {
        self.previous.iter().filter(|p| p.is_some()).count()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Scoring ─────────────────────────────────────────────────────

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreditStanding {
    /// Agent identifier.
    pub agent_id: AgentId,
    /// Credit accumulated over completed legs.
    pub score: f64,
    /// Increase since the previous query, never negative.
    pub delta: f64,
}

/// Credit earned by `agent` over legs completed by `t`.
pub fn agent_score(agent: &Agent, t: f64, weights: &CreditWeights) -> f64 {
    agent
        .legs
        .iter()
        .filter(|leg| leg.is_complete_at(t))
        .map(|leg| leg.distance_km * weights.weight(&leg.mode))
        .fold(0.0, |acc, credit| acc + credit)
}

/// Score every agent at `t` and update `ledger`.
///
/// The result is sorted by descending score. Agents with equal scores
/// keep their input order.
pub fn score_at(
    agents: &[Agent],
    t: f64,
    weights: &CreditWeights,
    ledger: &mut CreditLedger,
) -> Vec<CreditStanding> {
    let mut standings: Vec<CreditStanding> = agents
        .iter()
        .enumerate()
        .map(|(index, agent)| {
            let score = agent_score(agent, t, weights);
            CreditStanding {
                agent_id: agent.id.clone(),
                score,
                delta: ledger.record(index, score),
            }
        })
        .collect();
    standings.sort_by(|a, b| b.score.total_cmp(&a.score));
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_test_utils::{agent, CanonicalLeg};
    use proptest::prelude::*;

    fn commuters() -> Vec<Agent> {
        vec![
            agent(
                "driver",
                [CanonicalLeg::new(0.0, 100.0).mode("car").distance_km(20.0).build()],
            ),
            agent(
                "walker",
                [
                    CanonicalLeg::new(0.0, 100.0).mode("walk").distance_km(1.0).build(),
                    CanonicalLeg::new(200.0, 300.0).mode("walk").distance_km(2.0).build(),
                ],
            ),
            agent(
                "cyclist",
                [CanonicalLeg::new(0.0, 300.0).mode("bike").distance_km(2.5).build()],
            ),
        ]
    }

    #[test]
    fn only_completed_legs_score() {
        let agents = commuters();
        let w = CreditWeights::default();
        assert_eq!(agent_score(&agents[1], 99.0, &w), 0.0);
        assert_eq!(agent_score(&agents[1], 100.0, &w), 10.0);
        assert_eq!(agent_score(&agents[1], 300.0, &w), 30.0);
    }

    #[test]
    fn leaderboard_sorts_descending_and_reports_deltas() {
        let agents = commuters();
        let w = CreditWeights::default();
        let mut ledger = CreditLedger::new();

        let first = score_at(&agents, 100.0, &w, &mut ledger);
        let ids: Vec<&str> = first.iter().map(|s| s.agent_id.as_str()).collect();
        assert_eq!(ids, ["walker", "driver", "cyclist"]);
        assert_eq!(first[0].delta, 10.0);

        let second = score_at(&agents, 300.0, &w, &mut ledger);
        assert_eq!(second[0].agent_id.as_str(), "walker");
        assert_eq!(second[0].score, 30.0);
        assert_eq!(second[0].delta, 20.0);
        assert_eq!(second[1].agent_id.as_str(), "cyclist");
        assert_eq!(second[1].delta, 20.0);
    }

    #[test]
    fn rewinding_never_reports_negative_delta() {
        let agents = commuters();
        let w = CreditWeights::default();
        let mut ledger = CreditLedger::new();
        score_at(&agents, 300.0, &w, &mut ledger);
        let rewound = score_at(&agents, 0.0, &w, &mut ledger);
        assert!(rewound.iter().all(|s| s.delta == 0.0));
        assert_eq!(ledger.previous(1), Some(0.0));
    }

    #[test]
    fn ties_keep_input_order() {
        let agents = [agent("b", []), agent("a", []), agent("c", [])];
        let mut ledger = CreditLedger::new();
        let rows = score_at(&agents, 0.0, &CreditWeights::default(), &mut ledger);
        let ids: Vec<&str> = rows.iter().map(|s| s.agent_id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn reset_forgets_previous_scores() {
        let agents = commuters();
        let w = CreditWeights::default();
        let mut ledger = CreditLedger::new();
        score_at(&agents, 300.0, &w, &mut ledger);
        assert_eq!(ledger.len(), 3);
        ledger.reset();
        assert!(ledger.is_empty());
        let again = score_at(&agents, 300.0, &w, &mut ledger);
        assert_eq!(again[0].delta, 30.0);
    }

    #[test]
    fn shared_ids_keep_separate_previous_scores() {
        let agents = [
            agent("x", [CanonicalLeg::new(0.0, 10.0).mode("walk").distance_km(1.0).build()]),
            agent("x", []),
        ];
        let w = CreditWeights::default();
        let mut ledger = CreditLedger::new();
        let first = score_at(&agents, 20.0, &w, &mut ledger);
        assert_eq!(first[0].delta, 10.0);
        for t in [30.0, 40.0] {
            let rows = score_at(&agents, t, &w, &mut ledger);
            assert_eq!(rows[0].score, 10.0);
            assert!(rows.iter().all(|r| r.delta == 0.0), "{rows:?}");
        }
        assert_eq!(ledger.previous(0), Some(10.0));
        assert_eq!(ledger.previous(1), Some(0.0));
    }

    #[test]
    fn no_completed_legs_scores_positive_zero() {
        let a = agent("idle", [CanonicalLeg::new(50.0, 60.0).mode("walk").distance_km(1.0).build()]);
        let score = agent_score(&a, 0.0, &CreditWeights::default());
        assert!(score == 0.0 && score.is_sign_positive());
        let rows = score_at(&[agent("ghost", [])], 0.0, &CreditWeights::default(), &mut CreditLedger::new());
        assert_eq!(serde_json::to_string(&rows[0].score).unwrap(), "0.0");
    }

    #[test]
    fn unknown_modes_score_nothing() {
        let a = agent("x", [CanonicalLeg::new(0.0, 1.0).mode("zeppelin").distance_km(50.0).build()]);
        assert_eq!(agent_score(&a, 10.0, &CreditWeights::default()), 0.0);
    }

    proptest! {
        #[test]
        fn deltas_are_never_negative(mut times in prop::collection::vec(-100.0f64..400.0, 1..30)) {
            let agents = commuters();
            let w = CreditWeights::default();
            let mut ledger = CreditLedger::new();
            times.sort_by(f64::total_cmp);
            for t in times {
                for s in score_at(&agents, t, &w, &mut ledger) {
                    prop_assert!(s.delta >= 0.0);
                }
            }
        }
    }
}
