//! Per-frame query metrics.
//!
//! [`QueryMetrics`] captures the timing of a single
//! [`Timeline::frame()`](crate::timeline::Timeline::frame) call, for
//! profiling and frame-budget monitoring.

use serde::{Deserialize, Serialize};

/// Timing and size metrics collected during one frame query.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMetrics {
    /// Wall-clock time for the entire frame, in microseconds.
    pub total_us: u64,
    /// Time spent resolving agent positions, in microseconds.
    pub positions_us: u64,
    /// Time spent reading the emission curves, in microseconds.
    pub emissions_us: u64,
    /// Time spent scoring credits and sorting the leaderboard, in microseconds.
    pub credits_us: u64,
    /// Number of agents that produced a position.
    pub agents_placed: usize,
}

impl QueryMetrics {
    /// Whether the frame took longer than `budget_us`.
    pub fn over_budget(&self, budget_us: u64) -> bool {
        self.total_us > budget_us
    }
}
