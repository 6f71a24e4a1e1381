//! Timeline queries over Plume scenarios.
//!
//! Provides the [`Timeline`] that owns the current scenario generation
//! and answers point-in-time queries: agent positions, cumulative
//! emission (global and per mode), the carbon-credit leaderboard, and
//! the reasoning log. A [`PlaybackClock`] drives query time for hosts
//! that animate the day.
//!
//! Per-scenario work (curves, reasoning log) happens once in
//! [`ScenarioGeneration::build`]; per-tick queries are read-only apart
//! from the caller-owned [`CreditLedger`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod clock;
pub mod config;
pub mod credit;
pub mod generation;
pub mod metrics;
pub mod position;
pub mod reasoning;
pub mod timeline;

pub use aggregate::{CumulativePoint, EmissionCurve, EmissionCurves, EmissionTotals};
pub use clock::{ClockEdge, PlaybackClock};
pub use config::{ConfigError, EngineConfig};
pub use credit::{agent_score, score_at, CreditLedger, CreditStanding};
pub use generation::ScenarioGeneration;
pub use metrics::QueryMetrics;
pub use position::{position_at, positions_at, AgentPosition, Placement};
pub use reasoning::{build_reasoning_log, ReasoningLogEntry};
pub use timeline::{Frame, Timeline};
