//! Plume: timeline analytics for agent mobility.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Plume sub-crates. For most users, adding `plume` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use plume::prelude::*;
//!
//! let doc = serde_json::json!({
//!     "meta": { "emission_factors": { "car": 120.0 } },
//!     "agents": [{
//!         "id": "ana",
//!         "legs": [{
//!             "mode": "car",
//!             "start_time": "08:00",
//!             "end_time": "08:30",
//!             "path": [[4.35, 50.85], [4.40, 50.85]]
//!         }]
//!     }]
//! });
//!
//! let mut timeline = Timeline::new(EngineConfig::default()).unwrap();
//! timeline.load_json(&doc);
//!
//! // Halfway through the trip: placed on the road, nothing emitted yet.
//! let mut ledger = CreditLedger::new();
//! let frame = timeline.frame(8.25 * 3600.0, &mut ledger);
//! assert_eq!(frame.positions.len(), 1);
//! assert_eq!(frame.emissions.global_g, 0.0);
//!
//! // Emission is booked when the leg completes.
//! assert!(timeline.emissions_at(9.0 * 3600.0).global_g > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plume-core` | IDs, canonical scenario model, mode tables, time helpers |
//! | [`geo`] | `plume-geo` | Haversine distance and path interpolation |
//! | [`ingest`] | `plume-ingest` | Tolerant scenario loading and leg extraction |
//! | [`engine`] | `plume-engine` | Timeline queries, emission curves, credits, playback clock |
//! | [`replay`] | `plume-replay` | Deterministic frame recording and verification |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, tables and IDs (`plume-core`).
///
/// Contains the canonical [`types::Scenario`] model, the
/// [`types::EmissionFactors`] and [`types::CreditWeights`] tables, and
/// seconds-of-day helpers.
pub use plume_core as types;

/// Great-circle geometry (`plume-geo`).
pub use plume_geo as geo;

/// Scenario ingestion (`plume-ingest`).
///
/// [`ingest::load_scenario`] never fails; malformed entries are dropped.
/// [`ingest::parse_scenario`] reports JSON syntax errors.
pub use plume_ingest as ingest;

/// Timeline queries (`plume-engine`).
///
/// [`engine::Timeline`] answers point-in-time queries over the loaded
/// scenario; [`engine::PlaybackClock`] drives the query time.
pub use plume_engine as engine;

/// Deterministic replay recording and verification (`plume-replay`).
///
/// Record frame hashes with [`replay::ReplayWriter`], verify a timeline
/// against them with [`replay::replay_and_compare`].
pub use plume_replay as replay;

/// Common imports for typical Plume usage.
///
/// ```rust
/// use plume::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use plume_core::{
        Agent, AgentId, CreditWeights, EmissionFactors, Leg, LngLat, ModeId, PathPoint, Scenario,
        DAY_SECONDS,
    };

    // Geometry
    pub use plume_geo::{haversine_km, interpolate_path};

    // Ingestion
    pub use plume_ingest::{load_day, load_scenario, parse_scenario, IngestError};

    // Engine
    pub use plume_engine::{
        ClockEdge, CreditLedger, CreditStanding, EmissionTotals, EngineConfig, Frame,
        PlaybackClock, ReasoningLogEntry, Timeline,
    };

    // Replay
    pub use plume_replay::{ReplayReader, ReplayWriter};
}
