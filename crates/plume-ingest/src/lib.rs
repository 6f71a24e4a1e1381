//! Scenario ingest for Plume.
//!
//! Turns loosely-schematized scenario JSON into the canonical
//! [`Scenario`](plume_core::Scenario) model. Parsing is permissive by
//! construction: malformed points, legs and agents are dropped or
//! defaulted and logged at `debug`/`trace`, never raised. The only
//! error surfaced to callers is JSON that does not parse at all (or a
//! day index that does not exist).
//!
//! # Pipeline
//!
//! ```text
//! raw agent ──► legs::extract_legs ──► LegDraft ──► annotate ──► Leg
//!                   │
//!                   └── path::normalize (per leg)
//! ```
//!
//! Field aliases live in [`rules`] as ordered
//! [`FieldRule`](plume_core::FieldRule)s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod annotate;
pub mod error;
pub mod legs;
pub mod path;
pub mod rules;
pub mod scenario;
pub mod text;

pub use annotate::annotate;
pub use error::IngestError;
pub use legs::{extract_legs, LegDraft};
pub use path::{normalize, ParsedPoint};
pub use scenario::{
    day_count, load_day, load_scenario, parse_scenario, scenario_from_reader, select_day,
};
pub use text::{extract_text, rationale};
