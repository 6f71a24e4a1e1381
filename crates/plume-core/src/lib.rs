//! Core types and traits for the Plume timeline engine.
//!
//! This is the leaf crate of the workspace. It defines the canonical
//! data model every other crate consumes: identifiers, canonical legs
//! and agents, per-mode tables, time coercion, and the ordered
//! field-resolution helper used to read loosely-schematized input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod resolve;
pub mod scenario;
pub mod tables;
pub mod time;

pub use id::{AgentId, GenerationId, ModeId};
pub use resolve::{Accessor, FieldRule, Resolved};
pub use scenario::{Agent, DistanceSource, Leg, LngLat, Path, PathPoint, Scenario, ScenarioMeta};
pub use tables::{CreditWeights, EmissionFactors, ModeTable};
pub use time::{DAY_END, DAY_SECONDS};
