//! Test utilities and fixtures for Plume development.
//!
//! - [`fixtures`]: builders for raw scenario JSON, so ingest tests can
//!   describe input documents without hand-writing nested `json!` blocks.
//! - [`canonical`]: builders for already-canonical legs and agents, for
//!   engine tests that want to skip ingest.
//! - [`synthetic`]: a seeded generator for large, realistic scenarios
//!   used by property tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod canonical;
pub mod fixtures;
pub mod synthetic;

pub use canonical::{agent, CanonicalLeg};
pub use fixtures::{AgentDoc, LegDoc, ScenarioDoc};
pub use synthetic::{synthetic_scenario, SyntheticProfile};
