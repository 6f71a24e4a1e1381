//! Error types for scenario ingest.
//!
//! Ingest itself never fails on schema problems; these cover input that
//! cannot be read as JSON at all and out-of-range day selection.

use thiserror::Error;

/// Errors surfaced while loading a scenario document.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The document is not valid JSON.
    #[error("scenario is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The requested day does not exist in the document.
    #[error("day {index} requested but the document holds {available} day(s)")]
    DayOutOfRange {
        /// The requested day index.
        index: usize,
        /// Number of days the document holds.
        available: usize,
    },
}
