//! Deterministic replay verification for Plume timelines.
//!
//! Records the outputs of a sequence of timeline queries as per-frame
//! hashes, and replays them against a timeline to prove the engine is a
//! pure function of scenario and query time.
//!
//! # Architecture
//!
//! - [`ReplayWriter`] records frames to any `Write` sink
//! - [`ReplayReader`] plays back frames from any `BufRead` source
//! - [`replay_and_compare`] and [`diff_frames`] verify determinism
//! - [`record_session`] records a list of query times in one call
//!
//! # Format
//!
//! ```text
//! {"format_version":1,"scenario_hash":...,"multiplier":60.0}
//! {"time":21600.0,"frame_hash":...}
//! {"time":22500.0,"frame_hash":...}
//! ```
//!
//! Each frame line holds the evaluated query time and an FNV-1a hash
//! of the frame's outputs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod reader;
pub mod types;
pub mod writer;

pub use compare::{diff_frames, record_session, replay_and_compare, DivergenceKind, DivergenceReport};
pub use error::ReplayError;
pub use hash::{frame_hash, scenario_hash};
pub use reader::ReplayReader;
pub use types::{ReplayFrame, ReplayHeader};
pub use writer::ReplayWriter;

/// Current recording format version.
pub const FORMAT_VERSION: u32 = 1;
