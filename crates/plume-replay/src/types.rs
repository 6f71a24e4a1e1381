//! Replay record types.
//!
//! A recording is JSON lines: one [`ReplayHeader`] followed by one
//! [`ReplayFrame`] per recorded query.

use serde::{Deserialize, Serialize};

/// First line of a recording.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayHeader {
    /// Recording format version; see [`FORMAT_VERSION`](crate::FORMAT_VERSION).
    pub format_version: u32,
    /// [`scenario_hash`](crate::hash::scenario_hash) of the recorded scenario.
    pub scenario_hash: u64,
    /// Playback multiplier in effect while recording. Informational.
    pub multiplier: f64,
}

impl ReplayHeader {
    /// A header for the current format version.
    pub fn new(scenario_hash: u64, multiplier: f64) -> Self {
        Self {
            format_version: crate::FORMAT_VERSION,
            scenario_hash,
            multiplier,
        }
    }
}

/// One recorded query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    /// Query time as evaluated (after clamping).
    pub time: f64,
    /// [`frame_hash`](crate::hash::frame_hash) of the frame.
    pub frame_hash: u64,
}
