//! Error types for the replay system.

use std::io;

use thiserror::Error;

/// Errors that can occur during replay recording, playback, or comparison.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// An I/O error occurred during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A record could not be encoded.
    #[error("failed to encode replay record: {0}")]
    Encode(#[from] serde_json::Error),
    /// The stream ended before a header was read.
    #[error("replay stream has no header")]
    MissingHeader,
    /// A line could not be decoded as the expected record.
    #[error("malformed replay record on line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number.
        line: u64,
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The format version is not supported by this build.
    #[error("unsupported replay format version {found}")]
    UnsupportedVersion {
        /// The version found in the header.
        found: u32,
    },
    /// The recording was made against a different scenario.
    #[error("scenario hash mismatch: recorded={recorded:#018x}, current={current:#018x}")]
    ScenarioMismatch {
        /// Hash from the recording header.
        recorded: u64,
        /// Hash of the currently loaded scenario.
        current: u64,
    },
}
