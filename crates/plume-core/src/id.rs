//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an agent within a scenario.
///
/// Agent ids come from loosely-typed input, so numeric ids are
/// stringified on ingest. Two agents may share an id; nothing in the
/// engine relies on uniqueness beyond presentation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for AgentId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// A travel mode name, e.g. `car`, `bus`, `walk`.
///
/// Mode names are trimmed and lower-cased on construction so that
/// `"Car "` in one record and `"car"` in another (or in the emission
/// factor table) name the same mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct ModeId(String);

impl ModeId {
    /// Name used for legs whose mode could not be resolved.
    pub const UNKNOWN: &'static str = "unknown";

    /// Create a normalized mode id.
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// The mode assigned when neither leg nor agent declares one.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Whether this is the [`unknown`](Self::unknown) mode.
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    /// Borrow the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModeId {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for ModeId {
    fn from(v: String) -> Self {
        Self::new(&v)
    }
}

/// Identifies one fully-built scenario generation.
///
/// Incremented every time a scenario (or day) is loaded, so outputs
/// can be tied to the snapshot they were computed from.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GenerationId(pub u64);

impl GenerationId {
    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GenerationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_ids_normalize_case_and_whitespace() {
        assert_eq!(ModeId::new(" Car "), ModeId::new("car"));
        assert_eq!(ModeId::from("BUS").as_str(), "bus");
    }

    #[test]
    fn mode_id_deserializes_through_normalization() {
        let m: ModeId = serde_json::from_str("\"Walk\"").unwrap();
        assert_eq!(m, ModeId::new("walk"));
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"walk\"");
    }

    #[test]
    fn unknown_mode_is_flagged() {
        assert!(ModeId::unknown().is_unknown());
        assert!(!ModeId::new("car").is_unknown());
    }

    #[test]
    fn generation_ids_advance() {
        assert_eq!(GenerationId(3).next(), GenerationId(4));
        assert_eq!(GenerationId::default(), GenerationId(0));
    }
}
