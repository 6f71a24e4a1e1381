//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the input for constructing a
//! [`Timeline`](crate::timeline::Timeline). It deserializes from JSON
//! with every field optional, and [`validate()`](EngineConfig::validate)
//! checks it once at construction.

use plume_core::{CreditWeights, ModeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── EngineConfig ────────────────────────────────────────────────

/// Tunables for timeline queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Credit points per km by mode. Default: [`CreditWeights::default()`].
    pub credit_weights: CreditWeights,
    /// Per-frame time budget in microseconds. Frames slower than this are
    /// logged at `warn`. Default: 16 000 (one 60 Hz frame).
    pub frame_budget_us: u64,
    /// Clamp query times into `[0, 86400)` before evaluating. Default: true.
    pub clamp_query_time: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            credit_weights: CreditWeights::default(),
            frame_budget_us: 16_000,
            clamp_query_time: true,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any error
    /// [`validate()`](Self::validate) reports.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidCreditWeight`] if a weight is negative or
    ///   not finite;
    /// - [`ConfigError::ZeroFrameBudget`] if `frame_budget_us` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((mode, value)) = self
            .credit_weights
            .table()
            .iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(ConfigError::InvalidCreditWeight {
                mode: mode.clone(),
                value,
            });
        }
        if self.frame_budget_us == 0 {
            return Err(ConfigError::ZeroFrameBudget);
        }
        Ok(())
    }
}

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected while building or validating engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config document is not valid JSON for [`EngineConfig`].
    #[error("invalid engine config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A credit weight is negative, NaN or infinite.
    #[error("credit weight for mode {mode} must be finite and non-negative, got {value}")]
    InvalidCreditWeight {
        /// The offending mode.
        mode: ModeId,
        /// The invalid weight.
        value: f64,
    },
    /// The frame budget is zero.
    #[error("frame budget must be positive")]
    ZeroFrameBudget,
    /// A playback multiplier is negative, NaN or infinite.
    #[error("playback multiplier must be finite and non-negative, got {value}")]
    InvalidMultiplier {
        /// The invalid value.
        value: f64,
    },
}
