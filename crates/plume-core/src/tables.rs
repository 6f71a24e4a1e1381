//! Per-mode lookup tables: emission factors and credit weights.
//!
//! Both tables map a [`ModeId`] to a number and keep insertion order so
//! that anything iterating them (per-mode totals, debug output) is
//! deterministic across runs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::ModeId;

/// An insertion-ordered `ModeId -> f64` table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeTable(IndexMap<ModeId, f64>);

impl ModeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert or replace the value for `mode`.
    pub fn insert(&mut self, mode: impl Into<ModeId>, value: f64) {
        self.0.insert(mode.into(), value);
    }

    /// Look up the value for `mode`.
    pub fn get(&self, mode: &ModeId) -> Option<f64> {
        self.0.get(mode).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ModeId, f64)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }
}

impl<M: Into<ModeId>> FromIterator<(M, f64)> for ModeTable {
    fn from_iter<I: IntoIterator<Item = (M, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(m, v)| (m.into(), v)).collect())
    }
}

/// Grams of pollutant emitted per kilometre, by mode.
///
/// Supplied by the scenario's `meta.emission_factors`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmissionFactors(pub ModeTable);

impl EmissionFactors {
    /// Factor for `mode`, if the table declares one.
    pub fn factor(&self, mode: &ModeId) -> Option<f64> {
        self.0.get(mode)
    }

    /// Resolve the factor for a leg: the leg's own mode first, then the
    /// agent's declared mode, then `0`.
    pub fn resolve(&self, leg_mode: &ModeId, agent_mode: Option<&ModeId>) -> f64 {
        self.factor(leg_mode)
            .or_else(|| agent_mode.and_then(|m| self.factor(m)))
            .unwrap_or(0.0)
    }

    /// The underlying table.
    pub fn table(&self) -> &ModeTable {
        &self.0
    }
}

impl<M: Into<ModeId>> FromIterator<(M, f64)> for EmissionFactors {
    fn from_iter<I: IntoIterator<Item = (M, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Carbon-credit points awarded per kilometre, by mode.
///
/// Lower-emission modes earn more. Modes missing from the table earn
/// nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditWeights(pub ModeTable);

impl CreditWeights {
    /// Points per km for `mode` (`0` when unrecognized).
    pub fn weight(&self, mode: &ModeId) -> f64 {
        self.0.get(mode).unwrap_or(0.0)
    }

    /// The underlying table.
    pub fn table(&self) -> &ModeTable {
        &self.0
    }
}

impl Default for CreditWeights {
    fn default() -> Self {
        Self(
            [
                ("walk", 10.0),
                ("bike", 8.0),
                ("bicycle", 8.0),
                ("scooter", 6.0),
                ("bus", 5.0),
                ("tram", 5.0),
                ("train", 5.0),
                ("subway", 5.0),
                ("metro", 5.0),
                ("rail", 5.0),
                ("carpool", 2.0),
                ("ev", 1.0),
                ("car", 0.0),
            ]
            .into_iter()
            .collect(),
        )
    }
}

impl<M: Into<ModeId>> FromIterator<(M, f64)> for CreditWeights {
    fn from_iter<I: IntoIterator<Item = (M, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_falls_back_to_agent_mode_then_zero() {
        let factors: EmissionFactors = [("car", 120.0), ("bus", 80.0)].into_iter().collect();
        let car = ModeId::new("car");
        let ferry = ModeId::new("ferry");
        let bus = ModeId::new("bus");

        assert_eq!(factors.resolve(&car, None), 120.0);
        assert_eq!(factors.resolve(&ferry, Some(&bus)), 80.0);
        assert_eq!(factors.resolve(&ferry, Some(&ferry)), 0.0);
        assert_eq!(factors.resolve(&ferry, None), 0.0);
    }

    #[test]
    fn default_weights_favour_low_emission_modes() {
        let w = CreditWeights::default();
        assert!(w.weight(&ModeId::new("walk")) > w.weight(&ModeId::new("bus")));
        assert!(w.weight(&ModeId::new("bus")) > w.weight(&ModeId::new("car")));
        assert_eq!(w.weight(&ModeId::new("hovercraft")), 0.0);
    }

    #[test]
    fn table_keeps_insertion_order() {
        let t: ModeTable = [("walk", 1.0), ("car", 2.0), ("bus", 3.0)].into_iter().collect();
        let names: Vec<&str> = t.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(names, ["walk", "car", "bus"]);
    }

    #[test]
    fn table_deserializes_with_normalized_keys() {
        let t: ModeTable = serde_json::from_str(r#"{"Car": 120, "bus": 80.5}"#).unwrap();
        assert_eq!(t.get(&ModeId::new("car")), Some(120.0));
        assert_eq!(t.len(), 2);
    }
}
