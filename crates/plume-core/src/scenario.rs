//! Canonical scenario, agent, leg and path types.
//!
//! These are the post-extraction shapes every downstream component
//! consumes. They are produced once per scenario load and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::id::{AgentId, ModeId};
use crate::tables::EmissionFactors;

/// A timestamped position on a leg's path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Seconds-of-day.
    pub t: f64,
}

impl PathPoint {
    /// Construct a point.
    pub fn new(lng: f64, lat: f64, t: f64) -> Self {
        Self { lng, lat, t }
    }

    /// The point's position without its time.
    pub fn position(&self) -> LngLat {
        LngLat {
            lng: self.lng,
            lat: self.lat,
        }
    }
}

/// A bare `(longitude, latitude)` position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl LngLat {
    /// Construct a position.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// As a `[lng, lat]` pair, the order map layers expect.
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// An ordered leg path.
///
/// Most legs carry a handful of points, so up to eight are stored
/// inline. Longer routes spill to the heap transparently.
pub type Path = SmallVec<[PathPoint; 8]>;

/// Where a leg's distance came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceSource {
    /// Supplied explicitly by the input record and trusted.
    Declared,
    /// Measured as the great-circle length of the path.
    Measured,
}

/// One canonical movement leg.
///
/// Invariants (established by ingest):
/// - `end_time >= start_time` when both resolve
/// - `emission_g == distance_km * factor(mode)`
/// - `distance_km >= 0`, `emission_g >= 0`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Departure, seconds-of-day. `None` if no source resolved it.
    pub start_time: Option<f64>,
    /// Arrival (completion), seconds-of-day.
    pub end_time: Option<f64>,
    /// Travel mode; defaults to the agent's mode, then `unknown`.
    pub mode: ModeId,
    /// Normalized path, possibly empty.
    pub path: Path,
    /// Leg length in kilometres.
    pub distance_km: f64,
    /// How `distance_km` was obtained.
    pub distance_source: DistanceSource,
    /// Emitted pollutant mass in grams.
    pub emission_g: f64,
    /// Leg-level rationale text, already extracted and trimmed.
    pub rationale: Option<String>,
}

impl Leg {
    /// The time at which this leg's emissions and credits are booked.
    pub fn completion_time(&self) -> Option<f64> {
        self.end_time
    }

    /// Duration in seconds, when both endpoints resolve.
    pub fn duration(&self) -> Option<f64> {
        Some(self.end_time? - self.start_time?)
    }

    /// Whether the leg has been completed at or before `t`.
    pub fn is_complete_at(&self, t: f64) -> bool {
        self.end_time.is_some_and(|end| end <= t)
    }
}

/// One canonical agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Agent identifier.
    pub id: AgentId,
    /// Declared default mode, if any.
    pub mode: Option<ModeId>,
    /// Agent-level rationale text, already extracted.
    pub rationale: Option<String>,
    /// Canonical legs in input order.
    pub legs: Vec<Leg>,
    /// Remaining input fields (everything but `legs` / `timeline`).
    pub attributes: Map<String, Value>,
}

impl Agent {
    /// An agent with no legs, used for records that carry nothing usable.
    pub fn empty(id: AgentId) -> Self {
        Self {
            id,
            mode: None,
            rationale: None,
            legs: Vec::new(),
            attributes: Map::new(),
        }
    }

    /// Total emission across all legs, in grams.
    pub fn total_emission_g(&self) -> f64 {
        self.legs.iter().map(|l| l.emission_g).sum()
    }

    /// Total distance across all legs, in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.legs.iter().map(|l| l.distance_km).sum()
    }
}

/// Scenario-level metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMeta {
    /// Grams per km by mode.
    pub emission_factors: EmissionFactors,
    /// Simulated date, as given.
    pub date: Option<String>,
    /// City name, as given.
    pub city: Option<String>,
    /// Number of days in the source dataset, if declared.
    pub days: Option<u32>,
}

/// A canonical, fully annotated scenario (one simulated day).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Metadata, including emission factors.
    pub meta: ScenarioMeta,
    /// Agents in input order.
    pub agents: Vec<Agent>,
}

impl Scenario {
    /// Total number of legs across all agents.
    pub fn leg_count(&self) -> usize {
        self.agents.iter().map(|a| a.legs.len()).sum()
    }

    /// Find the first agent with the given id.
    pub fn agent(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| &a.id == id)
    }

    /// Iterate `(agent, leg)` pairs in input order.
    pub fn legs(&self) -> impl Iterator<Item = (&Agent, &Leg)> {
        self.agents
            .iter()
            .flat_map(|a| a.legs.iter().map(move |l| (a, l)))
    }
}
