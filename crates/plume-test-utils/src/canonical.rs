//! Builders for canonical (post-ingest) legs and agents.

use plume_core::{Agent, AgentId, DistanceSource, Leg, ModeId, Path, PathPoint};
use smallvec::SmallVec;

/// Canonical leg builder.
///
/// Defaults: mode `car`, empty path, zero distance and emission.
#[derive(Clone, Debug)]
pub struct CanonicalLeg {
    leg: Leg,
}

impl CanonicalLeg {
    pub fn new(start: f64, end: f64) -> Self {
        Self::with_times(Some(start), Some(end))
    }

    pub fn with_times(start: Option<f64>, end: Option<f64>) -> Self {
        Self {
            leg: Leg {
                start_time: start,
                end_time: end,
                mode: ModeId::new("car"),
                path: Path::new(),
                distance_km: 0.0,
                distance_source: DistanceSource::Declared,
                emission_g: 0.0,
                rationale: None,
            },
        }
    }

    pub fn mode(mut self, mode: &str) -> Self {
        self.leg.mode = ModeId::new(mode);
        self
    }

    /// Explicitly timed path.
    pub fn path(mut self, points: &[(f64, f64, f64)]) -> Self {
        self.leg.path = points
            .iter()
            .map(|&(lng, lat, t)| PathPoint::new(lng, lat, t))
            .collect::<SmallVec<_>>();
        self
    }

    /// Two-point path from `from` to `to`, stamped with the leg's times.
    pub fn straight(mut self, from: (f64, f64), to: (f64, f64)) -> Self {
        let start = self.leg.start_time.unwrap_or(0.0);
        let end = self.leg.end_time.unwrap_or(start);
        self.leg.path = [
            PathPoint::new(from.0, from.1, start),
            PathPoint::new(to.0, to.1, end),
        ]
        .into_iter()
        .collect();
        self
    }

    pub fn distance_km(mut self, km: f64) -> Self {
        self.leg.distance_km = km;
        self
    }

    pub fn emission_g(mut self, g: f64) -> Self {
        self.leg.emission_g = g;
        self
    }

    pub fn rationale(mut self, text: &str) -> Self {
        self.leg.rationale = Some(text.to_string());
        self
    }

    pub fn build(self) -> Leg {
        self.leg
    }
}

impl From<CanonicalLeg> for Leg {
    fn from(b: CanonicalLeg) -> Self {
        b.build()
    }
}

/// A canonical agent with the given legs and no declared mode.
pub fn agent(id: &str, legs: impl IntoIterator<Item = Leg>) -> Agent {
    let mut a = Agent::empty(AgentId::from(id));
    a.legs = legs.into_iter().collect();
    a
}
