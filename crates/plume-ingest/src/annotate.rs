//! Distance and emission annotation.
//!
//! Pure and stateless: runs once per leg during scenario load and the
//! result is stored on the canonical [`Leg`].

use plume_core::{DistanceSource, EmissionFactors, Leg, ModeId};
use plume_geo::path_length_km;

use crate::legs::LegDraft;

/// Finish a draft: measure (or trust) its distance and compute emission.
///
/// A declared distance is trusted as-is. Otherwise the distance is the
/// great-circle length of the path. The emission factor is looked up by
/// the leg's mode, then `agent_mode`, then defaults to `0`.
pub fn annotate(draft: LegDraft, agent_mode: Option<&ModeId>, factors: &EmissionFactors) -> Leg {
    let (distance_km, distance_source) = match draft.declared_distance_km {
        Some(km) => (km, DistanceSource::Declared),
        None => (path_length_km(&draft.path), DistanceSource::Measured),
    };
    let factor = factors.resolve(&draft.mode, agent_mode);

    Leg {
        start_time: draft.start_time,
        end_time: draft.end_time,
        mode: draft.mode,
        path: draft.path,
        distance_km,
        distance_source,
        emission_g: distance_km * factor,
        rationale: draft.rationale,
    }
}
