//! Temporal position resolution.
//!
//! An agent occupies exactly one position at a time. Legs are scanned in
//! input order: the first leg the agent has not yet finished decides the
//! position (waiting at its start, or somewhere along its path). If every
//! leg is finished, the agent stays at the end of the last one.

use plume_core::{Agent, AgentId, LngLat, ModeId};
use plume_geo::interpolate_path;
use serde::{Deserialize, Serialize};

/// Where an agent is at a query time, and in which mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Interpolated position.
    pub position: LngLat,
    /// Mode of the leg that produced the position.
    pub mode: ModeId,
}

/// A placement tagged with its agent, for the rendering layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentPosition {
    /// Agent identifier.
    pub agent_id: AgentId,
    /// Interpolated position.
    pub position: LngLat,
    /// Active mode.
    pub mode: ModeId,
}

/// Resolve `agent`'s position at time `t`.
///
/// Legs with an empty path or an unresolvable start or end are ignored.
/// For the rest, in order:
///
/// - `t <= start` on a leg with positive duration ends the scan: the
///   agent is at the end of the last finished leg if there is one,
///   otherwise at this leg's first point;
/// - `t >= end` records its last point as a fallback and keeps scanning;
/// - otherwise `t` is strictly inside the leg and the path is
///   interpolated.
///
/// Instantaneous legs (`start == end`) only ever act as a fallback.
/// Returns `None` when no leg matches and no fallback was recorded.
pub fn position_at(agent: &Agent, t: f64) -> Option<Placement> {
    let mut fallback = None;

    for leg in &agent.legs {
        let (Some(first), Some(last)) = (leg.path.first(), leg.path.last()) else {
            continue;
        };
        let (Some(start), Some(end)) = (leg.start_time, leg.end_time) else {
            continue;
        };

        if t >= end {
            fallback = Some(Placement {
                position: last.position(),
                mode: leg.mode.clone(),
            });
            continue;
        }
        if start >= end {
            continue;
        }
        if t <= start {
            // Between legs the agent waits where it last arrived.
            return fallback.or_else(|| {
                Some(Placement {
                    position: first.position(),
                    mode: leg.mode.clone(),
                })
            });
        }
        if let Some(position) = interpolate_path(&leg.path, t, start, end) {
            return Some(Placement {
                position,
                mode: leg.mode.clone(),
            });
        }
    }

    fallback
}

/// Positions of every agent that has one at `t`, in agent order.
pub fn positions_at(agents: &[Agent], t: f64) -> Vec<AgentPosition> {
    agents
        .iter()
        .filter_map(|agent| {
            position_at(agent, t).map(|p| AgentPosition {
                agent_id: agent.id.clone(),
                position: p.position,
                mode: p.mode,
            })
        })
        .collect()
}
