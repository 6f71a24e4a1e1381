//! Leg extraction.
//!
//! An agent describes its day either as a `legs` list or as an event
//! `timeline`. Both are mapped into [`LegDraft`]s: time, mode, path and
//! rationale resolved, distance declared (if any) but not yet measured.
//! [`annotate`](crate::annotate::annotate) finishes the job.

use plume_core::{ModeId, Path};
use serde_json::Value;

use crate::path::{normalize_points, parse_point, parse_points, ParsedPoint};
use crate::rules::{
    is_movement_kind, AGENT_LEGS, AGENT_TIMELINE, DESTINATION, DISTANCE_KM, DISTANCE_M,
    DURATION_MIN, DURATION_S, EVENT_KIND, EVENT_START, LEG_END, LEG_START, MODE, ORIGIN, PATH,
};
use crate::text::rationale;

/// A leg with time, mode and path resolved, prior to annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct LegDraft {
    /// Departure, seconds-of-day.
    pub start_time: Option<f64>,
    /// Arrival, seconds-of-day. Never earlier than `start_time`.
    pub end_time: Option<f64>,
    /// Resolved mode (leg, then agent, then `unknown`).
    pub mode: ModeId,
    /// Normalized path.
    pub path: Path,
    /// Explicit distance from the input, already in kilometres.
    pub declared_distance_km: Option<f64>,
    /// Leg-level rationale text.
    pub rationale: Option<String>,
}

/// Read an agent's declared mode.
pub fn agent_mode(agent: &Value) -> Option<ModeId> {
    MODE.string(agent)
        .map(|m| ModeId::new(&m))
        .filter(|m| !m.as_str().is_empty())
}

/// Extract canonical leg drafts from a raw agent record.
///
/// A non-empty `legs` list is authoritative. Otherwise movement entries
/// of `timeline` are used. An agent with neither yields no drafts.
pub fn extract_legs(agent: &Value) -> Vec<LegDraft> {
    let mode = agent_mode(agent);

    if let Some(raw_legs) = AGENT_LEGS.array(agent) {
        return raw_legs
            .iter()
            .filter(|raw| {
                let usable = raw.is_object();
                if !usable {
                    tracing::debug!("skipping non-object leg record");
                }
                usable
            })
            .map(|raw| draft_from_leg(raw, mode.as_ref()))
            .collect();
    }

    if let Some(events) = AGENT_TIMELINE.array(agent) {
        return events
            .iter()
            .filter_map(|event| draft_from_event(event, mode.as_ref()))
            .collect();
    }

    Vec::new()
}

fn draft_from_leg(raw: &Value, agent_mode: Option<&ModeId>) -> LegDraft {
    let points = raw_points(raw);
    let start = LEG_START
        .seconds(raw)
        .or_else(|| points.first().and_then(|p| p.t));
    let end = LEG_END
        .seconds(raw)
        .or_else(|| points.last().and_then(|p| p.t));
    finish_draft(raw, &points, start, end, agent_mode)
}

fn draft_from_event(raw: &Value, agent_mode: Option<&ModeId>) -> Option<LegDraft> {
    let kind = EVENT_KIND.string(raw)?;
    if !is_movement_kind(&kind) {
        return None;
    }

    let points = raw_points(raw);
    let start = EVENT_START
        .seconds(raw)
        .or_else(|| points.first().and_then(|p| p.t));
    let end = LEG_END
        .seconds(raw)
        .or_else(|| Some(start? + event_duration(raw)?))
        .or_else(|| points.last().and_then(|p| p.t));
    Some(finish_draft(raw, &points, start, end, agent_mode))
}

fn finish_draft(
    raw: &Value,
    points: &[ParsedPoint],
    start: Option<f64>,
    end: Option<f64>,
    agent_mode: Option<&ModeId>,
) -> LegDraft {
    let end = match (start, end) {
        (Some(s), Some(e)) if e < s => {
            tracing::debug!(start = s, end = e, "leg ends before it starts; clamping end");
            Some(s)
        }
        _ => end,
    };

    let mode = MODE
        .string(raw)
        .map(|m| ModeId::new(&m))
        .filter(|m| !m.as_str().is_empty())
        .or_else(|| agent_mode.cloned())
        .unwrap_or_else(ModeId::unknown);

    LegDraft {
        start_time: start,
        end_time: end,
        mode,
        path: normalize_points(points, start, end),
        declared_distance_km: declared_distance_km(raw),
        rationale: rationale(raw),
    }
}

/// The leg's raw points: its path, or an origin/destination pair.
fn raw_points(raw: &Value) -> Vec<ParsedPoint> {
    if let Some(path) = PATH.value(raw) {
        return parse_points(path);
    }
    let origin = ORIGIN.value(raw).and_then(parse_point);
    let destination = DESTINATION.value(raw).and_then(parse_point);
    match (origin, destination) {
        (Some(o), Some(d)) => vec![o, d],
        _ => Vec::new(),
    }
}

fn declared_distance_km(raw: &Value) -> Option<f64> {
    DISTANCE_KM
        .number(raw)
        .or_else(|| DISTANCE_M.number(raw).map(|m| m / 1000.0))
        .filter(|km| *km >= 0.0)
}

fn event_duration(raw: &Value) -> Option<f64> {
    DURATION_S
        .number(raw)
        .or_else(|| DURATION_MIN.number(raw).map(|min| min * 60.0))
        .filter(|d| *d >= 0.0)
}
