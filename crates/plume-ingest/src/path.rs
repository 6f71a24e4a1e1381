//! Path normalization.
//!
//! Converts any accepted point encoding into a canonical [`Path`] of
//! timestamped points. Points are parsed first (keeping whatever time
//! they carry) and then, unless every point already has a time, times
//! are synthesized from the leg's start and end.

use plume_core::{Path, PathPoint};
use serde_json::Value;
use smallvec::SmallVec;

use crate::rules::{POINT_LAT, POINT_LNG, POINT_TIME};

/// A point as found in the input, before time synthesis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedPoint {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Explicit time, if the point carried one.
    pub t: Option<f64>,
}

/// Parse one point from tuple (`[lng, lat, t?]`) or object form.
///
/// Returns `None` when longitude or latitude does not resolve to a
/// finite number.
pub fn parse_point(value: &Value) -> Option<ParsedPoint> {
    let lng = POINT_LNG.number(value)?;
    let lat = POINT_LAT.number(value)?;
    Some(ParsedPoint {
        lng,
        lat,
        t: POINT_TIME.seconds(value),
    })
}

/// Parse every usable point of a raw path, in input order.
///
/// Non-array input yields an empty list. Unusable points are dropped.
pub fn parse_points(raw: &Value) -> Vec<ParsedPoint> {
    let Value::Array(items) = raw else {
        return Vec::new();
    };
    let points: Vec<ParsedPoint> = items.iter().filter_map(parse_point).collect();
    if points.len() < items.len() {
        tracing::trace!(
            dropped = items.len() - points.len(),
            kept = points.len(),
            "dropped path points without resolvable coordinates"
        );
    }
    points
}

/// Assign final times to parsed points.
///
/// If every point has an explicit time, those times are kept as-is, in
/// input order, without validating monotonicity. Otherwise all points
/// are re-timed: when `start`/`end` are missing or `end <= start`, every
/// point gets `start` (or `0`); otherwise points are spaced evenly over
/// `[start, end]` by ordinal position.
pub fn normalize_points(points: &[ParsedPoint], start: Option<f64>, end: Option<f64>) -> Path {
    if points.iter().all(|p| p.t.is_some()) {
        return points
            .iter()
            .map(|p| PathPoint::new(p.lng, p.lat, p.t.unwrap_or_default()))
            .collect();
    }

    let span = match (start, end) {
        (Some(s), Some(e)) if e > s => Some((s, e)),
        _ => None,
    };
    let last_index = points.len().saturating_sub(1);

    let mut path: Path = SmallVec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let t = match span {
            Some((s, e)) if last_index > 0 => s + (e - s) * i as f64 / last_index as f64,
            Some((s, _)) => s,
            None => start.unwrap_or(0.0),
        };
        path.push(PathPoint::new(p.lng, p.lat, t));
    }
    path
}

/// Normalize a raw path value.
///
/// `None`, non-array input, or a path whose points are all unusable
/// yields an empty path.
pub fn normalize(raw: Option<&Value>, start: Option<f64>, end: Option<f64>) -> Path {
    match raw {
        Some(raw) => normalize_points(&parse_points(raw), start, end),
        None => Path::new(),
    }
}
