//! Time-based interpolation along a timestamped path.

use plume_core::{LngLat, PathPoint};

/// Linear blend of two positions. `f = 0` yields `a`, `f = 1` yields `b`.
#[inline]
pub fn lerp(a: LngLat, b: LngLat, f: f64) -> LngLat {
    LngLat {
        lng: a.lng + (b.lng - a.lng) * f,
        lat: a.lat + (b.lat - a.lat) * f,
    }
}

/// Position on `path` at time `t`, for a leg spanning `[start, end]`.
///
/// Finds the first consecutive pair `(p[i], p[i+1])` with
/// `p[i].t <= t <= p[i+1].t` and a positive time span, and blends their
/// coordinates by the time fraction. When no such pair exists (all
/// points share one timestamp, or the timestamps do not bracket `t`),
/// falls back to a straight-line blend from the first to the last point
/// using the leg-level fraction `(t - start) / (end - start)`, clamped
/// to `[0, 1]`.
///
/// Returns `None` only for an empty path.
///
/// Path timestamps are assumed non-decreasing; out-of-order input gives
/// an unspecified (but finite) position.
pub fn interpolate_path(path: &[PathPoint], t: f64, start: f64, end: f64) -> Option<LngLat> {
    let first = path.first()?;
    let last = path.last()?;

    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let span = b.t - a.t;
        if span > 0.0 && a.t <= t && t <= b.t {
            return Some(lerp(a.position(), b.position(), (t - a.t) / span));
        }
    }

    let span = end - start;
    let fraction = if span > 0.0 {
        ((t - start) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Some(lerp(first.position(), last.position(), fraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: LngLat, lng: f64, lat: f64) -> bool {
        (a.lng - lng).abs() < 1e-9 && (a.lat - lat).abs() < 1e-9
    }

    #[test]
    fn midpoint_of_two_point_path() {
        let path = [PathPoint::new(0.0, 0.0, 0.0), PathPoint::new(1.0, 1.0, 100.0)];
        let p = interpolate_path(&path, 50.0, 0.0, 100.0).unwrap();
        assert!(close(p, 0.5, 0.5), "{p:?}");
    }

    #[test]
    fn picks_the_bracketing_segment() {
        let path = [
            PathPoint::new(0.0, 0.0, 0.0),
            PathPoint::new(10.0, 0.0, 10.0),
            PathPoint::new(10.0, 10.0, 30.0),
        ];
        let p = interpolate_path(&path, 20.0, 0.0, 30.0).unwrap();
        assert!(close(p, 10.0, 5.0), "{p:?}");
    }

    #[test]
    fn zero_span_segments_are_skipped() {
        let path = [
            PathPoint::new(0.0, 0.0, 0.0),
            PathPoint::new(5.0, 5.0, 0.0),
            PathPoint::new(6.0, 6.0, 10.0),
        ];
        let p = interpolate_path(&path, 5.0, 0.0, 10.0).unwrap();
        assert!(close(p, 5.5, 5.5), "{p:?}");
    }

    #[test]
    fn unbracketed_time_falls_back_to_endpoint_blend() {
        // All points stamped at the leg start: no pair has a positive span.
        let path = [
            PathPoint::new(0.0, 0.0, 100.0),
            PathPoint::new(3.0, 3.0, 100.0),
            PathPoint::new(4.0, 0.0, 100.0),
        ];
        let p = interpolate_path(&path, 150.0, 100.0, 200.0).unwrap();
        assert!(close(p, 2.0, 0.0), "{p:?}");
    }

    #[test]
    fn single_point_path_returns_that_point() {
        let path = [PathPoint::new(7.0, 8.0, 0.0)];
        let p = interpolate_path(&path, 5.0, 0.0, 10.0).unwrap();
        assert!(close(p, 7.0, 8.0));
    }

    #[test]
    fn empty_path_has_no_position() {
        assert!(interpolate_path(&[], 5.0, 0.0, 10.0).is_none());
    }
}
