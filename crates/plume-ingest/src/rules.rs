//! Field alias rules for every field ingest reads.
//!
//! Each rule lists its accessors highest-priority first. Tuple accessors
//! (`Index`) only match JSON arrays and key accessors only match objects,
//! so one rule covers both point encodings.

use plume_core::{Accessor, FieldRule};

use Accessor::{Index, Key};

/// Point longitude.
pub const POINT_LNG: FieldRule = FieldRule::new(
    "lng",
    &[Index(0), Key("lng"), Key("lon"), Key("long"), Key("longitude"), Key("x")],
);

/// Point latitude.
pub const POINT_LAT: FieldRule =
    FieldRule::new("lat", &[Index(1), Key("lat"), Key("latitude"), Key("y")]);

/// Point time.
pub const POINT_TIME: FieldRule = FieldRule::new(
    "t",
    &[Index(2), Key("t"), Key("time"), Key("timestamp"), Key("ts")],
);

/// Leg departure time.
pub const LEG_START: FieldRule = FieldRule::new(
    "start_time",
    &[
        Key("start_time"),
        Key("startTime"),
        Key("start"),
        Key("depart_time"),
        Key("departure_time"),
        Key("t0"),
    ],
);

/// Leg arrival time.
pub const LEG_END: FieldRule = FieldRule::new(
    "end_time",
    &[
        Key("end_time"),
        Key("endTime"),
        Key("end"),
        Key("arrive_time"),
        Key("arrival_time"),
        Key("t1"),
    ],
);

/// Timeline event start: leg start aliases, then bare event times.
pub const EVENT_START: FieldRule = FieldRule::new(
    "start_time",
    &[
        Key("start_time"),
        Key("startTime"),
        Key("start"),
        Key("depart_time"),
        Key("departure_time"),
        Key("t0"),
        Key("time"),
        Key("t"),
    ],
);

/// Leg path.
pub const PATH: FieldRule = FieldRule::new(
    "path",
    &[Key("path"), Key("route"), Key("points"), Key("coordinates")],
);

/// Leg origin point, used when no path is given.
pub const ORIGIN: FieldRule = FieldRule::new("origin", &[Key("from"), Key("origin")]);

/// Leg destination point, used when no path is given.
pub const DESTINATION: FieldRule =
    FieldRule::new("destination", &[Key("to"), Key("destination")]);

/// Travel mode (legs, events and agents).
pub const MODE: FieldRule = FieldRule::new(
    "mode",
    &[Key("mode"), Key("travel_mode"), Key("travelMode"), Key("transport_mode")],
);

/// Declared distance in kilometres.
pub const DISTANCE_KM: FieldRule =
    FieldRule::new("distance_km", &[Key("distance_km"), Key("distanceKm")]);

/// Declared distance in metres.
pub const DISTANCE_M: FieldRule = FieldRule::new(
    "distance_m",
    &[Key("distance_m"), Key("distance"), Key("length_m")],
);

/// Event duration in seconds.
pub const DURATION_S: FieldRule = FieldRule::new(
    "duration_s",
    &[Key("duration_s"), Key("duration"), Key("duration_sec")],
);

/// Event duration in minutes.
pub const DURATION_MIN: FieldRule =
    FieldRule::new("duration_min", &[Key("duration_min"), Key("durationMinutes")]);

/// Timeline event kind.
pub const EVENT_KIND: FieldRule = FieldRule::new(
    "type",
    &[Key("type"), Key("kind"), Key("event"), Key("action")],
);

/// Free-text rationale (legs, events and agents).
pub const RATIONALE: FieldRule = FieldRule::new(
    "reasoning",
    &[Key("reasoning"), Key("rationale"), Key("reason")],
);

/// Text member of an object-form rationale.
pub const RATIONALE_TEXT: FieldRule = FieldRule::new("text", &[Key("text")]);

/// Agent identifier.
pub const AGENT_ID: FieldRule = FieldRule::new(
    "id",
    &[Key("id"), Key("agent_id"), Key("agentId"), Key("name")],
);

/// Raw leg list on an agent.
pub const AGENT_LEGS: FieldRule = FieldRule::new("legs", &[Key("legs")]);

/// Raw event timeline on an agent.
pub const AGENT_TIMELINE: FieldRule = FieldRule::new("timeline", &[Key("timeline")]);

/// Scenario metadata block.
pub const META: FieldRule = FieldRule::new("meta", &[Key("meta")]);

/// Scenario agent list.
pub const AGENTS: FieldRule = FieldRule::new("agents", &[Key("agents")]);

/// Per-day scenario list in multi-day documents.
pub const DAYS: FieldRule = FieldRule::new("days", &[Key("days")]);

/// Emission factor table inside `meta`.
pub const EMISSION_FACTORS: FieldRule = FieldRule::new(
    "emission_factors",
    &[Key("emission_factors"), Key("emissionFactors")],
);

/// Scenario date.
pub const DATE: FieldRule = FieldRule::new("date", &[Key("date")]);

/// Scenario city.
pub const CITY: FieldRule = FieldRule::new("city", &[Key("city")]);

/// Declared day count inside `meta`.
pub const DAY_COUNT: FieldRule = FieldRule::new("days", &[Key("days")]);

/// Timeline event kinds that describe movement (compared lower-case).
pub const MOVEMENT_KINDS: &[&str] = &["move", "movement", "travel", "trip", "leg", "commute"];

/// Whether an event kind names a movement.
pub fn is_movement_kind(kind: &str) -> bool {
    let kind = kind.trim().to_lowercase();
    MOVEMENT_KINDS.contains(&kind.as_str())
}
