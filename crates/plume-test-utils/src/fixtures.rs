//! Builders for raw scenario JSON documents.
//!
//! ```
//! use plume_test_utils::{AgentDoc, LegDoc, ScenarioDoc};
//!
//! let doc = ScenarioDoc::new()
//!     .factor("car", 120.0)
//!     .agent(
//!         AgentDoc::new("commuter")
//!             .mode("car")
//!             .leg(LegDoc::new(0.0, 600.0).path(&[(4.40, 50.80), (4.45, 50.85)])),
//!     )
//!     .build();
//! assert_eq!(doc["agents"][0]["legs"][0]["end_time"], 600.0);
//! ```

use serde_json::{json, Map, Value};

/// Raw scenario document builder.
#[derive(Clone, Debug, Default)]
pub struct ScenarioDoc {
    factors: Map<String, Value>,
    date: Option<String>,
    city: Option<String>,
    agents: Vec<Value>,
}

impl ScenarioDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an emission factor in g/km.
    pub fn factor(mut self, mode: &str, grams_per_km: f64) -> Self {
        self.factors.insert(mode.to_string(), json!(grams_per_km));
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn agent(mut self, agent: AgentDoc) -> Self {
        self.agents.push(agent.build());
        self
    }

    /// Append an arbitrary agent value, e.g. a deliberately malformed one.
    pub fn raw_agent(mut self, agent: Value) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn build(self) -> Value {
        let mut meta = Map::new();
        meta.insert("emission_factors".into(), Value::Object(self.factors));
        if let Some(date) = self.date {
            meta.insert("date".into(), json!(date));
        }
        if let Some(city) = self.city {
            meta.insert("city".into(), json!(city));
        }
        json!({ "meta": meta, "agents": self.agents })
    }
}

/// Raw agent builder. Uses `legs` unless [`timeline`](Self::timeline)
/// entries are added.
#[derive(Clone, Debug)]
pub struct AgentDoc {
    fields: Map<String, Value>,
    legs: Vec<Value>,
    timeline: Vec<Value>,
}

impl AgentDoc {
    pub fn new(id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), json!(id));
        Self {
            fields,
            legs: Vec::new(),
            timeline: Vec::new(),
        }
    }

    pub fn mode(self, mode: &str) -> Self {
        self.field("mode", json!(mode))
    }

    pub fn reasoning(self, reasoning: Value) -> Self {
        self.field("reasoning", reasoning)
    }

    /// Set any other top-level field.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn leg(mut self, leg: LegDoc) -> Self {
        self.legs.push(leg.build());
        self
    }

    /// Append a timeline event verbatim.
    pub fn event(mut self, event: Value) -> Self {
        self.timeline.push(event);
        self
    }

    pub fn build(self) -> Value {
        let mut fields = self.fields;
        if !self.legs.is_empty() {
            fields.insert("legs".into(), Value::Array(self.legs));
        }
        if !self.timeline.is_empty() {
            fields.insert("timeline".into(), Value::Array(self.timeline));
        }
        Value::Object(fields)
    }
}

/// Raw leg builder using canonical key names.
#[derive(Clone, Debug)]
pub struct LegDoc {
    fields: Map<String, Value>,
}

impl LegDoc {
    pub fn new(start: f64, end: f64) -> Self {
        let mut fields = Map::new();
        fields.insert("start_time".into(), json!(start));
        fields.insert("end_time".into(), json!(end));
        Self { fields }
    }

    /// A leg with no explicit times; only what is set later.
    pub fn untimed() -> Self {
        Self { fields: Map::new() }
    }

    pub fn mode(self, mode: &str) -> Self {
        self.field("mode", json!(mode))
    }

    /// Path in `[lng, lat]` tuple form (times synthesized on ingest).
    pub fn path(self, points: &[(f64, f64)]) -> Self {
        let pts: Vec<Value> = points.iter().map(|&(lng, lat)| json!([lng, lat])).collect();
        self.field("path", Value::Array(pts))
    }

    /// Path in `[lng, lat, t]` tuple form.
    pub fn timed_path(self, points: &[(f64, f64, f64)]) -> Self {
        let pts: Vec<Value> = points
            .iter()
            .map(|&(lng, lat, t)| json!([lng, lat, t]))
            .collect();
        self.field("path", Value::Array(pts))
    }

    pub fn distance_km(self, km: f64) -> Self {
        self.field("distance_km", json!(km))
    }

    pub fn reasoning(self, reasoning: Value) -> Self {
        self.field("reasoning", reasoning)
    }

    /// Set any other field.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
