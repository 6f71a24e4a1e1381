//! Ordered field resolution over loosely-schematized JSON.
//!
//! Input records name the same field many ways (`lng`/`lon`/`longitude`,
//! `[0]` in tuple form, ...). Rather than chaining optional lookups at
//! every call site, each field is described once as a [`FieldRule`]: an
//! ordered list of [`Accessor`]s tried in priority order. The first
//! accessor that yields a non-null value wins, and the match is tagged
//! with the accessor that produced it.
//!
//! ```
//! use plume_core::{Accessor, FieldRule};
//! use serde_json::json;
//!
//! const LNG: FieldRule = FieldRule::new(
//!     "lng",
//!     &[Accessor::Index(0), Accessor::Key("lng"), Accessor::Key("lon")],
//! );
//!
//! assert_eq!(LNG.number(&json!([4.5, 51.0])), Some(4.5));
//! assert_eq!(LNG.number(&json!({"lon": 4.5})), Some(4.5));
//! let point = json!({"lon": 4.5});
//! let hit = LNG.resolve(&point).unwrap();
//! assert_eq!(hit.accessor, Accessor::Key("lon"));
//! ```

use serde_json::Value;

use crate::time::{as_number, as_seconds};

/// One way of reaching a field inside a JSON value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// Object member by key. Never matches arrays.
    Key(&'static str),
    /// Array element by position. Never matches objects.
    Index(usize),
}

impl Accessor {
    /// Apply this accessor, treating `null` as absent.
    pub fn get(self, value: &Value) -> Option<&Value> {
        let found = match (self, value) {
            (Self::Key(key), Value::Object(map)) => map.get(key),
            (Self::Index(idx), Value::Array(items)) => items.get(idx),
            _ => None,
        };
        found.filter(|v| !v.is_null())
    }
}

/// A successful resolution, tagged with the accessor that matched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved<'v> {
    /// Which accessor produced the value.
    pub accessor: Accessor,
    /// The resolved value (never `null`).
    pub value: &'v Value,
}

/// A named field and its accessors in priority order.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    name: &'static str,
    accessors: &'static [Accessor],
}

impl FieldRule {
    /// Define a rule. Usable in `const` position.
    pub const fn new(name: &'static str, accessors: &'static [Accessor]) -> Self {
        Self { name, accessors }
    }

    /// Canonical field name, used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The accessors, highest priority first.
    pub fn accessors(&self) -> &'static [Accessor] {
        self.accessors
    }

    /// Return the first defined value and the accessor that reached it.
    pub fn resolve<'v>(&self, value: &'v Value) -> Option<Resolved<'v>> {
        self.accessors.iter().find_map(|&accessor| {
            accessor
                .get(value)
                .map(|found| Resolved { accessor, value: found })
        })
    }

    /// Return the first defined value.
    pub fn value<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.resolve(value).map(|r| r.value)
    }

    /// First defined value, coerced to a finite number.
    ///
    /// Coercion happens after resolution: a defined value that fails to
    /// coerce shadows lower-priority accessors.
    pub fn number(&self, value: &Value) -> Option<f64> {
        self.value(value).and_then(as_number)
    }

    /// First defined value, coerced to seconds-of-day.
    pub fn seconds(&self, value: &Value) -> Option<f64> {
        self.value(value).and_then(as_seconds)
    }

    /// First defined value as a string. Numbers are formatted.
    pub fn string(&self, value: &Value) -> Option<String> {
        match self.value(value)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// First defined value as a non-empty array.
    pub fn array<'v>(&self, value: &'v Value) -> Option<&'v [Value]> {
        match self.value(value)? {
            Value::Array(items) if !items.is_empty() => Some(items.as_slice()),
            _ => None,
        }
    }
}
