//! Scenario loading and day selection.

use std::borrow::Cow;
use std::io::Read;

use plume_core::{Agent, AgentId, EmissionFactors, ModeTable, Scenario, ScenarioMeta};
use serde_json::{Map, Value};

use crate::annotate::annotate;
use crate::error::IngestError;
use crate::legs::{agent_mode, extract_legs};
use crate::rules::{AGENTS, AGENT_ID, CITY, DATE, DAYS, DAY_COUNT, EMISSION_FACTORS, META};
use crate::text::rationale;

/// Build a canonical scenario from a parsed JSON document.
///
/// Never fails: a document that is not an object yields an empty
/// scenario, agents that are not objects become empty agents, and
/// unusable legs or points are dropped.
pub fn load_scenario(doc: &Value) -> Scenario {
    if !doc.is_object() {
        tracing::warn!("scenario document is not a JSON object; loading an empty scenario");
        return Scenario::default();
    }

    let meta = parse_meta(META.value(doc).unwrap_or(doc));
    let agents: Vec<Agent> = AGENTS
        .array(doc)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, raw)| build_agent(index, raw, &meta.emission_factors))
        .collect();

    let scenario = Scenario { meta, agents };
    tracing::debug!(
        agents = scenario.agents.len(),
        legs = scenario.leg_count(),
        modes = scenario.meta.emission_factors.table().len(),
        "loaded scenario"
    );
    scenario
}

/// Parse scenario JSON text.
///
/// # Errors
///
/// Returns [`IngestError::Json`] if `text` is not valid JSON.
pub fn parse_scenario(text: &str) -> Result<Scenario, IngestError> {
    let doc: Value = serde_json::from_str(text)?;
    Ok(load_scenario(&doc))
}

/// Read scenario JSON from any reader.
///
/// # Errors
///
/// Returns [`IngestError::Json`] if reading fails or the content is not
/// valid JSON.
pub fn scenario_from_reader(reader: impl Read) -> Result<Scenario, IngestError> {
    let doc: Value = serde_json::from_reader(reader)?;
    Ok(load_scenario(&doc))
}

/// Number of days a document holds.
///
/// A bare array or a `days` list holds one day per element; any other
/// object is a single day. Non-object scalars hold none.
pub fn day_count(doc: &Value) -> usize {
    match doc {
        Value::Array(days) => days.len(),
        Value::Object(_) => DAYS.array(doc).map_or(1, <[Value]>::len),
        _ => 0,
    }
}

/// Select one day's scenario document.
///
/// Days listed under `days` inherit the document's top-level `meta`
/// when they carry none of their own. A single-day document is returned
/// as-is for index `0`.
pub fn select_day(doc: &Value, index: usize) -> Option<Cow<'_, Value>> {
    match doc {
        Value::Array(days) => days.get(index).map(Cow::Borrowed),
        Value::Object(_) => match DAYS.array(doc) {
            Some(days) => {
                let day = days.get(index)?;
                match (META.value(doc), day) {
                    (Some(meta), Value::Object(fields)) if META.value(day).is_none() => {
                        let mut merged = fields.clone();
                        merged.insert("meta".to_string(), meta.clone());
                        Some(Cow::Owned(Value::Object(merged)))
                    }
                    _ => Some(Cow::Borrowed(day)),
                }
            }
            None => (index == 0).then_some(Cow::Borrowed(doc)),
        },
        _ => None,
    }
}

/// Select day `index` and load it.
///
/// # Errors
///
/// Returns [`IngestError::DayOutOfRange`] if the document has no such day.
pub fn load_day(doc: &Value, index: usize) -> Result<Scenario, IngestError> {
    let day = select_day(doc, index).ok_or(IngestError::DayOutOfRange {
        index,
        available: day_count(doc),
    })?;
    Ok(load_scenario(&day))
}

fn parse_meta(meta: &Value) -> ScenarioMeta {
    let mut table = ModeTable::new();
    if let Some(Value::Object(entries)) = EMISSION_FACTORS.value(meta) {
        for (mode, raw) in entries {
            match plume_core::time::as_number(raw).filter(|f| *f >= 0.0) {
                Some(factor) => table.insert(mode.as_str(), factor),
                None => tracing::debug!(mode = %mode, "dropping unusable emission factor"),
            }
        }
    }

    ScenarioMeta {
        emission_factors: EmissionFactors(table),
        date: DATE.string(meta),
        city: CITY.string(meta),
        days: DAY_COUNT
            .number(meta)
            .filter(|d| *d >= 0.0 && d.fract() == 0.0 && *d <= f64::from(u32::MAX))
            .map(|d| d as u32),
    }
}

fn build_agent(index: usize, raw: &Value, factors: &EmissionFactors) -> Agent {
    let id = AGENT_ID
        .string(raw)
        .filter(|id| !id.trim().is_empty())
        .map(AgentId)
        .unwrap_or_else(|| AgentId(format!("agent-{index}")));

    let Value::Object(fields) = raw else {
        tracing::debug!(agent = %id, "agent record is not an object; it contributes nothing");
        return Agent::empty(id);
    };

    let mode = agent_mode(raw);
    let legs = extract_legs(raw)
        .into_iter()
        .map(|draft| annotate(draft, mode.as_ref(), factors))
        .collect::<Vec<_>>();
    if legs.is_empty() {
        tracing::debug!(agent = %id, "agent has no usable legs");
    }

    let attributes: Map<String, Value> = fields
        .iter()
        .filter(|(k, _)| k.as_str() != "legs" && k.as_str() != "timeline")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    Agent {
        id,
        mode,
        rationale: rationale(raw),
        legs,
        attributes,
    }
}
