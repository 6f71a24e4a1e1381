//! Free-text rationale extraction.

use serde_json::Value;

use crate::rules::{RATIONALE, RATIONALE_TEXT};

/// Extract rationale text from any of the accepted encodings.
///
/// - a string, trimmed
/// - an array of strings (or nested accepted forms), each trimmed,
///   empties dropped, joined with a single space
/// - an object with a `text` member, extracted recursively
///
/// Returns `None` when nothing non-empty remains.
pub fn extract_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(extract_text)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(_) => return RATIONALE_TEXT.value(value).and_then(extract_text),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Rationale of a leg or agent record.
///
/// Walks the rationale aliases in priority order and returns the first
/// one that extracts to non-empty text, so an empty `reasoning` does not
/// hide a usable `rationale`.
pub fn rationale(raw: &Value) -> Option<String> {
    RATIONALE
        .accessors()
        .iter()
        .find_map(|accessor| accessor.get(raw).and_then(extract_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_is_trimmed() {
        assert_eq!(extract_text(&json!("  go by bus ")).as_deref(), Some("go by bus"));
    }

    #[test]
    fn array_is_trimmed_and_joined_without_double_spaces() {
        assert_eq!(extract_text(&json!(["a", " b "])).as_deref(), Some("a b"));
        assert_eq!(extract_text(&json!(["a", "", "  ", "c"])).as_deref(), Some("a c"));
    }

    #[test]
    fn object_form_uses_text_member() {
        assert_eq!(extract_text(&json!({"text": " cheap "})).as_deref(), Some("cheap"));
        assert_eq!(extract_text(&json!({"note": "x"})), None);
    }

    #[test]
    fn empty_and_non_text_values_yield_none() {
        assert_eq!(extract_text(&json!("   ")), None);
        assert_eq!(extract_text(&json!([])), None);
        assert_eq!(extract_text(&json!([" ", ""])), None);
        assert_eq!(extract_text(&json!(42)), None);
        assert_eq!(extract_text(&json!(null)), None);
    }

    #[test]
    fn rationale_skips_empty_aliases() {
        let raw = json!({"reasoning": "", "rationale": "leg-level"});
        assert_eq!(rationale(&raw).as_deref(), Some("leg-level"));

        let raw = json!({"reasoning": [" "], "rationale": {"note": 1}, "reason": " fallback "});
        assert_eq!(rationale(&raw).as_deref(), Some("fallback"));
    }

    #[test]
    fn rationale_keeps_alias_priority() {
        let raw = json!({"reasoning": "first", "rationale": "second", "reason": "third"});
        assert_eq!(rationale(&raw).as_deref(), Some("first"));
        assert_eq!(rationale(&json!({"reasoning": "", "reason": null})), None);
    }
}
