//! Boundary between untrusted model output and `AnalysisResult`.
//!
//! Raw text is first parsed into a loose `serde_json::Value`, then mapped
//! field by field. Mandatory fields (`health_score`, `breakdown`) that are
//! absent or wrong-typed reject the whole response; optional fields are
//! backfilled.

use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient_analysis::{
        advice::generate_advice,
        entities::{AnalysisResult, BreakdownItem, Classification},
        scoring::{compute_health_score, derive_flags, summarize},
    },
};

const DEFAULT_SUMMARY: &str = "Analysis completed";
const MAX_SEVERITY: f64 = 5.0;

/// Removes a Markdown code fence (```` ``` ```` or ```` ```json ````) wrapped around the payload.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut content = raw.trim();

    for fence in ["```json", "```"] {
        if let Some(rest) = content.strip_prefix(fence) {
            content = rest.strip_suffix("```").unwrap_or(rest).trim();
        }
    }

    content
}

/// Parses model or proxy output into a validated, backfilled `AnalysisResult`.
///
/// The reported `health_score` is trusted as-is (rounded and clamped to 0..=100).
pub fn parse_analysis_response(raw: &str) -> Result<AnalysisResult, CoreError> {
    let value = parse_json(raw)?;
    analysis_from_value(&value)
}

pub fn analysis_from_value(value: &Value) -> Result<AnalysisResult, CoreError> {
    let object = value.as_object().ok_or_else(|| {
        CoreError::MalformedResponse("expected a JSON object at the top level".to_string())
    })?;

    let reported_score = object
        .get("health_score")
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            CoreError::MalformedResponse("missing numeric field 'health_score'".to_string())
        })?;

    let breakdown = object
        .get("breakdown")
        .and_then(Value::as_array)
        .ok_or_else(|| CoreError::MalformedResponse("missing array field 'breakdown'".to_string()))?
        .iter()
        .enumerate()
        .map(|(index, item)| breakdown_item_from_value(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    let health_score = reported_score.round().clamp(0.0, 100.0) as u8;

    let summary = non_empty_string(object, "summary").unwrap_or_else(|| DEFAULT_SUMMARY.to_string());
    let flags = string_array(object, "flags").unwrap_or_default();
    let health_advice = string_array(object, "health_advice")
        .unwrap_or_else(|| generate_advice(&breakdown, health_score));

    Ok(AnalysisResult {
        health_score,
        summary,
        breakdown,
        flags,
        health_advice,
    })
}

/// Post-processing applied by the server-side proxy.
///
/// Unlike `parse_analysis_response`, the score, flags and (when missing)
/// summary are recomputed from the breakdown, and advice is never generated.
pub fn post_process_proxy_payload(raw: &str) -> Result<AnalysisResult, CoreError> {
    let value = parse_json(raw)?;
    let empty = Map::new();
    let object = value.as_object().unwrap_or(&empty);

    let breakdown = match object.get("breakdown").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| breakdown_item_from_value(index, item))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let health_score = compute_health_score(&breakdown);
    let flags = derive_flags(&breakdown);
    let summary = non_empty_string(object, "summary").unwrap_or_else(|| summarize(&flags));
    let health_advice = string_array(object, "health_advice").unwrap_or_default();

    Ok(AnalysisResult {
        health_score,
        summary,
        breakdown,
        flags,
        health_advice,
    })
}

fn parse_json(raw: &str) -> Result<Value, CoreError> {
    serde_json::from_str(strip_code_fences(raw))
        .map_err(|e| CoreError::MalformedResponse(format!("response is not valid JSON: {}", e)))
}

fn breakdown_item_from_value(index: usize, value: &Value) -> Result<BreakdownItem, CoreError> {
    let malformed =
        |detail: &str| CoreError::MalformedResponse(format!("breakdown[{}]: {}", index, detail));

    let object = value
        .as_object()
        .ok_or_else(|| malformed("expected an object"))?;

    let ingredient = object
        .get("ingredient")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("missing string field 'ingredient'"))?;

    let classification: Classification = object
        .get("classification")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("missing string field 'classification'"))?
        .parse()
        .map_err(|_| malformed("unknown classification"))?;

    // Severity is a soft convention; anything numeric is accepted and clamped.
    let severity = object
        .get("severity")
        .and_then(Value::as_f64)
        .map(|severity| severity.trunc().clamp(0.0, MAX_SEVERITY) as u8)
        .unwrap_or(0);

    let reason = object
        .get("reason")
        .and_then(Value::as_str)
        .unwrap_or_default();

    Ok(BreakdownItem::new(ingredient, classification, severity, reason))
}

fn non_empty_string(object: &Map<String, Value>, field: &str) -> Option<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

fn string_array(object: &Map<String, Value>, field: &str) -> Option<Vec<String>> {
    let values = object.get(field)?.as_array();
    if values.is_none() {
        tracing::warn!("Ignoring non-array '{}' field in analysis response", field);
    }

    values.map(|values| {
        values
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_parse_backfills_missing_optional_fields() {
        let result = parse_analysis_response(r#"{"health_score": 70, "breakdown": []}"#).unwrap();

        assert_eq!(result.health_score, 70);
        assert_eq!(result.summary, DEFAULT_SUMMARY);
        assert!(result.flags.is_empty());
        assert_eq!(result.health_advice, generate_advice(&[], 70));
        assert!(!result.health_advice.is_empty());
    }

    #[test]
    fn test_parse_trusts_remote_score_and_keeps_remote_fields() {
        let raw = r#"```json
{
  "health_score": 91,
  "summary": "Mostly fine",
  "breakdown": [
    {"ingredient": "Salt", "classification": "Healthy", "severity": 1, "reason": "Fine in moderation"},
    {"ingredient": "E129", "classification": "Harmful", "severity": 4, "reason": "Azo dye"}
  ],
  "flags": ["E129"],
  "health_advice": ["Enjoy occasionally"]
}
```"#;
        let result = parse_analysis_response(raw).unwrap();

        // Severities would give 70; the remote score wins on this path.
        assert_eq!(result.health_score, 91);
        assert_eq!(result.summary, "Mostly fine");
        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.breakdown[1].classification, Classification::Harmful);
        assert_eq!(result.flags, vec!["E129"]);
        assert_eq!(result.health_advice, vec!["Enjoy occasionally"]);
    }

    #[test]
    fn test_parse_rejects_non_json_text() {
        let err = parse_analysis_response("I think this product is fine.").unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse(ref msg) if msg.contains("not valid JSON")));
    }

    #[test]
    fn test_parse_rejects_missing_or_wrong_typed_mandatory_fields() {
        let missing_score = parse_analysis_response(r#"{"breakdown": []}"#).unwrap_err();
        assert!(matches!(missing_score, CoreError::MalformedResponse(ref msg) if msg.contains("health_score")));

        let string_score =
            parse_analysis_response(r#"{"health_score": "70", "breakdown": []}"#).unwrap_err();
        assert!(matches!(string_score, CoreError::MalformedResponse(_)));

        let object_breakdown =
            parse_analysis_response(r#"{"health_score": 70, "breakdown": {}}"#).unwrap_err();
        assert!(matches!(object_breakdown, CoreError::MalformedResponse(ref msg) if msg.contains("breakdown")));
    }

    #[test]
    fn test_parse_accepts_inconsistent_severity() {
        let raw = r#"{"health_score": 50, "breakdown": [
            {"ingredient": "Honey", "classification": "Healthy", "severity": 4.7, "reason": "x"},
            {"ingredient": "Dye", "classification": "Harmful", "severity": 12}
        ]}"#;
        let result = parse_analysis_response(raw).unwrap();
        assert_eq!(result.breakdown[0].severity, 4);
        assert_eq!(result.breakdown[1].severity, 5);
        assert_eq!(result.breakdown[1].reason, "");
    }

    #[test]
    fn test_parse_rejects_unknown_classification() {
        let raw = r#"{"health_score": 50, "breakdown": [
            {"ingredient": "Honey", "classification": "Toxic", "severity": 1, "reason": "x"}
        ]}"#;
        let err = parse_analysis_response(raw).unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse(ref msg) if msg.contains("breakdown[0]")));
    }

    #[test]
    fn test_proxy_post_processing_recomputes_score() {
        let raw = r#"{"health_score": 99, "breakdown": [
            {"ingredient": "E102", "classification": "Harmful", "severity": 4, "reason": "dye"},
            {"ingredient": "Sugar", "classification": "Moderately Harmful", "severity": 2, "reason": "sweet"}
        ]}"#;
        let result = post_process_proxy_payload(raw).unwrap();

        assert_eq!(result.health_score, 64);
        assert_eq!(result.flags, vec!["E102", "Sugar"]);
        assert_eq!(
            result.summary,
            "Contains E102, Sugar; review before frequent consumption."
        );
        assert!(result.health_advice.is_empty());
    }

    #[test]
    fn test_proxy_post_processing_tolerates_missing_breakdown() {
        let result = post_process_proxy_payload("```json\n{}\n```").unwrap();
        assert_eq!(result.health_score, 100);
        assert!(result.breakdown.is_empty());
        assert_eq!(result.summary, "No concerning additives detected.");
    }
}
