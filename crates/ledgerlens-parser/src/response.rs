//! Sanitize untrusted oracle output into transaction candidates

use crate::types::TransactionCandidate;
use ledgerlens_domain::{Category, TransactionType};
use serde_json::Value;
use tracing::warn;

/// Parse an oracle response into candidates
///
/// Degrades to an empty list on any of: non-JSON output, a non-array top
/// level, or a non-object array element. Individual field problems are
/// repaired instead: missing/"null" dates get `fallback_date`, unusable
/// amounts become 0.0, unknown categories become `Others`, unknown types
/// become debits.
pub(crate) fn parse_response(response: &str, fallback_date: &str) -> Vec<TransactionCandidate> {
    let json_str = strip_code_fences(response);

    let value: Value = match serde_json::from_str(&json_str) {
        Ok(value) => value,
        Err(e) => {
            warn!("oracle response is not JSON: {}", e);
            return Vec::new();
        }
    };

    let Some(items) = value.as_array() else {
        warn!("oracle response is not a JSON array");
        return Vec::new();
    };

    let mut candidates = Vec::with_capacity(items.len());
    for item in items {
        match candidate_from_json(item, fallback_date) {
            Some(candidate) => candidates.push(candidate),
            None => {
                warn!("non-object entry in oracle response, discarding batch");
                return Vec::new();
            }
        }
    }

    candidates
}

/// Strip Markdown code-fence wrapping if present
///
/// LLMs sometimes wrap JSON in ```json blocks despite instructions.
pub(crate) fn strip_code_fences(response: &str) -> String {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return String::new();
        }
        // Skip the opening fence line and, when present, the closing one
        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        lines[1..end].join("\n")
    } else {
        trimmed.to_string()
    }
}

/// Build one candidate from a JSON object, or None when the entry is not an
/// object at all
fn candidate_from_json(value: &Value, fallback_date: &str) -> Option<TransactionCandidate> {
    let obj = value.as_object()?;

    let date = coerce_date(obj.get("date"), fallback_date);
    let description = coerce_string(obj.get("description"));
    let merchant = coerce_string(obj.get("merchant"));
    let amount = coerce_amount(obj.get("amount"));
    let kind = obj
        .get("type")
        .and_then(|v| v.as_str())
        .map(TransactionType::parse)
        .unwrap_or(TransactionType::Debit);
    let category = obj
        .get("category")
        .and_then(|v| v.as_str())
        .map(Category::parse)
        .unwrap_or(Category::Others);

    Some(TransactionCandidate {
        date,
        description,
        merchant,
        amount,
        kind,
        category,
    })
}

/// Dates are stringified and trimmed; missing, null, or literal "null"
/// values get the fallback date
fn coerce_date(value: Option<&Value>, fallback_date: &str) -> String {
    let date = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string().trim().to_string(),
    };

    if date.is_empty() || date == "null" {
        fallback_date.to_string()
    } else {
        date
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Amounts arrive as numbers or numeric strings; anything else is 0.0.
/// The sign is dropped: amount is a magnitude, type carries direction.
fn coerce_amount(value: Option<&Value>) -> f64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().unwrap_or(0.0),
        _ => 0.0,
    };
    raw.abs()
}
