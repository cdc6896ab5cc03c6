//! Input validation - pure checks that gate every mutation of the store.
//!
//! Amounts are accepted as JSON numbers or numeric strings and must be finite.
//! An envelope draft must hold exactly one non-blank name.

use crate::{
    errors::{Error, Result},
    models::EnvelopeDraft,
};
use serde_json::Value;

const INVALID_VALUE: &str = "Invalid value";

/// Parses a numeric field (`12`, `12.5`, `"12.5"`) into a finite amount.
pub fn parse_amount(field: &str, value: &Value) -> Result<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    amount
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| Error::validation(field, INVALID_VALUE))
}

/// Rejects NaN and infinite amounts handed over as plain `f64`.
pub fn validate_amount(field: &str, amount: f64) -> Result<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(Error::validation(field, INVALID_VALUE))
    }
}

/// Checks a draft and returns its `(name, amount)` pair.
pub fn validate_draft(field: &str, draft: &EnvelopeDraft) -> Result<(String, f64)> {
    let mut entries = draft.0.iter();
    let (Some((name, value)), None) = (entries.next(), entries.next()) else {
        return Err(Error::validation(
            field,
            "Envelope must have exactly one name",
        ));
    };

    if name.trim().is_empty() {
        return Err(Error::validation(field, "Envelope name cannot be empty"));
    }

    let amount = parse_amount(&format!("{field}.{name}"), value)?;
    Ok((name.clone(), amount))
}

/// Checks a non-empty batch of drafts; nothing is returned unless every draft passes.
pub fn validate_drafts(field: &str, drafts: &[EnvelopeDraft]) -> Result<Vec<(String, f64)>> {
    if drafts.is_empty() {
        return Err(Error::validation(field, INVALID_VALUE));
    }

    drafts
        .iter()
        .enumerate()
        .map(|(position, draft)| validate_draft(&format!("{field}[{position}]"), draft))
        .collect()
}

/// Parses a path segment into a position. Only plain non-negative integers qualify.
pub fn parse_index(field: &str, raw: &str) -> Result<usize> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::validation(field, INVALID_VALUE));
    }
    raw.parse::<usize>()
        .map_err(|_| Error::validation(field, INVALID_VALUE))
}
