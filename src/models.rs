//! Domain types shared by the store, the configuration loader and the HTTP adapter.
//!
//! An envelope travels over the wire as a single-key JSON object
//! (`{"groceries": 250}`), so [`Envelope`] serializes itself that way and unvalidated
//! input arrives as an [`EnvelopeDraft`].

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of an envelope, independent of its position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvelopeId(Uuid);

impl EnvelopeId {
    /// Create a new random ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EnvelopeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EnvelopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "env-{}", &self.0.simple().to_string()[..8])
    }
}

/// A named allocation held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Stable identifier assigned when the envelope entered the store
    pub id: EnvelopeId,
    /// Envelope name, e.g. "groceries"
    pub name: String,
    /// Allocated amount
    pub amount: f64,
}

impl Envelope {
    /// Creates an envelope with a fresh identifier.
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: EnvelopeId::new(),
            name: name.into(),
            amount,
        }
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.amount)?;
        map.end()
    }
}

/// Unvalidated envelope input: a JSON object that should hold exactly one
/// `name: amount` pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvelopeDraft(pub Map<String, Value>);

impl EnvelopeDraft {
    /// Builds a well-formed single-key draft.
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        let mut map = Map::new();
        map.insert(name.into(), Value::from(amount));
        Self(map)
    }
}

/// Snapshot of the whole budget: the total figure and the ordered envelopes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetState {
    /// Total budget figure, tracked independently of the envelope amounts
    pub budget: f64,
    /// Envelopes in listing order
    pub envelopes: Vec<Envelope>,
}

/// How a transfer treats the source envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// Target takes the source's amount; the source keeps its amount
    #[default]
    Copy,
    /// Target is credited with the source's amount; the source drops to zero
    Move,
}

/// Names involved in a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    /// Source envelope name
    pub from: String,
    /// Target envelope name
    pub to: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_serializes_as_single_key_object() {
        let envelope = Envelope::new("groceries", 250.5);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({ "groceries": 250.5 }));
    }

    #[test]
    fn test_budget_state_serialization() {
        let state = BudgetState {
            budget: 100.0,
            envelopes: vec![Envelope::new("a", 10.0), Envelope::new("b", 20.0)],
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({ "budget": 100.0, "envelopes": [{ "a": 10.0 }, { "b": 20.0 }] })
        );
    }

    #[test]
    fn test_draft_keeps_every_key() {
        let draft: EnvelopeDraft = serde_json::from_value(json!({ "a": 1, "b": "2" })).unwrap();
        assert_eq!(draft.0.len(), 2);
        assert_eq!(draft.0["b"], json!("2"));
    }

    #[test]
    fn test_envelope_ids_are_unique() {
        let first = EnvelopeId::new();
        let second = EnvelopeId::new();
        assert_ne!(first, second);
        assert!(first.to_string().starts_with("env-"));
        assert_eq!(first.to_string().len(), "env-".len() + 8);
    }

    #[test]
    fn test_transfer_mode_parses_lowercase() {
        let mode: TransferMode = serde_json::from_value(json!("move")).unwrap();
        assert_eq!(mode, TransferMode::Move);
        assert_eq!(TransferMode::default(), TransferMode::Copy);
    }
}
