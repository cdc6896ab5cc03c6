//! Shared test utilities for the budget service.
//!
//! This module provides helpers for building stores with known contents and
//! reading them back in a compact form.

#![allow(clippy::unwrap_used)]

use crate::{
    core::BudgetStore,
    models::{EnvelopeDraft, TransferMode},
};

/// Builds drafts from `(name, amount)` pairs.
pub fn drafts(entries: &[(&str, f64)]) -> Vec<EnvelopeDraft> {
    entries
        .iter()
        .map(|(name, amount)| EnvelopeDraft::new(*name, *amount))
        .collect()
}

/// Creates a copy-mode store holding `entries` in order.
///
/// # Defaults
/// * `transfer_mode`: [`TransferMode::Copy`]
pub fn store_with(budget: f64, entries: &[(&str, f64)]) -> BudgetStore {
    BudgetStore::with_envelopes(budget, &drafts(entries), TransferMode::Copy).unwrap()
}

/// Envelope names in listing order.
pub fn names(store: &BudgetStore) -> Vec<String> {
    store
        .list_envelopes()
        .into_iter()
        .map(|envelope| envelope.name)
        .collect()
}

/// Envelope amounts in listing order.
pub fn amounts(store: &BudgetStore) -> Vec<f64> {
    store
        .list_envelopes()
        .into_iter()
        .map(|envelope| envelope.amount)
        .collect()
}
