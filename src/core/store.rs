//! Budget store - the in-memory aggregate holding the budget figure and the envelopes.
//!
//! Envelopes are addressed by position in listing order. Internally each envelope
//! also carries a stable [`EnvelopeId`]: the arena maps ids to envelopes and a
//! separate id list records the order, so deletes only renumber positions.
//!
//! Every mutating operation validates its whole input before touching state.

use crate::{
    core::{transfer, validation},
    errors::{Error, Result},
    models::{BudgetState, Envelope, EnvelopeDraft, EnvelopeId, TransferMode, TransferReceipt},
};
use std::collections::HashMap;

/// Owns the budget total and the ordered envelope collection.
#[derive(Debug, Clone, Default)]
pub struct BudgetStore {
    budget: f64,
    envelopes: HashMap<EnvelopeId, Envelope>,
    order: Vec<EnvelopeId>,
    transfer_mode: TransferMode,
}

impl BudgetStore {
    /// Creates an empty store with the given budget figure.
    pub fn new(budget: f64, transfer_mode: TransferMode) -> Result<Self> {
        Ok(Self {
            budget: validation::validate_amount("budget", budget)?,
            transfer_mode,
            ..Self::default()
        })
    }

    /// Creates a store seeded with initial envelopes (an empty list is fine here).
    pub fn with_envelopes(
        budget: f64,
        drafts: &[EnvelopeDraft],
        transfer_mode: TransferMode,
    ) -> Result<Self> {
        let mut store = Self::new(budget, transfer_mode)?;
        let validated = drafts
            .iter()
            .enumerate()
            .map(|(position, draft)| {
                validation::validate_draft(&format!("envelopes[{position}]"), draft)
            })
            .collect::<Result<Vec<_>>>()?;
        for (name, amount) in validated {
            store.push(name, amount);
        }
        Ok(store)
    }

    /// Current budget figure
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    /// Transfer behaviour this store was built with
    #[must_use]
    pub const fn transfer_mode(&self) -> TransferMode {
        self.transfer_mode
    }

    /// Number of envelopes
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no envelopes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot of the budget and every envelope in order.
    #[must_use]
    pub fn state(&self) -> BudgetState {
        BudgetState {
            budget: self.budget,
            envelopes: self.list_envelopes(),
        }
    }

    /// Overwrites the budget figure and appends `drafts` to the envelope list.
    ///
    /// The budget and every draft are validated before anything changes, and at
    /// least one draft is required.
    pub fn create_envelopes(
        &mut self,
        new_budget: f64,
        drafts: &[EnvelopeDraft],
    ) -> Result<BudgetState> {
        let new_budget = validation::validate_amount("budget", new_budget)?;
        let validated = validation::validate_drafts("envelopes", drafts)?;

        self.budget = new_budget;
        for (name, amount) in validated {
            self.push(name, amount);
        }
        Ok(self.state())
    }

    /// Every envelope in listing order (possibly none).
    #[must_use]
    pub fn list_envelopes(&self) -> Vec<Envelope> {
        self.order
            .iter()
            .filter_map(|id| self.envelopes.get(id))
            .cloned()
            .collect()
    }

    /// The envelope at `index`.
    pub fn get_envelope(&self, index: usize) -> Result<Envelope> {
        self.envelope_at(index)
            .cloned()
            .ok_or(Error::EnvelopeNotFound { index })
    }

    /// Replaces the envelope at `index` wholesale; the name may change but the id stays.
    pub fn update_envelope(
        &mut self,
        index: usize,
        replacement: &EnvelopeDraft,
    ) -> Result<Envelope> {
        let (name, amount) = validation::validate_draft("replacement", replacement)?;
        let id = self.id_at(index)?;

        let envelope = self
            .envelopes
            .get_mut(&id)
            .ok_or(Error::EnvelopeNotFound { index })?;
        envelope.name = name;
        envelope.amount = amount;
        Ok(envelope.clone())
    }

    /// Removes the envelope at `index`; later envelopes move down one position.
    pub fn delete_envelope(&mut self, index: usize) -> Result<()> {
        let id = self.id_at(index)?;
        self.order.remove(index);
        self.envelopes.remove(&id);
        Ok(())
    }

    /// Transfers between two envelopes named by the caller, using the store's
    /// [`TransferMode`]. Names are resolved before anything is mutated.
    pub fn transfer(&mut self, from: &str, to: &str) -> Result<TransferReceipt> {
        let mode = self.transfer_mode;
        let plan = transfer::resolve(self, from, to)?;
        transfer::apply(self, &plan, mode)
    }

    /// Stable id of the envelope currently at `index`.
    pub fn id_at(&self, index: usize) -> Result<EnvelopeId> {
        self.order
            .get(index)
            .copied()
            .ok_or(Error::EnvelopeNotFound { index })
    }

    /// Looks an envelope up by its stable id.
    #[must_use]
    pub fn get_by_id(&self, id: EnvelopeId) -> Option<&Envelope> {
        self.envelopes.get(&id)
    }

    /// Current position of the envelope with `id`.
    #[must_use]
    pub fn position_of(&self, id: EnvelopeId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    /// First envelope (in listing order) called `name`, with its position.
    pub(crate) fn find_by_name(&self, name: &str) -> Option<(usize, &Envelope)> {
        self.order
            .iter()
            .filter_map(|id| self.envelopes.get(id))
            .enumerate()
            .find(|(_, envelope)| envelope.name == name)
    }

    pub(crate) fn amount_of(&self, id: EnvelopeId) -> Option<f64> {
        self.envelopes.get(&id).map(|envelope| envelope.amount)
    }

    pub(crate) fn set_amount(&mut self, id: EnvelopeId, amount: f64) {
        if let Some(envelope) = self.envelopes.get_mut(&id) {
            envelope.amount = amount;
        }
    }

    fn envelope_at(&self, index: usize) -> Option<&Envelope> {
        self.order.get(index).and_then(|id| self.envelopes.get(id))
    }

    fn push(&mut self, name: String, amount: f64) {
        let envelope = Envelope::new(name, amount);
        self.order.push(envelope.id);
        self.envelopes.insert(envelope.id, envelope);
    }
}
