//! Transfer between envelopes, split into a pure resolve step and an apply step.
//!
//! [`resolve`] turns both names into positions and stable ids without touching
//! the store; [`apply`] performs the mutation from that plan. The store runs
//! both under the same `&mut self` borrow, so nothing can slip in between.

use crate::{
    core::{store::BudgetStore, validation},
    errors::{Error, Result},
    models::{EnvelopeId, TransferMode, TransferReceipt},
};

const UNKNOWN_ENVELOPE: &str = "Envelope does not exist";

/// One side of a transfer after name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvelope {
    /// Position in listing order at resolution time
    pub index: usize,
    /// Stable identifier
    pub id: EnvelopeId,
    /// Name as supplied by the caller
    pub name: String,
}

/// Both sides of a transfer, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    /// Envelope whose amount is read
    pub from: ResolvedEnvelope,
    /// Envelope whose amount is written
    pub to: ResolvedEnvelope,
}

fn resolve_one(store: &BudgetStore, field: &str, name: &str) -> Result<ResolvedEnvelope> {
    store
        .find_by_name(name)
        .map(|(index, envelope)| ResolvedEnvelope {
            index,
            id: envelope.id,
            name: name.to_string(),
        })
        .ok_or_else(|| Error::validation(field, UNKNOWN_ENVELOPE))
}

/// Resolves both envelope names. When names repeat, the first match wins.
pub fn resolve(store: &BudgetStore, from: &str, to: &str) -> Result<TransferPlan> {
    Ok(TransferPlan {
        from: resolve_one(store, "from", from)?,
        to: resolve_one(store, "to", to)?,
    })
}

/// Applies a resolved plan according to `mode`.
///
/// In [`TransferMode::Copy`] the target takes the source's current amount and the
/// source is left alone. In [`TransferMode::Move`] the target is credited with the
/// source's amount and the source drops to zero. A plan whose sides are the same
/// envelope changes nothing.
pub fn apply(
    store: &mut BudgetStore,
    plan: &TransferPlan,
    mode: TransferMode,
) -> Result<TransferReceipt> {
    let source = store.amount_of(plan.from.id).ok_or_else(|| Error::Internal {
        message: format!("resolved envelope {} vanished", plan.from.id),
    })?;
    let target = store.amount_of(plan.to.id).ok_or_else(|| Error::Internal {
        message: format!("resolved envelope {} vanished", plan.to.id),
    })?;

    if plan.from.id != plan.to.id {
        match mode {
            TransferMode::Copy => store.set_amount(plan.to.id, source),
            TransferMode::Move => {
                let credited = validation::validate_amount("to", target + source)?;
                store.set_amount(plan.to.id, credited);
                store.set_amount(plan.from.id, 0.0);
            }
        }
    }

    Ok(TransferReceipt {
        from: plan.from.name.clone(),
        to: plan.to.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_utils::*;

    #[test]
    fn test_resolve_captures_positions_and_ids() {
        let store = store_with(0.0, &[("a", 5.0), ("b", 1.0)]);
        let plan = resolve(&store, "b", "a").unwrap();

        assert_eq!(plan.from.index, 1);
        assert_eq!(plan.to.index, 0);
        assert_eq!(Some(plan.from.id), store.id_at(1).ok());
        assert_eq!(Some(plan.to.id), store.id_at(0).ok());
    }

    #[test]
    fn test_resolve_unknown_names() {
        let store = store_with(0.0, &[("a", 5.0)]);

        let err = resolve(&store, "x", "a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Envelope does not exist at from");

        let err = resolve(&store, "a", "y").unwrap_err();
        assert_eq!(err.to_string(), "Envelope does not exist at to");
    }

    #[test]
    fn test_resolve_first_match_wins_for_duplicates() {
        let store = store_with(0.0, &[("dup", 1.0), ("dup", 2.0), ("c", 3.0)]);
        let plan = resolve(&store, "dup", "c").unwrap();
        assert_eq!(plan.from.index, 0);
    }

    #[test]
    fn test_apply_copy_leaves_source() {
        let mut store = store_with(0.0, &[("a", 5.0), ("b", 1.0)]);
        let plan = resolve(&store, "a", "b").unwrap();
        let receipt = apply(&mut store, &plan, TransferMode::Copy).unwrap();

        assert_eq!(receipt.from, "a");
        assert_eq!(receipt.to, "b");
        assert_eq!(amounts(&store), vec![5.0, 5.0]);
    }

    #[test]
    fn test_apply_move_debits_source() {
        let mut store = store_with(0.0, &[("a", 5.0), ("b", 1.0)]);
        let plan = resolve(&store, "a", "b").unwrap();
        apply(&mut store, &plan, TransferMode::Move).unwrap();

        assert_eq!(amounts(&store), vec![0.0, 6.0]);
    }

    #[test]
    fn test_apply_same_envelope_is_noop() {
        for mode in [TransferMode::Copy, TransferMode::Move] {
            let mut store = store_with(0.0, &[("a", 5.0)]);
            let plan = resolve(&store, "a", "a").unwrap();
            apply(&mut store, &plan, mode).unwrap();
            assert_eq!(amounts(&store), vec![5.0]);
        }
    }

    #[test]
    fn test_apply_move_overflow_leaves_state() {
        let mut store = store_with(0.0, &[("a", f64::MAX), ("b", f64::MAX)]);
        let plan = resolve(&store, "a", "b").unwrap();
        let err = apply(&mut store, &plan, TransferMode::Move).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(amounts(&store), vec![f64::MAX, f64::MAX]);
    }

    #[test]
    fn test_apply_follows_ids_not_positions() {
        let mut store = store_with(0.0, &[("a", 5.0), ("b", 1.0), ("c", 2.0)]);
        let plan = resolve(&store, "a", "c").unwrap();
        store.delete_envelope(1).unwrap();

        apply(&mut store, &plan, TransferMode::Copy).unwrap();
        assert_eq!(amounts(&store), vec![5.0, 5.0]);
    }

    #[test]
    fn test_apply_stale_plan_is_internal_error() {
        let mut store = store_with(0.0, &[("a", 5.0), ("b", 1.0)]);
        let plan = resolve(&store, "a", "b").unwrap();
        store.delete_envelope(0).unwrap();

        let err = apply(&mut store, &plan, TransferMode::Copy).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(amounts(&store), vec![1.0]);
    }
}
