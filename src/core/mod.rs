//! Core business logic - framework-agnostic budget and envelope operations.
//!
//! Nothing in here logs or knows about HTTP; operations return typed errors and
//! leave presentation to the caller.

/// The in-memory budget store
pub mod store;
/// Name resolution and application of transfers
pub mod transfer;
/// Pure input validation shared by every entry point
pub mod validation;

pub use store::BudgetStore;
