//! HTTP layer - routes, handlers and server bootstrap over the budget store.
//!
//! ## Endpoints
//! - POST /api/envelopes - Overwrite budget, append envelopes
//! - GET /api/envelopes - List envelopes
//! - GET /api/envelopes/:id - Get envelope by position
//! - PUT /api/envelopes/:id - Replace envelope by position
//! - DELETE /api/envelopes/:id - Delete envelope by position
//! - POST /api/envelopes/transfer/:from/:to - Transfer between named envelopes

/// Request and response bodies
pub mod dto;
/// Error type and response mapping
pub mod error;
/// Route handlers
pub mod handlers;
/// Listener setup and serving
pub mod server;

use crate::core::BudgetStore;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Shared data available to all handlers.
///
/// Mutating handlers hold the write lock for their whole resolve-then-mutate
/// step; readers share the read lock.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide budget store
    pub store: Arc<RwLock<BudgetStore>>,
}

impl AppState {
    /// Wraps a store for sharing across handlers.
    #[must_use]
    pub fn new(store: BudgetStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Creates the API router.
pub fn create_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route(
            "/api/envelopes",
            post(handlers::create_envelopes)
                .get(handlers::list_envelopes)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/envelopes/:id",
            get(handlers::get_envelope)
                .put(handlers::update_envelope)
                .delete(handlers::delete_envelope)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/envelopes/transfer/:from/:to",
            post(handlers::transfer).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
