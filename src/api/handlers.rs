//! Request handlers - structural checks, then one store call each.
//!
//! Handlers parse path segments and bodies into primitives, take the store lock
//! (write for mutations, read otherwise) for exactly one operation and frame the
//! result.

use crate::{
    api::{
        AppState,
        dto::{
            CreateEnvelopesRequest, DataResponse, ErrorResponse, TransferResponse,
            UpdateEnvelopeRequest,
        },
        error::{ApiError, ApiResult},
    },
    core::validation,
    models::{BudgetState, Envelope},
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info, instrument};

/// `POST /api/envelopes` - overwrite the budget and append envelopes
#[instrument(skip_all)]
pub async fn create_envelopes(
    State(state): State<AppState>,
    payload: Result<Json<CreateEnvelopesRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DataResponse<BudgetState>>)> {
    let Json(request) = payload?;
    let budget = validation::parse_amount("budget", &request.budget)?;

    let created = state
        .store
        .write()
        .await
        .create_envelopes(budget, &request.envelopes)?;

    info!(
        added = request.envelopes.len(),
        total = created.envelopes.len(),
        "Created envelopes"
    );
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

/// `GET /api/envelopes` - every envelope in order; 404 when there are none
#[instrument(skip_all)]
pub async fn list_envelopes(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<Vec<Envelope>>>> {
    let envelopes = state.store.read().await.list_envelopes();
    if envelopes.is_empty() {
        return Err(ApiError::NotFound);
    }
    debug!(count = envelopes.len(), "Listed envelopes");
    Ok(Json(DataResponse::new(envelopes)))
}

/// `GET /api/envelopes/:id` - one envelope by position
#[instrument(skip_all)]
pub async fn get_envelope(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DataResponse<Envelope>>> {
    let Path(id) = path?;
    let index = validation::parse_index("id", &id)?;
    let envelope = state.store.read().await.get_envelope(index)?;
    Ok(Json(DataResponse::new(envelope)))
}

/// `PUT /api/envelopes/:id` - replace an envelope; responds with the bare envelope
#[instrument(skip_all)]
pub async fn update_envelope(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateEnvelopeRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope>> {
    let Path(id) = path?;
    let index = validation::parse_index("id", &id)?;
    let Json(request) = payload?;

    let updated = state
        .store
        .write()
        .await
        .update_envelope(index, &request.data)?;

    info!(index, name = %updated.name, "Updated envelope");
    Ok(Json(updated))
}

/// `DELETE /api/envelopes/:id` - remove an envelope; later positions shift down
#[instrument(skip_all)]
pub async fn delete_envelope(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let index = validation::parse_index("id", &id)?;
    state.store.write().await.delete_envelope(index)?;

    info!(index, "Deleted envelope");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/envelopes/transfer/:from/:to` - transfer between two named envelopes
#[instrument(skip_all)]
pub async fn transfer(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<Json<TransferResponse>> {
    let Path((from, to)) = path?;
    let receipt = state.store.write().await.transfer(&from, &to)?;

    info!(from = %receipt.from, to = %receipt.to, "Transferred between envelopes");
    Ok(Json(TransferResponse {
        success: "true",
        from: receipt.from,
        to: receipt.to,
    }))
}

/// Fallback for unmatched routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not Found")))
}
