//! Request and response bodies for the HTTP API.
//!
//! Response framing mirrors the service's public contract: successful bodies
//! carry `success: "true"`, error bodies `success: "false"` and a `message`.

use crate::models::EnvelopeDraft;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/envelopes`
#[derive(Debug, Deserialize)]
pub struct CreateEnvelopesRequest {
    /// New budget figure, as a number or numeric string
    #[serde(default)]
    pub budget: Value,
    /// Envelopes to append, each a single `name: amount` object
    #[serde(default)]
    pub envelopes: Vec<EnvelopeDraft>,
}

/// Body of `PUT /api/envelopes/:id`
#[derive(Debug, Deserialize)]
pub struct UpdateEnvelopeRequest {
    /// Replacement envelope
    #[serde(default)]
    pub data: EnvelopeDraft,
}

/// Successful response wrapping `data`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    /// Always `"true"`
    pub success: &'static str,
    /// Payload
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Wraps a payload in a success envelope.
    pub const fn new(data: T) -> Self {
        Self {
            success: "true",
            data,
        }
    }
}

/// Successful transfer response
#[derive(Debug, Serialize)]
pub struct TransferResponse {
    /// Always `"true"`
    pub success: &'static str,
    /// Source envelope name
    pub from: String,
    /// Target envelope name
    pub to: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `"false"`
    pub success: &'static str,
    /// Human-readable reason
    pub message: String,
}

impl ErrorResponse {
    /// Builds an error body with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: "false",
            message: message.into(),
        }
    }
}
