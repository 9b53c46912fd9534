//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::carriers::CarrierError;
use crate::gateway::GatewayError;

/// Errors a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("carrier '{0}' is not configured")]
    UnknownCarrier(String),

    #[error("pickup '{0}' not found")]
    PickupNotFound(Uuid),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("operation '{operation}' is not supported by carrier '{carrier_id}'")]
    NotSupported {
        carrier_id: String,
        operation: &'static str,
    },

    /// Building the carrier request failed; a bug, not caller input.
    #[error("carrier request mapping failed: {0}")]
    Mapping(String),

    /// The carrier answered with a document we could not parse.
    #[error("unreadable carrier response: {0}")]
    CarrierResponse(String),

    /// The carrier could not be reached or kept failing.
    #[error(transparent)]
    Upstream(#[from] GatewayError),
}

impl ApiError {
    /// Classify a mapping-layer error raised while parsing a carrier
    /// response: malformed documents become upstream (502) problems.
    pub fn from_parse(err: CarrierError) -> Self {
        match err {
            CarrierError::Wire(e) => ApiError::CarrierResponse(e.to_string()),
            other => other.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownCarrier(_) | ApiError::PickupNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotSupported { .. } => StatusCode::NOT_IMPLEMENTED,
            ApiError::Mapping(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::CarrierResponse(_) | ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<CarrierError> for ApiError {
    fn from(err: CarrierError) -> Self {
        match err {
            CarrierError::NotSupported {
                carrier_id,
                operation,
            } => ApiError::NotSupported {
                carrier_id,
                operation,
            },
            CarrierError::Validation(e) => ApiError::Validation(e.to_string()),
            CarrierError::Wire(e) => ApiError::Mapping(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
