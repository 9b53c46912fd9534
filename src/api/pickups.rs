//! Pickup operation handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::models::{PickupCancelRequest, PickupRequest, PickupUpdateRequest};
use crate::observability::metrics;
use crate::storage::StoredPickup;

use super::dto::{ConfirmationDto, PickupDto, PickupRequestDto, RejectedDto};
use super::error::ApiError;
use super::server::AppState;

/// Schedule a pickup with a configured carrier.
pub async fn schedule_pickup(
    State(state): State<AppState>,
    Path(carrier_id): Path<String>,
    Json(body): Json<PickupRequestDto>,
) -> Result<Response, ApiError> {
    let mapper = state
        .registry
        .get(&carrier_id)
        .ok_or_else(|| ApiError::UnknownCarrier(carrier_id.clone()))?;
    let payload = PickupRequest::try_from(body)?;

    let prepared = mapper.schedule_pickup(&payload)?;
    let response = state.gateway.send(&prepared).await?;
    let (details, messages) = mapper
        .parse_pickup_response(&response.body)
        .map_err(ApiError::from_parse)?;

    match details {
        Some(details) => {
            let stored = state.store.insert(mapper.carrier_id(), details);
            tracing::info!(
                carrier_id = %carrier_id,
                pickup_id = %stored.id,
                confirmation = %stored.details.confirmation_number,
                "Pickup scheduled"
            );
            metrics::record_request("schedule_pickup", 201);
            Ok((StatusCode::CREATED, Json(PickupDto::from_stored(stored, messages))).into_response())
        }
        None => {
            metrics::record_request("schedule_pickup", 400);
            Ok((StatusCode::BAD_REQUEST, Json(RejectedDto::new(messages))).into_response())
        }
    }
}

/// Modify a previously scheduled pickup.
pub async fn update_pickup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PickupRequestDto>,
) -> Result<Response, ApiError> {
    let stored = state.store.get(id).ok_or(ApiError::PickupNotFound(id))?;
    let mapper = state
        .registry
        .get(&stored.carrier_id)
        .ok_or_else(|| ApiError::UnknownCarrier(stored.carrier_id.clone()))?;

    let payload = PickupUpdateRequest {
        confirmation_number: stored.details.confirmation_number.clone(),
        pickup: PickupRequest::try_from(body)?,
    };

    let prepared = mapper.update_pickup(&payload)?;
    let response = state.gateway.send(&prepared).await?;
    let (details, messages) = mapper
        .parse_pickup_response(&response.body)
        .map_err(ApiError::from_parse)?;

    match details {
        Some(details) => {
            let updated = state
                .store
                .update(id, details)
                .ok_or(ApiError::PickupNotFound(id))?;
            metrics::record_request("update_pickup", 200);
            Ok(Json(PickupDto::from_stored(updated, messages)).into_response())
        }
        None => {
            metrics::record_request("update_pickup", 400);
            Ok((StatusCode::BAD_REQUEST, Json(RejectedDto::new(messages))).into_response())
        }
    }
}

/// Cancel a scheduled pickup.
pub async fn cancel_pickup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let stored = state.store.get(id).ok_or(ApiError::PickupNotFound(id))?;
    let mapper = state
        .registry
        .get(&stored.carrier_id)
        .ok_or_else(|| ApiError::UnknownCarrier(stored.carrier_id.clone()))?;

    let payload = PickupCancelRequest {
        confirmation_number: stored.details.confirmation_number.clone(),
        pickup_date: stored.details.pickup_date,
        reason: None,
    };

    let prepared = mapper.cancel_pickup(&payload)?;
    let response = state.gateway.send(&prepared).await?;
    let (confirmation, messages) = mapper
        .parse_pickup_cancel_response(&response.body)
        .map_err(ApiError::from_parse)?;

    match confirmation {
        Some(confirmation) => {
            state.store.remove(id);
            tracing::info!(pickup_id = %id, "Pickup cancelled");
            metrics::record_request("cancel_pickup", 200);
            Ok(Json(ConfirmationDto::new(confirmation, messages)).into_response())
        }
        None => {
            metrics::record_request("cancel_pickup", 400);
            Ok((StatusCode::BAD_REQUEST, Json(RejectedDto::new(messages))).into_response())
        }
    }
}

/// All pickups the gateway is tracking, most recent first.
pub async fn list_pickups(State(state): State<AppState>) -> Json<Vec<PickupDto>> {
    let pickups = state
        .store
        .list()
        .into_iter()
        .map(|stored| PickupDto::from_stored(stored, Vec::new()))
        .collect();
    Json(pickups)
}

/// A single tracked pickup.
pub async fn get_pickup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PickupDto>, ApiError> {
    let stored: StoredPickup = state.store.get(id).ok_or(ApiError::PickupNotFound(id))?;
    Ok(Json(PickupDto::from_stored(stored, Vec::new())))
}
