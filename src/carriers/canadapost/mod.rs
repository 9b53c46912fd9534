//! Canada Post integration.
//!
//! # Responsibilities
//! - Map unified pickup payloads to the Canada Post pickup-request schema
//! - Parse pickup responses and fault documents back into unified entities
//! - Describe the carrier's REST endpoints for the gateway transport
//!
//! # Wire Format
//! XML under `http://www.canadapost.ca/ws/pickuprequest`; the create and
//! update operations share one field struct serialized under
//! `pickup-request-details` or `pickup-request-update`.

pub mod error;
pub mod pickup;
pub mod schema;
pub mod settings;
pub mod units;

pub use settings::Settings;

use crate::carriers::{
    CarrierMapper, CarrierResult, HttpMethod, ParsedResponse, PreparedRequest,
};
use crate::models::{
    ConfirmationDetails, Message, PickupCancelRequest, PickupDetails, PickupRequest,
    PickupUpdateRequest,
};
use crate::carriers::canadapost::schema::PickupMode;

const PICKUP_CONTENT_TYPE: &str = "application/vnd.cpc.pickuprequest+xml";

/// Canada Post mapper: pickup scheduling, update, and cancellation.
pub struct CanadaPostMapper {
    settings: Settings,
}

impl CanadaPostMapper {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    fn pickup_collection_url(&self) -> String {
        format!(
            "{}/enab/{}/pickuprequest",
            self.settings.server_url(),
            self.settings.customer_number
        )
    }

    fn pickup_item_url(&self, confirmation_number: &str) -> String {
        format!("{}/{}", self.pickup_collection_url(), confirmation_number)
    }

    fn auth(&self) -> Option<(String, String)> {
        Some((
            self.settings.username.clone(),
            self.settings.password.clone(),
        ))
    }
}

impl CarrierMapper for CanadaPostMapper {
    fn carrier_id(&self) -> &str {
        &self.settings.carrier_id
    }

    fn carrier_name(&self) -> &str {
        Settings::CARRIER_NAME
    }

    fn schedule_pickup(&self, payload: &PickupRequest) -> CarrierResult<PreparedRequest> {
        let request = pickup::pickup_request(payload, &self.settings, PickupMode::Create)?;
        Ok(PreparedRequest {
            method: HttpMethod::Post,
            url: self.pickup_collection_url(),
            body: Some(request.serialize()?),
            content_type: Some(PICKUP_CONTENT_TYPE),
            accept: Some(PICKUP_CONTENT_TYPE),
            basic_auth: self.auth(),
        })
    }

    fn update_pickup(&self, payload: &PickupUpdateRequest) -> CarrierResult<PreparedRequest> {
        let request = pickup::pickup_request(&payload.pickup, &self.settings, PickupMode::Update)?;
        Ok(PreparedRequest {
            method: HttpMethod::Put,
            url: self.pickup_item_url(&payload.confirmation_number),
            body: Some(request.serialize()?),
            content_type: Some(PICKUP_CONTENT_TYPE),
            accept: Some(PICKUP_CONTENT_TYPE),
            basic_auth: self.auth(),
        })
    }

    fn cancel_pickup(&self, payload: &PickupCancelRequest) -> CarrierResult<PreparedRequest> {
        Ok(PreparedRequest {
            method: HttpMethod::Delete,
            url: self.pickup_item_url(&payload.confirmation_number),
            body: None,
            content_type: None,
            accept: Some(PICKUP_CONTENT_TYPE),
            basic_auth: self.auth(),
        })
    }

    fn parse_pickup_response(&self, body: &str) -> CarrierResult<ParsedResponse<PickupDetails>> {
        pickup::parse_pickup_response(body, &self.settings)
    }

    fn parse_pickup_cancel_response(
        &self,
        body: &str,
    ) -> CarrierResult<ParsedResponse<ConfirmationDetails>> {
        pickup::parse_pickup_cancel_response(body, &self.settings)
    }
}

/// Build the unified messages for an arbitrary Canada Post fault document.
pub fn parse_error_response(body: &str, settings: &Settings) -> CarrierResult<Vec<Message>> {
    error::parse_error_response(body, settings)
}
