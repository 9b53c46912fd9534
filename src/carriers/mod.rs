//! Carrier integrations and the mapper contract.
//!
//! # Responsibilities
//! - Define the `CarrierMapper` trait every integration implements
//! - Resolve carrier ids to configured mapper instances (`CarrierRegistry`)
//! - Describe prepared carrier HTTP requests for the gateway transport
//!
//! # Design Decisions
//! - Mappers are pure: build/parse functions never perform I/O, the
//!   gateway owns transmission
//! - Operations a carrier does not offer default to `NotSupported` so each
//!   integration implements only its feature set
//! - Settings are held by the mapper instance and never mutated

pub mod canadapost;

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::config::CarriersConfig;
use crate::models::{
    ConfirmationDetails, Message, PickupCancelRequest, PickupDetails, PickupRequest,
    PickupUpdateRequest, RateDetails, RateRequest, ShipmentCancelRequest, ShipmentDetails,
    ShipmentRequest, TrackingDetails, TrackingRequest, ValidationError,
};
use crate::wire::WireError;

/// Errors raised while mapping between unified and carrier models.
#[derive(Debug, Error)]
pub enum CarrierError {
    /// The carrier does not offer this operation.
    #[error("operation '{operation}' is not supported by carrier '{carrier_id}'")]
    NotSupported {
        carrier_id: String,
        operation: &'static str,
    },

    /// The unified payload lacks a field the carrier schema requires.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Encoding/decoding a carrier document failed (programmer error).
    #[error(transparent)]
    Wire(#[from] WireError),
}

pub type CarrierResult<T> = Result<T, CarrierError>;

/// HTTP method of a prepared carrier request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully described carrier HTTP request, ready for the gateway to send.
///
/// Mappers produce these; no I/O has happened yet when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
    pub content_type: Option<&'static str>,
    pub accept: Option<&'static str>,
    pub basic_auth: Option<(String, String)>,
}

/// The unified result shape shared by all response parsers: an optional
/// success entity plus every carrier fault/warning found in the document.
pub type ParsedResponse<T> = (Option<T>, Vec<Message>);

/// The contract every carrier integration implements.
///
/// Build methods translate unified payloads into prepared carrier requests;
/// parse methods translate raw carrier response bodies back into unified
/// entities plus normalized messages.
pub trait CarrierMapper: Send + Sync {
    fn carrier_id(&self) -> &str;
    fn carrier_name(&self) -> &str;

    fn schedule_pickup(&self, _payload: &PickupRequest) -> CarrierResult<PreparedRequest> {
        Err(self.not_supported("schedule_pickup"))
    }

    fn update_pickup(&self, _payload: &PickupUpdateRequest) -> CarrierResult<PreparedRequest> {
        Err(self.not_supported("update_pickup"))
    }

    fn cancel_pickup(&self, _payload: &PickupCancelRequest) -> CarrierResult<PreparedRequest> {
        Err(self.not_supported("cancel_pickup"))
    }

    fn parse_pickup_response(&self, _body: &str) -> CarrierResult<ParsedResponse<PickupDetails>> {
        Err(self.not_supported("parse_pickup_response"))
    }

    fn parse_pickup_cancel_response(
        &self,
        _body: &str,
    ) -> CarrierResult<ParsedResponse<ConfirmationDetails>> {
        Err(self.not_supported("parse_pickup_cancel_response"))
    }

    fn fetch_rates(&self, _payload: &RateRequest) -> CarrierResult<PreparedRequest> {
        Err(self.not_supported("fetch_rates"))
    }

    fn parse_rate_response(
        &self,
        _body: &str,
    ) -> CarrierResult<(Vec<RateDetails>, Vec<Message>)> {
        Err(self.not_supported("parse_rate_response"))
    }

    fn create_shipment(&self, _payload: &ShipmentRequest) -> CarrierResult<PreparedRequest> {
        Err(self.not_supported("create_shipment"))
    }

    fn parse_shipment_response(
        &self,
        _body: &str,
    ) -> CarrierResult<ParsedResponse<ShipmentDetails>> {
        Err(self.not_supported("parse_shipment_response"))
    }

    fn cancel_shipment(&self, _payload: &ShipmentCancelRequest) -> CarrierResult<PreparedRequest> {
        Err(self.not_supported("cancel_shipment"))
    }

    fn parse_shipment_cancel_response(
        &self,
        _body: &str,
    ) -> CarrierResult<ParsedResponse<ConfirmationDetails>> {
        Err(self.not_supported("parse_shipment_cancel_response"))
    }

    fn track(&self, _payload: &TrackingRequest) -> CarrierResult<PreparedRequest> {
        Err(self.not_supported("track"))
    }

    fn parse_tracking_response(
        &self,
        _body: &str,
    ) -> CarrierResult<(Vec<TrackingDetails>, Vec<Message>)> {
        Err(self.not_supported("parse_tracking_response"))
    }

    fn not_supported(&self, operation: &'static str) -> CarrierError {
        CarrierError::NotSupported {
            carrier_id: self.carrier_id().to_string(),
            operation,
        }
    }
}

/// Configured carrier integrations, resolved by carrier id.
#[derive(Default)]
pub struct CarrierRegistry {
    mappers: HashMap<String, Arc<dyn CarrierMapper>>,
}

impl CarrierRegistry {
    pub fn from_config(config: &CarriersConfig) -> Self {
        let mut mappers: HashMap<String, Arc<dyn CarrierMapper>> = HashMap::new();

        if let Some(cp) = &config.canadapost {
            let mapper = canadapost::CanadaPostMapper::new(canadapost::Settings::from(cp));
            mappers.insert(mapper.carrier_id().to_string(), Arc::new(mapper));
        }

        Self { mappers }
    }

    pub fn get(&self, carrier_id: &str) -> Option<Arc<dyn CarrierMapper>> {
        self.mappers.get(carrier_id).cloned()
    }

    pub fn carrier_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.mappers.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubMapper;

    impl CarrierMapper for StubMapper {
        fn carrier_id(&self) -> &str {
            "stub"
        }
        fn carrier_name(&self) -> &str {
            "Stub Carrier"
        }
    }

    #[test]
    fn test_unimplemented_operations_report_not_supported() {
        let mapper = StubMapper;
        let err = mapper
            .track(&TrackingRequest {
                tracking_numbers: vec!["123".to_string()],
            })
            .unwrap_err();
        assert!(matches!(
            err,
            CarrierError::NotSupported { operation: "track", .. }
        ));
    }
}
