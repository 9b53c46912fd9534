//! Unified shipment entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Address, Parcel};

/// Request to create a shipment and purchase a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    pub shipper: Address,
    pub recipient: Address,
    #[serde(default)]
    pub parcels: Vec<Parcel>,
    /// Carrier service code to ship with.
    pub service: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,
}

/// Request to void a shipment before pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentCancelRequest {
    pub shipment_identifier: String,
}

/// A purchased shipment returned by a carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDetails {
    pub carrier_id: String,
    pub carrier_name: String,
    pub tracking_number: String,
    pub shipment_identifier: String,
    /// Label file format (e.g. "PDF").
    pub label_type: Option<String>,
    /// Base64-encoded label document.
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}
