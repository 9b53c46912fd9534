//! Unified rating entities.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Address, Parcel};

/// Request to quote shipping services for a set of parcels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRequest {
    pub shipper: Address,
    pub recipient: Address,
    #[serde(default)]
    pub parcels: Vec<Parcel>,
    /// Unified service codes to restrict the quote to, when supported.
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,
}

/// A single service quote from a carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateDetails {
    pub carrier_id: String,
    pub carrier_name: String,
    pub service: String,
    pub total_charge: Decimal,
    pub currency: String,
    pub transit_days: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}
