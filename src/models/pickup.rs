//! Unified pickup entities.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{Address, ChargeDetails, Parcel};

/// Request to schedule a carrier pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupRequest {
    pub address: Address,
    /// Date the parcels are ready for pickup.
    pub date: NaiveDate,
    /// Start of the ready window.
    pub ready_time: NaiveTime,
    /// End of the ready window.
    pub closing_time: NaiveTime,
    /// Free-text instruction for the driver.
    pub instruction: Option<String>,
    #[serde(default)]
    pub parcels: Vec<Parcel>,
    /// Carrier-specific option flags (e.g. `five_ton_flag`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,
}

impl PickupRequest {
    /// Read a boolean option flag, treating any non-boolean value as unset.
    pub fn option_flag(&self, name: &str) -> Option<bool> {
        self.options.get(name).and_then(|v| v.as_bool())
    }
}

/// Request to modify an already confirmed pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupUpdateRequest {
    pub confirmation_number: String,
    #[serde(flatten)]
    pub pickup: PickupRequest,
}

/// Request to cancel a confirmed pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupCancelRequest {
    pub confirmation_number: String,
    pub pickup_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

/// Confirmed pickup returned by a carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupDetails {
    pub carrier_id: String,
    pub carrier_name: String,
    pub confirmation_number: String,
    pub pickup_date: Option<NaiveDate>,
    pub pickup_charge: Option<ChargeDetails>,
}
