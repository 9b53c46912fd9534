//! Normalized carrier messages and charges.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A uniform error/warning record extracted from a carrier response.
///
/// Every response parser returns zero or more of these alongside the
/// (possibly absent) success entity, so partial success stays visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub carrier_id: String,
    pub carrier_name: String,
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

/// A named monetary amount (e.g. "Pickup fees").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeDetails {
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
}

/// Outcome of an operation that has no richer payload (cancellations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationDetails {
    pub carrier_id: String,
    pub carrier_name: String,
    pub operation: String,
    pub success: bool,
}
