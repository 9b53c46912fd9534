//! Canada Post pickup-request wire schema.
//!
//! Element names follow the carrier's kebab-case convention. Optional
//! blocks must be omitted entirely when empty; the carrier rejects
//! present-but-empty elements.

use serde::{Deserialize, Serialize};

/// Namespace of the pickup request service.
pub const PICKUP_NAMESPACE: &str = "http://www.canadapost.ca/ws/pickuprequest";

/// Serialization envelope for the shared pickup field struct.
///
/// Create and update are the same document under different root names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupMode {
    Create,
    Update,
}

impl PickupMode {
    pub fn root_name(self) -> &'static str {
        match self {
            PickupMode::Create => "pickup-request-details",
            PickupMode::Update => "pickup-request-update",
        }
    }
}

/// Request body shared by the create and update envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickupRequestDetails {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "customer-request-id", skip_serializing_if = "Option::is_none")]
    pub customer_request_id: Option<String>,
    #[serde(rename = "pickup-type")]
    pub pickup_type: String,
    #[serde(rename = "pickup-location")]
    pub pickup_location: PickupLocation,
    #[serde(rename = "contact-info", skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(rename = "location-details", skip_serializing_if = "Option::is_none")]
    pub location_details: Option<LocationDetails>,
    #[serde(rename = "items-characteristics", skip_serializing_if = "Option::is_none")]
    pub items_characteristics: Option<ItemsCharacteristics>,
    #[serde(rename = "pickup-volume")]
    pub pickup_volume: String,
    #[serde(rename = "pickup-times")]
    pub pickup_times: PickupTimes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickupLocation {
    #[serde(rename = "business-address-flag")]
    pub business_address_flag: bool,
    #[serde(rename = "alternate-address", skip_serializing_if = "Option::is_none")]
    pub alternate_address: Option<AlternateAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateAddress {
    #[serde(rename = "company", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "address-line-1", skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(rename = "city", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "province", skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(rename = "postal-code", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    #[serde(rename = "contact-name", skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(rename = "email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "contact-phone", skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(rename = "telephone-ext", skip_serializing_if = "Option::is_none")]
    pub telephone_ext: Option<String>,
    #[serde(rename = "receive-email-updates-flag")]
    pub receive_email_updates_flag: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationDetails {
    #[serde(rename = "five-ton-flag", skip_serializing_if = "Option::is_none")]
    pub five_ton_flag: Option<bool>,
    #[serde(rename = "loading-dock-flag", skip_serializing_if = "Option::is_none")]
    pub loading_dock_flag: Option<bool>,
    #[serde(rename = "pickup-instructions", skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemsCharacteristics {
    #[serde(rename = "pww-flag", skip_serializing_if = "Option::is_none")]
    pub pww_flag: Option<bool>,
    #[serde(rename = "priority-flag", skip_serializing_if = "Option::is_none")]
    pub priority_flag: Option<bool>,
    #[serde(rename = "returns-flag", skip_serializing_if = "Option::is_none")]
    pub returns_flag: Option<bool>,
    #[serde(rename = "heavy-item-flag")]
    pub heavy_item_flag: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickupTimes {
    #[serde(rename = "on-demand-pickup-time")]
    pub on_demand_pickup_time: OnDemandPickupTime,
}

/// Times as the carrier expects them: date `YYYY-MM-DD`, times `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnDemandPickupTime {
    #[serde(rename = "date")]
    pub date: String,
    #[serde(rename = "preferred-time")]
    pub preferred_time: String,
    #[serde(rename = "closing-time")]
    pub closing_time: String,
}

/// Success payload of a pickup create/update response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickupRequestInfo {
    #[serde(rename = "pickup-request-header")]
    pub pickup_request_header: PickupRequestHeader,
    #[serde(rename = "pickup-request-price", default)]
    pub pickup_request_price: Option<PickupRequestPrice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickupRequestHeader {
    #[serde(rename = "request-id")]
    pub request_id: String,
    #[serde(rename = "next-pickup-date", default)]
    pub next_pickup_date: Option<String>,
    #[serde(rename = "pickup-type", default)]
    pub pickup_type: Option<String>,
}

/// Charge breakdown; amounts arrive as decimal text, any of them may be
/// missing and counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PickupRequestPrice {
    #[serde(rename = "hst-amount", default)]
    pub hst_amount: Option<String>,
    #[serde(rename = "gst-amount", default)]
    pub gst_amount: Option<String>,
    #[serde(rename = "due-amount", default)]
    pub due_amount: Option<String>,
}

/// Carrier fault document (`messages` root).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageList {
    #[serde(rename = "message", default)]
    pub messages: Vec<FaultMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FaultMessage {
    #[serde(rename = "code", default)]
    pub code: Option<String>,
    #[serde(rename = "description", default)]
    pub description: Option<String>,
}
