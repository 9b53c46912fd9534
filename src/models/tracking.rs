//! Unified tracking entities.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Request to track one or more parcels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingRequest {
    pub tracking_numbers: Vec<String>,
}

/// One scan event in a parcel's tracking history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Tracking status for a single parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingDetails {
    pub carrier_id: String,
    pub carrier_name: String,
    pub tracking_number: String,
    #[serde(default)]
    pub events: Vec<TrackingEvent>,
    pub estimated_delivery: Option<NaiveDate>,
    #[serde(default)]
    pub delivered: bool,
}
