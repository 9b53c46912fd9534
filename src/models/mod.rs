//! Unified, carrier-agnostic shipping model.
//!
//! # Responsibilities
//! - Define the value objects shared by every carrier integration
//!   (addresses, parcels, pickups, rates, shipments, tracking)
//! - Normalize carrier faults into a single `Message` record
//! - Validate parcel lists against carrier presets (`Packages`)
//!
//! # Design Decisions
//! - Entities are immutable value objects: built once per request/response
//!   cycle, cloned freely, never shared as mutable state
//! - Monetary amounts use `rust_decimal::Decimal`, never binary floats
//! - Carrier-specific option flags travel in a generic options map so the
//!   unified types stay carrier-agnostic

mod address;
mod message;
mod parcel;
mod pickup;
mod rate;
mod shipment;
mod tracking;

pub use address::Address;
pub use message::{ChargeDetails, ConfirmationDetails, Message};
pub use parcel::{
    DimensionUnit, Package, PackagePreset, Packages, Parcel, ParcelField, ValidationError,
    WeightUnit,
};
pub use pickup::{PickupCancelRequest, PickupDetails, PickupRequest, PickupUpdateRequest};
pub use rate::{RateDetails, RateRequest};
pub use shipment::{ShipmentCancelRequest, ShipmentDetails, ShipmentRequest};
pub use tracking::{TrackingDetails, TrackingEvent, TrackingRequest};
