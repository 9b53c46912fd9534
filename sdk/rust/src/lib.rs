pub mod client;

pub use client::{PickupRequest, Pickup, ShippingClient};
