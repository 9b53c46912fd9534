//! HTTP API layer.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, auth, throttling)
//! - Translate unified entities to camelCase boundary DTOs
//! - Map carrier/transport errors to HTTP statuses
//!
//! # Design Decisions
//! - Business faults (carrier messages with no success entity) are 400s
//!   with the message list in the body; transport failures are 502s
//! - Anonymous callers are allowed but throttled at the lower tier
//! - The unified model stays snake_case; casing converts at this boundary

pub mod dto;
pub mod error;
pub mod middleware;
pub mod pickups;
pub mod server;

pub use server::HttpServer;
