//! Multi-Carrier Shipping Gateway Library

pub mod api;
pub mod carriers;
pub mod config;
pub mod gateway;
pub mod models;
pub mod observability;
pub mod scaffold;
pub mod storage;
pub mod wire;

pub use api::HttpServer;
pub use config::schema::GatewayConfig;
