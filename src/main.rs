//! Multi-Carrier Shipping Gateway
//!
//! A unified shipping API built with Tokio and Axum: one set of models for
//! pickups, rates, shipments and tracking, mapped per carrier onto each
//! carrier's own wire format.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌────────────────────────────────────────────────┐
//!                 │                SHIPPING GATEWAY                 │
//!                 │                                                 │
//!   API Request   │  ┌─────────┐   ┌──────────┐   ┌─────────────┐  │
//!   ──────────────┼─▶│   api   │──▶│ carriers │──▶│   gateway   │──┼──▶ Carrier
//!                 │  │ server  │   │ mappers  │   │  transport  │  │     API
//!                 │  └─────────┘   └──────────┘   └─────────────┘  │
//!                 │       │              │                         │
//!                 │       ▼              ▼                         │
//!                 │  ┌─────────┐   ┌──────────┐   ┌─────────────┐  │
//!                 │  │ storage │   │   wire   │   │ observability│ │
//!                 │  │ pickups │   │  codecs  │   │ logs/metrics │ │
//!                 │  └─────────┘   └──────────┘   └─────────────┘  │
//!                 └────────────────────────────────────────────────┘
//! ```

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use freightgate::carriers::CarrierRegistry;
use freightgate::config::loader::load_config;
use freightgate::config::GatewayConfig;
use freightgate::gateway::CarrierGateway;
use freightgate::observability::{logging, metrics};
use freightgate::storage::PickupStore;
use freightgate::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before logging: the log level lives in it.
    let config = match std::env::var("FREIGHTGATE_CONFIG") {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => GatewayConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("freightgate v0.1.0 starting");
    tracing::info!(
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        rate_limit_enabled = config.rate_limit.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let registry = Arc::new(CarrierRegistry::from_config(&config.carriers));
    tracing::info!(carriers = ?registry.carrier_ids(), "Carrier registry built");

    let gateway = CarrierGateway::new(config.retries.clone())?;

    let store = match &config.storage.pickup_store_path {
        Some(path) => {
            let store = PickupStore::load_from_file(path)?;
            tracing::info!(path = %path, pickups = store.len(), "Pickup store loaded");
            store
        }
        None => PickupStore::new(None),
    };

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(&config, registry, gateway, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
