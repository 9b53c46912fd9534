//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): API requests by operation, status
//! - `gateway_carrier_calls_total` (counter): outbound carrier calls by status
//! - `gateway_carrier_retries_total` (counter): carrier call retries
//! - `gateway_rate_limited_total` (counter): throttled requests by tier

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(operation: &'static str, status: u16) {
    counter!(
        "gateway_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
}

pub fn record_carrier_call(status: u16) {
    counter!("gateway_carrier_calls_total", "status" => status.to_string()).increment(1);
}

pub fn record_carrier_retry() {
    counter!("gateway_carrier_retries_total").increment(1);
}

pub fn record_rate_limited(tier: &'static str) {
    counter!("gateway_rate_limited_total", "tier" => tier).increment(1);
}
