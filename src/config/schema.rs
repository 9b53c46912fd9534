//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the shipping gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server settings (bind address, timeouts).
    pub server: ServerConfig,

    /// API authentication settings.
    pub auth: AuthConfig,

    /// Tiered request throttling.
    pub rate_limit: RateLimitConfig,

    /// Carrier connection blocks.
    pub carriers: CarriersConfig,

    /// Outbound carrier call retry policy.
    pub retries: RetryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Pickup store persistence.
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// API authentication configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer tokens accepted as authenticated callers.
    pub api_tokens: Vec<String>,
}

/// Tiered rate limiting configuration.
///
/// Anonymous callers are keyed by client IP; authenticated callers by their
/// bearer token.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Enable rate limiting.
    pub enabled: bool,

    /// Requests per minute for anonymous callers.
    pub anonymous_per_minute: u32,

    /// Requests per minute for authenticated callers.
    pub authenticated_per_minute: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            anonymous_per_minute: 40,
            authenticated_per_minute: 60,
        }
    }
}

/// All configured carrier connections.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CarriersConfig {
    pub canadapost: Option<CanadaPostConfig>,
}

/// Canada Post connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CanadaPostConfig {
    pub username: String,
    pub password: String,
    pub customer_number: String,
    pub contract_id: Option<String>,

    /// Use the carrier's test environment.
    #[serde(default)]
    pub test_mode: bool,

    /// Connection identifier surfaced in unified entities.
    #[serde(default = "default_canadapost_carrier_id")]
    pub carrier_id: String,

    /// Explicit endpoint override (used by integration tests).
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

fn default_canadapost_carrier_id() -> String {
    "canadapost".to_string()
}

/// Retry configuration for outbound carrier calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Maximum number of retry attempts.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,

    /// Per-attempt timeout for carrier calls in seconds.
    pub attempt_timeout_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
            attempt_timeout_secs: 20,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Pickup store persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file the pickup store is persisted to; in-memory only if unset.
    pub pickup_store_path: Option<String>,
}
