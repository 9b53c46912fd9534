//! Outbound carrier transport.
//!
//! # Responsibilities
//! - Transmit prepared carrier requests over HTTPS
//! - Retry connect failures and 5xx with exponential backoff + jitter
//! - Hand raw response bodies back to the carrier parsers
//!
//! # Design Decisions
//! - 4xx responses are returned to the caller, not retried: carriers put
//!   business fault documents in 4xx bodies and the parsers need them
//! - Mappers stay pure; this module owns every byte of carrier I/O
//! - Per-attempt timeout comes from configuration, enforced by the client

pub mod backoff;

use std::time::Duration;

use thiserror::Error;

use crate::carriers::{HttpMethod, PreparedRequest};
use crate::config::RetryConfig;
use crate::observability::metrics;

/// Errors from the carrier transport after retries are exhausted.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Client construction or connection-level failure.
    #[error("carrier transport error: {0}")]
    Transport(String),

    /// The carrier kept answering 5xx.
    #[error("carrier returned HTTP {status}")]
    ServerError { status: u16, body: String },
}

/// Raw carrier response handed to the parsers.
#[derive(Debug, Clone)]
pub struct CarrierResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP client for carrier endpoints with a retry policy.
#[derive(Clone)]
pub struct CarrierGateway {
    client: reqwest::Client,
    retries: RetryConfig,
}

impl CarrierGateway {
    pub fn new(retries: RetryConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(retries.attempt_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self { client, retries })
    }

    /// Send a prepared request, retrying transport failures and 5xx.
    ///
    /// Any non-5xx response is returned as-is: 4xx bodies carry carrier
    /// fault documents the parsers normalize into messages.
    pub async fn send(&self, request: &PreparedRequest) -> Result<CarrierResponse, GatewayError> {
        let max_attempts = if self.retries.enabled {
            self.retries.max_attempts.max(1)
        } else {
            1
        };

        let mut last_error = None;
        for attempt in 0..max_attempts {
            let delay = backoff::backoff_delay(attempt, &self.retries);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if attempt > 0 {
                metrics::record_carrier_retry();
            }

            match self.attempt(request).await {
                Ok(response) if response.status >= 500 => {
                    tracing::warn!(
                        url = %request.url,
                        status = response.status,
                        attempt,
                        "Carrier server error"
                    );
                    last_error = Some(GatewayError::ServerError {
                        status: response.status,
                        body: response.body,
                    });
                }
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::warn!(url = %request.url, attempt, error = %e, "Carrier call failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| GatewayError::Transport("no attempts were made".to_string())))
    }

    async fn attempt(&self, request: &PreparedRequest) -> Result<CarrierResponse, GatewayError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if let Some((username, password)) = &request.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }
        if let Some(content_type) = request.content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(accept) = request.accept {
            builder = builder.header(reqwest::header::ACCEPT, accept);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        metrics::record_carrier_call(status);
        Ok(CarrierResponse { status, body })
    }
}
