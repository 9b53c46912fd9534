//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, rates > 0, bind address parses)
//! - Check carrier blocks carry complete credentials
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn error(field: &str, message: &str) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(error(
            "server.bind_address",
            "must be a valid socket address",
        ));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(error("server.request_timeout_secs", "must be greater than 0"));
    }

    if config.rate_limit.enabled {
        if config.rate_limit.anonymous_per_minute == 0 {
            errors.push(error(
                "rate_limit.anonymous_per_minute",
                "must be greater than 0",
            ));
        }
        if config.rate_limit.authenticated_per_minute == 0 {
            errors.push(error(
                "rate_limit.authenticated_per_minute",
                "must be greater than 0",
            ));
        }
    }

    if config.retries.max_attempts == 0 {
        errors.push(error("retries.max_attempts", "must be greater than 0"));
    }
    if config.retries.base_delay_ms > config.retries.max_delay_ms {
        errors.push(error(
            "retries.base_delay_ms",
            "must not exceed retries.max_delay_ms",
        ));
    }
    if config.retries.attempt_timeout_secs == 0 {
        errors.push(error("retries.attempt_timeout_secs", "must be greater than 0"));
    }

    if let Some(cp) = &config.carriers.canadapost {
        if cp.username.is_empty() {
            errors.push(error("carriers.canadapost.username", "must not be empty"));
        }
        if cp.password.is_empty() {
            errors.push(error("carriers.canadapost.password", "must not be empty"));
        }
        if cp.customer_number.is_empty() {
            errors.push(error(
                "carriers.canadapost.customer_number",
                "must not be empty",
            ));
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(error(
            "observability.metrics_address",
            "must be a valid socket address",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::CanadaPostConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GatewayConfig::default();
        config.server.bind_address = "not-an-address".to_string();
        config.rate_limit.anonymous_per_minute = 0;
        config.carriers.canadapost = Some(CanadaPostConfig {
            username: String::new(),
            password: "pass".to_string(),
            customer_number: "2004381".to_string(),
            contract_id: None,
            test_mode: true,
            carrier_id: "canadapost".to_string(),
            endpoint_url: None,
        });

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"server.bind_address"));
        assert!(fields.contains(&"rate_limit.anonymous_per_minute"));
        assert!(fields.contains(&"carriers.canadapost.username"));
    }
}
