//! Canada Post connection settings.

use crate::config::CanadaPostConfig;

/// Per-connection Canada Post credentials and flags.
///
/// Passed read-only into every mapping function; mappers never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub username: String,
    pub password: String,
    pub customer_number: String,
    pub contract_id: Option<String>,
    pub test_mode: bool,
    pub carrier_id: String,
    endpoint_url: Option<String>,
}

impl Settings {
    /// Display name surfaced in unified entities and messages.
    pub const CARRIER_NAME: &'static str = "canadapost";

    /// Base URL of the carrier API for this connection.
    pub fn server_url(&self) -> String {
        if let Some(url) = &self.endpoint_url {
            return url.trim_end_matches('/').to_string();
        }
        if self.test_mode {
            "https://ct.soa-gw.canadapost.ca".to_string()
        } else {
            "https://soa-gw.canadapost.ca".to_string()
        }
    }
}

impl From<&CanadaPostConfig> for Settings {
    fn from(config: &CanadaPostConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            customer_number: config.customer_number.clone(),
            contract_id: config.contract_id.clone(),
            test_mode: config.test_mode,
            carrier_id: config.carrier_id.clone(),
            endpoint_url: config.endpoint_url.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_settings() -> Settings {
    Settings {
        username: "username".to_string(),
        password: "password".to_string(),
        customer_number: "2004381".to_string(),
        contract_id: None,
        test_mode: true,
        carrier_id: "canadapost".to_string(),
        endpoint_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_url_switches_on_test_mode() {
        let mut settings = test_settings();
        assert_eq!(settings.server_url(), "https://ct.soa-gw.canadapost.ca");
        settings.test_mode = false;
        assert_eq!(settings.server_url(), "https://soa-gw.canadapost.ca");
    }

    #[test]
    fn test_endpoint_override_wins() {
        let mut settings = test_settings();
        settings.endpoint_url = Some("http://127.0.0.1:9999/".to_string());
        assert_eq!(settings.server_url(), "http://127.0.0.1:9999");
    }
}
