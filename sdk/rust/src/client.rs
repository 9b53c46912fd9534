use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub residential: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    pub address: Address,
    /// Pickup date, `YYYY-MM-DD`.
    pub date: String,
    /// Window open, `HH:MM`.
    pub ready_time: String,
    /// Window close, `HH:MM`.
    pub closing_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parcels: Vec<Parcel>,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub options: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pickup {
    pub id: String,
    pub carrier_id: String,
    pub carrier_name: String,
    pub confirmation_number: String,
    pub pickup_date: Option<String>,
    pub pickup_charge: Option<serde_json::Value>,
    #[serde(default)]
    pub messages: Vec<serde_json::Value>,
}

pub struct ShippingClient {
    client: Client,
    gateway_url: String,
    api_token: Option<String>,
}

impl ShippingClient {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            client: Client::new(),
            gateway_url: gateway_url.to_string(),
            api_token: None,
        }
    }

    pub fn with_token(gateway_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            gateway_url: gateway_url.to_string(),
            api_token: Some(token.to_string()),
        }
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn health(&self) -> Result<bool, reqwest::Error> {
        let resp = self
            .request(self.client.get(format!("{}/health", self.gateway_url)))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    pub async fn carriers(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let resp = self
            .request(self.client.get(format!("{}/v1/carriers", self.gateway_url)))
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Schedule a pickup with a carrier.
    pub async fn schedule_pickup(
        &self,
        carrier_id: &str,
        req: &PickupRequest,
    ) -> Result<Pickup, Box<dyn std::error::Error>> {
        let resp = self
            .request(
                self.client
                    .post(format!(
                        "{}/v1/carriers/{}/pickups",
                        self.gateway_url, carrier_id
                    ))
                    .json(req),
            )
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("Gateway returned error status {}: {}", status, text).into());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Modify a previously scheduled pickup.
    pub async fn update_pickup(
        &self,
        pickup_id: &str,
        req: &PickupRequest,
    ) -> Result<Pickup, Box<dyn std::error::Error>> {
        let resp = self
            .request(
                self.client
                    .post(format!(
                        "{}/v1/pickups/{}/update",
                        self.gateway_url, pickup_id
                    ))
                    .json(req),
            )
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("Gateway returned error status {}: {}", status, text).into());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Cancel a scheduled pickup. Returns the raw confirmation document.
    pub async fn cancel_pickup(
        &self,
        pickup_id: &str,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let resp = self
            .request(self.client.post(format!(
                "{}/v1/pickups/{}/cancel",
                self.gateway_url, pickup_id
            )))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("Gateway returned error status {}: {}", status, text).into());
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn list_pickups(&self) -> Result<Vec<Pickup>, Box<dyn std::error::Error>> {
        let resp = self
            .request(self.client.get(format!("{}/v1/pickups", self.gateway_url)))
            .send()
            .await?;
        Ok(resp.json().await?)
    }
}
