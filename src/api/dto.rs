//! Boundary DTOs.
//!
//! The wire casing is camelCase; the unified model stays snake_case.
//! Conversions validate time formats and collapse the DTO shape into the
//! unified entities handlers work with.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    Address, ChargeDetails, ConfirmationDetails, DimensionUnit, Message, Parcel, PickupDetails,
    PickupRequest, WeightUnit,
};
use crate::storage::StoredPickup;

use super::error::ApiError;

/// Accepts `HH:MM` (the carrier window convention) or `HH:MM:SS`.
fn parse_time(field: &str, value: &str) -> Result<NaiveTime, ApiError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ApiError::Validation(format!("{field} must be HH:MM, got '{value}'")))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDto {
    pub person_name: Option<String>,
    pub company_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub residential: bool,
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Address {
            person_name: dto.person_name,
            company_name: dto.company_name,
            address_line1: dto.address_line1,
            address_line2: dto.address_line2,
            city: dto.city,
            state_code: dto.state_code,
            postal_code: dto.postal_code,
            country_code: dto.country_code,
            email: dto.email,
            phone_number: dto.phone_number,
            residential: dto.residential,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParcelDto {
    pub weight: Option<Decimal>,
    pub weight_unit: Option<WeightUnit>,
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
    pub dimension_unit: Option<DimensionUnit>,
    pub package_preset: Option<String>,
}

impl From<ParcelDto> for Parcel {
    fn from(dto: ParcelDto) -> Self {
        Parcel {
            weight: dto.weight,
            weight_unit: dto.weight_unit,
            length: dto.length,
            width: dto.width,
            height: dto.height,
            dimension_unit: dto.dimension_unit,
            package_preset: dto.package_preset,
        }
    }
}

/// Body of pickup schedule and update calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequestDto {
    pub address: AddressDto,
    pub date: NaiveDate,
    pub ready_time: String,
    pub closing_time: String,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub parcels: Vec<ParcelDto>,
    #[serde(default)]
    pub options: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<PickupRequestDto> for PickupRequest {
    type Error = ApiError;

    fn try_from(dto: PickupRequestDto) -> Result<Self, Self::Error> {
        Ok(PickupRequest {
            address: dto.address.into(),
            date: dto.date,
            ready_time: parse_time("readyTime", &dto.ready_time)?,
            closing_time: parse_time("closingTime", &dto.closing_time)?,
            instruction: dto.instruction,
            parcels: dto.parcels.into_iter().map(Parcel::from).collect(),
            options: dto.options,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub carrier_id: String,
    pub carrier_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        MessageDto {
            carrier_id: message.carrier_id,
            carrier_name: message.carrier_name,
            code: message.code,
            message: message.message,
            details: message.details,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeDto {
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
}

impl From<ChargeDetails> for ChargeDto {
    fn from(charge: ChargeDetails) -> Self {
        ChargeDto {
            name: charge.name,
            amount: charge.amount,
            currency: charge.currency,
        }
    }
}

/// A confirmed pickup as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupDto {
    pub id: Uuid,
    pub carrier_id: String,
    pub carrier_name: String,
    pub confirmation_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_charge: Option<ChargeDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<MessageDto>,
}

impl PickupDto {
    pub fn from_stored(stored: StoredPickup, messages: Vec<Message>) -> Self {
        let PickupDetails {
            carrier_id: _,
            carrier_name,
            confirmation_number,
            pickup_date,
            pickup_charge,
        } = stored.details;
        PickupDto {
            id: stored.id,
            carrier_id: stored.carrier_id,
            carrier_name,
            confirmation_number,
            pickup_date,
            pickup_charge: pickup_charge.map(ChargeDto::from),
            messages: messages.into_iter().map(MessageDto::from).collect(),
        }
    }
}

/// Cancellation outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationDto {
    pub carrier_id: String,
    pub carrier_name: String,
    pub operation: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<MessageDto>,
}

impl ConfirmationDto {
    pub fn new(confirmation: ConfirmationDetails, messages: Vec<Message>) -> Self {
        ConfirmationDto {
            carrier_id: confirmation.carrier_id,
            carrier_name: confirmation.carrier_name,
            operation: confirmation.operation,
            success: confirmation.success,
            messages: messages.into_iter().map(MessageDto::from).collect(),
        }
    }
}

/// Body of a rejected carrier operation: faults only, no entity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedDto {
    pub messages: Vec<MessageDto>,
}

impl RejectedDto {
    pub fn new(messages: Vec<Message>) -> Self {
        RejectedDto {
            messages: messages.into_iter().map(MessageDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_request_dto_camel_case() {
        let dto: PickupRequestDto = serde_json::from_str(
            r#"{
                "address": {"companyName": "ABC Corp.", "residential": false},
                "date": "2015-01-28",
                "readyTime": "15:00",
                "closingTime": "17:00",
                "parcels": [{"weight": "2", "weightUnit": "KG"}]
            }"#,
        )
        .unwrap();

        let request = PickupRequest::try_from(dto).unwrap();
        assert_eq!(request.address.company_name.as_deref(), Some("ABC Corp."));
        assert_eq!(request.ready_time, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert_eq!(request.parcels.len(), 1);
    }

    #[test]
    fn test_bad_time_rejected() {
        let dto = PickupRequestDto {
            address: AddressDto::default(),
            date: NaiveDate::from_ymd_opt(2015, 1, 28).unwrap(),
            ready_time: "3 pm".to_string(),
            closing_time: "17:00".to_string(),
            instruction: None,
            parcels: Vec::new(),
            options: Default::default(),
        };
        assert!(matches!(
            PickupRequest::try_from(dto),
            Err(ApiError::Validation(_))
        ));
    }
}
