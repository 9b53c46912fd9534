//! Canada Post pickup mapping.
//!
//! # Responsibilities
//! - Build `pickup-request-details` / `pickup-request-update` documents
//!   from the unified pickup payload
//! - Parse pickup responses into `PickupDetails` plus unified messages
//!
//! # Design Decisions
//! - Pure functions over (payload, settings); no I/O
//! - Each optional carrier block has an explicit presence predicate
//!   evaluated before construction
//! - Charge totals are decimal sums with missing sub-amounts as zero

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::carriers::{CarrierResult, ParsedResponse};
use crate::models::{
    ChargeDetails, ConfirmationDetails, Message, Packages, ParcelField, PickupDetails,
    PickupRequest,
};
use crate::wire::{xml, ParseOutcome, Serializable, WireError};

use super::error::parse_error_response;
use super::schema::{
    AlternateAddress, ContactInfo, ItemsCharacteristics, LocationDetails, OnDemandPickupTime,
    PickupLocation, PickupMode, PickupRequestDetails, PickupRequestInfo, PickupRequestPrice,
    PickupTimes, PICKUP_NAMESPACE,
};
use super::settings::Settings;
use super::units::{
    heavy_item_threshold_kg, package_presets, FIVE_TON_FLAG, LOADING_DOCK_FLAG,
};

const SUCCESS_NODE: &str = "pickup-request-info";

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Whether the payload carries any alternate-address field.
fn has_alternate_address(payload: &PickupRequest) -> bool {
    non_empty(&payload.address.company_name)
        || payload.address.full_address_line().is_some()
        || non_empty(&payload.address.city)
        || non_empty(&payload.address.state_code)
        || non_empty(&payload.address.postal_code)
}

/// Whether the payload carries any contact field.
fn has_contact_info(payload: &PickupRequest) -> bool {
    non_empty(&payload.address.person_name)
        || non_empty(&payload.address.email)
        || non_empty(&payload.address.phone_number)
}

/// Whether the payload populates any location-details field.
///
/// A flag explicitly set to `false` does not populate the block; only
/// truthy values (or a non-empty instruction) warrant emitting it.
fn has_location_details(payload: &PickupRequest) -> bool {
    non_empty(&payload.instruction)
        || payload.option_flag(FIVE_TON_FLAG) == Some(true)
        || payload.option_flag(LOADING_DOCK_FLAG) == Some(true)
}

/// Build a serializable pickup request document.
///
/// `mode` selects the create or update envelope; the field content is
/// identical under both. Serialization is deferred until the transport
/// actually transmits.
pub fn pickup_request(
    payload: &PickupRequest,
    settings: &Settings,
    mode: PickupMode,
) -> CarrierResult<Serializable<PickupRequestDetails>> {
    let packages = Packages::validate(&payload.parcels, &package_presets(), &[ParcelField::Weight])?;
    let heavy = packages.any_heavier_than(heavy_item_threshold_kg());

    let alternate_address = has_alternate_address(payload).then(|| AlternateAddress {
        company: payload.address.company_name.clone(),
        address_line_1: payload.address.full_address_line(),
        city: payload.address.city.clone(),
        province: payload.address.state_code.clone(),
        postal_code: payload.address.postal_code.clone(),
    });

    let contact_info = has_contact_info(payload).then(|| ContactInfo {
        contact_name: payload.address.person_name.clone(),
        email: payload.address.email.clone(),
        contact_phone: payload.address.phone_number.clone(),
        telephone_ext: None,
        receive_email_updates_flag: payload.address.email.is_some(),
    });

    let location_details = has_location_details(payload).then(|| LocationDetails {
        five_ton_flag: payload.option_flag(FIVE_TON_FLAG),
        loading_dock_flag: payload.option_flag(LOADING_DOCK_FLAG),
        pickup_instructions: payload.instruction.clone(),
    });

    let items_characteristics = heavy.then(|| ItemsCharacteristics {
        pww_flag: None,
        priority_flag: None,
        returns_flag: None,
        heavy_item_flag: true,
    });

    let request = PickupRequestDetails {
        xmlns: PICKUP_NAMESPACE,
        customer_request_id: Some(settings.customer_number.clone()),
        pickup_type: "OnDemand".to_string(),
        pickup_location: PickupLocation {
            business_address_flag: !payload.address.residential,
            alternate_address,
        },
        contact_info,
        location_details,
        items_characteristics,
        pickup_volume: packages.len().max(1).to_string(),
        pickup_times: PickupTimes {
            on_demand_pickup_time: OnDemandPickupTime {
                date: payload.date.format("%Y-%m-%d").to_string(),
                preferred_time: payload.ready_time.format("%H:%M").to_string(),
                closing_time: payload.closing_time.format("%H:%M").to_string(),
            },
        },
    };

    Ok(Serializable::new(request, move |req| {
        xml::to_string_with_root(req, mode.root_name())
    }))
}

/// Parse a pickup create/update response.
///
/// The fault parser always runs; the success payload is probed by the
/// root's local name and its absence is a legitimate `None`, not an
/// error. Probe and extraction both address the document root, so a
/// passing probe cannot be followed by a failed extraction.
pub fn parse_pickup_response(
    body: &str,
    settings: &Settings,
) -> CarrierResult<ParsedResponse<PickupDetails>> {
    let messages = parse_error_response(body, settings)?;

    let outcome = if body.trim().is_empty() {
        ParseOutcome::NotFound
    } else if xml::root_local_name(body)? == SUCCESS_NODE {
        ParseOutcome::Found(extract_pickup_details(body, settings)?)
    } else {
        ParseOutcome::NotFound
    };

    Ok((outcome.into_option(), messages))
}

fn extract_pickup_details(body: &str, settings: &Settings) -> CarrierResult<PickupDetails> {
    let info: PickupRequestInfo = xml::from_str(body)?;
    let header = info.pickup_request_header;

    let pickup_date = match header.next_pickup_date.as_deref() {
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|e| WireError::Deserialize(format!("next-pickup-date: {e}")))?,
        ),
        None => None,
    };

    let pickup_charge = match &info.pickup_request_price {
        Some(price) => Some(ChargeDetails {
            name: "Pickup fees".to_string(),
            amount: total_price(price)?,
            currency: "CAD".to_string(),
        }),
        None => None,
    };

    Ok(PickupDetails {
        carrier_id: settings.carrier_id.clone(),
        carrier_name: Settings::CARRIER_NAME.to_string(),
        confirmation_number: header.request_id,
        pickup_date,
        pickup_charge,
    })
}

/// Decimal sum of the three sub-amounts, missing ones counting as zero.
fn total_price(price: &PickupRequestPrice) -> CarrierResult<Decimal> {
    let mut total = Decimal::ZERO;
    for amount in [&price.hst_amount, &price.gst_amount, &price.due_amount] {
        if let Some(raw) = amount {
            total += Decimal::from_str(raw.trim())
                .map_err(|e| WireError::Deserialize(format!("price amount '{raw}': {e}")))?;
        }
    }
    Ok(total)
}

/// Parse a pickup cancellation response.
///
/// The carrier answers a successful DELETE with an empty body; any fault
/// document means the cancellation was rejected.
pub fn parse_pickup_cancel_response(
    body: &str,
    settings: &Settings,
) -> CarrierResult<ParsedResponse<ConfirmationDetails>> {
    let messages = parse_error_response(body, settings)?;
    let success = messages.is_empty();

    let confirmation = success.then(|| ConfirmationDetails {
        carrier_id: settings.carrier_id.clone(),
        carrier_name: Settings::CARRIER_NAME.to_string(),
        operation: "Cancel Pickup".to_string(),
        success: true,
    });

    Ok((confirmation, messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::canadapost::settings::test_settings;
    use crate::models::{Address, Parcel, WeightUnit};
    use chrono::NaiveTime;

    fn base_payload() -> PickupRequest {
        PickupRequest {
            address: Address {
                person_name: Some("Jane Akwagyiram".to_string()),
                company_name: Some("ABC Corp.".to_string()),
                address_line1: Some("1098 St. Avenue".to_string()),
                address_line2: None,
                city: Some("Toronto".to_string()),
                state_code: Some("ON".to_string()),
                postal_code: Some("M6K 3C3".to_string()),
                country_code: Some("CA".to_string()),
                email: Some("jane@abc.corp".to_string()),
                phone_number: Some("416 555 8888".to_string()),
                residential: false,
            },
            date: NaiveDate::from_ymd_opt(2015, 1, 28).unwrap(),
            ready_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            instruction: Some("Door at Back".to_string()),
            parcels: vec![Parcel {
                weight: Some(Decimal::from(2)),
                weight_unit: Some(WeightUnit::Kg),
                ..Default::default()
            }],
            options: [(
                "loading_dock_flag".to_string(),
                serde_json::Value::Bool(true),
            )]
            .into_iter()
            .collect(),
        }
    }

    fn empty_payload() -> PickupRequest {
        PickupRequest {
            address: Address::default(),
            date: NaiveDate::from_ymd_opt(2015, 1, 28).unwrap(),
            ready_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            instruction: None,
            parcels: vec![Parcel {
                weight: Some(Decimal::from(1)),
                weight_unit: Some(WeightUnit::Kg),
                ..Default::default()
            }],
            options: Default::default(),
        }
    }

    const RESPONSE_XML: &str = r#"<pickup-request-info xmlns="http://www.canadapost.ca/ws/pickuprequest">
        <pickup-request-header>
            <request-id>0074698052</request-id>
            <next-pickup-date>2015-01-28</next-pickup-date>
            <pickup-type>OnDemand</pickup-type>
        </pickup-request-header>
        <pickup-request-price>
            <hst-amount>2.50</hst-amount>
            <due-amount>10.00</due-amount>
        </pickup-request-price>
    </pickup-request-info>"#;

    #[test]
    fn test_optional_blocks_absent_when_inputs_empty() {
        let request =
            pickup_request(&empty_payload(), &test_settings(), PickupMode::Create).unwrap();
        let value = request.value();
        assert!(value.pickup_location.alternate_address.is_none());
        assert!(value.contact_info.is_none());
        assert!(value.location_details.is_none());
        assert!(value.items_characteristics.is_none());

        let xml = request.serialize().unwrap();
        assert!(!xml.contains("alternate-address"));
        assert!(!xml.contains("contact-info"));
        assert!(!xml.contains("location-details"));
        assert!(!xml.contains("items-characteristics"));
    }

    #[test]
    fn test_false_option_flags_do_not_emit_location_details() {
        let mut payload = empty_payload();
        payload
            .options
            .insert("five_ton_flag".to_string(), serde_json::Value::Bool(false));
        let request = pickup_request(&payload, &test_settings(), PickupMode::Create).unwrap();
        assert!(request.value().location_details.is_none());
        assert!(!request.serialize().unwrap().contains("location-details"));

        // A truthy flag alone populates the block.
        payload
            .options
            .insert("five_ton_flag".to_string(), serde_json::Value::Bool(true));
        let request = pickup_request(&payload, &test_settings(), PickupMode::Create).unwrap();
        let location = request.value().location_details.as_ref().unwrap();
        assert_eq!(location.five_ton_flag, Some(true));
    }

    #[test]
    fn test_heavy_parcel_sets_items_characteristics() {
        let mut payload = empty_payload();
        payload.parcels[0].weight = Some(Decimal::from(24));
        let request = pickup_request(&payload, &test_settings(), PickupMode::Create).unwrap();
        let items = request.value().items_characteristics.as_ref().unwrap();
        assert!(items.heavy_item_flag);

        // Exactly at the threshold is not heavy.
        payload.parcels[0].weight = Some(Decimal::from(23));
        let request = pickup_request(&payload, &test_settings(), PickupMode::Create).unwrap();
        assert!(request.value().items_characteristics.is_none());
    }

    #[test]
    fn test_create_and_update_share_field_content() {
        let payload = base_payload();
        let settings = test_settings();
        let create = pickup_request(&payload, &settings, PickupMode::Create).unwrap();
        let update = pickup_request(&payload, &settings, PickupMode::Update).unwrap();

        assert_eq!(create.value(), update.value());

        let create_xml = create.serialize().unwrap();
        let update_xml = update.serialize().unwrap();
        assert!(create_xml.starts_with("<pickup-request-details"));
        assert!(update_xml.starts_with("<pickup-request-update"));
        assert!(create_xml.contains(r#"xmlns="http://www.canadapost.ca/ws/pickuprequest""#));
    }

    #[test]
    fn test_built_request_round_trips_payload_fields() {
        let payload = base_payload();
        let request = pickup_request(&payload, &test_settings(), PickupMode::Create).unwrap();
        let value = request.value();

        let address = value.pickup_location.alternate_address.as_ref().unwrap();
        assert_eq!(address.company.as_deref(), Some("ABC Corp."));
        assert_eq!(address.address_line_1.as_deref(), Some("1098 St. Avenue"));
        assert_eq!(address.city.as_deref(), Some("Toronto"));
        assert_eq!(address.province.as_deref(), Some("ON"));
        assert_eq!(address.postal_code.as_deref(), Some("M6K 3C3"));

        let contact = value.contact_info.as_ref().unwrap();
        assert_eq!(contact.contact_name.as_deref(), Some("Jane Akwagyiram"));
        assert_eq!(contact.email.as_deref(), Some("jane@abc.corp"));
        assert_eq!(contact.contact_phone.as_deref(), Some("416 555 8888"));
        assert!(contact.receive_email_updates_flag);

        let location = value.location_details.as_ref().unwrap();
        assert_eq!(location.pickup_instructions.as_deref(), Some("Door at Back"));
        assert_eq!(location.loading_dock_flag, Some(true));
        assert_eq!(location.five_ton_flag, None);

        assert!(value.pickup_location.business_address_flag);
        assert_eq!(value.pickup_volume, "1");
        assert_eq!(value.pickup_times.on_demand_pickup_time.date, "2015-01-28");
        assert_eq!(
            value.pickup_times.on_demand_pickup_time.preferred_time,
            "15:00"
        );
        assert_eq!(
            value.pickup_times.on_demand_pickup_time.closing_time,
            "17:00"
        );
    }

    #[test]
    fn test_parse_response_sums_charges_with_missing_as_zero() {
        let (details, messages) =
            parse_pickup_response(RESPONSE_XML, &test_settings()).unwrap();
        assert!(messages.is_empty());

        let details = details.unwrap();
        assert_eq!(details.confirmation_number, "0074698052");
        assert_eq!(
            details.pickup_date,
            Some(NaiveDate::from_ymd_opt(2015, 1, 28).unwrap())
        );
        let charge = details.pickup_charge.unwrap();
        assert_eq!(charge.name, "Pickup fees");
        assert_eq!(charge.currency, "CAD");
        // 2.50 + missing gst (0) + 10.00
        assert_eq!(charge.amount, Decimal::new(1250, 2));
    }

    #[test]
    fn test_missing_success_node_yields_none_with_messages() {
        let fault = r#"<messages xmlns="http://www.canadapost.ca/ws/messages">
            <message><code>AA004</code><description>Invalid pickup date.</description></message>
        </messages>"#;
        let (details, messages) = parse_pickup_response(fault, &test_settings()).unwrap();
        assert!(details.is_none());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].code.as_deref(), Some("AA004"));
    }

    #[test]
    fn test_success_node_below_the_root_is_not_a_payload() {
        let wrapped = r#"<envelope xmlns="http://www.canadapost.ca/ws/pickuprequest">
            <pickup-request-info>
                <pickup-request-header><request-id>0074698052</request-id></pickup-request-header>
            </pickup-request-info>
        </envelope>"#;
        let (details, messages) = parse_pickup_response(wrapped, &test_settings()).unwrap();
        assert!(details.is_none());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let err = parse_pickup_response("<pickup-request-info", &test_settings());
        assert!(err.is_err());
    }

    #[test]
    fn test_cancel_success_on_empty_body() {
        let (confirmation, messages) =
            parse_pickup_cancel_response("", &test_settings()).unwrap();
        assert!(messages.is_empty());
        let confirmation = confirmation.unwrap();
        assert!(confirmation.success);
        assert_eq!(confirmation.operation, "Cancel Pickup");
    }

    #[test]
    fn test_cancel_rejected_on_fault_document() {
        let fault = r#"<messages xmlns="http://www.canadapost.ca/ws/messages">
            <message><code>AA005</code><description>Unknown pickup.</description></message>
        </messages>"#;
        let (confirmation, messages) =
            parse_pickup_cancel_response(fault, &test_settings()).unwrap();
        assert!(confirmation.is_none());
        assert_eq!(messages.len(), 1);
    }
}
