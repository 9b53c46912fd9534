//! String templates for scaffolded carrier extensions.
//!
//! Each function renders one file. The stubs compile against the carrier
//! trait surface but return `NotSupported` until the mapper is filled in.

use super::{Feature, ScaffoldContext};

pub(super) fn module_manifest(ctx: &ScaffoldContext) -> String {
    let mut mods = String::new();
    mods.push_str("mod error;\nmod settings;\nmod units;\n");
    if ctx.has(Feature::Rating) {
        mods.push_str("pub mod rate;\n");
    }
    if ctx.has(Feature::Tracking) {
        mods.push_str("pub mod tracking;\n");
    }
    if ctx.has(Feature::Shipping) {
        mods.push_str("pub mod shipment;\n");
    }
    if ctx.has(Feature::Pickup) {
        mods.push_str("pub mod pickup;\n");
    }
    if ctx.has(Feature::AddressValidation) {
        mods.push_str("pub mod address;\n");
    }

    format!(
        r#"//! {name} carrier integration.

{mods}
pub use error::parse_error_response;
pub use settings::Settings;

use crate::carriers::CarrierMapper;

pub struct {compact}Mapper {{
    settings: Settings,
}}

impl {compact}Mapper {{
    pub fn new(settings: Settings) -> Self {{
        Self {{ settings }}
    }}
}}

impl CarrierMapper for {compact}Mapper {{
    fn carrier_id(&self) -> &str {{
        &self.settings.carrier_id
    }}

    fn carrier_name(&self) -> &str {{
        settings::CARRIER_NAME
    }}
}}
"#,
        name = ctx.name,
        mods = mods,
        compact = ctx.compact_name(),
    )
}

pub(super) fn settings(ctx: &ScaffoldContext) -> String {
    format!(
        r#"//! {name} connection settings.

pub const CARRIER_NAME: &str = "{id}";

#[derive(Debug, Clone)]
pub struct Settings {{
    pub username: String,
    pub password: String,
    pub test_mode: bool,
    pub carrier_id: String,
}}

impl Settings {{
    pub fn server_url(&self) -> &str {{
        if self.test_mode {{
            "https://sandbox.example.com"
        }} else {{
            "https://api.example.com"
        }}
    }}
}}
"#,
        name = ctx.name,
        id = ctx.id,
    )
}

pub(super) fn error_parser(ctx: &ScaffoldContext) -> String {
    let (codec_doc, body) = if ctx.is_xml_api {
        (
            "fault documents",
            r#"    if response.trim().is_empty() {
        return Ok(Vec::new());
    }
    // TODO: deserialize the carrier fault document with crate::wire::xml
    // and map each entry onto a Message.
    let _ = (response, settings);
    Ok(Vec::new())"#,
        )
    } else {
        (
            "error payloads",
            r#"    if response.trim().is_empty() {
        return Ok(Vec::new());
    }
    // TODO: deserialize the carrier error payload with serde_json and
    // map each entry onto a Message.
    let _ = (response, settings);
    Ok(Vec::new())"#,
        )
    };

    format!(
        r#"//! {name} {codec_doc} normalized into unified messages.

use crate::models::Message;
use crate::wire::WireError;

use super::Settings;

pub fn parse_error_response(response: &str, settings: &Settings) -> Result<Vec<Message>, WireError> {{
{body}
}}
"#,
        name = ctx.name,
        codec_doc = codec_doc,
        body = body,
    )
}

pub(super) fn units(ctx: &ScaffoldContext) -> String {
    format!(
        r#"//! {name} carrier-specific units, option flags and presets.

use std::collections::BTreeMap;

use crate::models::PackagePreset;

pub fn package_presets() -> BTreeMap<&'static str, PackagePreset> {{
    BTreeMap::new()
}}
"#,
        name = ctx.name,
    )
}

fn operation_stub(ctx: &ScaffoldContext, module_doc: &str, ops: &str) -> String {
    let codec_note = if ctx.is_xml_api {
        "// Serialize request documents with crate::wire::xml once the schema lands."
    } else {
        "// Serialize request payloads with serde_json once the schema lands."
    };
    format!(
        r#"//! {name} {module_doc}

use crate::carriers::{{CarrierError, CarrierResult, ParsedResponse, PreparedRequest}};

use super::Settings;

{codec_note}

{ops}
"#,
        name = ctx.name,
        module_doc = module_doc,
        codec_note = codec_note,
        ops = ops,
    )
}

pub(super) fn rate(ctx: &ScaffoldContext) -> String {
    operation_stub(
        ctx,
        "rate requests and responses.",
        r#"pub fn rate_request(
    payload: &crate::models::RateRequest,
    settings: &Settings,
) -> CarrierResult<PreparedRequest> {
    let _ = payload;
    Err(CarrierError::NotSupported {
        carrier_id: settings.carrier_id.clone(),
        operation: "fetch_rates",
    })
}

pub fn parse_rate_response(
    response: &str,
    settings: &Settings,
) -> CarrierResult<ParsedResponse<Vec<crate::models::RateDetails>>> {
    let _ = (response, settings);
    Ok((None, Vec::new()))
}"#,
    )
}

pub(super) fn tracking(ctx: &ScaffoldContext) -> String {
    operation_stub(
        ctx,
        "tracking requests and responses.",
        r#"pub fn tracking_request(
    payload: &crate::models::TrackingRequest,
    settings: &Settings,
) -> CarrierResult<PreparedRequest> {
    let _ = payload;
    Err(CarrierError::NotSupported {
        carrier_id: settings.carrier_id.clone(),
        operation: "track",
    })
}

pub fn parse_tracking_response(
    response: &str,
    settings: &Settings,
) -> CarrierResult<ParsedResponse<Vec<crate::models::TrackingDetails>>> {
    let _ = (response, settings);
    Ok((None, Vec::new()))
}"#,
    )
}

pub(super) fn shipment(ctx: &ScaffoldContext) -> String {
    operation_stub(
        ctx,
        "shipment creation and cancellation.",
        r#"pub fn shipment_request(
    payload: &crate::models::ShipmentRequest,
    settings: &Settings,
) -> CarrierResult<PreparedRequest> {
    let _ = payload;
    Err(CarrierError::NotSupported {
        carrier_id: settings.carrier_id.clone(),
        operation: "create_shipment",
    })
}

pub fn parse_shipment_response(
    response: &str,
    settings: &Settings,
) -> CarrierResult<ParsedResponse<crate::models::ShipmentDetails>> {
    let _ = (response, settings);
    Ok((None, Vec::new()))
}"#,
    )
}

pub(super) fn pickup(ctx: &ScaffoldContext) -> String {
    operation_stub(
        ctx,
        "pickup scheduling, update and cancellation.",
        r#"pub fn pickup_request(
    payload: &crate::models::PickupRequest,
    settings: &Settings,
) -> CarrierResult<PreparedRequest> {
    let _ = payload;
    Err(CarrierError::NotSupported {
        carrier_id: settings.carrier_id.clone(),
        operation: "schedule_pickup",
    })
}

pub fn pickup_update_request(
    payload: &crate::models::PickupUpdateRequest,
    settings: &Settings,
) -> CarrierResult<PreparedRequest> {
    let _ = payload;
    Err(CarrierError::NotSupported {
        carrier_id: settings.carrier_id.clone(),
        operation: "update_pickup",
    })
}

pub fn pickup_cancel_request(
    payload: &crate::models::PickupCancelRequest,
    settings: &Settings,
) -> CarrierResult<PreparedRequest> {
    let _ = payload;
    Err(CarrierError::NotSupported {
        carrier_id: settings.carrier_id.clone(),
        operation: "cancel_pickup",
    })
}

pub fn parse_pickup_response(
    response: &str,
    settings: &Settings,
) -> CarrierResult<ParsedResponse<crate::models::PickupDetails>> {
    let _ = (response, settings);
    Ok((None, Vec::new()))
}"#,
    )
}

pub(super) fn address_validation(ctx: &ScaffoldContext) -> String {
    operation_stub(
        ctx,
        "address validation requests and responses.",
        r#"pub fn validation_request(
    payload: &crate::models::Address,
    settings: &Settings,
) -> CarrierResult<PreparedRequest> {
    let _ = payload;
    Err(CarrierError::NotSupported {
        carrier_id: settings.carrier_id.clone(),
        operation: "validate_address",
    })
}"#,
    )
}

pub(super) fn test_skeleton(ctx: &ScaffoldContext) -> String {
    let mut tests = String::new();
    if ctx.has(Feature::Pickup) {
        tests.push_str(
            r#"
    #[test]
    fn test_pickup_request() {
        // TODO: build a PickupRequest fixture and assert on the serialized body.
    }
"#,
        );
    }
    if ctx.has(Feature::Rating) {
        tests.push_str(
            r#"
    #[test]
    fn test_rate_request() {
        // TODO: build a RateRequest fixture and assert on the serialized body.
    }
"#,
        );
    }
    if ctx.has(Feature::Tracking) {
        tests.push_str(
            r#"
    #[test]
    fn test_tracking_request() {
        // TODO: build a TrackingRequest fixture and assert on the request URL.
    }
"#,
        );
    }
    if ctx.has(Feature::Shipping) {
        tests.push_str(
            r#"
    #[test]
    fn test_shipment_request() {
        // TODO: build a ShipmentRequest fixture and assert on the serialized body.
    }
"#,
        );
    }
    if tests.is_empty() {
        tests.push_str(
            r#"
    #[test]
    fn test_settings_server_url() {
        // TODO: assert test_mode switches the server url.
    }
"#,
        );
    }

    format!(
        r#"//! {name} mapper tests.

#[cfg(test)]
mod tests {{
{tests}}}
"#,
        name = ctx.name,
        tests = tests,
    )
}
