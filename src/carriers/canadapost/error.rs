//! Canada Post fault document parsing.
//!
//! Every response parser runs this, whether or not a success payload was
//! found, so partial success keeps its warnings.

use crate::carriers::CarrierResult;
use crate::models::Message;
use crate::wire::xml;

use super::schema::MessageList;
use super::settings::Settings;

/// Extract unified messages from a carrier response body.
///
/// Bodies that are not a fault document yield an empty list; a malformed
/// document is a fatal error.
pub fn parse_error_response(body: &str, settings: &Settings) -> CarrierResult<Vec<Message>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    if xml::root_local_name(body)? != "messages" {
        return Ok(Vec::new());
    }

    let list: MessageList = xml::from_str(body)?;
    Ok(list
        .messages
        .into_iter()
        .map(|fault| Message {
            carrier_id: settings.carrier_id.clone(),
            carrier_name: Settings::CARRIER_NAME.to_string(),
            code: fault.code,
            message: fault.description,
            details: Default::default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::canadapost::settings::test_settings;

    const FAULT_XML: &str = r#"<messages xmlns="http://www.canadapost.ca/ws/messages">
        <message>
            <code>AA004</code>
            <description>You cannot request a pickup for a date in the past.</description>
        </message>
    </messages>"#;

    #[test]
    fn test_faults_become_unified_messages() {
        let messages = parse_error_response(FAULT_XML, &test_settings()).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].carrier_id, "canadapost");
        assert_eq!(messages[0].code.as_deref(), Some("AA004"));
        assert_eq!(
            messages[0].message.as_deref(),
            Some("You cannot request a pickup for a date in the past.")
        );
    }

    #[test]
    fn test_non_fault_document_yields_no_messages() {
        let xml = r#"<pickup-request-info xmlns="http://www.canadapost.ca/ws/pickuprequest"/>"#;
        assert!(parse_error_response(xml, &test_settings())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_empty_body_yields_no_messages() {
        assert!(parse_error_response("", &test_settings()).unwrap().is_empty());
    }
}
