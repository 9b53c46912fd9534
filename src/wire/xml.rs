//! XML helpers over `quick-xml`.
//!
//! Carrier XML documents are namespaced, so structural probes always match
//! on local element names.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::WireError;

/// Local name of the document's root element.
///
/// Fails on documents with no root element at all; this is the fatal
/// "malformed input" case, not a carrier fault.
pub fn root_local_name(xml: &str) -> Result<String, WireError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(WireError::MalformedDocument(
                    "document has no root element".to_string(),
                ));
            }
            Ok(_) => continue,
            Err(e) => return Err(WireError::MalformedDocument(e.to_string())),
        }
    }
}

/// Deserialize a typed value from an XML document.
pub fn from_str<T: DeserializeOwned>(xml: &str) -> Result<T, WireError> {
    quick_xml::de::from_str(xml).map_err(|e| WireError::Deserialize(e.to_string()))
}

/// Serialize a value under an explicit root element name.
///
/// The root name is how create/update envelopes share one field struct:
/// the same value serializes under either wire name.
pub fn to_string_with_root<T: Serialize>(value: &T, root: &str) -> Result<String, WireError> {
    let mut out = String::new();
    let serializer = quick_xml::se::Serializer::with_root(&mut out, Some(root))
        .map_err(|e| WireError::Serialize(e.to_string()))?;
    value
        .serialize(serializer)
        .map_err(|e| WireError::Serialize(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(rename = "to")]
        to: String,
        #[serde(rename = "body", skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    }

    #[test]
    fn test_root_local_name_ignores_namespace() {
        let xml = r#"<?xml version="1.0"?><ns:note xmlns:ns="http://example.com"/>"#;
        assert_eq!(root_local_name(xml).unwrap(), "note");
    }

    #[test]
    fn test_root_local_name_rejects_empty_document() {
        assert!(matches!(
            root_local_name("  "),
            Err(WireError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_root_name_switches_envelope() {
        let note = Note {
            to: "dispatch".to_string(),
            body: None,
        };
        let create = to_string_with_root(&note, "note-details").unwrap();
        let update = to_string_with_root(&note, "note-update").unwrap();
        assert!(create.starts_with("<note-details>"));
        assert!(update.starts_with("<note-update>"));
        // Same field content under both roots.
        assert!(create.contains("<to>dispatch</to>"));
        assert!(update.contains("<to>dispatch</to>"));
        // Absent optional fields are omitted entirely.
        assert!(!create.contains("body"));
    }

    #[test]
    fn test_typed_roundtrip() {
        let xml = "<note><to>dispatch</to><body>hold at dock</body></note>";
        let note: Note = from_str(xml).unwrap();
        assert_eq!(
            note,
            Note {
                to: "dispatch".to_string(),
                body: Some("hold at dock".to_string()),
            }
        );
    }
}
