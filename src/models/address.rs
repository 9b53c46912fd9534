//! Postal address shared by every carrier operation.

use serde::{Deserialize, Serialize};

/// A postal address with contact details.
///
/// All fields are optional: each carrier schema decides which ones it
/// requires, and mappers omit carrier blocks whose inputs are all empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
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
    /// Whether the address is residential (affects pickup location flags).
    #[serde(default)]
    pub residential: bool,
}

impl Address {
    /// Join the two address lines into a single line, skipping empty parts.
    pub fn full_address_line(&self) -> Option<String> {
        let parts: Vec<&str> = [self.address_line1.as_deref(), self.address_line2.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
