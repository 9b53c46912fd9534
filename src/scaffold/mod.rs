//! Carrier extension scaffolding.
//!
//! # Responsibilities
//! - Render the boilerplate file set for a new carrier extension
//! - Gate per-feature mapper stubs on the enabled feature flags
//! - Stay pure: callers (the CLI) decide where files land on disk
//!
//! # Design Decisions
//! - Templates are plain format strings, not a template engine; the
//!   output is small and a reviewer can read the template next to it
//! - The XML/JSON toggle only changes which codec the stubs reach for

mod templates;

use std::fmt;
use std::str::FromStr;

/// Carrier capability a scaffolded extension can implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Feature {
    Rating,
    Tracking,
    Shipping,
    Pickup,
    AddressValidation,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Rating,
        Feature::Tracking,
        Feature::Shipping,
        Feature::Pickup,
        Feature::AddressValidation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Rating => "rating",
            Feature::Tracking => "tracking",
            Feature::Shipping => "shipping",
            Feature::Pickup => "pickup",
            Feature::AddressValidation => "address_validation",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(Feature::Rating),
            "tracking" => Ok(Feature::Tracking),
            "shipping" => Ok(Feature::Shipping),
            "pickup" => Ok(Feature::Pickup),
            "address_validation" => Ok(Feature::AddressValidation),
            other => Err(format!(
                "unknown feature '{other}' (expected one of: rating, tracking, shipping, pickup, address_validation)"
            )),
        }
    }
}

/// Inputs to a scaffold run.
#[derive(Debug, Clone)]
pub struct ScaffoldContext {
    /// Carrier identifier, e.g. `freight_express`.
    pub id: String,
    /// Display name, e.g. `Freight Express`.
    pub name: String,
    pub features: Vec<Feature>,
    /// XML carriers get quick-xml plumbing in the stubs; JSON ones serde_json.
    pub is_xml_api: bool,
}

impl ScaffoldContext {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            features: Feature::ALL.to_vec(),
            is_xml_api: true,
        }
    }

    /// Identifier with separators stripped, for type names.
    pub fn compact_name(&self) -> String {
        let mut out = String::new();
        let mut upper_next = true;
        for ch in self.id.chars() {
            if ch == '_' || ch == '-' || ch == ' ' {
                upper_next = true;
            } else if upper_next {
                out.extend(ch.to_uppercase());
                upper_next = false;
            } else {
                out.push(ch);
            }
        }
        out
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

/// A rendered file: path relative to the extension root, plus contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub path: String,
    pub contents: String,
}

/// Render the full boilerplate file set for a new carrier extension.
pub fn render_extension(ctx: &ScaffoldContext) -> Vec<ScaffoldFile> {
    let mut files = vec![
        ScaffoldFile {
            path: format!("{}/mod.rs", ctx.id),
            contents: templates::module_manifest(ctx),
        },
        ScaffoldFile {
            path: format!("{}/settings.rs", ctx.id),
            contents: templates::settings(ctx),
        },
        ScaffoldFile {
            path: format!("{}/error.rs", ctx.id),
            contents: templates::error_parser(ctx),
        },
        ScaffoldFile {
            path: format!("{}/units.rs", ctx.id),
            contents: templates::units(ctx),
        },
    ];

    if ctx.has(Feature::Rating) {
        files.push(ScaffoldFile {
            path: format!("{}/rate.rs", ctx.id),
            contents: templates::rate(ctx),
        });
    }
    if ctx.has(Feature::Tracking) {
        files.push(ScaffoldFile {
            path: format!("{}/tracking.rs", ctx.id),
            contents: templates::tracking(ctx),
        });
    }
    if ctx.has(Feature::Shipping) {
        files.push(ScaffoldFile {
            path: format!("{}/shipment.rs", ctx.id),
            contents: templates::shipment(ctx),
        });
    }
    if ctx.has(Feature::Pickup) {
        files.push(ScaffoldFile {
            path: format!("{}/pickup.rs", ctx.id),
            contents: templates::pickup(ctx),
        });
    }
    if ctx.has(Feature::AddressValidation) {
        files.push(ScaffoldFile {
            path: format!("{}/address.rs", ctx.id),
            contents: templates::address_validation(ctx),
        });
    }

    files.push(ScaffoldFile {
        path: format!("{}/tests.rs", ctx.id),
        contents: templates::test_skeleton(ctx),
    });

    files
}
