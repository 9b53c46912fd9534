//! Parcel descriptors and carrier-preset validation.
//!
//! # Responsibilities
//! - Describe individual parcels (weight, dimensions, packaging preset)
//! - Resolve preset defaults and enforce carrier required fields
//! - Expose weights in kilograms regardless of the declared unit

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weight unit declared on a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightUnit {
    Kg,
    Lb,
}

/// Dimension unit declared on a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DimensionUnit {
    Cm,
    In,
}

/// One pound in kilograms, at the precision carriers bill with.
fn lb_to_kg_factor() -> Decimal {
    Decimal::new(453_592, 6)
}

/// An individual parcel as submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub weight: Option<Decimal>,
    pub weight_unit: Option<WeightUnit>,
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
    pub dimension_unit: Option<DimensionUnit>,
    /// Carrier packaging preset code; supplies default dimensions/weight.
    pub package_preset: Option<String>,
}

/// Default measurements attached to a carrier packaging preset code.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackagePreset {
    pub weight: Option<Decimal>,
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
}

/// Fields a carrier may require on every parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParcelField {
    Weight,
    Dimensions,
}

impl ParcelField {
    fn name(self) -> &'static str {
        match self {
            ParcelField::Weight => "weight",
            ParcelField::Dimensions => "dimensions",
        }
    }
}

/// Parcel list rejected during preset validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("parcel {index} is missing required field '{field}'")]
    MissingRequired { index: usize, field: &'static str },
    #[error("unknown package preset '{0}'")]
    UnknownPreset(String),
}

/// A parcel validated against a carrier's presets, measured in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub weight_kg: Decimal,
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
}

/// An ordered sequence of validated parcels.
///
/// Construction applies carrier preset defaults and enforces the carrier's
/// required fields, so mappers downstream never re-check presence.
#[derive(Debug, Clone, PartialEq)]
pub struct Packages {
    items: Vec<Package>,
}

impl Packages {
    pub fn validate(
        parcels: &[Parcel],
        presets: &BTreeMap<&'static str, PackagePreset>,
        required: &[ParcelField],
    ) -> Result<Self, ValidationError> {
        let mut items = Vec::with_capacity(parcels.len());
        for (index, parcel) in parcels.iter().enumerate() {
            let preset = match parcel.package_preset.as_deref() {
                Some(code) => Some(
                    presets
                        .get(code)
                        .copied()
                        .ok_or_else(|| ValidationError::UnknownPreset(code.to_string()))?,
                ),
                None => None,
            };
            let preset = preset.unwrap_or_default();

            let weight = parcel.weight.or(preset.weight);
            let length = parcel.length.or(preset.length);
            let width = parcel.width.or(preset.width);
            let height = parcel.height.or(preset.height);

            for field in required {
                let satisfied = match field {
                    ParcelField::Weight => weight.is_some(),
                    ParcelField::Dimensions => {
                        length.is_some() && width.is_some() && height.is_some()
                    }
                };
                if !satisfied {
                    return Err(ValidationError::MissingRequired {
                        index,
                        field: field.name(),
                    });
                }
            }

            let weight_kg = match (weight, parcel.weight_unit) {
                (Some(w), Some(WeightUnit::Lb)) => w * lb_to_kg_factor(),
                (Some(w), _) => w,
                (None, _) => Decimal::ZERO,
            };

            items.push(Package {
                weight_kg,
                length,
                width,
                height,
            });
        }
        Ok(Packages { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.items.iter()
    }

    /// Combined weight of all parcels in kilograms.
    pub fn total_weight_kg(&self) -> Decimal {
        self.items.iter().map(|p| p.weight_kg).sum()
    }

    /// Whether any parcel weighs strictly more than the given threshold.
    pub fn any_heavier_than(&self, threshold_kg: Decimal) -> bool {
        self.items.iter().any(|p| p.weight_kg > threshold_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presets() -> BTreeMap<&'static str, PackagePreset> {
        let mut map = BTreeMap::new();
        map.insert(
            "small_box",
            PackagePreset {
                weight: Some(Decimal::new(5, 1)),
                length: Some(Decimal::from(35)),
                width: Some(Decimal::from(26)),
                height: Some(Decimal::from(5)),
            },
        );
        map
    }

    #[test]
    fn test_required_weight_enforced() {
        let parcels = vec![Parcel::default()];
        let err = Packages::validate(&parcels, &presets(), &[ParcelField::Weight]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequired {
                index: 0,
                field: "weight"
            }
        );
    }

    #[test]
    fn test_preset_supplies_missing_weight() {
        let parcels = vec![Parcel {
            package_preset: Some("small_box".to_string()),
            ..Default::default()
        }];
        let packages = Packages::validate(&parcels, &presets(), &[ParcelField::Weight]).unwrap();
        assert_eq!(packages.total_weight_kg(), Decimal::new(5, 1));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let parcels = vec![Parcel {
            package_preset: Some("giant_crate".to_string()),
            ..Default::default()
        }];
        let err = Packages::validate(&parcels, &presets(), &[]).unwrap_err();
        assert_eq!(err, ValidationError::UnknownPreset("giant_crate".to_string()));
    }

    #[test]
    fn test_pounds_converted_to_kg() {
        let parcels = vec![Parcel {
            weight: Some(Decimal::from(10)),
            weight_unit: Some(WeightUnit::Lb),
            ..Default::default()
        }];
        let packages = Packages::validate(&parcels, &presets(), &[ParcelField::Weight]).unwrap();
        // 10 lb = 4.53592 kg
        assert_eq!(packages.total_weight_kg(), Decimal::new(453_592, 5));
        assert!(!packages.any_heavier_than(Decimal::from(23)));
    }

    #[test]
    fn test_any_heavier_than_is_strict() {
        let parcels = vec![Parcel {
            weight: Some(Decimal::from(23)),
            weight_unit: Some(WeightUnit::Kg),
            ..Default::default()
        }];
        let packages = Packages::validate(&parcels, &presets(), &[ParcelField::Weight]).unwrap();
        assert!(!packages.any_heavier_than(Decimal::from(23)));
    }
}
