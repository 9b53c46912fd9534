//! Canada Post business constants and packaging presets.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::PackagePreset;

/// Option name for the five-ton-vehicle-required flag.
pub const FIVE_TON_FLAG: &str = "five_ton_flag";

/// Option name for the loading-dock-available flag.
pub const LOADING_DOCK_FLAG: &str = "loading_dock_flag";

/// Parcels strictly heavier than this require the heavy-item declaration.
pub fn heavy_item_threshold_kg() -> Decimal {
    Decimal::from(23)
}

/// Packaging presets offered by Canada Post (dimensions in cm, weight kg).
pub fn package_presets() -> BTreeMap<&'static str, PackagePreset> {
    fn dims(length: i64, width: i64, height_mm: i64) -> PackagePreset {
        PackagePreset {
            weight: None,
            length: Some(Decimal::from(length)),
            width: Some(Decimal::from(width)),
            height: Some(Decimal::new(height_mm, 1)),
        }
    }

    let mut presets = BTreeMap::new();
    presets.insert("canadapost_mailing_box", dims(15, 10, 10));
    presets.insert("canadapost_extra_small_mailing_box", dims(14, 14, 140));
    presets.insert("canadapost_small_mailing_box", dims(32, 26, 50));
    presets.insert("canadapost_medium_mailing_box", dims(38, 30, 90));
    presets.insert("canadapost_large_mailing_box", dims(39, 30, 190));
    presets.insert("canadapost_corrugated_small_box", dims(42, 32, 320));
    presets.insert("canadapost_corrugated_medium_box", dims(46, 38, 320));
    presets.insert("canadapost_corrugated_large_box", dims(46, 46, 406));
    presets
}
