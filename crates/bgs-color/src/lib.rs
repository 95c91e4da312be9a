//! Color model for background selection.
//!
//! Hex parsing, HSL conversion, family classification, harmony tables and
//! brand color validation. Every function here is pure; classification is
//! total and falls back to [`FALLBACK_FAMILY`] on malformed input.

pub mod brand;
pub mod classify;
pub mod harmony;
pub mod hsl;

pub use brand::{BrandColorError, validate_brand_color};
pub use classify::{
    ColorInfo, FALLBACK_FAMILY, FALLBACK_LIGHTNESS, classify_family, classify_hsl, classify_rgb,
    color_info, hue_family, is_extreme_lightness, lightness, normalized_distance,
};
pub use harmony::{
    CATALOG_NEUTRALS, FALLBACK_FAMILIES, UNIVERSAL_NEUTRALS, brand_harmony, harmonizes_with,
    is_catalog_neutral, is_universal_neutral, search_harmony,
};
pub use hsl::{Hsl, Rgb, parse_hex, rgb_to_hsl};
