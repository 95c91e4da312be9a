//! Brand color input validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::hsl::{parse_hex, rgb_to_hsl};

/// Strict brand color format: `#` followed by exactly six hex digits.
static BRAND_HEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid brand hex regex"));

pub const MAX_BRAND_LIGHTNESS: f64 = 0.95;
pub const MIN_BRAND_LIGHTNESS: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BrandColorError {
    #[error("Color must be in hex format (e.g., #3B82F6)")]
    InvalidFormat,
    #[error("Color is too light for background generation")]
    TooLight,
    #[error("Color is too dark for background generation")]
    TooDark,
}

pub type Result<T> = std::result::Result<T, BrandColorError>;

/// Check that a brand color is usable for background generation.
///
/// Unlike [`parse_hex`], the `#` prefix is required here.
pub fn validate_brand_color(color: &str) -> Result<()> {
    if !BRAND_HEX_REGEX.is_match(color) {
        return Err(BrandColorError::InvalidFormat);
    }
    let rgb = parse_hex(color).ok_or(BrandColorError::InvalidFormat)?;
    let l = rgb_to_hsl(rgb).l;
    if l > MAX_BRAND_LIGHTNESS {
        Err(BrandColorError::TooLight)
    } else if l < MIN_BRAND_LIGHTNESS {
        Err(BrandColorError::TooDark)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mid_range_colors() {
        assert_eq!(validate_brand_color("#3B82F6"), Ok(()));
        assert_eq!(validate_brand_color("#3b82f6"), Ok(()));
        assert_eq!(validate_brand_color("#6B7280"), Ok(()));
    }

    #[test]
    fn rejects_extreme_lightness() {
        assert_eq!(validate_brand_color("#ffffff"), Err(BrandColorError::TooLight));
        assert_eq!(validate_brand_color("#FAFAFA"), Err(BrandColorError::TooLight));
        assert_eq!(validate_brand_color("#000000"), Err(BrandColorError::TooDark));
        assert_eq!(validate_brand_color("#0A0A0A"), Err(BrandColorError::TooDark));
    }

    #[test]
    fn rejects_bad_format() {
        for input in ["3B82F6", "#fff", "blue", "#3B82F6 ", "", "#GG82F6"] {
            assert_eq!(
                validate_brand_color(input),
                Err(BrandColorError::InvalidFormat),
                "{input:?}"
            );
        }
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            BrandColorError::InvalidFormat.to_string(),
            "Color must be in hex format (e.g., #3B82F6)"
        );
    }
}
