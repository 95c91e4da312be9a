//! Background descriptors, brand colors and selector modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BgsError;
use crate::family::ColorFamily;

/// A complete page background: one style token per page region plus the
/// families the tokens were derived from.
///
/// Style tokens are opaque to the engine: a Tailwind class
/// (`bg-gradient-to-r from-blue-500 to-purple-500`), or a raw CSS color or
/// gradient (`linear-gradient(to top right, #dbeafe, #ffffff)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundDescriptor {
    /// Hero sections and primary CTAs.
    pub primary: String,
    /// Feature and content sections.
    #[serde(default)]
    pub secondary: String,
    /// Testimonials and plain sections.
    #[serde(default)]
    pub neutral: String,
    /// Subtle separators.
    #[serde(default)]
    pub divider: String,
    #[serde(default)]
    pub base_color: ColorFamily,
    #[serde(default)]
    pub accent_color: ColorFamily,
    #[serde(default, alias = "accentCSS")]
    pub accent_token: String,
}

impl BackgroundDescriptor {
    /// The fallback background used when nothing else is available.
    pub fn safe_default() -> Self {
        Self {
            primary: "bg-gradient-to-br from-blue-500 to-blue-600".to_string(),
            secondary: "bg-blue-50".to_string(),
            neutral: "bg-white".to_string(),
            divider: "bg-gray-100/50".to_string(),
            base_color: ColorFamily::Blue,
            accent_color: ColorFamily::Blue,
            accent_token: "bg-blue-600".to_string(),
        }
    }

    /// A descriptor needs a primary token to be renderable.
    pub fn has_primary(&self) -> bool {
        !self.primary.trim().is_empty()
    }
}

/// User-supplied brand colors as hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

impl BrandColors {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
        }
    }

    #[must_use]
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// The secondary color, ignoring blank input.
    pub fn secondary(&self) -> Option<&str> {
        self.secondary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn has_primary(&self) -> bool {
        !self.primary.trim().is_empty()
    }

    /// Default colors offered when the user first enters brand mode.
    pub fn starter() -> Self {
        Self::new("#3B82F6").with_secondary("#6B7280")
    }
}

/// How the picker sources its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorMode {
    /// Variations of the AI-generated background.
    #[default]
    #[serde(alias = "generated")]
    Recommended,
    /// Options compatible with the user's brand colors.
    Brand,
    /// Free-form construction by the host; no catalog search.
    Custom,
}

impl SelectorMode {
    pub const ALL: [SelectorMode; 3] = [Self::Recommended, Self::Brand, Self::Custom];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Brand => "brand",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for SelectorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectorMode {
    type Err = BgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recommended" | "generated" => Ok(Self::Recommended),
            "brand" => Ok(Self::Brand),
            "custom" => Ok(Self::Custom),
            _ => Err(BgsError::UnknownMode {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_accepts_legacy_accent_field() {
        let json = r#"{
            "primary": "bg-white",
            "secondary": "bg-gray-50",
            "neutral": "bg-white",
            "divider": "bg-gray-100/50",
            "baseColor": "gray",
            "accentColor": "brand-accent",
            "accentCSS": "bg-gray-600"
        }"#;
        let descriptor: BackgroundDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.base_color, ColorFamily::Gray);
        assert_eq!(descriptor.accent_color, ColorFamily::Unknown);
        assert_eq!(descriptor.accent_token, "bg-gray-600");
    }

    #[test]
    fn blank_secondary_is_ignored() {
        let colors = BrandColors::new("#3B82F6").with_secondary("  ");
        assert_eq!(colors.secondary(), None);
    }

    #[test]
    fn generated_is_an_alias_for_recommended() {
        assert_eq!(
            "generated".parse::<SelectorMode>().unwrap(),
            SelectorMode::Recommended
        );
        let mode: SelectorMode = serde_json::from_str("\"generated\"").unwrap();
        assert_eq!(mode, SelectorMode::Recommended);
        assert!("hybrid".parse::<SelectorMode>().is_err());
    }

    #[test]
    fn empty_descriptor_has_no_primary() {
        assert!(!BackgroundDescriptor::default().has_primary());
        assert!(BackgroundDescriptor::safe_default().has_primary());
    }
}
