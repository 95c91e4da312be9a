//! Catalog entries.
//!
//! The catalog mixes two record shapes: legacy entries carrying a Tailwind
//! class, and enhanced entries carrying a raw CSS value plus an audience
//! category. Both are modelled explicitly and distinguished by a `kind`
//! discriminant on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BgsError;
use crate::family::ColorFamily;

/// Audience category of an enhanced catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundCategory {
    /// Dark, developer-oriented backgrounds.
    Technical,
    /// Light enterprise and B2B backgrounds.
    Professional,
    /// Warm consumer-facing backgrounds.
    Friendly,
}

impl BackgroundCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Professional => "professional",
            Self::Friendly => "friendly",
        }
    }
}

impl fmt::Display for BackgroundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundCategory {
    type Err = BgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Ok(Self::Technical),
            "professional" => Ok(Self::Professional),
            "friendly" => Ok(Self::Friendly),
            _ => Err(BgsError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Catalog entry built from a Tailwind class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyVariation {
    #[serde(alias = "variationId")]
    pub id: String,
    #[serde(alias = "variationLabel")]
    pub label: String,
    pub archetype_id: String,
    pub theme_id: String,
    pub tailwind_class: String,
    pub base_color: ColorFamily,
}

/// Catalog entry built from a raw CSS value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedVariation {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub archetype_id: String,
    #[serde(default)]
    pub theme_id: String,
    pub css: String,
    pub base_color: ColorFamily,
    pub category: BackgroundCategory,
}

/// One selectable background in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackgroundVariation {
    Legacy(LegacyVariation),
    Enhanced(EnhancedVariation),
}

impl BackgroundVariation {
    pub fn id(&self) -> &str {
        match self {
            Self::Legacy(v) => &v.id,
            Self::Enhanced(v) => &v.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Legacy(v) => &v.label,
            Self::Enhanced(v) => &v.label,
        }
    }

    pub fn archetype_id(&self) -> &str {
        match self {
            Self::Legacy(v) => &v.archetype_id,
            Self::Enhanced(v) => &v.archetype_id,
        }
    }

    pub fn theme_id(&self) -> &str {
        match self {
            Self::Legacy(v) => &v.theme_id,
            Self::Enhanced(v) => &v.theme_id,
        }
    }

    /// The renderable value: Tailwind class or raw CSS.
    pub fn style_token(&self) -> &str {
        match self {
            Self::Legacy(v) => &v.tailwind_class,
            Self::Enhanced(v) => &v.css,
        }
    }

    pub fn base_color(&self) -> ColorFamily {
        match self {
            Self::Legacy(v) => v.base_color,
            Self::Enhanced(v) => v.base_color,
        }
    }

    /// Only enhanced entries carry a category.
    pub fn category(&self) -> Option<BackgroundCategory> {
        match self {
            Self::Legacy(_) => None,
            Self::Enhanced(v) => Some(v.category),
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_entry_accepts_original_field_names() {
        let json = r#"{
            "kind": "legacy",
            "variationId": "soft-blur-blue-1",
            "variationLabel": "Soft Blue Blur",
            "archetypeId": "soft-gradient-blur",
            "themeId": "modern-blue",
            "tailwindClass": "bg-gradient-to-br from-blue-500 to-blue-600 blur-sm",
            "baseColor": "blue"
        }"#;
        let variation: BackgroundVariation = serde_json::from_str(json).unwrap();
        assert!(variation.is_legacy());
        assert_eq!(variation.id(), "soft-blur-blue-1");
        assert_eq!(variation.base_color(), ColorFamily::Blue);
        assert_eq!(variation.category(), None);
    }

    #[test]
    fn enhanced_entry_exposes_category() {
        let json = r##"{
            "kind": "enhanced",
            "id": "frosted-trustblue-gradient-tr",
            "label": "Trust Blue Top-Right",
            "css": "linear-gradient(to top right, #dbeafe, #eff6ff, #ffffff)",
            "baseColor": "blue",
            "category": "professional"
        }"##;
        let variation: BackgroundVariation = serde_json::from_str(json).unwrap();
        assert_eq!(
            variation.category(),
            Some(BackgroundCategory::Professional)
        );
        assert!(variation.style_token().starts_with("linear-gradient"));
        assert_eq!(variation.archetype_id(), "");
    }

    #[test]
    fn missing_kind_is_rejected() {
        let json = r##"{"id": "x", "label": "x", "css": "#fff", "baseColor": "gray", "category": "friendly"}"##;
        assert!(serde_json::from_str::<BackgroundVariation>(json).is_err());
    }
}
