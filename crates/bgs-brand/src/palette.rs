//! Swatches offered while a user enters brand colors.

use std::fmt;

use bgs_model::ColorFamily;
use serde::{Deserialize, Serialize};

pub const MAX_SUGGESTED_COLORS: usize = 12;

/// Representative 500-shade hex for each family that has one.
const FAMILY_SWATCHES: &[(ColorFamily, &str)] = &[
    (ColorFamily::Red, "#EF4444"),
    (ColorFamily::Orange, "#F97316"),
    (ColorFamily::Yellow, "#EAB308"),
    (ColorFamily::Green, "#22C55E"),
    (ColorFamily::Teal, "#14B8A6"),
    (ColorFamily::Cyan, "#06B6D4"),
    (ColorFamily::Sky, "#0EA5E9"),
    (ColorFamily::Blue, "#3B82F6"),
    (ColorFamily::Indigo, "#6366F1"),
    (ColorFamily::Purple, "#A855F7"),
    (ColorFamily::Pink, "#EC4899"),
];

const POPULAR_BRAND_COLORS: &[(&str, &str)] = &[
    ("#1DA1F2", "Twitter Blue"),
    ("#4267B2", "Facebook Blue"),
    ("#FF0000", "YouTube Red"),
    ("#0077B5", "LinkedIn Blue"),
    ("#25D366", "WhatsApp Green"),
    ("#FF5722", "Product Hunt Orange"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    Popular,
    Harmony,
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Popular => "popular",
            Self::Harmony => "harmony",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSuggestion {
    pub hex: String,
    pub name: String,
    pub category: SuggestionSource,
}

pub fn swatch_for(family: ColorFamily) -> Option<&'static str> {
    FAMILY_SWATCHES
        .iter()
        .find(|(f, _)| *f == family)
        .map(|(_, hex)| *hex)
}

pub fn popular_colors() -> impl Iterator<Item = ColorSuggestion> {
    POPULAR_BRAND_COLORS.iter().map(|(hex, name)| ColorSuggestion {
        hex: (*hex).to_string(),
        name: (*name).to_string(),
        category: SuggestionSource::Popular,
    })
}

/// Harmony swatches for `harmonics` (skipping families without one), then
/// the popular palette, capped at [`MAX_SUGGESTED_COLORS`].
pub fn suggested_colors(harmonics: &[ColorFamily]) -> Vec<ColorSuggestion> {
    harmonics
        .iter()
        .filter_map(|&family| {
            swatch_for(family).map(|hex| ColorSuggestion {
                hex: hex.to_string(),
                name: family.display_name(),
                category: SuggestionSource::Harmony,
            })
        })
        .chain(popular_colors())
        .take(MAX_SUGGESTED_COLORS)
        .collect()
}
