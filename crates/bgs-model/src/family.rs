//! Color family taxonomy.
//!
//! Families are named hue buckets used for harmony and compatibility
//! reasoning instead of raw color values. Names follow the Tailwind palette
//! because style tokens reference them (`bg-blue-50`, `from-purple-500`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::BgsError;

/// A closed set of named hue buckets.
///
/// `Neutral` is the sentinel for extremely light or dark colors, and
/// `Unknown` covers family names from external data that are not part of
/// the taxonomy (`"opacity"`, `"custom"`, `"brand-primary"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ColorFamily {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Mint,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Pink,
    Rose,
    Gray,
    Slate,
    Zinc,
    Stone,
    Neutral,
    #[default]
    Unknown,
}

impl ColorFamily {
    /// Every family, in palette order.
    pub const ALL: [ColorFamily; 23] = [
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Yellow,
        Self::Lime,
        Self::Green,
        Self::Emerald,
        Self::Mint,
        Self::Teal,
        Self::Cyan,
        Self::Sky,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::Pink,
        Self::Rose,
        Self::Gray,
        Self::Slate,
        Self::Zinc,
        Self::Stone,
        Self::Neutral,
        Self::Unknown,
    ];

    /// Lowercase name as it appears in style tokens and JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Mint => "mint",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Rose => "rose",
            Self::Gray => "gray",
            Self::Slate => "slate",
            Self::Zinc => "zinc",
            Self::Stone => "stone",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
        }
    }

    /// Lenient parse: unrecognised names map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or(Self::Unknown)
    }

    /// True for families without a hue of their own.
    pub fn is_achromatic(&self) -> bool {
        matches!(
            self,
            Self::Gray | Self::Slate | Self::Zinc | Self::Stone | Self::Neutral
        )
    }

    /// Capitalised name for display.
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFamily {
    type Err = BgsError;

    /// Strict parse (case-insensitive). `"unknown"` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|family| family.as_str() == normalized)
            .ok_or_else(|| BgsError::UnknownFamily {
                value: s.to_string(),
            })
    }
}

impl Serialize for ColorFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColorFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
