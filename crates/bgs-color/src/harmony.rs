//! Harmony tables.
//!
//! Two tables exist and are kept separate: the search table drives catalog
//! search and brand alignment, the brand table drives suggestions while a
//! user is entering brand colors. Their contents differ and neither is
//! derived from the other.

use bgs_model::ColorFamily;

#[allow(clippy::enum_glob_use)]
use ColorFamily::*;

/// Families compatible with every other family during validation.
pub const UNIVERSAL_NEUTRALS: &[ColorFamily] = &[Gray, Slate, Zinc];

/// Families compatible with every other family during catalog search.
pub const CATALOG_NEUTRALS: &[ColorFamily] = &[Gray, Slate, Zinc, Neutral];

/// Families used when recommended search finds nothing related.
pub const FALLBACK_FAMILIES: &[ColorFamily] = &[Blue, Gray, Slate];

/// Harmonious families for catalog search and brand alignment.
///
/// Unmapped families return an empty slice.
pub fn search_harmony(family: ColorFamily) -> &'static [ColorFamily] {
    match family {
        Blue => &[Indigo, Cyan, Sky, Teal, Purple],
        Red => &[Orange, Pink, Rose, Amber],
        Green => &[Emerald, Teal, Lime, Mint],
        Purple => &[Indigo, Blue, Pink, Rose],
        Orange => &[Red, Amber, Yellow],
        Teal => &[Cyan, Green, Emerald, Blue],
        Indigo => &[Blue, Purple, Sky],
        Cyan => &[Teal, Sky, Blue],
        Sky => &[Blue, Cyan, Indigo],
        Emerald => &[Green, Teal, Mint],
        Amber => &[Orange, Yellow, Red],
        Rose => &[Pink, Red, Purple],
        Pink => &[Rose, Purple, Red],
        Gray => &[Slate, Zinc, Neutral, Stone],
        Slate => &[Gray, Zinc, Blue],
        Zinc => &[Gray, Slate, Neutral],
        _ => &[],
    }
}

/// Harmonious families for brand color suggestions.
pub fn brand_harmony(family: ColorFamily) -> &'static [ColorFamily] {
    match family {
        Red => &[Orange, Pink, Purple],
        Orange => &[Red, Yellow, Amber],
        Yellow => &[Orange, Green, Amber],
        Green => &[Yellow, Teal, Emerald],
        Teal => &[Green, Cyan, Blue],
        Cyan => &[Teal, Blue, Sky],
        Sky => &[Cyan, Blue, Indigo],
        Blue => &[Sky, Indigo, Purple],
        Indigo => &[Blue, Purple, Violet],
        Purple => &[Indigo, Pink, Red],
        Pink => &[Purple, Red, Rose],
        _ => &[],
    }
}

pub fn is_universal_neutral(family: ColorFamily) -> bool {
    UNIVERSAL_NEUTRALS.contains(&family)
}

pub fn is_catalog_neutral(family: ColorFamily) -> bool {
    CATALOG_NEUTRALS.contains(&family)
}

/// True when `candidate` is listed in the search table for `base`.
pub fn harmonizes_with(base: ColorFamily, candidate: ColorFamily) -> bool {
    search_harmony(base).contains(&candidate)
}
