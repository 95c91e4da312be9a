//! Region tokens derived from a single catalog entry.

use bgs_model::{BackgroundDescriptor, BackgroundVariation, ColorFamily};
use serde::Serialize;

/// Style tokens for each page region of a previewed variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundPreview {
    pub primary: String,
    pub secondary: String,
    pub neutral: String,
    pub divider: String,
}

/// Tailwind shade family for derived tokens. Families without a palette of
/// their own render as gray.
pub fn shade_family(family: ColorFamily) -> ColorFamily {
    match family {
        ColorFamily::Neutral | ColorFamily::Unknown => ColorFamily::Gray,
        other => other,
    }
}

/// Region tokens for `variation`. The secondary region is the family's
/// 50 shade, or its 100 shade when the primary token already is the 50.
pub fn background_preview(variation: &BackgroundVariation) -> BackgroundPreview {
    let shade = shade_family(variation.base_color());
    let primary = variation.style_token().to_string();
    let mut secondary = format!("bg-{shade}-50");
    if primary.trim() == secondary {
        secondary = format!("bg-{shade}-100");
    }
    BackgroundPreview {
        primary,
        secondary,
        neutral: "bg-white".to_string(),
        divider: format!("bg-{shade}-100/50"),
    }
}

/// Full descriptor for a catalog entry, accented in its own base color.
pub fn descriptor_for(variation: &BackgroundVariation) -> BackgroundDescriptor {
    let preview = background_preview(variation);
    let shade = shade_family(variation.base_color());
    BackgroundDescriptor {
        primary: preview.primary,
        secondary: preview.secondary,
        neutral: preview.neutral,
        divider: preview.divider,
        base_color: variation.base_color(),
        accent_color: variation.base_color(),
        accent_token: format!("bg-{shade}-600"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bgs_model::LegacyVariation;

    fn legacy(base: ColorFamily) -> BackgroundVariation {
        BackgroundVariation::Legacy(LegacyVariation {
            id: "v".to_string(),
            label: "V".to_string(),
            archetype_id: "soft-gradient-blur".to_string(),
            theme_id: "t".to_string(),
            tailwind_class: "bg-gradient-to-r from-teal-500 to-cyan-400".to_string(),
            base_color: base,
        })
    }

    #[test]
    fn preview_uses_base_color_shades() {
        let preview = background_preview(&legacy(ColorFamily::Teal));
        assert_eq!(preview.primary, "bg-gradient-to-r from-teal-500 to-cyan-400");
        assert_eq!(preview.secondary, "bg-teal-50");
        assert_eq!(preview.neutral, "bg-white");
        assert_eq!(preview.divider, "bg-teal-100/50");
    }

    #[test]
    fn solid_light_shade_gets_distinct_secondary() {
        let mut variation = legacy(ColorFamily::Slate);
        if let BackgroundVariation::Legacy(inner) = &mut variation {
            inner.tailwind_class = "bg-slate-50".to_string();
        }
        let preview = background_preview(&variation);
        assert_eq!(preview.secondary, "bg-slate-100");
        assert_ne!(preview.primary, preview.secondary);
    }

    #[test]
    fn unknown_family_previews_as_gray() {
        let preview = background_preview(&legacy(ColorFamily::Unknown));
        assert_eq!(preview.secondary, "bg-gray-50");
        assert_eq!(preview.divider, "bg-gray-100/50");
    }

    #[test]
    fn descriptor_keeps_original_family() {
        let descriptor = descriptor_for(&legacy(ColorFamily::Neutral));
        assert_eq!(descriptor.base_color, ColorFamily::Neutral);
        assert_eq!(descriptor.accent_color, ColorFamily::Neutral);
        assert_eq!(descriptor.accent_token, "bg-gray-600");
        assert!(descriptor.has_primary());
    }
}
