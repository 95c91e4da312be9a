//! Color family classification.

use bgs_model::ColorFamily;
use tracing::warn;

use crate::hsl::{Hsl, Rgb, parse_hex, rgb_to_hsl};

/// Family returned for input that cannot be parsed.
pub const FALLBACK_FAMILY: ColorFamily = ColorFamily::Blue;

/// Lightness assumed for input that cannot be parsed.
pub const FALLBACK_LIGHTNESS: f64 = 0.5;

/// Saturation below which a color counts as gray.
const GRAY_SATURATION: f64 = 0.1;

/// Half-open hue ranges, 30° wide. Red wraps around 0° and is handled apart.
const HUE_BUCKETS: [(f64, f64, ColorFamily); 11] = [
    (15.0, 45.0, ColorFamily::Orange),
    (45.0, 75.0, ColorFamily::Yellow),
    (75.0, 105.0, ColorFamily::Green),
    (105.0, 135.0, ColorFamily::Teal),
    (135.0, 165.0, ColorFamily::Cyan),
    (165.0, 195.0, ColorFamily::Sky),
    (195.0, 225.0, ColorFamily::Blue),
    (225.0, 255.0, ColorFamily::Indigo),
    (255.0, 285.0, ColorFamily::Purple),
    (285.0, 315.0, ColorFamily::Pink),
    (315.0, 345.0, ColorFamily::Rose),
];

/// Family plus lightness, as used by brand alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorInfo {
    pub family: ColorFamily,
    pub lightness: f64,
}

impl ColorInfo {
    pub const FALLBACK: ColorInfo = ColorInfo {
        family: FALLBACK_FAMILY,
        lightness: FALLBACK_LIGHTNESS,
    };
}

/// True when the lightness is extreme enough that the hue is meaningless.
pub fn is_extreme_lightness(l: f64) -> bool {
    l > 0.9 || l < 0.1
}

/// Bucket a hue into its family. Red covers `[345, 360)` and `[0, 15)`.
pub fn hue_family(h: f64) -> ColorFamily {
    if h >= 345.0 || (0.0..15.0).contains(&h) {
        return ColorFamily::Red;
    }
    HUE_BUCKETS
        .iter()
        .find(|(lo, hi, _)| h >= *lo && h < *hi)
        .map_or(FALLBACK_FAMILY, |(_, _, family)| *family)
}

/// Classify an already converted color.
///
/// Extreme lightness is checked before saturation, so pure black and white
/// land on the `Neutral` sentinel rather than `Gray`.
pub fn classify_hsl(hsl: Hsl) -> ColorFamily {
    if is_extreme_lightness(hsl.l) {
        ColorFamily::Neutral
    } else if hsl.s < GRAY_SATURATION {
        ColorFamily::Gray
    } else {
        hue_family(hsl.h)
    }
}

pub fn classify_rgb(rgb: Rgb) -> ColorFamily {
    classify_hsl(rgb_to_hsl(rgb))
}

/// Classify a hex color into a family. Malformed input yields
/// [`FALLBACK_FAMILY`].
pub fn classify_family(hex: &str) -> ColorFamily {
    match parse_hex(hex) {
        Some(rgb) => classify_rgb(rgb),
        None => {
            warn!(input = hex, fallback = %FALLBACK_FAMILY, "unparseable color, using fallback family");
            FALLBACK_FAMILY
        }
    }
}

pub fn color_info(hex: &str) -> ColorInfo {
    let Some(rgb) = parse_hex(hex) else {
        warn!(input = hex, "unparseable color, using fallback color info");
        return ColorInfo::FALLBACK;
    };
    let hsl = rgb_to_hsl(rgb);
    ColorInfo {
        family: classify_hsl(hsl),
        lightness: hsl.l,
    }
}

/// HSL lightness of a hex color, [`FALLBACK_LIGHTNESS`] when malformed.
pub fn lightness(hex: &str) -> f64 {
    parse_hex(hex).map_or(FALLBACK_LIGHTNESS, |rgb| rgb_to_hsl(rgb).l)
}

/// Euclidean RGB distance scaled to `[0, 1]`. Returns 0 when either input
/// is malformed.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    let (Some(a), Some(b)) = (parse_hex(a), parse_hex(b)) else {
        return 0.0;
    };
    let max = (3.0_f64 * 255.0 * 255.0).sqrt();
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt() / max
}
