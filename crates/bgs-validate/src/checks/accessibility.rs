//! Accessibility check.
//!
//! Contrast is a heuristic lookup on the primary token, not a luminance
//! computation. The WCAG level is derived from it with the fixed thresholds.

use bgs_color::is_universal_neutral;
use bgs_model::{
    AccessibilityCheck, AccessibilityIssue, AccessibilityIssueKind, BackgroundDescriptor,
    ColorFamily, IssueLevel, WcagLevel, clamp_score,
};

use crate::token::TokenTraits;

/// Contrast assumed when nothing in the token is recognised.
pub const DEFAULT_CONTRAST: f64 = 4.5;

/// Gradient start stops with a known contrast.
const GRADIENT_STOPS: &[(&str, f64)] = &[
    ("from-blue-500", 4.8),
    ("from-purple-500", 5.2),
    ("from-green-500", 4.9),
];

/// Solid light backgrounds with a known contrast.
const LIGHT_CLASSES: &[(&str, f64)] = &[("bg-gray-50", 10.0), ("bg-gray-100", 8.0)];

const WHITE_CONTRAST: f64 = 12.0;

/// Base/accent pairs that are hard to tell apart with common color vision
/// deficiencies. Checked in both orders.
const PROBLEMATIC_PAIRS: &[(ColorFamily, ColorFamily)] = &[
    (ColorFamily::Red, ColorFamily::Green),
    (ColorFamily::Orange, ColorFamily::Green),
];

const READABILITY_BASE: f64 = 70.0;
const READABILITY_THRESHOLD: u8 = 70;
const READABILITY_ERROR_THRESHOLD: u8 = 50;

pub fn contrast_ratio(traits: &TokenTraits) -> f64 {
    if traits.gradient {
        return GRADIENT_STOPS
            .iter()
            .find(|(stop, _)| traits.has_class(stop))
            .map_or(DEFAULT_CONTRAST, |(_, ratio)| *ratio);
    }
    if traits.is_solid_white() {
        return WHITE_CONTRAST;
    }
    LIGHT_CLASSES
        .iter()
        .find(|(class, _)| traits.has_class(class))
        .map_or(DEFAULT_CONTRAST, |(_, ratio)| *ratio)
}

pub fn color_blind_safe(base: ColorFamily, accent: ColorFamily) -> bool {
    !PROBLEMATIC_PAIRS
        .iter()
        .any(|&(a, b)| (base == a && accent == b) || (base == b && accent == a))
}

pub fn readability_score(traits: &TokenTraits, base: ColorFamily) -> u8 {
    let mut score = READABILITY_BASE;
    if traits.white || traits.very_light {
        score += 20.0;
    }
    if traits.gradient && traits.blur {
        score -= 30.0;
    }
    if is_universal_neutral(base) {
        score += 10.0;
    }
    clamp_score(score)
}

pub fn check(background: &BackgroundDescriptor, traits: &TokenTraits) -> AccessibilityCheck {
    let contrast_ratio = contrast_ratio(traits);
    let color_blind_safe = color_blind_safe(background.base_color, background.accent_color);
    let readability_score = readability_score(traits, background.base_color);

    let mut issues = Vec::new();
    if !color_blind_safe {
        issues.push(AccessibilityIssue {
            kind: AccessibilityIssueKind::ColorBlind,
            severity: IssueLevel::Warning,
            message: "Background may be difficult for color-blind users".to_string(),
            fix: "Ensure sufficient contrast and avoid problematic color combinations"
                .to_string(),
        });
    }
    if readability_score < READABILITY_THRESHOLD {
        issues.push(AccessibilityIssue {
            kind: AccessibilityIssueKind::Readability,
            severity: if readability_score < READABILITY_ERROR_THRESHOLD {
                IssueLevel::Error
            } else {
                IssueLevel::Warning
            },
            message: "Text may be difficult to read on this background".to_string(),
            fix: "Increase contrast or use different text colors".to_string(),
        });
    }

    AccessibilityCheck {
        contrast_ratio,
        wcag_level: WcagLevel::from_contrast(contrast_ratio),
        color_blind_safe,
        readability_score,
        issues,
    }
}
