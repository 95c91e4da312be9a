//! Brand alignment check.

use bgs_color::{ColorInfo, harmonizes_with, is_universal_neutral};
use bgs_model::{
    BackgroundDescriptor, BrandAlignmentCheck, BrandIssue, BrandIssueKind, ColorFamily, Severity,
    clamp_score,
};

use crate::token::TokenTraits;

const HARMONY_THRESHOLD: u8 = 60;
const CONSISTENCY_THRESHOLD: u8 = 50;

pub fn color_harmony(brand: ColorFamily, background: ColorFamily) -> u8 {
    if brand == background {
        100
    } else if harmonizes_with(brand, background) {
        85
    } else if is_universal_neutral(background) {
        75
    } else {
        40
    }
}

pub fn consistency_score(brand: ColorFamily, background: ColorFamily, traits: &TokenTraits) -> u8 {
    let mut score = 50.0;
    if brand == background {
        score += 30.0;
    }
    if traits.is_linear_gradient() {
        score += 20.0;
    }
    clamp_score(score)
}

pub fn check(
    background: &BackgroundDescriptor,
    brand: ColorInfo,
    traits: &TokenTraits,
) -> BrandAlignmentCheck {
    let color_harmony = color_harmony(brand.family, background.base_color);
    let consistency_score = consistency_score(brand.family, background.base_color, traits);
    let alignment_score =
        clamp_score((f64::from(color_harmony) + f64::from(consistency_score)) / 2.0);

    let mut issues = Vec::new();
    if color_harmony < HARMONY_THRESHOLD {
        issues.push(BrandIssue {
            kind: BrandIssueKind::Harmony,
            message: "Background color does not harmonize well with brand colors".to_string(),
            severity: Severity::Medium,
            suggestion: "Choose backgrounds with complementary or analogous colors".to_string(),
        });
    }
    if consistency_score < CONSISTENCY_THRESHOLD {
        issues.push(BrandIssue {
            kind: BrandIssueKind::Consistency,
            message: "Background is inconsistent with brand identity".to_string(),
            severity: Severity::High,
            suggestion: "Select backgrounds that reflect your brand personality".to_string(),
        });
    }

    BrandAlignmentCheck {
        alignment_score,
        color_harmony,
        consistency_score,
        issues,
    }
}
