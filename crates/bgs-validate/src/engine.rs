//! Validation entry points.

use bgs_catalog::descriptor_for;
use bgs_color::{ColorInfo, color_info, parse_hex};
use bgs_model::{
    BackgroundDescriptor, BackgroundVariation, BrandAlignmentCheck, BrandColors, CheckKind,
    Complexity, SelectorMode, Severity, SuggestionKind, ValidationError, ValidationResult,
    ValidationSuggestion, ValidationWarning, WcagLevel,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

use crate::checks::{accessibility, brand, performance};
use crate::token::TokenTraits;

const ERROR_PENALTY: u32 = 25;
const BRAND_MISMATCH_THRESHOLD: u8 = 60;
const TARGET_CONTRAST: f64 = 7.0;

/// Caller context. Recorded for diagnostics only; it does not affect
/// scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationContext {
    #[serde(default)]
    pub mode: Option<SelectorMode>,
    #[serde(default)]
    pub performance_requirements: Option<Complexity>,
}

impl ValidationContext {
    pub fn for_mode(mode: SelectorMode) -> Self {
        Self {
            mode: Some(mode),
            performance_requirements: None,
        }
    }
}

/// Validate a background against accessibility, performance and, when
/// brand colors are given, brand alignment.
///
/// Always returns a fully populated result. A descriptor without a primary
/// token yields [`ValidationResult::degraded`].
pub fn validate(
    background: &BackgroundDescriptor,
    brand_colors: Option<&BrandColors>,
    context: &ValidationContext,
) -> ValidationResult {
    let span = debug_span!(
        "validate",
        mode = ?context.mode,
        performance_requirements = ?context.performance_requirements,
        base_color = %background.base_color,
    );
    let _guard = span.enter();

    if !background.has_primary() {
        warn!("background has no primary token, returning degraded result");
        return ValidationResult::degraded("Background primary token is empty");
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    let traits = TokenTraits::of(&background.primary);

    let accessibility = accessibility::check(background, &traits);
    errors.extend(wcag_error(accessibility.wcag_level, accessibility.contrast_ratio));
    warnings.extend(wcag_warning(accessibility.wcag_level));

    let performance = performance::check(&traits);
    if performance.complexity == Complexity::High {
        warnings.push(ValidationWarning {
            id: "performance-complexity".to_string(),
            kind: CheckKind::Performance,
            severity: Severity::Medium,
            message: "Complex background may impact performance".to_string(),
            details: Some("Gradient or complex patterns can slow rendering".to_string()),
            fix: Some("Consider simpler background options".to_string()),
            auto_fixable: false,
        });
    }

    let brand_alignment = match brand_colors.filter(|colors| colors.has_primary()) {
        Some(colors) => {
            let info = brand_info(colors, &mut errors);
            let check = brand::check(background, info, &traits);
            if check.alignment_score < BRAND_MISMATCH_THRESHOLD {
                warnings.push(ValidationWarning {
                    id: "brand-mismatch".to_string(),
                    kind: CheckKind::Brand,
                    severity: Severity::High,
                    message: "Background may not align with brand colors".to_string(),
                    details: Some(format!(
                        "Brand alignment score: {}%",
                        check.alignment_score
                    )),
                    fix: Some("Choose background that complements your brand colors".to_string()),
                    auto_fixable: false,
                });
            }
            check
        }
        None => BrandAlignmentCheck::unconstrained(),
    };

    if accessibility.contrast_ratio < TARGET_CONTRAST {
        suggestions.push(ValidationSuggestion {
            id: "improve-contrast".to_string(),
            kind: SuggestionKind::Improvement,
            message: "Increase contrast for better readability".to_string(),
            action: Some("adjust-contrast".to_string()),
            value: Some(TARGET_CONTRAST),
        });
    }
    if performance.complexity == Complexity::High {
        suggestions.push(ValidationSuggestion {
            id: "simplify-background".to_string(),
            kind: SuggestionKind::Alternative,
            message: "Use a simpler background for better performance".to_string(),
            action: Some("suggest-alternatives".to_string()),
            value: None,
        });
    }

    let score = aggregate_score(&errors, &warnings);
    debug!(
        score,
        errors = errors.len(),
        warnings = warnings.len(),
        "validation complete"
    );

    ValidationResult {
        is_valid: errors.is_empty(),
        score,
        warnings,
        errors,
        suggestions,
        accessibility,
        performance,
        brand_alignment,
    }
}

/// Validate a catalog entry as it would be applied.
pub fn validate_variation(
    variation: &BackgroundVariation,
    brand_colors: Option<&BrandColors>,
    context: &ValidationContext,
) -> ValidationResult {
    validate(&descriptor_for(variation), brand_colors, context)
}

/// 100, minus 25 per error and the severity penalty per warning, floored
/// at 0.
pub fn aggregate_score(errors: &[ValidationError], warnings: &[ValidationWarning]) -> u8 {
    let penalty: u32 = errors.len() as u32 * ERROR_PENALTY
        + warnings
            .iter()
            .map(|warning| warning.severity.penalty())
            .sum::<u32>();
    // Bounded to [0, 100] before narrowing.
    100u32.saturating_sub(penalty) as u8
}

/// Blocking error for a background that fails WCAG contrast.
fn wcag_error(level: WcagLevel, contrast_ratio: f64) -> Option<ValidationError> {
    (level == WcagLevel::Fail).then(|| ValidationError {
        id: "accessibility-fail".to_string(),
        kind: CheckKind::Accessibility,
        message: "Background fails WCAG accessibility standards".to_string(),
        details: format!("Contrast ratio of {contrast_ratio} is below minimum requirements"),
        fix: "Choose a background with higher contrast or adjust text colors".to_string(),
        blocking: true,
    })
}

fn wcag_warning(level: WcagLevel) -> Option<ValidationWarning> {
    (level == WcagLevel::Aa).then(|| ValidationWarning {
        id: "accessibility-warning".to_string(),
        kind: CheckKind::Accessibility,
        severity: Severity::Medium,
        message: "Background meets AA but not AAA standards".to_string(),
        details: Some("Consider improving contrast for better accessibility".to_string()),
        fix: Some("Use darker text or lighter background".to_string()),
        auto_fixable: false,
    })
}

/// Brand primary color info. An unparseable primary records a blocking
/// format error and falls back to the default color info.
fn brand_info(colors: &BrandColors, errors: &mut Vec<ValidationError>) -> ColorInfo {
    if parse_hex(&colors.primary).is_some() {
        return color_info(&colors.primary);
    }
    warn!(primary = %colors.primary, "brand primary is not a hex color");
    errors.push(ValidationError {
        id: "invalid-brand-color".to_string(),
        kind: CheckKind::Format,
        message: "Brand primary color is not a valid hex color".to_string(),
        details: format!("'{}' could not be parsed as a 6-digit hex color", colors.primary),
        fix: "Use a hex color such as #3B82F6".to_string(),
        blocking: true,
    });
    ColorInfo::FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_deductions() {
        let warning = |severity| ValidationWarning {
            id: String::new(),
            kind: CheckKind::Brand,
            severity,
            message: String::new(),
            details: None,
            fix: None,
            auto_fixable: false,
        };
        assert_eq!(aggregate_score(&[], &[]), 100);
        assert_eq!(
            aggregate_score(
                &[],
                &[warning(Severity::High), warning(Severity::Medium), warning(Severity::Low)]
            ),
            70
        );
        let degraded = ValidationResult::degraded("x");
        let many: Vec<_> = std::iter::repeat_n(degraded.errors[0].clone(), 5).collect();
        assert_eq!(aggregate_score(&many, &[]), 0);
    }

    #[test]
    fn failing_contrast_is_a_blocking_error() {
        let error = wcag_error(WcagLevel::Fail, 3.2).unwrap();
        assert_eq!(error.id, "accessibility-fail");
        assert_eq!(error.kind, CheckKind::Accessibility);
        assert!(error.blocking);
        assert_eq!(error.details, "Contrast ratio of 3.2 is below minimum requirements");
        assert_eq!(aggregate_score(&[error], &[]), 75);
        assert!(wcag_warning(WcagLevel::Fail).is_none());
    }

    #[test]
    fn wcag_levels_map_to_issues() {
        assert!(wcag_error(WcagLevel::Aa, 4.8).is_none());
        assert!(wcag_error(WcagLevel::Aaa, 12.0).is_none());
        let warning = wcag_warning(WcagLevel::Aa).unwrap();
        assert_eq!(warning.id, "accessibility-warning");
        assert_eq!(warning.severity, Severity::Medium);
        assert!(wcag_warning(WcagLevel::Aaa).is_none());
    }

    #[test]
    fn context_does_not_change_result() {
        let background = BackgroundDescriptor::safe_default();
        let plain = validate(&background, None, &ValidationContext::default());
        let brand = validate(
            &background,
            None,
            &ValidationContext {
                mode: Some(SelectorMode::Brand),
                performance_requirements: Some(Complexity::Low),
            },
        );
        assert_eq!(plain, brand);
    }

    #[test]
    fn blank_brand_primary_is_unconstrained() {
        let background = BackgroundDescriptor::safe_default();
        let result = validate(
            &background,
            Some(&BrandColors::new("  ")),
            &ValidationContext::default(),
        );
        assert_eq!(result.brand_alignment, BrandAlignmentCheck::unconstrained());
        assert!(result.is_valid);
    }
}
