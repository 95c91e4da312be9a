//! Validation result types.
//!
//! A [`ValidationResult`] is always fully populated. When validation cannot
//! run, every sub-check takes its worst-case value (see
//! [`ValidationResult::degraded`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accessibility contrast tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "fail")]
    Fail,
}

impl WcagLevel {
    pub const AAA_THRESHOLD: f64 = 7.0;
    pub const AA_THRESHOLD: f64 = 4.5;

    /// Derive the level from a contrast ratio (≥7 AAA, ≥4.5 AA).
    pub fn from_contrast(ratio: f64) -> Self {
        if ratio >= Self::AAA_THRESHOLD {
            Self::Aaa
        } else if ratio >= Self::AA_THRESHOLD {
            Self::Aa
        } else {
            Self::Fail
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering complexity of a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a non-blocking warning. Also used for performance impact
/// and brand issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Points deducted from the aggregate score per warning.
    pub const fn penalty(&self) -> u32 {
        match self {
            Self::Low => 5,
            Self::Medium => 10,
            Self::High => 15,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of an accessibility sub-check issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    Warning,
    Error,
}

/// Dimension a top-level error or warning belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Accessibility,
    Performance,
    Brand,
    Format,
}

impl CheckKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accessibility => "accessibility",
            Self::Performance => "performance",
            Self::Brand => "brand",
            Self::Format => "format",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Improvement,
    Alternative,
    Optimization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessibilityIssueKind {
    Contrast,
    ColorBlind,
    Readability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceIssueKind {
    Complexity,
    Compatibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandIssueKind {
    Harmony,
    Consistency,
}

/// A blocking problem. Hosts should refuse to apply a background that
/// carries one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CheckKind,
    pub message: String,
    pub details: String,
    pub fix: String,
    pub blocking: bool,
}

/// A non-blocking advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CheckKind,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    pub auto_fixable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSuggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityIssue {
    #[serde(rename = "type")]
    pub kind: AccessibilityIssueKind,
    pub severity: IssueLevel,
    pub message: String,
    pub fix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceIssue {
    #[serde(rename = "type")]
    pub kind: PerformanceIssueKind,
    pub message: String,
    pub impact: Severity,
    pub fix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandIssue {
    #[serde(rename = "type")]
    pub kind: BrandIssueKind,
    pub message: String,
    pub severity: Severity,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityCheck {
    pub contrast_ratio: f64,
    pub wcag_level: WcagLevel,
    pub color_blind_safe: bool,
    pub readability_score: u8,
    pub issues: Vec<AccessibilityIssue>,
}

impl AccessibilityCheck {
    pub fn worst() -> Self {
        Self {
            contrast_ratio: 0.0,
            wcag_level: WcagLevel::Fail,
            color_blind_safe: false,
            readability_score: 0,
            issues: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceCheck {
    pub complexity: Complexity,
    pub render_cost: u32,
    pub optimizations: Vec<String>,
    pub issues: Vec<PerformanceIssue>,
}

impl PerformanceCheck {
    pub fn worst() -> Self {
        Self {
            complexity: Complexity::High,
            render_cost: 100,
            optimizations: Vec::new(),
            issues: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandAlignmentCheck {
    pub alignment_score: u8,
    pub color_harmony: u8,
    pub consistency_score: u8,
    pub issues: Vec<BrandIssue>,
}

impl BrandAlignmentCheck {
    /// Result used when no brand colors were supplied.
    pub fn unconstrained() -> Self {
        Self {
            alignment_score: 100,
            color_harmony: 100,
            consistency_score: 100,
            issues: Vec::new(),
        }
    }

    pub fn worst() -> Self {
        Self {
            alignment_score: 0,
            color_harmony: 0,
            consistency_score: 0,
            issues: Vec::new(),
        }
    }
}

/// Aggregate outcome of validating one background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub score: u8,
    pub warnings: Vec<ValidationWarning>,
    pub errors: Vec<ValidationError>,
    pub suggestions: Vec<ValidationSuggestion>,
    pub accessibility: AccessibilityCheck,
    pub performance: PerformanceCheck,
    pub brand_alignment: BrandAlignmentCheck,
}

impl ValidationResult {
    pub const DEGRADED_ERROR_ID: &'static str = "validation-error";

    /// Worst-case result returned when validation could not run.
    pub fn degraded(details: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            score: 0,
            warnings: Vec::new(),
            errors: vec![ValidationError {
                id: Self::DEGRADED_ERROR_ID.to_string(),
                kind: CheckKind::Format,
                message: "Failed to validate background".to_string(),
                details: details.into(),
                fix: "Please try again or select a different background".to_string(),
                blocking: true,
            }],
            suggestions: Vec::new(),
            accessibility: AccessibilityCheck::worst(),
            performance: PerformanceCheck::worst(),
            brand_alignment: BrandAlignmentCheck::worst(),
        }
    }

    pub fn has_blocking_errors(&self) -> bool {
        self.errors.iter().any(|error| error.blocking)
    }

    pub fn warning_count(&self, severity: Severity) -> usize {
        self.warnings
            .iter()
            .filter(|warning| warning.severity == severity)
            .count()
    }

    pub fn has_error(&self, id: &str) -> bool {
        self.errors.iter().any(|error| error.id == id)
    }

    pub fn has_warning(&self, id: &str) -> bool {
        self.warnings.iter().any(|warning| warning.id == id)
    }
}

/// Clamp an intermediate score into `[0, 100]`, rounding to the nearest
/// integer. Non-finite input clamps to 0.
pub fn clamp_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    // The clamp bounds the value to the u8 range before the cast.
    raw.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wcag_thresholds() {
        assert_eq!(WcagLevel::from_contrast(12.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_contrast(7.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_contrast(4.8), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_contrast(4.5), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_contrast(4.49), WcagLevel::Fail);
        assert_eq!(WcagLevel::from_contrast(0.0), WcagLevel::Fail);
    }

    #[test]
    fn degraded_result_is_worst_case() {
        let result = ValidationResult::degraded("primary token is empty");
        assert!(!result.is_valid);
        assert_eq!(result.score, 0);
        assert!(result.has_blocking_errors());
        assert!(result.has_error("validation-error"));
        assert_eq!(result.accessibility.wcag_level, WcagLevel::Fail);
        assert_eq!(result.performance.complexity, Complexity::High);
        assert_eq!(result.performance.render_cost, 100);
        assert_eq!(result.brand_alignment.alignment_score, 0);
    }

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(-40.0), 0);
        assert_eq!(clamp_score(140.0), 100);
        assert_eq!(clamp_score(84.6), 85);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn wire_names_follow_camel_case() {
        let check = AccessibilityCheck::worst();
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["wcagLevel"], "fail");
        assert_eq!(json["colorBlindSafe"], false);
        let warning = ValidationWarning {
            id: "brand-mismatch".to_string(),
            kind: CheckKind::Brand,
            severity: Severity::High,
            message: "Background may not align with brand colors".to_string(),
            details: None,
            fix: None,
            auto_fixable: false,
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["type"], "brand");
        assert_eq!(json["autoFixable"], false);
        assert!(json.get("details").is_none());
    }

    #[test]
    fn warning_counts_by_severity() {
        let mut result = ValidationResult::degraded("x");
        result.warnings.push(ValidationWarning {
            id: "accessibility-warning".to_string(),
            kind: CheckKind::Accessibility,
            severity: Severity::Medium,
            message: String::new(),
            details: None,
            fix: None,
            auto_fixable: false,
        });
        assert_eq!(result.warning_count(Severity::Medium), 1);
        assert_eq!(result.warning_count(Severity::High), 0);
        assert!(result.has_warning("accessibility-warning"));
    }
}
