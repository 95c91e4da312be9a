pub mod background;
pub mod error;
pub mod family;
pub mod report;
pub mod variation;

pub use background::{BackgroundDescriptor, BrandColors, SelectorMode};
pub use error::{BgsError, Result};
pub use family::ColorFamily;
pub use report::{
    AccessibilityCheck, AccessibilityIssue, AccessibilityIssueKind, BrandAlignmentCheck,
    BrandIssue, BrandIssueKind, CheckKind, Complexity, IssueLevel, PerformanceCheck,
    PerformanceIssue, PerformanceIssueKind, Severity, SuggestionKind, ValidationError,
    ValidationResult, ValidationSuggestion, ValidationWarning, WcagLevel, clamp_score,
};
pub use variation::{
    BackgroundCategory, BackgroundVariation, EnhancedVariation, LegacyVariation,
};
