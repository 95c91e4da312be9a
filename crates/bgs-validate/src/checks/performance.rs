//! Rendering performance check.

use bgs_model::{Complexity, PerformanceCheck, PerformanceIssue, PerformanceIssueKind, Severity};

use crate::token::TokenTraits;

const BASE_COST: u32 = 10;
const GRADIENT_COST: u32 = 20;
const EFFECT_COST: u32 = 40;
const BACKDROP_COST: u32 = 30;

pub fn check(traits: &TokenTraits) -> PerformanceCheck {
    let mut complexity = Complexity::Low;
    let mut render_cost = BASE_COST;
    let mut optimizations = Vec::new();
    let mut issues = Vec::new();

    if traits.gradient {
        complexity = Complexity::Medium;
        render_cost += GRADIENT_COST;
        optimizations.push("Consider solid colors for better performance".to_string());
    }

    // Blur raises complexity even on a solid token.
    if traits.radial || traits.blur {
        complexity = Complexity::High;
        render_cost += EFFECT_COST;
        issues.push(PerformanceIssue {
            kind: PerformanceIssueKind::Complexity,
            message: "Complex gradients and effects impact performance".to_string(),
            impact: Severity::Medium,
            fix: "Use simpler background patterns".to_string(),
        });
    }

    if traits.backdrop_blur {
        render_cost += BACKDROP_COST;
        issues.push(PerformanceIssue {
            kind: PerformanceIssueKind::Compatibility,
            message: "Backdrop blur may not be supported in all browsers".to_string(),
            impact: Severity::Low,
            fix: "Provide fallback backgrounds".to_string(),
        });
    }

    PerformanceCheck {
        complexity,
        render_cost,
        optimizations,
        issues,
    }
}
