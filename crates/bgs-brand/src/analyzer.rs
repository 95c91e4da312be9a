//! Brand color analysis.

use bgs_color::{
    BrandColorError, brand_harmony, classify_family, lightness, normalized_distance,
    validate_brand_color,
};
use bgs_model::{BrandColors, ColorFamily, clamp_score};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::palette::{ColorSuggestion, popular_colors, suggested_colors};

/// Secondary colors closer than this to the primary must be harmonious.
const MIN_DISTINCT_DISTANCE: f64 = 0.3;
const TOO_LIGHT: f64 = 0.8;
const TOO_DARK: f64 = 0.2;
const WARNING_PENALTY: f64 = 15.0;
const LIGHTNESS_WEIGHT: f64 = 40.0;
const HARMONIC_SECONDARY_BONUS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColorAnalysis {
    pub is_valid: bool,
    pub base_color_family: ColorFamily,
    pub harmonic_colors: Vec<ColorFamily>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub compatibility_score: u8,
    pub suggested_colors: Vec<ColorSuggestion>,
}

impl BrandColorAnalysis {
    fn missing_primary() -> Self {
        Self {
            is_valid: false,
            base_color_family: ColorFamily::Unknown,
            harmonic_colors: Vec::new(),
            warnings: vec!["Primary color is required".to_string()],
            suggestions: Vec::new(),
            compatibility_score: 0,
            suggested_colors: popular_colors().collect(),
        }
    }
}

/// Analyze brand colors as the user types them.
pub fn analyze_brand_colors(colors: &BrandColors) -> BrandColorAnalysis {
    if !colors.has_primary() {
        return BrandColorAnalysis::missing_primary();
    }
    let primary = colors.primary.trim();
    let secondary = colors.secondary();

    let primary_check = validate_brand_color(primary);
    let secondary_check = secondary.map_or(Ok(()), validate_brand_color);

    let base_color_family = classify_family(primary);
    let harmonics = brand_harmony(base_color_family);
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    if let Err(err) = primary_check {
        warnings.push(err.to_string());
    }
    if let Err(err) = secondary_check {
        warnings.push(err.to_string());
    }

    let secondary_family = secondary.map(classify_family);
    if let (Some(secondary), Some(family)) = (secondary, secondary_family) {
        let harmonious = harmonics.contains(&family)
            || normalized_distance(primary, secondary) > MIN_DISTINCT_DISTANCE;
        if !harmonious {
            warnings.push("Primary and secondary colors may not work well together".to_string());
            if let Some(first) = harmonics.first() {
                suggestions.push(format!("Consider using {first} tones for secondary color"));
            }
        }
    }

    let l = lightness(primary);
    if l > TOO_LIGHT {
        warnings.push("Primary color is very light - may have contrast issues".to_string());
        suggestions.push("Consider using a darker shade for better text contrast".to_string());
    } else if l < TOO_DARK {
        warnings.push("Primary color is very dark - may limit background options".to_string());
        suggestions
            .push("Consider using a lighter shade for more background compatibility".to_string());
    }

    let mut score = 100.0 - warnings.len() as f64 * WARNING_PENALTY;
    score -= (l - 0.5).abs() * LIGHTNESS_WEIGHT;
    if secondary_family.is_some_and(|family| harmonics.contains(&family)) {
        score += HARMONIC_SECONDARY_BONUS;
    }

    let is_valid = primary_check.is_ok() && secondary_check.is_ok();
    let suggested_colors = if is_valid {
        suggested_colors(harmonics)
    } else {
        popular_colors().collect()
    };

    let analysis = BrandColorAnalysis {
        is_valid,
        base_color_family,
        harmonic_colors: harmonics.to_vec(),
        warnings,
        suggestions,
        compatibility_score: clamp_score(score),
        suggested_colors,
    };
    debug!(
        family = %analysis.base_color_family,
        score = analysis.compatibility_score,
        warnings = analysis.warnings.len(),
        "analyzed brand colors"
    );
    analysis
}

/// Convenience for hosts that only need the format/lightness verdict.
pub fn brand_color_problem(color: &str) -> Option<BrandColorError> {
    validate_brand_color(color).err()
}
