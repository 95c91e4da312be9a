//! Brand color analyzer.
//!
//! Live feedback while a user enters brand colors: the primary family, its
//! harmonious families, warnings, suggestions and a compatibility score.

pub mod analyzer;
pub mod palette;

pub use analyzer::{BrandColorAnalysis, analyze_brand_colors, brand_color_problem};
pub use palette::{
    ColorSuggestion, MAX_SUGGESTED_COLORS, SuggestionSource, popular_colors, suggested_colors,
    swatch_for,
};
