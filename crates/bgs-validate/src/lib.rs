//! Background validation engine.
//!
//! Scores a candidate background on three dimensions and aggregates them
//! into a [`ValidationResult`](bgs_model::ValidationResult):
//!
//! - accessibility: heuristic contrast, WCAG level, color-blind safety,
//!   readability
//! - performance: complexity and render cost of the primary token
//! - brand alignment: harmony and consistency with the brand primary color
//!
//! Validation is total and pure. Identical inputs give identical results.

pub mod checks;
pub mod engine;
pub mod token;

pub use engine::{ValidationContext, aggregate_score, validate, validate_variation};
pub use token::TokenTraits;
