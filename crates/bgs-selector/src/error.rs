//! Error types for the selector controller.

use bgs_color::BrandColorError;
use thiserror::Error;

use crate::store::StoreError;

/// Reasons an apply (or reset) is refused or fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApplyError {
    #[error("No background selected")]
    NoSelection,

    #[error("Primary background is required")]
    MissingPrimary,

    #[error("Base color is required")]
    MissingBaseColor,

    #[error("Primary and secondary backgrounds should be different for better visual hierarchy")]
    IdenticalLayers,

    #[error("Brand colors are required in brand mode")]
    MissingBrandColors,

    #[error("Invalid primary brand color: {0}")]
    InvalidBrandColor(BrandColorError),

    #[error("Invalid secondary brand color: {0}")]
    InvalidSecondaryBrandColor(BrandColorError),

    #[error("Background has blocking validation errors: {}", .ids.join(", "))]
    Blocked { ids: Vec<String> },

    #[error("An apply is already in progress")]
    InFlight,

    #[error("Applying the background timed out after {limit_ms} ms")]
    Timeout { limit_ms: u64 },

    #[error("Failed to apply background system: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SelectorError {
    #[error("unknown background variation: {id}")]
    UnknownVariation { id: String },

    #[error(transparent)]
    Apply(#[from] ApplyError),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
