//! Compatibility search.
//!
//! Populates the background picker from the catalog. Search is total: it
//! never fails, and an unusable request yields an empty list.

pub mod brand;
pub mod recommended;

use bgs_catalog::Catalog;
use bgs_model::{BackgroundDescriptor, BackgroundVariation, BrandColors, SelectorMode};
use tracing::debug;

pub use brand::{BRAND_LIMIT, brand_compatibility_score, brand_compatible};
pub use recommended::{RECOMMENDED_LIMIT, RecommendedTier, recommended, recommended_with_tier};

/// Options for `mode`.
///
/// - recommended: variations of `current.base_color`, up to 8.
/// - brand: entries compatible with `brand_colors`, best first, up to 12.
/// - custom: always empty; the host builds custom backgrounds itself.
pub fn search(
    catalog: &Catalog,
    mode: SelectorMode,
    brand_colors: Option<&BrandColors>,
    current: &BackgroundDescriptor,
) -> Vec<BackgroundVariation> {
    match mode {
        SelectorMode::Recommended => recommended(catalog, current.base_color),
        SelectorMode::Brand => brand_compatible(catalog, brand_colors),
        SelectorMode::Custom => {
            debug!("custom mode bypasses catalog search");
            Vec::new()
        }
    }
}
