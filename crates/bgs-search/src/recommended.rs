//! Variations of the current background's color family.

use bgs_catalog::Catalog;
use bgs_color::{FALLBACK_FAMILIES, search_harmony};
use bgs_model::{BackgroundVariation, ColorFamily};
use tracing::debug;

pub const RECOMMENDED_LIMIT: usize = 8;

/// Which tier of the recommended search produced the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendedTier {
    SameFamily,
    Harmonious,
    Fallback,
}

/// Same family first, then harmonious families, then the fixed fallback
/// families. Catalog order is preserved.
pub fn recommended(catalog: &Catalog, base: ColorFamily) -> Vec<BackgroundVariation> {
    let (tier, results) = recommended_with_tier(catalog, base);
    debug!(base_color = %base, ?tier, count = results.len(), "recommended search");
    results
}

pub fn recommended_with_tier(
    catalog: &Catalog,
    base: ColorFamily,
) -> (RecommendedTier, Vec<BackgroundVariation>) {
    let same = take_matching(catalog, |family| family == base);
    if !same.is_empty() {
        return (RecommendedTier::SameFamily, same);
    }

    let harmonious = search_harmony(base);
    let related = take_matching(catalog, |family| harmonious.contains(&family));
    if !related.is_empty() {
        return (RecommendedTier::Harmonious, related);
    }

    (
        RecommendedTier::Fallback,
        take_matching(catalog, |family| FALLBACK_FAMILIES.contains(&family)),
    )
}

fn take_matching(
    catalog: &Catalog,
    matches: impl Fn(ColorFamily) -> bool,
) -> Vec<BackgroundVariation> {
    catalog
        .iter()
        .filter(|variation| matches(variation.base_color()))
        .take(RECOMMENDED_LIMIT)
        .cloned()
        .collect()
}
