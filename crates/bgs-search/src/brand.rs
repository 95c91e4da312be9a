//! Catalog entries compatible with a set of brand colors.

use std::cmp::Reverse;

use bgs_catalog::Catalog;
use bgs_color::{classify_family, is_catalog_neutral, search_harmony};
use bgs_model::{BackgroundCategory, BackgroundVariation, BrandColors, ColorFamily};
use tracing::{debug, warn};

pub const BRAND_LIMIT: usize = 12;

const SAME_FAMILY_POINTS: u32 = 10;
const HARMONY_POINTS: u32 = 7;
const NEUTRAL_POINTS: u32 = 5;
const PROFESSIONAL_POINTS: u32 = 3;
const FRIENDLY_POINTS: u32 = 2;
const SECONDARY_POINTS: u32 = 3;

/// Brand families resolved once per search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BrandFamilies {
    primary: ColorFamily,
    secondary: Option<ColorFamily>,
}

impl BrandFamilies {
    fn of(brand: &BrandColors) -> Self {
        Self {
            primary: classify_family(&brand.primary),
            secondary: brand.secondary().map(classify_family),
        }
    }

    fn admits(&self, family: ColorFamily) -> bool {
        family == self.primary
            || search_harmony(self.primary).contains(&family)
            || is_catalog_neutral(family)
    }

    fn score(&self, variation: &BackgroundVariation) -> u32 {
        let family = variation.base_color();
        let mut score = 0;
        if family == self.primary {
            score += SAME_FAMILY_POINTS;
        } else if search_harmony(self.primary).contains(&family) {
            score += HARMONY_POINTS;
        }
        if is_catalog_neutral(family) {
            score += NEUTRAL_POINTS;
        }
        score += match variation.category() {
            Some(BackgroundCategory::Professional) => PROFESSIONAL_POINTS,
            Some(BackgroundCategory::Friendly) => FRIENDLY_POINTS,
            Some(BackgroundCategory::Technical) | None => 0,
        };
        if self.secondary == Some(family) {
            score += SECONDARY_POINTS;
        }
        score
    }
}

/// Compatibility of one variation with the brand colors. Higher is better.
pub fn brand_compatibility_score(variation: &BackgroundVariation, brand: &BrandColors) -> u32 {
    BrandFamilies::of(brand).score(variation)
}

/// Entries in the brand family, its harmonious families or a neutral
/// family, best first. Ties keep catalog order.
pub fn brand_compatible(catalog: &Catalog, brand: Option<&BrandColors>) -> Vec<BackgroundVariation> {
    let Some(brand) = brand.filter(|b| b.has_primary()) else {
        warn!("brand search requested without a primary brand color");
        return Vec::new();
    };
    let families = BrandFamilies::of(brand);

    let mut scored: Vec<(u32, &BackgroundVariation)> = catalog
        .iter()
        .filter(|variation| families.admits(variation.base_color()))
        .map(|variation| (families.score(variation), variation))
        .collect();
    // `sort_by_key` is stable, so equal scores stay in catalog order.
    scored.sort_by_key(|(score, _)| Reverse(*score));

    debug!(
        brand_family = %families.primary,
        candidates = scored.len(),
        "brand search"
    );
    scored
        .into_iter()
        .take(BRAND_LIMIT)
        .map(|(_, variation)| variation.clone())
        .collect()
}
