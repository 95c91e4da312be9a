//! Serializable rows behind the CLI's tables and JSON output.

use bgs_catalog::{Catalog, shade_family};
use bgs_color::{classify_family, parse_hex, rgb_to_hsl, validate_brand_color};
use bgs_model::{
    BackgroundCategory, BackgroundDescriptor, BackgroundVariation, BrandColors, ColorFamily,
    SelectorMode,
};
use bgs_search::{brand_compatibility_score, search};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRow {
    pub input: String,
    pub family: ColorFamily,
    /// `[h, s, l]`, absent for malformed input.
    pub hsl: Option<[f64; 3]>,
    pub brand_problem: Option<String>,
}

impl ClassifyRow {
    pub fn is_brand_color(&self) -> bool {
        self.brand_problem.is_none()
    }
}

pub fn classify_row(input: &str) -> ClassifyRow {
    ClassifyRow {
        input: input.to_string(),
        family: classify_family(input),
        hsl: parse_hex(input).map(|rgb| {
            let hsl = rgb_to_hsl(rgb);
            [hsl.h, hsl.s, hsl.l]
        }),
        brand_problem: validate_brand_color(input.trim()).err().map(|e| e.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationRow {
    pub rank: usize,
    pub id: String,
    pub label: String,
    pub kind: &'static str,
    pub base_color: ColorFamily,
    pub category: Option<BackgroundCategory>,
    pub style_token: String,
    /// Present in brand mode only.
    pub brand_score: Option<u32>,
}

impl VariationRow {
    fn new(rank: usize, variation: &BackgroundVariation, brand_score: Option<u32>) -> Self {
        Self {
            rank,
            id: variation.id().to_string(),
            label: variation.label().to_string(),
            kind: if variation.is_legacy() {
                "legacy"
            } else {
                "enhanced"
            },
            base_color: variation.base_color(),
            category: variation.category(),
            style_token: variation.style_token().to_string(),
            brand_score,
        }
    }
}

/// Brand colors from optional `--primary`/`--secondary` flags.
pub fn brand_from_args(primary: Option<&str>, secondary: Option<&str>) -> Option<BrandColors> {
    let mut colors = BrandColors::new(primary?);
    colors.secondary = secondary.map(str::to_string);
    Some(colors)
}

/// A page background in `base` with its own accent, as a host would pass
/// for the page being edited.
pub fn current_background(base: ColorFamily) -> BackgroundDescriptor {
    let mut current = BackgroundDescriptor::safe_default();
    current.base_color = base;
    current
}

/// A descriptor around an arbitrary style token.
pub fn custom_background(
    token: &str,
    base: ColorFamily,
    accent: Option<ColorFamily>,
) -> BackgroundDescriptor {
    let shade = shade_family(base);
    let accent = accent.unwrap_or(base);
    BackgroundDescriptor {
        primary: token.to_string(),
        secondary: format!("bg-{shade}-50"),
        neutral: "bg-white".to_string(),
        divider: format!("bg-{shade}-100/50"),
        base_color: base,
        accent_color: accent,
        accent_token: format!("bg-{}-600", shade_family(accent)),
    }
}

pub fn search_rows(
    catalog: &Catalog,
    mode: SelectorMode,
    brand: Option<&BrandColors>,
    base: ColorFamily,
) -> Vec<VariationRow> {
    let current = current_background(base);
    search(catalog, mode, brand, &current)
        .iter()
        .enumerate()
        .map(|(index, variation)| {
            let score = match (mode, brand) {
                (SelectorMode::Brand, Some(brand)) => {
                    Some(brand_compatibility_score(variation, brand))
                }
                _ => None,
            };
            VariationRow::new(index + 1, variation, score)
        })
        .collect()
}

pub fn catalog_rows(
    catalog: &Catalog,
    base: Option<ColorFamily>,
    category: Option<BackgroundCategory>,
) -> Vec<VariationRow> {
    catalog
        .iter()
        .filter(|v| base.is_none_or(|family| v.base_color() == family))
        .filter(|v| category.is_none_or(|c| v.category() == Some(c)))
        .enumerate()
        .map(|(index, variation)| VariationRow::new(index + 1, variation, None))
        .collect()
}
