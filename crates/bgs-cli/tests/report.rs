//! Integration tests for the CLI's report builders and settings.

use std::fs;

use bgs_catalog::Catalog;
use bgs_cli::report::{
    brand_from_args, catalog_rows, classify_row, custom_background, search_rows,
};
use bgs_cli::settings::{OutputFormat, load_settings};
use bgs_model::{BackgroundCategory, BrandColors, ColorFamily, SelectorMode};

#[test]
fn test_classify_rows() {
    let blue = classify_row("#3B82F6");
    assert_eq!(blue.family, ColorFamily::Blue);
    assert!(blue.hsl.is_some());
    assert!(blue.is_brand_color());

    let hashless = classify_row("3B82F6");
    assert_eq!(hashless.family, ColorFamily::Blue);
    assert_eq!(
        hashless.brand_problem.as_deref(),
        Some("Color must be in hex format (e.g., #3B82F6)")
    );

    let garbage = classify_row("not-a-color");
    assert_eq!(garbage.hsl, None);
    assert_eq!(garbage.family, ColorFamily::Blue);
}

#[test]
fn test_brand_from_args() {
    assert_eq!(brand_from_args(None, Some("#6B7280")), None);
    assert_eq!(
        brand_from_args(Some("#3B82F6"), Some("#6B7280")),
        Some(BrandColors::starter())
    );
}

#[test]
fn test_recommended_rows_are_ranked() {
    let catalog = Catalog::embedded().unwrap();
    let rows = search_rows(&catalog, SelectorMode::Recommended, None, ColorFamily::Green);
    assert!(!rows.is_empty());
    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row.rank, index + 1);
        assert_eq!(row.base_color, ColorFamily::Green);
        assert_eq!(row.brand_score, None);
    }
}

#[test]
fn test_brand_rows_carry_scores() {
    let catalog = Catalog::embedded().unwrap();
    let brand = BrandColors::starter();
    let rows = search_rows(&catalog, SelectorMode::Brand, Some(&brand), ColorFamily::Blue);
    assert!(!rows.is_empty() && rows.len() <= 12);
    let scores: Vec<u32> = rows.iter().map(|r| r.brand_score.unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_catalog_filters() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(catalog_rows(&catalog, None, None).len(), catalog.len());

    let rows = catalog_rows(
        &catalog,
        Some(ColorFamily::Gray),
        Some(BackgroundCategory::Technical),
    );
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r.base_color == ColorFamily::Gray
        && r.category == Some(BackgroundCategory::Technical)
        && r.kind == "enhanced"));

    let first = &catalog_rows(&catalog, Some(ColorFamily::Blue), None)[0];
    insta::assert_json_snapshot!(first, @r#"
    {
      "rank": 1,
      "id": "soft-blur-modern-blue",
      "label": "Soft Blue Blur",
      "kind": "legacy",
      "baseColor": "blue",
      "category": null,
      "styleToken": "bg-gradient-to-br from-blue-500 via-blue-400 to-blue-600 blur-sm",
      "brandScore": null
    }
    "#);
}

#[test]
fn test_custom_background_tokens() {
    let background = custom_background("bg-gradient-to-r from-red-500 to-orange-400", ColorFamily::Red, None);
    assert_eq!(background.secondary, "bg-red-50");
    assert_eq!(background.accent_token, "bg-red-600");

    let neutral_accent = custom_background("bg-white", ColorFamily::Slate, Some(ColorFamily::Neutral));
    assert_eq!(neutral_accent.accent_color, ColorFamily::Neutral);
    assert_eq!(neutral_accent.accent_token, "bg-gray-600");
}

#[test]
fn test_settings_file_overrides_catalog() {
    let dir = std::env::temp_dir().join(format!("bgs-cli-settings-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let catalog_path = dir.join("catalog.json");
    fs::write(
        &catalog_path,
        r#"[{"kind":"legacy","id":"only","label":"Only","archetypeId":"a","themeId":"t",
             "tailwindClass":"bg-teal-50","baseColor":"teal"}]"#,
    )
    .unwrap();
    let settings_path = dir.join("settings.toml");
    fs::write(
        &settings_path,
        format!(
            "[catalog]\npath = {:?}\n\n[output]\nformat = \"json\"\n",
            catalog_path.display().to_string()
        ),
    )
    .unwrap();

    let settings = load_settings(Some(&settings_path)).unwrap();
    assert_eq!(settings.output.format, OutputFormat::Json);
    let catalog = settings.load_catalog().unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("only").is_some());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_explicit_settings_is_an_error() {
    let path = std::env::temp_dir().join("bgs-cli-no-such-settings.toml");
    let error = load_settings(Some(&path)).unwrap_err();
    assert!(format!("{error:#}").contains("read settings"));
}
