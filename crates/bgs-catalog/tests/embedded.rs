use bgs_catalog::{Catalog, background_preview, descriptor_for};
use bgs_model::{BackgroundCategory, ColorFamily};

#[test]
fn every_embedded_entry_uses_a_known_family() {
    let catalog = Catalog::embedded().unwrap();
    for entry in &catalog {
        assert_ne!(entry.base_color(), ColorFamily::Unknown, "{}", entry.id());
    }
}

#[test]
fn every_embedded_entry_previews() {
    let catalog = Catalog::embedded().unwrap();
    for entry in &catalog {
        let preview = background_preview(entry);
        assert_eq!(preview.primary, entry.style_token());
        assert_ne!(preview.primary, preview.secondary, "{}", entry.id());
        assert!(descriptor_for(entry).has_primary());
    }
}

#[test]
fn categories_partition_enhanced_entries() {
    let catalog = Catalog::embedded().unwrap();
    let stats = catalog.stats();
    assert_eq!(
        catalog.by_category(BackgroundCategory::Technical).count(),
        stats.technical
    );
    assert_eq!(
        catalog.by_category(BackgroundCategory::Friendly).count(),
        stats.friendly
    );
    assert!(catalog.iter().filter(|e| e.is_legacy()).all(|e| e.category().is_none()));
}

#[test]
fn load_reads_external_file() {
    let dir = std::env::temp_dir().join(format!("bgs-catalog-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("catalog.json");
    std::fs::write(
        &path,
        r#"{"backgrounds": [{"kind": "enhanced", "id": "plain", "label": "Plain",
            "css": "white", "baseColor": "gray", "category": "professional"}]}"#,
    )
    .unwrap();
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.version(), None);
    assert!(Catalog::load(&dir.join("missing.json")).is_err());
    std::fs::remove_dir_all(&dir).unwrap();
}
