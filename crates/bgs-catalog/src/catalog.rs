//! The ordered, read-only background catalog.

use std::collections::HashMap;
use std::path::Path;

use bgs_model::{BackgroundCategory, BackgroundVariation, ColorFamily};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embedded;
use crate::error::{CatalogError, Result};

/// On-disk shape: either a versioned document or a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<BackgroundVariation>),
    Versioned {
        #[serde(default)]
        version: Option<String>,
        backgrounds: Vec<BackgroundVariation>,
    },
}

/// Entry counts for a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub legacy: usize,
    pub technical: usize,
    pub professional: usize,
    pub friendly: usize,
}

/// Ordered list of background variations with id lookup.
///
/// Catalog order is significant: recommended search preserves it and brand
/// search uses it to break ties.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    version: Option<String>,
    entries: Vec<BackgroundVariation>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and empty tokens.
    pub fn new(entries: Vec<BackgroundVariation>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.id().trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: entry.label().to_string(),
                    field: "id",
                });
            }
            if entry.style_token().trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: entry.id().to_string(),
                    field: "style token",
                });
            }
            if by_id.insert(entry.id().to_string(), index).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: entry.id().to_string(),
                });
            }
        }
        Ok(Self {
            version: None,
            entries,
            by_id,
        })
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(embedded::BACKGROUNDS_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let (version, entries) = match file {
            CatalogFile::Bare(backgrounds) => (None, backgrounds),
            CatalogFile::Versioned {
                version,
                backgrounds,
            } => (version, backgrounds),
        };
        let mut catalog = Self::new(entries)?;
        catalog.version = version;
        debug!(
            count = catalog.len(),
            version = catalog.version().unwrap_or("unversioned"),
            "loaded background catalog"
        );
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BackgroundVariation> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&BackgroundVariation> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    pub fn by_category(
        &self,
        category: BackgroundCategory,
    ) -> impl Iterator<Item = &BackgroundVariation> {
        self.entries
            .iter()
            .filter(move |entry| entry.category() == Some(category))
    }

    pub fn by_base_color(&self, family: ColorFamily) -> impl Iterator<Item = &BackgroundVariation> {
        self.entries
            .iter()
            .filter(move |entry| entry.base_color() == family)
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total: self.entries.len(),
            ..CatalogStats::default()
        };
        for entry in &self.entries {
            match entry.category() {
                None => stats.legacy += 1,
                Some(BackgroundCategory::Technical) => stats.technical += 1,
                Some(BackgroundCategory::Professional) => stats.professional += 1,
                Some(BackgroundCategory::Friendly) => stats.friendly += 1,
            }
        }
        stats
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BackgroundVariation;
    type IntoIter = std::slice::Iter<'a, BackgroundVariation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.version(), Some("2025.1"));
        let stats = catalog.stats();
        assert_eq!(
            stats.total,
            stats.legacy + stats.technical + stats.professional + stats.friendly
        );
        assert!(stats.legacy > 0 && stats.professional > 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"kind": "legacy", "id": "a", "label": "A", "archetypeId": "x", "themeId": "y",
             "tailwindClass": "bg-white", "baseColor": "gray"},
            {"kind": "legacy", "id": "a", "label": "B", "archetypeId": "x", "themeId": "y",
             "tailwindClass": "bg-gray-50", "baseColor": "gray"}
        ]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "a"));
    }

    #[test]
    fn empty_token_is_rejected() {
        let json = r#"[{"kind": "enhanced", "id": "a", "label": "A", "css": " ",
                        "baseColor": "gray", "category": "friendly"}]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { field: "style token", .. }));
    }

    #[test]
    fn lookups_preserve_catalog_order() {
        let catalog = Catalog::embedded().unwrap();
        let blue: Vec<_> = catalog.by_base_color(ColorFamily::Blue).collect();
        let positions: Vec<_> = blue
            .iter()
            .map(|v| catalog.iter().position(|e| e.id() == v.id()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(catalog.get(blue[0].id()), Some(blue[0]));
        assert!(catalog.get("no-such-background").is_none());
    }
}
