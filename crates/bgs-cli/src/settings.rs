//! CLI settings, loaded from TOML.
//!
//! Settings are read from `--config PATH` when given, otherwise from the
//! platform config directory:
//! - macOS: ~/Library/Application Support/dev.bgs.bgs/
//! - Windows: %APPDATA%/bgs/bgs/config/
//! - Linux: ~/.config/bgs/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bgs_catalog::Catalog;
use bgs_selector::SelectorConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "dev";
const APP_ORG: &str = "bgs";
const APP_NAME: &str = "bgs";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub output: OutputSettings,
    pub selector: SelectorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// External catalog JSON used instead of the embedded one.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse settings")
    }

    /// Catalog named by `catalog.path`, or the embedded default.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => {
                Catalog::load(path).with_context(|| format!("load catalog {}", path.display()))
            }
            None => Catalog::embedded().context("load embedded catalog"),
        }
    }
}

/// Path to the default settings file, when the platform has one.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings.
///
/// An explicit path must exist and parse. The default path is optional:
/// a missing or unreadable default file falls back to defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        return Settings::from_toml(&content).with_context(|| format!("in {}", path.display()));
    }

    let Some(path) = settings_path() else {
        tracing::debug!("could not determine settings path, using defaults");
        return Ok(Settings::default());
    };
    match fs::read_to_string(&path) {
        Ok(content) => match Settings::from_toml(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                Ok(settings)
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), "failed to parse settings file: {error:#}, using defaults");
                Ok(Settings::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), "failed to read settings file: {error}, using defaults");
            Ok(Settings::default())
        }
    }
}
