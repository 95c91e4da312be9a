//! Selector timing configuration.

use std::time::Duration;

use bgs_model::SelectorMode;
use serde::{Deserialize, Serialize};

/// Debounce and apply timings for the selector controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Delay before searching in recommended and custom mode.
    ///
    /// Additional changes reset the timer.
    pub recommended_debounce_ms: u64,

    /// Delay before searching in brand mode, where input arrives while
    /// the user is still typing a hex value.
    pub brand_debounce_ms: u64,

    /// Upper bound for a single store call during apply or reset.
    pub apply_timeout_ms: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            recommended_debounce_ms: 150,
            brand_debounce_ms: 500,
            apply_timeout_ms: 5_000,
        }
    }
}

impl SelectorConfig {
    pub fn debounce_for(&self, mode: SelectorMode) -> Duration {
        match mode {
            SelectorMode::Brand => Duration::from_millis(self.brand_debounce_ms),
            SelectorMode::Recommended | SelectorMode::Custom => {
                Duration::from_millis(self.recommended_debounce_ms)
            }
        }
    }

    pub fn apply_timeout(&self) -> Duration {
        Duration::from_millis(self.apply_timeout_ms)
    }

    /// Check if a search requested `since_request` ago is due.
    pub fn should_search(&self, mode: SelectorMode, since_request: Duration) -> bool {
        since_request >= self.debounce_for(mode)
    }
}
