//! User settings for kakeibo
//!
//! Manages user preferences: currency symbol for display and the default
//! stats view.

use serde::{Deserialize, Serialize};

use super::paths::KakeiboPaths;
use crate::error::KakeiboError;
use crate::stats::StatsView;

/// User settings for kakeibo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Stats view used when none is given on the command line
    #[serde(default)]
    pub default_view: StatsView,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "NT$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_view: StatsView::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &KakeiboPaths) -> Result<Self, KakeiboError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                KakeiboError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                KakeiboError::Config(format!("Failed to parse settings: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KakeiboPaths) -> Result<(), KakeiboError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KakeiboError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| KakeiboError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
