//! The config document
//!
//! Holds the single global monthly budget. A fresh install starts with a
//! budget of zero. A document that cannot be parsed is treated as an empty
//! object, which leaves the budget undefined until it is set again.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Money;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Persisted user configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Monthly spending limit; `None` only when recovered from a corrupt document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<Money>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_budget: Some(Money::zero()),
        }
    }
}

impl Settings {
    /// Settings with no budget defined
    pub fn unset() -> Self {
        Self {
            monthly_budget: None,
        }
    }

    /// Load settings from disk, creating the default document if it is absent
    ///
    /// A document that exists but cannot be read or parsed is logged and
    /// replaced in memory by [`Settings::unset`]; the file itself is left
    /// alone until the next successful save.
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            let settings = Settings::default();
            settings.save(paths)?;
            info!(path = %settings_path.display(), "created default config");
            return Ok(settings);
        }

        match read_json::<Settings, _>(&settings_path) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(
                    path = %settings_path.display(),
                    error = %e,
                    "config document unreadable, budget is undefined"
                );
                Ok(Settings::unset())
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
