//! Scan configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is a valid
//! configuration:
//!
//! ```toml
//! max_elements = 20000
//! tree_view_mode = "control"
//! log_profile = "development"
//! ```

use std::path::Path;

use a11ycheck_core::logging_facility::{init, Profile};
use a11ycheck_core::{A11yError, ExError, Result};
use serde::Deserialize;

use crate::capture::MAX_ELEMENTS;
use crate::modes::TreeViewMode;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Cap on elements admitted into any snapshot
    pub max_elements: i32,
    pub tree_view_mode: TreeViewMode,
    pub log_profile: Profile,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_elements: MAX_ELEMENTS,
            tree_view_mode: TreeViewMode::default(),
            log_profile: Profile::default(),
        }
    }
}

impl ScanConfig {
    /// Parse and validate
    ///
    /// # Errors
    ///
    /// `Serialization` for malformed TOML, `InvalidConfiguration` for values
    /// that fail [`validate`](Self::validate).
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ScanConfig = toml::from_str(s).map_err(|e| {
            ExError::from(A11yError::Serialization {
                message: e.to_string(),
            })
            .with_op("config_parse")
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExError::from(A11yError::Io {
                message: format!("{}: {}", path.display(), e),
            })
            .with_op("config_load")
        })?;
        Self::from_toml_str(&text)
    }

    /// Install the configured logging profile
    ///
    /// Only the first call in a process installs a subscriber.
    pub fn init_logging(&self) {
        init(self.log_profile);
    }

    /// # Errors
    ///
    /// `InvalidConfiguration` when `max_elements` is not positive or is
    /// `i32::MAX`.
    pub fn validate(&self) -> Result<()> {
        if self.max_elements <= 0 || self.max_elements == i32::MAX {
            return Err(ExError::from(A11yError::InvalidConfiguration {
                reason: format!(
                    "max_elements must be in 1..{}, got {}",
                    i32::MAX,
                    self.max_elements
                ),
            })
            .with_op("config_validate"));
        }
        Ok(())
    }
}
