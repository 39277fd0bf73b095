//! Navigation configuration.
//!
//! Host configuration is read once, when a navigation bar is created. It can
//! be built in code or loaded from TOML:
//!
//! ```toml
//! distribute_equally = false
//! tablet_mode = false
//! shifting_threshold = 3
//!
//! [theme]
//! foreground = "#DE000000"
//! ```

use std::path::Path;

use bottom_nav_core::ThemeDefaults;
use bottom_nav_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration of a bottom navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Give every item the same share of the bar. Fixed for the lifetime of
    /// a layout controller.
    pub distribute_equally: bool,
    /// Use the vertical rail layout instead of a bottom bar.
    pub tablet_mode: bool,
    /// Menus with more items than this use the shifting layout.
    pub shifting_threshold: usize,
    /// Theme values for colors a menu document leaves unspecified.
    pub theme: ThemeDefaults,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            distribute_equally: true,
            tablet_mode: false,
            shifting_threshold: 3,
            theme: ThemeDefaults::default(),
        }
    }
}

impl NavigationConfig {
    /// Parses a configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded navigation config");
        Ok(config)
    }

    /// Set whether items share the bar equally.
    pub fn with_distribute_equally(mut self, distribute_equally: bool) -> Self {
        self.distribute_equally = distribute_equally;
        self
    }

    /// Set whether the vertical rail layout is used.
    pub fn with_tablet_mode(mut self, tablet_mode: bool) -> Self {
        self.tablet_mode = tablet_mode;
        self
    }

    /// Set the item count above which the shifting layout is used.
    pub fn with_shifting_threshold(mut self, threshold: usize) -> Self {
        self.shifting_threshold = threshold;
        self
    }

    /// Set the theme used for unspecified menu colors.
    pub fn with_theme(mut self, theme: ThemeDefaults) -> Self {
        self.theme = theme;
        self
    }
}
