use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::blockout::ChromeGeometry;
use crate::{BlockoutError, Result};

/// Resolver defaults, loadable from TOML.
///
/// ```toml
/// element_margin = 2.0
///
/// [chrome]
/// status_bar_height = 24
/// navigation_bar_height = 48
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chrome: ChromeGeometry,
    /// Margin applied to element block-outs that do not set their own
    pub element_margin: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chrome: ChromeGeometry::default(),
            element_margin: 0.0,
        }
    }
}

impl Config {
    /// `$HOME/.config/blockout/config.toml`
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("blockout")
                .join("config.toml")
        })
    }

    /// Loads from `path`, else the central config if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::central_config_path() {
            Some(central) if central.is_file() => Self::from_file(&central),
            _ => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml(&data)
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn validate(&self) -> Result<()> {
        let heights = [
            ("status_bar_height", self.chrome.status_bar_height),
            ("navigation_bar_height", self.chrome.navigation_bar_height),
            ("notch_bottom_bar_height", self.chrome.notch_bottom_bar_height),
            (
                "large_notch_bottom_bar_height",
                self.chrome.large_notch_bottom_bar_height,
            ),
        ];
        for (name, value) in heights {
            if !value.is_finite() || value <= 0.0 {
                return Err(BlockoutError::config(format!(
                    "chrome.{name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.element_margin.is_finite() {
            return Err(BlockoutError::config(format!(
                "element_margin must be finite, got {}",
                self.element_margin
            )));
        }
        Ok(())
    }
}
