use anyhow::Context;
use directories::ProjectDirs;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::ui_time::ClockPolicy;

pub const DEFAULT_CONTAINER_SELECTOR: &str = ".seek-bar";
pub const DEFAULT_ELAPSED_SELECTOR: &str = "span:first-child";
pub const DEFAULT_REMAINING_SELECTOR: &str = "span:last-child";
pub const DEFAULT_DURATION_ATTRIBUTE: &str = "data-duration";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub container: String,
    // Both resolved inside the container.
    pub elapsed: String,
    pub remaining: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER_SELECTOR.to_string(),
            elapsed: DEFAULT_ELAPSED_SELECTOR.to_string(),
            remaining: DEFAULT_REMAINING_SELECTOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    #[serde(deserialize_with = "attribute_name")]
    pub duration_attribute: String,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            duration_attribute: DEFAULT_DURATION_ATTRIBUTE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub clock_policy: ClockPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekBarConfig {
    pub selectors: SelectorConfig,
    pub control: ControlConfig,
    pub display: DisplayConfig,
}

/// Attribute names the markup writes verbatim: an ASCII letter followed by
/// letters, digits, `-`, `_`, `.` or `:`.
pub fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

fn attribute_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let name = String::deserialize(deserializer)?;
    if is_attribute_name(&name) {
        Ok(name)
    } else {
        Err(de::Error::custom(format!("invalid attribute name {name:?}")))
    }
}

pub fn config_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("", "", "seek-times") {
        dirs.config_dir().join("config.toml")
    } else {
        // Fallback
        PathBuf::from(".").join("config.toml")
    }
}

impl SeekBarConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load from the default location. Returns the config, whether defaults
    /// had to be used, and the path that was tried.
    pub fn load_or_default() -> (Self, bool, PathBuf) {
        let path = config_path();
        let (cfg, missing) = Self::load_from(&path);
        (cfg, missing, path)
    }

    pub fn load_from(path: &Path) -> (Self, bool) {
        match fs::read_to_string(path) {
            Ok(s) => match Self::from_toml_str(&s) {
                Ok(cfg) => (cfg, false),
                Err(e) => {
                    log::warn!("Failed to parse config at {}: {e}", path.display());
                    (Self::default(), true)
                }
            },
            Err(_e) => {
                log::warn!("No config found at {}. Using defaults.", path.display());
                (Self::default(), true)
            }
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Create config directory {}", dir.display()))?;
        }
        let s = toml::to_string_pretty(self).context("Serialize config")?;
        fs::write(path, s).with_context(|| format!("Write config {}", path.display()))?;
        log::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Class name of the container when its selector is a plain `.class`.
    pub fn container_class(&self) -> Option<&str> {
        let class = self.selectors.container.strip_prefix('.')?;
        let plain = !class.is_empty()
            && class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        plain.then_some(class)
    }
}
