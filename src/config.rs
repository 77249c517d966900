use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::classification::LanguageModelClassification;
use crate::core::registry::PriorityOrder;
use crate::{klog_debug, Error, Result};

const DEFAULT_FAST_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_SMART_MODEL: &str = "gpt-4";

/// Provider model names for each classification tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_fast_model")]
    pub fast_model: String,
    #[serde(default = "default_smart_model")]
    pub smart_model: String,
}

fn default_fast_model() -> String {
    DEFAULT_FAST_MODEL.to_string()
}

fn default_smart_model() -> String {
    DEFAULT_SMART_MODEL.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            fast_model: default_fast_model(),
            smart_model: default_smart_model(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default direction for schedulers that do not pick one themselves.
    #[serde(default)]
    pub priority_order: PriorityOrder,
    #[serde(default)]
    pub models: ModelConfig,
}

impl Config {
    /// `~/.kanso`, home of the config and log files.
    pub fn kanso_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".kanso"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::kanso_dir()?.join("kanso.toml"))
    }

    /// Model name configured for a classification tier.
    pub fn model_for(&self, classification: LanguageModelClassification) -> &str {
        match classification {
            LanguageModelClassification::FastModel => &self.models.fast_model,
            LanguageModelClassification::SmartModel => &self.models.smart_model,
        }
    }

    /// Load `~/.kanso/kanso.toml`, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        klog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            klog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        klog_debug!(
            "Config loaded: fast_model={}, smart_model={}, priority_order={}",
            config.models.fast_model,
            config.models.smart_model,
            config.priority_order
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write to `path`, creating its parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                klog_debug!("Creating config directory: {}", dir.display());
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        klog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    /// Render as pretty TOML, the same form `save` writes.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
