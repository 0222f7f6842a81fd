//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use country_search_core::SearchConfig;

/// Directory name under the platform config/cache dirs.
pub const APP_DIR: &str = "country-search";
const CONFIG_FILE: &str = "config.json";

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<SearchConfig>;
}

/// 本地配置服务：`<config dir>/country-search/config.json`
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE)),
        }
    }

    #[cfg(test)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<SearchConfig> {
        let Some(path) = self.path() else {
            log::info!("No config directory on this platform, using defaults");
            return Ok(SearchConfig::default());
        };

        if !path.exists() {
            log::info!("{} not found, using defaults", path.display());
            return Ok(SearchConfig::default());
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = SearchConfig::from_json(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
