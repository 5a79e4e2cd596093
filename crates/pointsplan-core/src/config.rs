// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub base_url: String,
    /// Deadline for requests with at most one preference line.
    #[serde(default = "default_short_timeout")]
    pub short_timeout_secs: u64,
    /// Deadline for requests carrying several preference lines.
    #[serde(default = "default_long_timeout")]
    pub long_timeout_secs: u64,
}

fn default_short_timeout() -> u64 {
    60
}

fn default_long_timeout() -> u64 {
    120
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            short_timeout_secs: default_short_timeout(),
            long_timeout_secs: default_long_timeout(),
        }
    }
}

impl PlannerConfig {
    pub fn short_timeout(&self) -> Duration {
        Duration::from_secs(self.short_timeout_secs)
    }

    pub fn long_timeout(&self) -> Duration {
        Duration::from_secs(self.long_timeout_secs.max(self.short_timeout_secs))
    }
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::at(crate::get_config_root().join("config.json"))
    }

    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<PlannerConfig> {
        if !self.config_path.exists() {
            return Ok(PlannerConfig::default());
        }

        let content =
            fs::read_to_string(&self.config_path).context("Failed to read config.json")?;

        serde_json::from_str(&content).context("Failed to parse config.json")
    }

    /// Like `load`, but a broken file only costs a warning.
    pub fn load_or_default(&self) -> PlannerConfig {
        self.load().unwrap_or_else(|e| {
            log::warn!(
                "Falling back to default config — path={} error={:#}",
                self.config_path.display(),
                e
            );
            PlannerConfig::default()
        })
    }

    pub fn save(&self, config: &PlannerConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, content).context("Failed to write config.json")
    }
}
