//! Configuration handling for the TUI

use crate::state::ValidationOptions;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const RECORD_FILE: &str = "submissions.jsonl";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Initial value of the email field
    pub prefill_email: Option<String>,
    /// Require a dotted domain in email addresses
    pub require_tld: Option<bool>,
    /// Append accepted submissions to a JSON-lines file
    pub record_submissions: Option<bool>,
    /// Override for the record file location
    pub record_path: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "login", "login-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            require_tld: self.require_tld.unwrap_or(false),
        }
    }

    /// Record file to write, or `None` when recording is off
    pub fn record_path(&self) -> Option<PathBuf> {
        if !self.record_submissions.unwrap_or(false) {
            return None;
        }
        self.record_path.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join(RECORD_FILE))
        })
    }
}
