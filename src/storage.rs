use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::clockify;
use crate::error::SyncError;
use crate::toggl;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything the clients need that is not a command-line flag.
#[derive(Clone)]
pub struct Settings {
    pub toggl_user: Option<String>,
    pub toggl_token: String,
    pub clockify_token: String,
    pub toggl_base_url: String,
    pub clockify_base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("toggl_user", &self.toggl_user)
            .field("toggl_base_url", &self.toggl_base_url)
            .field("clockify_base_url", &self.clockify_base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Shape of `~/.toggl2clockify.json`. Every key is optional.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub toggl_user: Option<String>,
    #[serde(default)]
    pub toggl_token: Option<String>,
    #[serde(default)]
    pub clockify_token: Option<String>,
    #[serde(default)]
    pub toggl_base_url: Option<String>,
    #[serde(default)]
    pub clockify_base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

pub fn load_settings() -> Result<Settings, SyncError> {
    let file = match config_path() {
        Some(path) if path.exists() => read_config(&path)?,
        _ => ConfigFile::default(),
    };
    resolve(file, |key| env::var(key).ok())
}

pub fn read_config(path: &Path) -> Result<ConfigFile, SyncError> {
    let raw = fs::read_to_string(path)
        .map_err(|err| SyncError::Config(format!("cannot read {}: {err}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|err| SyncError::Config(format!("invalid config {}: {err}", path.display())))
}

/// Environment first, then the config file.
pub fn resolve(
    file: ConfigFile,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Settings, SyncError> {
    let pick = |key: &str, fallback: Option<String>| {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .or(fallback.filter(|value| !value.trim().is_empty()))
    };

    let toggl_token = pick("TOGGL_TOKEN", file.toggl_token)
        .ok_or_else(|| SyncError::Config("TOGGL_TOKEN is not set".to_string()))?;
    let clockify_token = pick("CLOCKIFY_TOKEN", file.clockify_token)
        .ok_or_else(|| SyncError::Config("CLOCKIFY_TOKEN is not set".to_string()))?;

    Ok(Settings {
        toggl_user: pick("TOGGL_USER", file.toggl_user),
        toggl_token,
        clockify_token,
        toggl_base_url: pick("TOGGL_BASE_URL", file.toggl_base_url)
            .unwrap_or_else(|| toggl::DEFAULT_BASE_URL.to_string()),
        clockify_base_url: pick("CLOCKIFY_BASE_URL", file.clockify_base_url)
            .unwrap_or_else(|| clockify::DEFAULT_BASE_URL.to_string()),
        timeout: Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
    })
}

fn config_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".toggl2clockify.json");
    Some(path)
}
