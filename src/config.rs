use crate::error::{FigmaError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Public Figma REST origin
pub const DEFAULT_API_BASE_URL: &str = "https://api.figma.com/v1";

pub const ENV_FILE_KEYS: &str = "FIGMA_FILE_KEYS";
pub const ENV_TOKEN: &str = "FIGMA_TOKEN";
pub const ENV_API_BASE_URL: &str = "FIGMA_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "FIGMA_TIMEOUT_SECS";

/// Client configuration, built once at process start and handed to the client
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Default file key setting. Only its presence is meaningful.
    pub file_keys: Option<String>,
    /// Personal access token sent as `X-Figma-Token`
    pub token: Option<String>,
    pub api_base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_keys: None,
            token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// On-disk layout of `config.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_keys: Option<String>,
    /// WARNING: Stored in plaintext - prefer the FIGMA_TOKEN environment variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "figma-mcp").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration: environment, then config file, then defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) if path.exists() => Self::read_file(&path)?,
            _ => ConfigFile::default(),
        };
        Self::resolve(file, |name| env::var(name).ok())
    }

    /// Load configuration from an explicit file, still honouring the environment
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = Self::read_file(path)?;
        Self::resolve(file, |name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup only (no config file)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(ConfigFile::default(), lookup)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        tracing::debug!(path = %path.display(), "Loading configuration file");
        let content = fs::read_to_string(path).map_err(|e| {
            FigmaError::Validation(format!("Could not read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            FigmaError::Validation(format!("Could not parse {}: {}", path.display(), e))
        })
    }

    fn resolve<F>(file: ConfigFile, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let file_keys = var(ENV_FILE_KEYS).or(non_empty(file.file_keys));
        let token = var(ENV_TOKEN).or(non_empty(file.token));

        let api_base_url = match var(ENV_API_BASE_URL).or(non_empty(file.api_base_url)) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let timeout_secs = match var(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                FigmaError::Validation(format!("{} must be a whole number of seconds", ENV_TIMEOUT_SECS))
            })?),
            None => file.timeout_secs,
        };

        Ok(Self {
            file_keys,
            token,
            api_base_url,
            timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
        })
    }

    pub fn has_file_key(&self) -> bool {
        self.file_keys.is_some()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    Url::parse(trimmed)
        .map_err(|e| FigmaError::Validation(format!("Invalid API base URL '{}': {}", trimmed, e)))?;
    Ok(trimmed.trim_end_matches('/').to_string())
}
