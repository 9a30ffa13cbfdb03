//! Credentials and endpoint configuration
//!
//! Values come from environment variables (a `.env` file is honoured) with a
//! JSON or YAML config file as fallback. Environment always wins.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.zoom.us/v2";
pub const DEFAULT_OAUTH_URL: &str = "https://api.zoom.us/oauth/token";
pub const DEFAULT_USER_ID: &str = "me";

pub const ENV_CLIENT_ID: &str = "ZOOM_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "ZOOM_CLIENT_SECRET";
pub const ENV_ACCOUNT_ID: &str = "ZOOM_ACCOUNT_ID";
pub const ENV_USER_ID: &str = "ZOOM_USER_ID";
pub const ENV_API_URL: &str = "ZOOM_API_URL";
pub const ENV_OAUTH_URL: &str = "ZOOM_OAUTH_URL";

/// Config files tried, in order, when no explicit path is given.
const DEFAULT_CONFIG_FILES: &[&str] = &["config.json", "../config.json", "config.yml"];

/// Server-to-server OAuth app credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
    pub user_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("account_id", &self.account_id)
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Everything a client needs: credentials plus endpoint roots.
#[derive(Debug, Clone)]
pub struct ZoomConfig {
    pub credentials: Credentials,
    pub api_url: String,
    pub oauth_url: String,
}

/// On-disk config file layout (`config.json` / `config.yml`).
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub account_id: Option<String>,
    pub user_id: Option<String>,
    pub api_url: Option<String>,
    pub oauth_url: Option<String>,
}

impl FileConfig {
    /// Parse a config file; `.yml`/`.yaml` as YAML, anything else as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        );

        let parsed: FileConfig = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?
        };

        Ok(parsed)
    }

    /// Load the first default config file that exists, if any.
    fn discover() -> Result<Option<Self>> {
        for candidate in DEFAULT_CONFIG_FILES {
            let path = PathBuf::from(candidate);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "Using config file");
                return Self::load(&path).map(Some);
            }
        }
        Ok(None)
    }
}

impl ZoomConfig {
    /// Load configuration from the process environment and config file.
    ///
    /// An explicit `config_path` must exist and parse; default locations are
    /// skipped when absent.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        load_dotenv();
        Self::from_process_env(config_path)
    }

    /// Same as [`ZoomConfig::load`] without reading `.env` files: only the
    /// current process environment and the config file are consulted.
    pub fn from_process_env(config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => Some(FileConfig::load(path)?),
            None => FileConfig::discover()?,
        };

        Self::from_sources(|key| std::env::var(key).ok(), file)
    }

    /// Merge environment lookups with an optional file config.
    ///
    /// Fails with [`Error::MissingCredentials`] naming every missing required
    /// variable, before anything touches the network.
    pub fn from_sources<F>(env: F, file: Option<FileConfig>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();

        let client_id = resolve(&env, ENV_CLIENT_ID, file.client_id);
        let client_secret = resolve(&env, ENV_CLIENT_SECRET, file.client_secret);
        let account_id = resolve(&env, ENV_ACCOUNT_ID, file.account_id);
        let user_id = resolve(&env, ENV_USER_ID, file.user_id);

        let missing: Vec<String> = [
            (ENV_CLIENT_ID, &client_id),
            (ENV_CLIENT_SECRET, &client_secret),
            (ENV_ACCOUNT_ID, &account_id),
        ]
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key.to_string())
        .collect();

        if !missing.is_empty() {
            return Err(Error::MissingCredentials(missing));
        }

        Ok(Self {
            credentials: Credentials {
                client_id: client_id.unwrap_or_default(),
                client_secret: client_secret.unwrap_or_default(),
                account_id: account_id.unwrap_or_default(),
                user_id: user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            },
            api_url: resolve(&env, ENV_API_URL, file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            oauth_url: resolve(&env, ENV_OAUTH_URL, file.oauth_url)
                .unwrap_or_else(|| DEFAULT_OAUTH_URL.to_string()),
        })
    }

    /// Point both endpoints at another host (mock servers, regional hosts).
    pub fn with_endpoints<S1: Into<String>, S2: Into<String>>(
        mut self,
        api_url: S1,
        oauth_url: S2,
    ) -> Self {
        self.api_url = api_url.into();
        self.oauth_url = oauth_url.into();
        self
    }
}

/// Load .env from the current directory, then the parent.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_filename("../.env");
    }
}

/// Env var wins; otherwise the file value, with `${VAR}` placeholders
/// expanded from the environment. Blank values count as absent.
fn resolve<F>(env: &F, key: &str, file_value: Option<String>) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let from_env = env(key).filter(|v| !v.trim().is_empty());
    if from_env.is_some() {
        return from_env;
    }

    let value = file_value?;
    let placeholder = value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .map(str::to_string);
    let value = match placeholder {
        Some(var_name) => env(&var_name)?,
        None => value,
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
