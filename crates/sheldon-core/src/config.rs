use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;

pub const BASE_URL_KEY: &str = "BASE_URL";
pub const API_KEY_KEY: &str = "ALPHA_VANTAGE_API_KEY";

const DEFAULT_ENV_FILE: &str = ".env";

/// Upstream endpoint and credentials, resolved once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Resolve settings through `lookup`. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing { key })
        };

        let base_url = required(BASE_URL_KEY)?;
        let api_key = required(API_KEY_KEY)?;

        let parsed = reqwest::Url::parse(&base_url).map_err(|_| ConfigError::InvalidBaseUrl {
            key: BASE_URL_KEY,
            value: base_url.clone(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                key: BASE_URL_KEY,
                value: base_url,
            });
        }

        Ok(Self { api_key, base_url })
    }

    /// Load from the process environment, falling back to dotenv entries.
    ///
    /// An explicit `env_file` must exist. Without one, `.env` is looked up from the working
    /// directory upwards and skipped when absent. The process environment is never modified.
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(env_file, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with `env` standing in for the process environment.
    pub fn load_with<F>(env_file: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => read_default_env_file()?,
        };

        Self::from_lookup(|key| env(key).or_else(|| file_vars.get(key).cloned()))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |source: dotenvy::Error| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let vars = dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(to_error)?;

    debug!(path = %path.display(), entries = vars.len(), "loaded env file");
    Ok(vars)
}

fn read_default_env_file() -> Result<HashMap<String, String>, ConfigError> {
    match dotenvy::from_filename_iter(DEFAULT_ENV_FILE) {
        Ok(iter) => iter
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(|source| ConfigError::EnvFile {
                path: DEFAULT_ENV_FILE.into(),
                source,
            }),
        Err(error) if error.not_found() => {
            debug!("no .env file found; using process environment only");
            Ok(HashMap::new())
        }
        Err(source) => Err(ConfigError::EnvFile {
            path: DEFAULT_ENV_FILE.into(),
            source,
        }),
    }
}
