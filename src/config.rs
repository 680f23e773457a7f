use std::path::PathBuf;

use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PREFIX: &str = "&";

/// Location results too large to upload are written to, and the URL it is served under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempStorageConfig {
    pub dir: PathBuf,
    pub domain: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Prefix written to guilds when their configuration is initialized or repaired.
    pub default_prefix: String,

    /// `None` when `TEMPDIR` is unset or empty, which disables the overflow path.
    pub temp_storage: Option<TempStorageConfig>,

    /// Where users are asked to report unexpected command failures.
    pub support_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if any
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a URL is invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let temp_storage = match get("TEMPDIR") {
            Some(dir) => {
                let domain = require("TMP_DOMAIN")?;
                Url::parse(&domain).map_err(|source| ConfigError::InvalidUrl {
                    name: "TMP_DOMAIN".to_string(),
                    source,
                })?;

                Some(TempStorageConfig {
                    dir: PathBuf::from(dir),
                    domain: domain.trim_end_matches('/').to_string(),
                })
            }
            None => None,
        };

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            default_prefix: get("DEFAULT_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            temp_storage,
            support_url: get("SUPPORT_URL"),
        })
    }
}
