// * Runtime settings read from the process environment
// * The bot token is the only required value; `main` loads `.env` beforehand

use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::constants::{
    DEFAULT_COMMAND_PREFIX, DEFAULT_LEADERBOARD_BASE_URL, DEFAULT_LOOKUP_URL,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub const ENV_DISCORD_TOKEN: &str = "DISCORD_TOKEN";
pub const ENV_LEADERBOARD_BASE_URL: &str = "LEADERBOARD_BASE_URL";
pub const ENV_LOOKUP_URL: &str = "LOOKUP_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const ENV_COMMAND_PREFIX: &str = "COMMAND_PREFIX";
pub const ENV_METRICS_PORT: &str = "METRICS_PORT";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set; export it or add it to .env")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Fully resolved bot configuration.
#[derive(Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub leaderboard_base_url: Url,
    pub lookup_url: Url,
    pub request_timeout: Duration,
    pub command_prefix: String,
    pub metrics_port: Option<u16>,
}

// * Keeps the token out of logs
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("discord_token", &"<redacted>")
            .field("leaderboard_base_url", &self.leaderboard_base_url.as_str())
            .field("lookup_url", &self.lookup_url.as_str())
            .field("request_timeout", &self.request_timeout)
            .field("command_prefix", &self.command_prefix)
            .field("metrics_port", &self.metrics_port)
            .finish()
    }
}

impl BotConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token = get(ENV_DISCORD_TOKEN)
            .map(|t| t.trim().to_string())
            .ok_or(ConfigError::Missing(ENV_DISCORD_TOKEN))?;

        let leaderboard_base_url = parse_url(
            ENV_LEADERBOARD_BASE_URL,
            get(ENV_LEADERBOARD_BASE_URL).as_deref(),
            DEFAULT_LEADERBOARD_BASE_URL,
        )?;
        let lookup_url = parse_url(ENV_LOOKUP_URL, get(ENV_LOOKUP_URL).as_deref(), DEFAULT_LOOKUP_URL)?;

        let request_timeout = match get(ENV_REQUEST_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::Invalid {
                        key: ENV_REQUEST_TIMEOUT_SECS,
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        key: ENV_REQUEST_TIMEOUT_SECS,
                        value: raw,
                        reason: "must be at least 1 second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let command_prefix = get(ENV_COMMAND_PREFIX)
            .map(|p| p.trim().to_string())
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());

        let metrics_port = match get(ENV_METRICS_PORT) {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: ENV_METRICS_PORT,
                value: raw.clone(),
                reason: e.to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            discord_token,
            leaderboard_base_url,
            lookup_url,
            request_timeout,
            command_prefix,
            metrics_port,
        })
    }
}

fn parse_url(key: &'static str, raw: Option<&str>, default: &str) -> Result<Url, ConfigError> {
    let value = raw.map(str::trim).unwrap_or(default);
    let url = Url::parse(value).map_err(|e| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }

    Ok(url)
}
