//! Runtime configuration read from the environment.
//!
//! | variable               | default    |
//! |------------------------|------------|
//! | `RHYMER_CORPUS_DIR`    | `data`     |
//! | `RHYMER_HOST`          | `0.0.0.0`  |
//! | `RHYMER_PORT`          | `8080`     |
//! | `RHYMER_PAGE_SIZE`     | `30`       |
//! | `RHYMER_MAX_PAGE_SIZE` | `500`      |
//! | `RHYMER_LOG`           | `info`     |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub corpus_dir: PathBuf,
    pub server: ServerConfig,
    pub query: QueryConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Entries per page when the caller gives no limit
    pub page_size: usize,
    pub max_page_size: usize,
}

impl QueryConfig {
    pub fn page_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.page_size).min(self.max_page_size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus_dir: PathBuf::from("data"),
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            query: QueryConfig {
                page_size: 30,
                max_page_size: 500,
            },
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let config = Config {
            corpus_dir: lookup("RHYMER_CORPUS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.corpus_dir),
            server: ServerConfig {
                host: lookup("RHYMER_HOST").unwrap_or(defaults.server.host),
                port: parse_var(&lookup, "RHYMER_PORT", defaults.server.port)?,
            },
            query: QueryConfig {
                page_size: parse_var(&lookup, "RHYMER_PAGE_SIZE", defaults.query.page_size)?,
                max_page_size: parse_var(
                    &lookup,
                    "RHYMER_MAX_PAGE_SIZE",
                    defaults.query.max_page_size,
                )?,
            },
            log_level: lookup("RHYMER_LOG").unwrap_or(defaults.log_level),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidConfig("port must be non-zero".to_string()));
        }

        if self.query.page_size == 0 {
            return Err(ConfigError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }

        if self.query.max_page_size < self.query.page_size {
            return Err(ConfigError::InvalidConfig(
                "max_page_size must be >= page_size".to_string(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("log level is empty".to_string()));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
        },
        None => Ok(default),
    }
}
