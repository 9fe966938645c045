/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the gateway REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the gateway client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Account used by callers that do not pass one explicitly
    pub default_account_number: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment, loading `.env` first
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `TRADEIT_BASE_URL` | QA gateway |
    /// | `TRADEIT_TIMEOUT` | 30 seconds |
    /// | `TRADEIT_ACCOUNT_NUMBER` | unset |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("TRADEIT_BASE_URL", String::from(DEFAULT_BASE_URL));

        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: get_env_or_default("TRADEIT_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            default_account_number: get_env_or_none::<String>("TRADEIT_ACCOUNT_NUMBER")
                .filter(|account| !account.trim().is_empty()),
        }
    }

    /// Builds a configuration pointing at `base_url` with default settings otherwise
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            default_account_number: None,
        }
    }
}
