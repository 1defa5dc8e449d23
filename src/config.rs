// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Seed the demo fundraisers at startup (rewards are always seeded)
    pub seed_demo_data: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("SEED_DEMO_DATA", raw))?,
            Err(_) => true,
        };

        Ok(Self {
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            seed_demo_data,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test touching the process environment to avoid races between tests.
    #[test]
    fn test_config_from_env() {
        env::set_var("PORT", "4100");
        env::set_var("FRONTEND_URL", "https://fundraise.example.org");
        env::set_var("SEED_DEMO_DATA", "false");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 4100);
        assert_eq!(config.frontend_url, "https://fundraise.example.org");
        assert!(!config.seed_demo_data);

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));

        env::remove_var("PORT");
        env::remove_var("FRONTEND_URL");
        env::remove_var("SEED_DEMO_DATA");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
