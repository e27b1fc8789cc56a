//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. All configuration is loaded at startup and validated before
//! the client wires itself together.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_CHECKOUT_CANCEL_PATH, DEFAULT_CHECKOUT_SUCCESS_PATH,
    DEFAULT_IDENTITY_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub identity: IdentityConfig,
    pub checkout: CheckoutConfig,
}

/// Backend API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

/// Identity provider configuration
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub endpoint: String,
    pub api_key: String,
}

/// Checkout redirect configuration
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub success_path: String,
    pub cancel_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api: ApiConfig::from_env()?,
            identity: IdentityConfig::from_env()?,
            checkout: CheckoutConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("CONTESTHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: env::var("CONTESTHUB_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("CONTESTHUB_REQUEST_TIMEOUT_SECS".to_string())
                })?,
        })
    }
}

impl IdentityConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: env::var("IDENTITY_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_IDENTITY_ENDPOINT.to_string()),
            api_key: env::var("IDENTITY_API_KEY")
                .map_err(|_| ConfigError::Missing("IDENTITY_API_KEY".to_string()))?,
        })
    }
}

impl CheckoutConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            success_path: env::var("CHECKOUT_SUCCESS_PATH")
                .unwrap_or_else(|_| DEFAULT_CHECKOUT_SUCCESS_PATH.to_string()),
            cancel_path: env::var("CHECKOUT_CANCEL_PATH")
                .unwrap_or_else(|_| DEFAULT_CHECKOUT_CANCEL_PATH.to_string()),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Defaults applied when env vars are not set
        let api = ApiConfig {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        assert_eq!(api.base_url, "http://localhost:5000/api/v1");
        assert_eq!(api.request_timeout_secs, 30);

        let checkout = CheckoutConfig {
            success_path: DEFAULT_CHECKOUT_SUCCESS_PATH.to_string(),
            cancel_path: DEFAULT_CHECKOUT_CANCEL_PATH.to_string(),
        };
        assert_eq!(checkout.success_path, "/payment/success");
    }
}
