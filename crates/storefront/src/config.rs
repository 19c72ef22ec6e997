//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `POMELO_STATE_DIR` - Directory for durable state slots (the cart file
//!   lives here)
//!
//! ## Optional
//! - `POMELO_CART_KEY` - Durable slot key for the cart (default: `cart`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default durable slot key for the cart.
pub const DEFAULT_CART_KEY: &str = "cart";

const ENV_STATE_DIR: &str = "POMELO_STATE_DIR";
const ENV_CART_KEY: &str = "POMELO_CART_KEY";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Storefront state configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory durable slots are stored under
    pub state_dir: PathBuf,
    /// Slot key the cart persists to
    pub cart_key: String,
}

impl StorefrontConfig {
    /// Create a configuration with defaults for everything but the state
    /// directory.
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            cart_key: DEFAULT_CART_KEY.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `POMELO_STATE_DIR` is not
    /// set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let state_dir = env::var(ENV_STATE_DIR)
            .map_err(|_| ConfigError::MissingEnvVar(ENV_STATE_DIR.to_string()))?;
        let cart_key = env::var(ENV_CART_KEY).unwrap_or_else(|_| DEFAULT_CART_KEY.to_string());

        Ok(Self {
            state_dir: PathBuf::from(state_dir),
            cart_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_cart_key() {
        let config = StorefrontConfig::new("/tmp/pomelo");
        assert_eq!(config.cart_key, DEFAULT_CART_KEY);
        assert_eq!(config.state_dir, PathBuf::from("/tmp/pomelo"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar(ENV_STATE_DIR.to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: POMELO_STATE_DIR"
        );
    }
}
