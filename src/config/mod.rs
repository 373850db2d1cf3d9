//! Configuration management for the maum application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables. The keyword classifier itself needs no
//! configuration; what is configured here is the optional remote sentiment
//! backend.
//!
//! # Environment Variables
//!
//! - `MAUM_SENTIMENT_URL`: Endpoint of the remote sentiment-analysis service
//!   (unset means only the keyword classifier is available)

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;

/// Configuration for the maum application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use maum::Config;
///
/// let config = Config {
///     sentiment_url: Some("http://localhost:8000/api/emotions".to_string()),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Default)]
pub struct Config {
    /// Endpoint URL of the remote sentiment-analysis service, if configured.
    ///
    /// Loaded from the MAUM_SENTIMENT_URL environment variable. The original
    /// deployment pointed this at a short-lived ngrok tunnel, so treat the
    /// value as secret-adjacent: `Debug` output redacts it.
    pub sentiment_url: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "sentiment_url",
                &self.sentiment_url.as_ref().map(|_| "[REDACTED_URL]"),
            )
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// An unset or empty `MAUM_SENTIMENT_URL` leaves the remote backend
    /// unconfigured; that is not an error.
    pub fn load() -> AppResult<Self> {
        let sentiment_url = env::var(constants::ENV_VAR_SENTIMENT_URL)
            .ok()
            .filter(|value| !value.trim().is_empty());

        Ok(Config { sentiment_url })
    }

    /// Validates the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a sentiment URL is set but is not an
    /// http(s) URL.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(url) = &self.sentiment_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::Config(format!(
                    "{} must be an http(s) URL",
                    constants::ENV_VAR_SENTIMENT_URL
                )));
            }
        }
        Ok(())
    }

    /// The sentiment service URL, or a configuration error explaining how to
    /// set it.
    pub fn sentiment_url(&self) -> AppResult<&str> {
        self.sentiment_url.as_deref().ok_or_else(|| {
            AppError::Config(format!(
                "{} is not set; export it to use the remote sentiment service",
                constants::ENV_VAR_SENTIMENT_URL
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_sentiment_url() {
        let config = Config::default();
        assert!(config.sentiment_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_http_and_https() {
        let config = Config {
            sentiment_url: Some("http://localhost:8000".to_string()),
        };
        assert!(config.validate().is_ok());

        let config = Config {
            sentiment_url: Some("https://example.ngrok.io/analyze".to_string()),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = Config {
            sentiment_url: Some("ftp://example.com".to_string()),
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("MAUM_SENTIMENT_URL"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_sentiment_url_accessor() {
        let config = Config {
            sentiment_url: Some("http://localhost:8000".to_string()),
        };
        assert_eq!(config.sentiment_url().unwrap(), "http://localhost:8000");

        let config = Config::default();
        match config.sentiment_url() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("MAUM_SENTIMENT_URL"));
            }
            other => panic!("Expected Config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_debug_redacts_url() {
        let config = Config {
            sentiment_url: Some("https://secret-tunnel.ngrok.io".to_string()),
        };
        let output = format!("{:?}", config);
        assert!(!output.contains("secret-tunnel"));
        assert!(output.contains("REDACTED"));
    }
}
