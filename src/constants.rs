//! Constants used throughout the application.
//!
//! This module contains all constants used in the maum application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "maum";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Keyword-driven emotion analysis for diary entries";

// Classification
/// Number of emotion categories the classifier can produce.
pub const CATEGORY_COUNT: usize = 5;
/// Prefix of the artwork asset associated with each emotion category.
pub const ASSET_PREFIX: &str = "emotion";
/// File extension of the artwork asset associated with each emotion category.
pub const ASSET_EXTENSION: &str = ".png";

// Configuration Keys & Environment Variables
/// Environment variable for the remote sentiment service endpoint.
pub const ENV_VAR_SENTIMENT_URL: &str = "MAUM_SENTIMENT_URL";
/// Environment variable for selecting the log output format.
pub const ENV_VAR_LOG_FORMAT: &str = "MAUM_LOG_FORMAT";

// Logging Configuration
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
