//! Error handling utilities for the maum application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use crate::emotion::Emotion;
use thiserror::Error;

/// Represents specific error cases that can occur when building an emotion lexicon.
///
/// A malformed category table is a programming error, not a runtime condition:
/// every variant here is raised during construction, before any classification
/// is attempted.
///
/// # Examples
///
/// ```
/// use maum::errors::LexiconError;
/// use maum::Emotion;
///
/// let error = LexiconError::EmptyKeywords(Emotion::Sad);
/// assert!(format!("{}", error).contains("sad"));
/// assert!(format!("{}", error).contains("no keywords"));
/// ```
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Error when the table does not define exactly one entry per category.
    #[error("Emotion lexicon must define exactly {expected} categories, found {found}")]
    WrongCategoryCount {
        /// Number of categories a valid lexicon defines
        expected: usize,
        /// Number of categories actually supplied
        found: usize,
    },

    /// Error when the same category appears more than once in the table.
    #[error("Emotion lexicon defines category '{0}' more than once")]
    DuplicateCategory(Emotion),

    /// Error when a category has no keywords to match against.
    #[error("Category '{0}' has no keywords; every category needs at least one")]
    EmptyKeywords(Emotion),

    /// Error when a category lists the same keyword twice.
    #[error("Category '{0}' lists keyword '{1}' more than once")]
    DuplicateKeyword(Emotion, String),
}

/// Represents specific error cases that can occur when calling the remote
/// sentiment service.
///
/// This enum provides detailed, contextual error information for different
/// failure modes when the classifier is substituted with the HTTP-based
/// sentiment backend.
///
/// # Examples
///
/// ```
/// use maum::errors::RemoteError;
///
/// let error = RemoteError::UnknownLabel("9".to_string());
/// assert!(format!("{}", error).contains("9"));
/// ```
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The sentiment service is not reachable.
    #[error("Sentiment service error: {0}. Check that the service is running and MAUM_SENTIMENT_URL points at it.")]
    Unreachable(#[source] reqwest::Error),

    /// The sentiment service answered with a non-success HTTP status.
    #[error("Sentiment service returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code of the response
        status: u16,
        /// The response body, if any
        body: String,
    },

    /// The response body could not be parsed.
    #[error("Invalid response from sentiment service: {0}")]
    InvalidResponse(String),

    /// The service returned a label outside the known 0-5 range.
    #[error("Sentiment service returned unknown emotion label '{0}' (expected 0-5)")]
    UnknownLabel(String),
}

/// Represents all possible errors that can occur in the maum application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use maum::errors::AppError;
///
/// let error = AppError::Config("MAUM_SENTIMENT_URL is not set".to_string());
/// assert_eq!(
///     format!("{}", error),
///     "Configuration error: MAUM_SENTIMENT_URL is not set"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors when reading diary text from a file or stdin.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors raised while building an emotion lexicon.
    ///
    /// This variant uses a dedicated LexiconError type to provide detailed
    /// information about what is wrong with the category table.
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Errors when talking to the remote sentiment service.
    ///
    /// This variant uses a dedicated RemoteError type to provide detailed
    /// information about what went wrong with the HTTP interaction.
    #[error("Sentiment service error: {0}")]
    Remote(#[from] RemoteError),

    /// Errors serializing a classification result for output.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
pub type AppResult<T> = Result<T, AppError>;
