/*!
# Maum

Maum (마음) is the emotion analysis engine behind a Korean-language diary:
given the free text of a diary entry, it deterministically assigns one of
five emotion categories by matching curated keyword lists, falling back to a
uniformly random category when nothing matches so the user always gets an
emotion back.

## Core Features

- Keyword classification over the five fixed categories
  (슬픔, 기쁨, 분노, 불안, 놀람) with a documented priority order
- Supportive display text and artwork asset key per category
- Injectable randomness for the no-match fallback
- Optional remote sentiment-service backend behind the same `Analyzer` trait
- Total conversions between the canonical enum and every legacy
  representation (integer id, Korean label, remote numeric label)

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `emotion`: The canonical emotion enumeration
- `lexicon`: The validated category/keyword table
- `classifier`: Matching and fallback algorithm
- `remote`: Thin client for the external sentiment service

## Usage Example

```rust
use maum::{Classifier, Emotion};

let classifier = Classifier::default();
let result = classifier.classify("정말 행복하고 기쁨 가득한 하루");

assert_eq!(result.emotion, Emotion::Happy);
assert_eq!(result.label, "기쁨");
assert_eq!(result.matched_keyword.as_deref(), Some("기쁨"));
```
*/

/// Keyword classification and the analyzer contract
pub mod classifier;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized application constants
pub mod constants;
/// The canonical emotion enumeration and its conversions
pub mod emotion;
/// Error types and utilities for error handling
pub mod errors;
/// The emotion category table and its validation
pub mod lexicon;
/// Client for the remote sentiment-analysis service
pub mod remote;

// Re-export important types for convenience
pub use classifier::{Analyzer, Classification, Classifier};
pub use cli::CliArgs;
pub use config::Config;
pub use emotion::Emotion;
pub use errors::{AppError, AppResult};
pub use lexicon::{Category, Lexicon};
pub use remote::SentimentClient;
