/*!
# Maum - Emotion Analysis for Diary Entries

Maum reads a diary text and answers with one of five emotions
(슬픔, 기쁨, 분노, 불안, 놀람) plus a short supportive message.

This file contains the main application flow, coordinating the various
components to implement the analysis functionality.

## Usage

```
maum [TEXT] [OPTIONS]

Arguments:
  [TEXT]                 Diary text to analyze (reads stdin when omitted)

Options:
  -f, --file <FILE>      Read the diary text from a file
  -r, --remote           Classify with the remote sentiment service
  -j, --json             Print the result as JSON
  -v, --verbose          Enable verbose output
  -h, --help             Print help information
  -V, --version          Print version information
```

## Configuration

The application can be configured with the following environment variables:
- `MAUM_SENTIMENT_URL`: Endpoint of the remote sentiment service (required for --remote)
- `MAUM_LOG_FORMAT`: Set to "json" for JSON-formatted logs
- `RUST_LOG`: Standard tracing filter, defaults to "info"
*/

use chrono::Local;
use clap::Parser;
use maum::classifier::{Analyzer, Classification, Classifier};
use maum::cli::CliArgs;
use maum::config::Config;
use maum::constants;
use maum::errors::AppResult;
use maum::remote::SentimentClient;
use std::fs;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// The filter comes from RUST_LOG when set, otherwise defaults to "info"
/// ("debug" with --verbose). Logs go to stderr so classification output on
/// stdout stays clean for piping; MAUM_LOG_FORMAT=json switches to
/// structured JSON logs.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        constants::VERBOSE_LOG_LEVEL
    } else {
        constants::DEFAULT_LOG_LEVEL
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let json = std::env::var(constants::ENV_VAR_LOG_FORMAT)
        .map(|value| value == constants::LOG_FORMAT_JSON)
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Reads the diary text from the positional argument, the --file path, or
/// standard input, in that order of precedence.
fn read_input(args: &CliArgs) -> AppResult<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        debug!("Reading diary text from {:?}", path);
        return Ok(fs::read_to_string(path)?);
    }
    debug!("Reading diary text from stdin");
    Ok(io::read_to_string(io::stdin())?)
}

/// Prints the classification in the human-readable format.
fn print_result(result: &Classification) {
    println!("오늘의 감정은 '{}' ({}) 입니다.", result.label, result.emotion);
    match &result.matched_keyword {
        Some(keyword) => println!("matched keyword: {}", keyword),
        None => println!("no keyword matched; emotion chosen at random"),
    }
    println!();
    println!("{}", result.description);
}

/// The main entry point for the maum application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Reads the diary text
/// 5. Classifies it with the selected backend
/// 6. Prints the result as text or JSON
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid sentiment service URL)
/// - I/O errors (unreadable input file, stdin failure)
/// - Remote service errors (unreachable service, unknown label)
fn main() -> AppResult<()> {
    // Obtain current date/time once at the beginning
    let current_datetime = Local::now();

    let args = CliArgs::parse();
    init_tracing(args.verbose);

    info!(started_at = %current_datetime.to_rfc3339(), "Starting maum");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;

    let text = read_input(&args)?;
    debug!(chars = text.chars().count(), "Read diary text");

    info!("Analyzing diary text");
    let result = if args.remote {
        let client = SentimentClient::new(config.sentiment_url()?);
        client.analyze(&text)?
    } else {
        Classifier::default().analyze(&text)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    info!(emotion = %result.emotion, fallback = result.is_fallback(), "Analysis complete");
    Ok(())
}
