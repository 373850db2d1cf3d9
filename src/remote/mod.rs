//! HTTP client for the external sentiment-analysis service.
//!
//! The service is a drop-in replacement for the keyword classifier: it takes
//! the diary text and answers with a numeric label in 0-5, which this module
//! maps onto the same five emotion categories. Only the thin transport lives
//! here; retries, queueing, and model concerns belong to the service.

use crate::classifier::{Analyzer, Classification};
use crate::emotion::Emotion;
use crate::errors::{AppResult, RemoteError};
use crate::lexicon::Lexicon;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request body sent to the sentiment service.
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    content: &'a str,
}

/// Response from the sentiment service.
///
/// The label arrives as a string digit ("0" through "5"); the rest of the
/// payload (document and sentence scores) is ignored here.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    label: String,
}

/// Client for the remote sentiment-analysis service.
pub struct SentimentClient {
    url: String,
    client: Client,
    lexicon: Lexicon,
}

impl SentimentClient {
    /// Creates a new sentiment client.
    ///
    /// # Arguments
    ///
    /// * `url` - Full endpoint URL of the service (e.g. an ngrok tunnel URL)
    pub fn new(url: impl Into<String>) -> Self {
        SentimentClient {
            url: url.into(),
            client: Client::new(),
            lexicon: Lexicon::builtin(),
        }
    }

    /// Sends the diary text for analysis and maps the returned label onto
    /// the emotion category set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the service is not reachable
    /// - the service answers with a non-success HTTP status
    /// - the response body is not the expected JSON shape
    /// - the label is outside the known 0-5 range
    pub fn fetch_emotion(&self, text: &str) -> AppResult<Emotion> {
        debug!("Requesting sentiment analysis");

        let request = AnalyzeRequest { content: text };
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .map_err(RemoteError::Unreachable)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(RemoteError::Status { status, body }.into());
        }

        let parsed: AnalyzeResponse = response.json().map_err(|e| {
            RemoteError::InvalidResponse(format!("failed to parse sentiment response: {}", e))
        })?;

        let numeric: u8 = parsed
            .label
            .parse()
            .map_err(|_| RemoteError::UnknownLabel(parsed.label.clone()))?;
        let emotion = Emotion::from_remote_label(numeric)
            .ok_or_else(|| RemoteError::UnknownLabel(parsed.label.clone()))?;

        debug!(label = %parsed.label, emotion = %emotion, "Sentiment service answered");
        Ok(emotion)
    }
}

impl Analyzer for SentimentClient {
    /// Classifies through the remote service, attaching the category's
    /// display text from the built-in table. Remote results never carry a
    /// matched keyword.
    fn analyze(&self, text: &str) -> AppResult<Classification> {
        let emotion = self.fetch_emotion(text)?;
        let category = self.lexicon.category(emotion);
        Ok(Classification::from_category(category, None))
    }
}
