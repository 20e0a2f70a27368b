//! AI summary of a finalized report via an external text-completion
//! endpoint.
//!
//! The summary is strictly optional: a missing credential disables the
//! feature with a fixed message, and any API failure degrades to a fixed
//! failure string. Neither case is an error to the caller.

pub mod prompt;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::json;

use inspection_types::DailyReport;

/// Returned when no API key is configured; the call is never attempted.
pub const MISSING_KEY_MESSAGE: &str =
    "AI summary is not available: no API key is configured.";

/// Returned when the endpoint call fails for any reason.
pub const FAILURE_MESSAGE: &str =
    "Failed to analyze report. Please check the API key and connection.";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub struct SummaryClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl SummaryClient {
    /// `api_key: None` yields a client with the feature disabled rather
    /// than a constructor error.
    pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Read the credential from `GEMINI_API_KEY`.
    pub fn from_env(client: reqwest::Client) -> Self {
        Self::new(client, std::env::var("GEMINI_API_KEY").ok())
    }

    /// Override the endpoint, for tests.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Summarize a report. Always returns displayable text.
    pub async fn summarize(&self, report: &DailyReport) -> String {
        let Some(api_key) = &self.api_key else {
            return MISSING_KEY_MESSAGE.to_string();
        };

        match self.generate(api_key, &prompt::build_prompt(report)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(date = %report.date, "Summary generation failed: {}", e);
                FAILURE_MESSAGE.to_string()
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("endpoint returned {}: {}", status, detail));
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.is_empty() {
            Ok("No analysis generated.".to_string())
        } else {
            Ok(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_short_circuits_without_calling_out() {
        let client = SummaryClient::new(reqwest::Client::new(), None);
        assert!(!client.is_configured());

        let report = DailyReport::blank("2025-03-01", "Ravi");
        assert_eq!(client.summarize(&report).await, MISSING_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn blank_key_counts_as_missing() {
        let client = SummaryClient::new(reqwest::Client::new(), Some("   ".to_string()));
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn endpoint_failure_degrades_to_fixed_message() {
        // Nothing listens here; the call fails fast and must not surface
        // an error to the caller.
        let client = SummaryClient::new(reqwest::Client::new(), Some("test-key".to_string()))
            .with_base_url("http://127.0.0.1:9");

        let report = DailyReport::blank("2025-03-01", "Ravi");
        assert_eq!(client.summarize(&report).await, FAILURE_MESSAGE);
    }

    #[test]
    fn response_parsing_reaches_the_first_candidate_text() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "All good today." } ] } }
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "All good today.");
    }
}
