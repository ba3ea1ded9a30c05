//! Outbound summarizer client.
//!
//! Talks to an OpenAI-compatible chat completions endpoint (Groq by
//! default). The trait seam exists so handlers can be tested without
//! network access.

use async_trait::async_trait;
use corkboard_settings::SummarizerSettings;
use metrics::counter;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::metrics::{SUMMARIZER_ERRORS_TOTAL, SUMMARIZER_REQUESTS_TOTAL};

/// Errors from the summarizer call.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// No API key configured; the endpoint is disabled.
    #[error("summarizer is not configured (missing API key)")]
    NotConfigured,

    /// Transport-level failure.
    #[error("summarizer request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("summarizer returned {status}: {body}")]
    Upstream {
        /// HTTP status from the upstream.
        status: u16,
        /// Upstream response body, verbatim.
        body: String,
    },

    /// 2xx response without usable message content.
    #[error("summarizer response had no content")]
    MalformedResponse,
}

/// Produce a short summary of `text`.
#[async_trait]
pub trait Summarize: Send + Sync {
    /// Summarize the text, returning bullet-point prose.
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError>;
}

/// Chat-completions backed summarizer.
pub struct ChatSummarizer {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl ChatSummarizer {
    /// Build a client from settings. A missing API key is not an error
    /// here; calls fail with [`SummarizerError::NotConfigured`].
    #[must_use]
    pub fn new(settings: &SummarizerSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        }
    }
}

#[async_trait]
impl Summarize for ChatSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SummarizerError::NotConfigured);
        };
        counter!(SUMMARIZER_REQUESTS_TOTAL).increment(1);

        let prompt =
            format!("Summarize the following text as 3-5 short bullet points:\n\n{text}");
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "stream": false,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|_| {
                counter!(SUMMARIZER_ERRORS_TOTAL, "kind" => "http").increment(1);
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            counter!(SUMMARIZER_ERRORS_TOTAL, "kind" => "upstream").increment(1);
            return Err(SummarizerError::Upstream { status, body });
        }

        let payload: Value = response.json().await?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or(SummarizerError::MalformedResponse)?;

        debug!(model = %self.model, chars = content.len(), "summary produced");
        Ok(content)
    }
}

/// Fixed-reply summarizer for handler tests.
#[cfg(test)]
pub(crate) struct StubSummarizer {
    reply: Option<String>,
}

#[cfg(test)]
impl StubSummarizer {
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self { reply: None }
    }
}

#[cfg(test)]
#[async_trait]
impl Summarize for StubSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String, SummarizerError> {
        self.reply.clone().ok_or(SummarizerError::Upstream {
            status: 500,
            body: "stub failure".to_string(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
