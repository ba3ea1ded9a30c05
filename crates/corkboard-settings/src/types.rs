//! Settings types with per-field serde defaults.
//!
//! Every field has a default so a partial JSON file is valid — absent
//! fields fall back to the compiled values.

use serde::{Deserialize, Serialize};

/// Top-level settings for the Corkboard service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP bind and static file serving.
    pub server: ServerSettings,
    /// SQLite database location.
    pub database: DatabaseSettings,
    /// Outbound summarizer API.
    pub summarizer: SummarizerSettings,
    /// Tracing filter.
    pub logging: LoggingSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Directory of static front-end assets, served with an
    /// `index.html` fallback.
    pub static_dir: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: "public".to_string(),
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file path. `:memory:` gives an in-process database.
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "corkboard.db".to_string(),
        }
    }
}

/// Summarizer (OpenAI-compatible chat completions) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerSettings {
    /// Chat completions endpoint URL.
    pub api_url: String,
    /// Bearer token. Usually supplied via `CORKBOARD_SUMMARIZER_KEY`;
    /// the summarize endpoint returns an error when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier sent with each request.
    pub model: String,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            api_key: None,
            model: "llama-3.1-8b-instant".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default tracing filter directive when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
