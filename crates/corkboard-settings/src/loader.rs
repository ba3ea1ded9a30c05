//! Settings loading: file layer plus `CORKBOARD_*` env overrides.

use std::path::Path;

use crate::errors::Result;
use crate::types::Settings;

/// Load settings, optionally from a JSON file, then apply env overrides.
///
/// A missing `path` (or `None`) is not an error — compiled defaults are
/// used. A present-but-unreadable or malformed file is an error: a
/// misconfigured deployment should fail loudly rather than silently run
/// with defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(p) if p.exists() => {
            let raw = std::fs::read_to_string(p)?;
            let s: Settings = serde_json::from_str(&raw)?;
            tracing::info!(path = %p.display(), "settings loaded from file");
            s
        }
        Some(p) => {
            tracing::warn!(path = %p.display(), "settings file not found, using defaults");
            Settings::default()
        }
        None => Settings::default(),
    };
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Apply `CORKBOARD_*` environment overrides in place.
fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(host) = std::env::var("CORKBOARD_HOST") {
        settings.server.host = host;
    }
    if let Some(port) = std::env::var("CORKBOARD_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        settings.server.port = port;
    }
    if let Ok(dir) = std::env::var("CORKBOARD_STATIC_DIR") {
        settings.server.static_dir = dir;
    }
    if let Ok(path) = std::env::var("CORKBOARD_DB") {
        settings.database.path = path;
    }
    if let Ok(url) = std::env::var("CORKBOARD_SUMMARIZER_URL") {
        settings.summarizer.api_url = url;
    }
    if let Ok(key) = std::env::var("CORKBOARD_SUMMARIZER_KEY") {
        settings.summarizer.api_key = Some(key);
    }
    if let Ok(model) = std::env::var("CORKBOARD_SUMMARIZER_MODEL") {
        settings.summarizer.model = model;
    }
    if let Ok(filter) = std::env::var("CORKBOARD_LOG") {
        settings.logging.filter = filter;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
