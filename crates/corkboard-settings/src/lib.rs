//! # corkboard-settings
//!
//! Configuration for the Corkboard service, loaded from three layers
//! (in priority order):
//!
//! 1. **Compiled defaults** — [`Settings::default()`]
//! 2. **JSON file** — optional, passed on the command line
//! 3. **Environment variables** — `CORKBOARD_*` overrides (highest)
//!
//! Settings are loaded once at startup and threaded through the server
//! state; there is no runtime reload path.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::load_settings;
pub use types::{DatabaseSettings, LoggingSettings, ServerSettings, Settings, SummarizerSettings};
