//! Shared domain types: membership roles and note color handling.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

// ─────────────────────────────────────────────────────────────────────────────
// Membership role
// ─────────────────────────────────────────────────────────────────────────────

/// Role an account holds within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Created the group (or was promoted). Full control.
    Owner,
    /// Regular participant.
    Member,
}

impl Role {
    /// SQL string representation (matches the `role` CHECK constraint).
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }

    /// Parse a wire/DB string. Anything other than `owner`/`member` is
    /// a validation error.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "owner" => Ok(Self::Owner),
            "member" => Ok(Self::Member),
            other => Err(DomainError::validation(format!(
                "role must be 'owner' or 'member', got '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Note colors and layout defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Color applied when the client sends nothing usable.
pub const DEFAULT_NOTE_COLOR: &str = "#FFFF88";
/// Default note width in board units.
pub const DEFAULT_NOTE_WIDTH: f64 = 200.0;
/// Default note height in board units.
pub const DEFAULT_NOTE_HEIGHT: f64 = 150.0;

/// Named palette the board UI offers.
const PALETTE: [(&str, &str); 6] = [
    ("yellow", "#FFFF88"),
    ("pink", "#FBCFE8"),
    ("green", "#BBF7D0"),
    ("blue", "#BFDBFE"),
    ("orange", "#FED7AA"),
    ("purple", "#E9D5FF"),
];

/// Normalize a client-supplied color to an uppercase `#RRGGBB` value.
///
/// Accepts a palette name (`"pink"`) or a 7-char hex string; anything
/// else (including `None` and empty input) falls back to
/// [`DEFAULT_NOTE_COLOR`].
#[must_use]
pub fn normalize_color(input: Option<&str>) -> String {
    let Some(raw) = input else {
        return DEFAULT_NOTE_COLOR.to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_NOTE_COLOR.to_string();
    }
    if trimmed.starts_with('#')
        && trimmed.len() == 7
        && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit())
    {
        return trimmed.to_uppercase();
    }
    let lower = trimmed.to_lowercase();
    PALETTE
        .iter()
        .find(|(name, _)| *name == lower)
        .map_or_else(|| DEFAULT_NOTE_COLOR.to_string(), |(_, hex)| (*hex).to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_sql_string() {
        assert_eq!(Role::parse("owner").unwrap(), Role::Owner);
        assert_eq!(Role::parse("member").unwrap(), Role::Member);
        assert_eq!(Role::Owner.as_sql(), "owner");
        assert_eq!(Role::Member.to_string(), "member");
    }

    #[test]
    fn role_rejects_unknown_values() {
        let err = Role::parse("admin").unwrap_err();
        assert!(err.to_string().contains("admin"));
    }

    #[test]
    fn role_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
        let back: Role = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(back, Role::Member);
    }

    #[test]
    fn color_defaults_when_missing_or_empty() {
        assert_eq!(normalize_color(None), DEFAULT_NOTE_COLOR);
        assert_eq!(normalize_color(Some("   ")), DEFAULT_NOTE_COLOR);
    }

    #[test]
    fn color_accepts_hex_and_uppercases() {
        assert_eq!(normalize_color(Some("#abcdef")), "#ABCDEF");
        assert_eq!(normalize_color(Some(" #BFDBFE ")), "#BFDBFE");
    }

    #[test]
    fn color_resolves_palette_names() {
        assert_eq!(normalize_color(Some("pink")), "#FBCFE8");
        assert_eq!(normalize_color(Some("GREEN")), "#BBF7D0");
    }

    #[test]
    fn color_rejects_malformed_hex() {
        assert_eq!(normalize_color(Some("#abc")), DEFAULT_NOTE_COLOR);
        assert_eq!(normalize_color(Some("#gggggg")), DEFAULT_NOTE_COLOR);
        assert_eq!(normalize_color(Some("turquoise")), DEFAULT_NOTE_COLOR);
    }
}
