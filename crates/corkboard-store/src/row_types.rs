//! Plain row structs, one per table.
//!
//! These serialize straight onto the wire (snake_case field names match
//! the front end's expectations), so anything secret is marked
//! `skip_serializing`.

use serde::Serialize;

/// A row in `accounts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRow {
    /// Generated id (`acc_` + UUIDv7).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unique email.
    pub email: String,
    /// Opaque credential. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// RFC 3339 creation time.
    pub created_at: String,
}

/// A row in `groups`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    /// Generated id (`grp_` + UUIDv7).
    pub id: String,
    /// Display name.
    pub group_name: String,
    /// Account that created the group.
    pub created_by: String,
    /// RFC 3339 creation time.
    pub created_at: String,
}

/// A group joined with the asking account's membership role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupWithRoleRow {
    /// Group id.
    pub id: String,
    /// Display name.
    pub group_name: String,
    /// Account that created the group.
    pub created_by: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// The asking account's role in this group.
    pub role: String,
}

/// A row in `memberships`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipRow {
    /// Generated id (`mem_` + UUIDv7).
    pub id: String,
    /// Group side of the pair.
    pub group_id: String,
    /// Account side of the pair.
    pub account_id: String,
    /// `owner` or `member`.
    pub role: String,
    /// RFC 3339 join time.
    pub joined_at: String,
}

/// A row in `notes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteRow {
    /// Generated id (`note_` + UUIDv7).
    pub id: String,
    /// Owning group.
    pub group_id: String,
    /// Optional title.
    pub title: Option<String>,
    /// Optional free-text body.
    pub content: Option<String>,
    /// Normalized `#RRGGBB` color.
    pub color: String,
    /// Board x position.
    pub x: f64,
    /// Board y position.
    pub y: f64,
    /// Width in board units.
    pub width: f64,
    /// Height in board units.
    pub height: f64,
    /// Paint order within the board.
    pub z_index: i64,
    /// Posting account, if recorded.
    pub created_by: Option<String>,
    /// Whether other members may edit.
    pub can_edit: bool,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// RFC 3339 last-update time.
    pub updated_at: String,
}

/// A row in `summaries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Generated id (`sum_` + UUIDv7).
    pub id: String,
    /// Text that was summarized.
    pub input_text: String,
    /// Produced summary.
    pub summary: String,
    /// RFC 3339 creation time.
    pub created_at: String,
}
