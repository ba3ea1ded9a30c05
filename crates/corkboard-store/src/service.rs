//! Business logic layer for the board.
//!
//! Wraps the repositories with validation and the membership/ownership
//! rules. Key rules:
//!
//! - **Group creation is atomic**: the group row and the creator's
//!   `owner` membership are written in one transaction.
//! - **Membership to post**: when a note carries `created_by`, that
//!   account must hold a membership in the target group.
//! - **Rejoin upserts**: joining a group the account already belongs to
//!   updates the role (last write wins) instead of duplicating the row.

use corkboard_core::errors::{DomainError, Result};
use corkboard_core::types::{
    normalize_color, Role, DEFAULT_NOTE_HEIGHT, DEFAULT_NOTE_WIDTH,
};
use rusqlite::Connection;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::repositories::{
    AccountRepo, CreateAccountOptions, CreateGroupOptions, CreateNoteOptions,
    CreateSummaryOptions, GroupRepo, MembershipRepo, NoteRepo, SummaryRepo,
    UpsertMembershipOutcome,
};
use crate::row_types::{
    AccountRow, GroupRow, GroupWithRoleRow, MembershipRow, NoteRow, SummaryRow,
};

/// Parameters for creating a note, pre-normalization.
#[derive(Debug, Default)]
pub struct NoteCreateParams<'a> {
    /// Optional title.
    pub title: Option<&'a str>,
    /// Optional body.
    pub content: Option<&'a str>,
    /// Raw client color (palette name, hex, or nothing).
    pub color: Option<&'a str>,
    /// Board x position.
    pub x: f64,
    /// Board y position.
    pub y: f64,
    /// Width; defaults when `None`.
    pub width: Option<f64>,
    /// Height; defaults when `None`.
    pub height: Option<f64>,
    /// Paint order; defaults to 0.
    pub z_index: Option<i64>,
    /// Posting account. When present, membership is required.
    pub created_by: Option<&'a str>,
    /// Whether other members may edit.
    pub can_edit: bool,
}

/// Row counts for the debug endpoint.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct TableCounts {
    /// Total accounts.
    pub accounts: i64,
    /// Total groups.
    pub groups: i64,
    /// Total notes.
    pub notes: i64,
    /// Total summaries.
    pub summaries: i64,
}

/// Domain service with validation and membership rules.
pub struct BoardService;

impl BoardService {
    // ─────────────────────────────────────────────────────────────────────
    // Accounts
    // ─────────────────────────────────────────────────────────────────────

    /// Register an account. The password is hashed before storage and
    /// never leaves this layer.
    pub fn create_account(
        conn: &Connection,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AccountRow> {
        let name = name.trim();
        let email = email.trim();
        let password = password.trim();

        if name.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if email.is_empty() {
            return Err(DomainError::validation("email must not be empty"));
        }
        if !email.contains('@') {
            return Err(DomainError::validation("email address is not valid"));
        }
        if password.len() < 6 {
            return Err(DomainError::validation(
                "password must be at least 6 characters",
            ));
        }

        let hash = hash_password(password);
        let account = AccountRepo::create(
            conn,
            &CreateAccountOptions {
                name,
                email,
                password_hash: &hash,
            },
        )?;
        debug!(account_id = %account.id, "account created");
        Ok(account)
    }

    /// List all accounts in stable (creation) order.
    pub fn list_accounts(conn: &Connection) -> Result<Vec<AccountRow>> {
        AccountRepo::list(conn)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Groups & memberships
    // ─────────────────────────────────────────────────────────────────────

    /// Create a group and its creator's `owner` membership atomically.
    pub fn create_group(
        conn: &mut Connection,
        group_name: &str,
        created_by: &str,
    ) -> Result<GroupRow> {
        let group_name = group_name.trim();
        if group_name.is_empty() {
            return Err(DomainError::validation("group name must not be empty"));
        }
        if !AccountRepo::exists(conn, created_by)? {
            return Err(DomainError::not_found("account", created_by));
        }

        let tx = conn.transaction()?;
        let group = GroupRepo::create(
            &tx,
            &CreateGroupOptions {
                group_name,
                created_by,
            },
        )?;
        let _ = MembershipRepo::upsert(&tx, &group.id, created_by, Role::Owner)?;
        tx.commit()?;

        debug!(group_id = %group.id, created_by, "group created");
        Ok(group)
    }

    /// Get a group, or NotFound.
    pub fn get_group(conn: &Connection, group_id: &str) -> Result<GroupRow> {
        GroupRepo::get_by_id(conn, group_id)?
            .ok_or_else(|| DomainError::not_found("group", group_id))
    }

    /// List the groups an account belongs to, annotated with its role.
    pub fn list_groups_for_account(
        conn: &Connection,
        account_id: &str,
    ) -> Result<Vec<GroupWithRoleRow>> {
        if !AccountRepo::exists(conn, account_id)? {
            return Err(DomainError::not_found("account", account_id));
        }
        GroupRepo::list_for_account(conn, account_id)
    }

    /// Join a group (or change role on rejoin). Last write wins.
    pub fn join_group(
        conn: &Connection,
        group_id: &str,
        account_id: &str,
        role: Role,
    ) -> Result<(MembershipRow, UpsertMembershipOutcome)> {
        if !GroupRepo::exists(conn, group_id)? {
            return Err(DomainError::not_found("group", group_id));
        }
        if !AccountRepo::exists(conn, account_id)? {
            return Err(DomainError::not_found("account", account_id));
        }
        MembershipRepo::upsert(conn, group_id, account_id, role)
    }

    /// List a group's members, oldest join first.
    pub fn list_members(conn: &Connection, group_id: &str) -> Result<Vec<MembershipRow>> {
        if !GroupRepo::exists(conn, group_id)? {
            return Err(DomainError::not_found("group", group_id));
        }
        MembershipRepo::list_for_group(conn, group_id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Notes
    // ─────────────────────────────────────────────────────────────────────

    /// List a group's notes in paint order.
    pub fn list_notes(conn: &Connection, group_id: &str) -> Result<Vec<NoteRow>> {
        if !GroupRepo::exists(conn, group_id)? {
            return Err(DomainError::not_found("group", group_id));
        }
        NoteRepo::list_for_group(conn, group_id)
    }

    /// Create a note on a group's board.
    ///
    /// When `created_by` is present it must reference an existing
    /// account holding a membership in the group.
    pub fn create_note(
        conn: &Connection,
        group_id: &str,
        params: &NoteCreateParams<'_>,
    ) -> Result<NoteRow> {
        if !GroupRepo::exists(conn, group_id)? {
            return Err(DomainError::not_found("group", group_id));
        }
        if let Some(author) = params.created_by {
            if !AccountRepo::exists(conn, author)? {
                return Err(DomainError::not_found("account", author));
            }
            if !MembershipRepo::is_member(conn, group_id, author)? {
                return Err(DomainError::validation(format!(
                    "account '{author}' is not a member of this group"
                )));
            }
        }

        let color = normalize_color(params.color);
        NoteRepo::create(
            conn,
            &CreateNoteOptions {
                group_id,
                title: params.title,
                content: params.content,
                color: &color,
                x: params.x,
                y: params.y,
                width: params.width.unwrap_or(DEFAULT_NOTE_WIDTH),
                height: params.height.unwrap_or(DEFAULT_NOTE_HEIGHT),
                z_index: params.z_index.unwrap_or(0),
                created_by: params.created_by,
                can_edit: params.can_edit,
            },
        )
    }

    /// Get one note, or NotFound (single-note detail view).
    pub fn get_note(conn: &Connection, note_id: &str) -> Result<NoteRow> {
        NoteRepo::get_by_id(conn, note_id)?
            .ok_or_else(|| DomainError::not_found("note", note_id))
    }

    /// Update a note's title/content/color.
    pub fn update_note_content(
        conn: &Connection,
        note_id: &str,
        title: Option<&str>,
        content: Option<&str>,
        color: Option<&str>,
    ) -> Result<()> {
        let color = normalize_color(color);
        if NoteRepo::update_content(conn, note_id, title, content, &color)? {
            Ok(())
        } else {
            Err(DomainError::not_found("note", note_id))
        }
    }

    /// Update a note's spatial layout.
    pub fn update_note_layout(
        conn: &Connection,
        note_id: &str,
        x: f64,
        y: f64,
        width: Option<f64>,
        height: Option<f64>,
        z_index: Option<i64>,
    ) -> Result<()> {
        let updated = NoteRepo::update_layout(
            conn,
            note_id,
            x,
            y,
            width.unwrap_or(DEFAULT_NOTE_WIDTH),
            height.unwrap_or(DEFAULT_NOTE_HEIGHT),
            z_index.unwrap_or(0),
        )?;
        if updated {
            Ok(())
        } else {
            Err(DomainError::not_found("note", note_id))
        }
    }

    /// Delete one note. Deleting a missing id is NotFound, not a no-op.
    pub fn delete_note(conn: &Connection, note_id: &str) -> Result<()> {
        if NoteRepo::delete(conn, note_id)? {
            Ok(())
        } else {
            Err(DomainError::not_found("note", note_id))
        }
    }

    /// Delete every note in a group. Returns the count removed.
    pub fn clear_notes(conn: &Connection, group_id: &str) -> Result<usize> {
        if !GroupRepo::exists(conn, group_id)? {
            return Err(DomainError::not_found("group", group_id));
        }
        let removed = NoteRepo::delete_for_group(conn, group_id)?;
        debug!(group_id, removed, "cleared group notes");
        Ok(removed)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Summaries
    // ─────────────────────────────────────────────────────────────────────

    /// Store a produced summary.
    pub fn store_summary(
        conn: &Connection,
        input_text: &str,
        summary: &str,
    ) -> Result<SummaryRow> {
        SummaryRepo::create(
            conn,
            &CreateSummaryOptions {
                input_text,
                summary,
            },
        )
    }

    /// List summaries, newest first.
    pub fn list_summaries(conn: &Connection) -> Result<Vec<SummaryRow>> {
        SummaryRepo::list(conn)
    }

    /// Get one summary, or NotFound.
    pub fn get_summary(conn: &Connection, summary_id: &str) -> Result<SummaryRow> {
        SummaryRepo::get_by_id(conn, summary_id)?
            .ok_or_else(|| DomainError::not_found("summary", summary_id))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Diagnostics
    // ─────────────────────────────────────────────────────────────────────

    /// Row counts across all tables, for the debug endpoint.
    pub fn counts(conn: &Connection) -> Result<TableCounts> {
        Ok(TableCounts {
            accounts: AccountRepo::count(conn)?,
            groups: GroupRepo::count(conn)?,
            notes: NoteRepo::count(conn)?,
            summaries: SummaryRepo::count(conn)?,
        })
    }
}

/// SHA-256 hex digest of the password. An opaque credential, not a
/// hardened KDF — authentication hardening is out of scope.
fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn sato(conn: &Connection) -> AccountRow {
        BoardService::create_account(conn, "Sato", "sato@example.com", "secret1").unwrap()
    }

    // Accounts ───────────────────────────────────────────────────────────

    #[test]
    fn create_account_then_list_includes_it_exactly_once() {
        let conn = setup();
        let account = sato(&conn);

        let all = BoardService::list_accounts(&conn).unwrap();
        assert_eq!(all.iter().filter(|a| a.id == account.id).count(), 1);
    }

    #[test]
    fn create_account_hashes_password() {
        let conn = setup();
        let account = sato(&conn);
        assert_ne!(account.password_hash, "secret1");
        assert_eq!(account.password_hash.len(), 64);
    }

    #[test]
    fn create_account_validates_input() {
        let conn = setup();
        let cases = [
            ("", "a@example.com", "secret1"),
            ("Sato", "", "secret1"),
            ("Sato", "not-an-email", "secret1"),
            ("Sato", "a@example.com", "short"),
        ];
        for (name, email, password) in cases {
            let err = BoardService::create_account(&conn, name, email, password).unwrap_err();
            assert!(
                matches!(err, DomainError::Validation(_)),
                "expected validation error for ({name:?}, {email:?}, {password:?})"
            );
        }
    }

    #[test]
    fn duplicate_email_is_conflict() {
        let conn = setup();
        sato(&conn);
        let err =
            BoardService::create_account(&conn, "Other", "sato@example.com", "secret2")
                .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    // Groups ─────────────────────────────────────────────────────────────

    #[test]
    fn create_group_makes_creator_an_owner_member() {
        let mut conn = setup();
        let account = sato(&conn);
        let group = BoardService::create_group(&mut conn, "study", &account.id).unwrap();

        let members = BoardService::list_members(&conn, &group.id).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].account_id, account.id);
        assert_eq!(members[0].role, "owner");
    }

    #[test]
    fn create_group_with_unknown_account_is_not_found() {
        let mut conn = setup();
        let err = BoardService::create_group(&mut conn, "study", "acc_missing").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn create_group_rejects_empty_name() {
        let mut conn = setup();
        let account = sato(&conn);
        let err = BoardService::create_group(&mut conn, "   ", &account.id).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn join_twice_upserts_role_without_duplicating() {
        let mut conn = setup();
        let owner = sato(&conn);
        let joiner =
            BoardService::create_account(&conn, "Tanaka", "tanaka@example.com", "secret1")
                .unwrap();
        let group = BoardService::create_group(&mut conn, "study", &owner.id).unwrap();

        let (_, first) =
            BoardService::join_group(&conn, &group.id, &joiner.id, Role::Member).unwrap();
        assert_eq!(first, UpsertMembershipOutcome::Inserted);

        let (row, second) =
            BoardService::join_group(&conn, &group.id, &joiner.id, Role::Owner).unwrap();
        assert_eq!(second, UpsertMembershipOutcome::Updated);
        assert_eq!(row.role, "owner");

        // Owner + joiner, nothing duplicated.
        assert_eq!(BoardService::list_members(&conn, &group.id).unwrap().len(), 2);
    }

    #[test]
    fn join_unknown_group_is_not_found() {
        let conn = setup();
        let account = sato(&conn);
        let err =
            BoardService::join_group(&conn, "grp_missing", &account.id, Role::Member).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn list_groups_for_account_annotates_role() {
        let mut conn = setup();
        let owner = sato(&conn);
        let joiner =
            BoardService::create_account(&conn, "Tanaka", "tanaka@example.com", "secret1")
                .unwrap();
        let group = BoardService::create_group(&mut conn, "study", &owner.id).unwrap();
        BoardService::join_group(&conn, &group.id, &joiner.id, Role::Member).unwrap();

        let groups = BoardService::list_groups_for_account(&conn, &joiner.id).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, group.id);
        assert_eq!(groups[0].role, "member");
    }

    // Notes ──────────────────────────────────────────────────────────────

    fn note_at<'a>(z: i64) -> NoteCreateParams<'a> {
        NoteCreateParams {
            x: 10.0,
            y: 20.0,
            z_index: Some(z),
            ..NoteCreateParams::default()
        }
    }

    #[test]
    fn create_note_applies_defaults_and_normalizes_color() {
        let mut conn = setup();
        let account = sato(&conn);
        let group = BoardService::create_group(&mut conn, "study", &account.id).unwrap();

        let note = BoardService::create_note(
            &conn,
            &group.id,
            &NoteCreateParams {
                color: Some("pink"),
                x: 1.0,
                y: 2.0,
                ..NoteCreateParams::default()
            },
        )
        .unwrap();

        assert_eq!(note.color, "#FBCFE8");
        assert_eq!(note.width, DEFAULT_NOTE_WIDTH);
        assert_eq!(note.height, DEFAULT_NOTE_HEIGHT);
        assert_eq!(note.z_index, 0);
    }

    #[test]
    fn create_note_requires_membership_when_author_given() {
        let mut conn = setup();
        let owner = sato(&conn);
        let outsider =
            BoardService::create_account(&conn, "Tanaka", "tanaka@example.com", "secret1")
                .unwrap();
        let group = BoardService::create_group(&mut conn, "study", &owner.id).unwrap();

        // Owner may post.
        let params = NoteCreateParams {
            created_by: Some(&owner.id),
            ..note_at(0)
        };
        assert!(BoardService::create_note(&conn, &group.id, &params).is_ok());

        // Non-member may not.
        let params = NoteCreateParams {
            created_by: Some(&outsider.id),
            ..note_at(0)
        };
        let err = BoardService::create_note(&conn, &group.id, &params).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // Anonymous notes are allowed.
        assert!(BoardService::create_note(&conn, &group.id, &note_at(0)).is_ok());
    }

    #[test]
    fn list_notes_is_paint_ordered() {
        let mut conn = setup();
        let account = sato(&conn);
        let group = BoardService::create_group(&mut conn, "study", &account.id).unwrap();

        let back = BoardService::create_note(&conn, &group.id, &note_at(9)).unwrap();
        let front = BoardService::create_note(&conn, &group.id, &note_at(1)).unwrap();
        let middle = BoardService::create_note(&conn, &group.id, &note_at(5)).unwrap();

        let notes = BoardService::list_notes(&conn, &group.id).unwrap();
        let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec![front.id.as_str(), middle.id.as_str(), back.id.as_str()]);
    }

    #[test]
    fn clear_notes_is_scoped_to_the_group() {
        let mut conn = setup();
        let account = sato(&conn);
        let group_a = BoardService::create_group(&mut conn, "a", &account.id).unwrap();
        let group_b = BoardService::create_group(&mut conn, "b", &account.id).unwrap();

        BoardService::create_note(&conn, &group_a.id, &note_at(0)).unwrap();
        BoardService::create_note(&conn, &group_a.id, &note_at(1)).unwrap();
        let survivor = BoardService::create_note(&conn, &group_b.id, &note_at(0)).unwrap();

        let removed = BoardService::clear_notes(&conn, &group_a.id).unwrap();
        assert_eq!(removed, 2);
        assert!(BoardService::list_notes(&conn, &group_a.id).unwrap().is_empty());

        let remaining = BoardService::list_notes(&conn, &group_b.id).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, survivor.id);
    }

    #[test]
    fn delete_note_twice_is_not_found() {
        let mut conn = setup();
        let account = sato(&conn);
        let group = BoardService::create_group(&mut conn, "study", &account.id).unwrap();
        let note = BoardService::create_note(&conn, &group.id, &note_at(0)).unwrap();

        BoardService::delete_note(&conn, &note.id).unwrap();
        let err = BoardService::delete_note(&conn, &note.id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn note_updates_round_trip() {
        let mut conn = setup();
        let account = sato(&conn);
        let group = BoardService::create_group(&mut conn, "study", &account.id).unwrap();
        let note = BoardService::create_note(&conn, &group.id, &note_at(0)).unwrap();

        BoardService::update_note_content(&conn, &note.id, Some("title"), Some("body"), None)
            .unwrap();
        BoardService::update_note_layout(&conn, &note.id, 50.0, 60.0, None, None, Some(3))
            .unwrap();

        let fetched = BoardService::get_note(&conn, &note.id).unwrap();
        assert_eq!(fetched.title.as_deref(), Some("title"));
        assert_eq!(fetched.x, 50.0);
        assert_eq!(fetched.z_index, 3);

        let err = BoardService::update_note_content(&conn, "note_missing", None, None, None)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    // Summaries ──────────────────────────────────────────────────────────

    #[test]
    fn summaries_round_trip() {
        let conn = setup();
        let stored = BoardService::store_summary(&conn, "input", "- summary").unwrap();
        let fetched = BoardService::get_summary(&conn, &stored.id).unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(BoardService::list_summaries(&conn).unwrap().len(), 1);
        assert!(BoardService::get_summary(&conn, "sum_missing").unwrap_err().is_not_found());
    }

    // Diagnostics ────────────────────────────────────────────────────────

    #[test]
    fn counts_cover_all_tables() {
        let mut conn = setup();
        let account = sato(&conn);
        let group = BoardService::create_group(&mut conn, "study", &account.id).unwrap();
        BoardService::create_note(&conn, &group.id, &note_at(0)).unwrap();
        BoardService::store_summary(&conn, "a", "b").unwrap();

        let counts = BoardService::counts(&conn).unwrap();
        assert_eq!(counts.accounts, 1);
        assert_eq!(counts.groups, 1);
        assert_eq!(counts.notes, 1);
        assert_eq!(counts.summaries, 1);
    }
}
