//! Membership repository — the `(group, account)` link table.
//!
//! INVARIANT: at most one row per `(group_id, account_id)` pair,
//! enforced by the UNIQUE constraint. Rejoining upserts the role
//! (last write wins) so concurrent joins resolve deterministically.

use corkboard_core::errors::Result;
use corkboard_core::Role;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::row_types::MembershipRow;

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertMembershipOutcome {
    /// A new membership row was inserted.
    Inserted,
    /// An existing row's role was updated.
    Updated,
}

/// Membership repository — stateless, every method takes `&Connection`.
pub struct MembershipRepo;

impl MembershipRepo {
    /// Insert the membership, or update the role when the pair already
    /// exists.
    pub fn upsert(
        conn: &Connection,
        group_id: &str,
        account_id: &str,
        role: Role,
    ) -> Result<(MembershipRow, UpsertMembershipOutcome)> {
        let existing = Self::get(conn, group_id, account_id)?;
        let id = format!("mem_{}", Uuid::now_v7());
        let now = chrono::Utc::now().to_rfc3339();
        let _ = conn.execute(
            "INSERT INTO memberships (id, group_id, account_id, role, joined_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (group_id, account_id) DO UPDATE SET role = excluded.role",
            params![id, group_id, account_id, role.as_sql(), now],
        )?;

        let outcome = if existing.is_some() {
            UpsertMembershipOutcome::Updated
        } else {
            UpsertMembershipOutcome::Inserted
        };
        let row = Self::get(conn, group_id, account_id)?.ok_or_else(|| {
            corkboard_core::DomainError::internal("membership row missing after upsert")
        })?;
        Ok((row, outcome))
    }

    /// Get the membership for a `(group, account)` pair.
    pub fn get(
        conn: &Connection,
        group_id: &str,
        account_id: &str,
    ) -> Result<Option<MembershipRow>> {
        let row = conn
            .query_row(
                "SELECT id, group_id, account_id, role, joined_at
                 FROM memberships WHERE group_id = ?1 AND account_id = ?2",
                params![group_id, account_id],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// List all memberships of a group, oldest join first.
    pub fn list_for_group(conn: &Connection, group_id: &str) -> Result<Vec<MembershipRow>> {
        let mut stmt = conn.prepare(
            "SELECT id, group_id, account_id, role, joined_at
             FROM memberships WHERE group_id = ?1
             ORDER BY joined_at ASC, id ASC",
        )?;
        let rows = stmt
            .query_map(params![group_id], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Check whether the account holds a membership in the group.
    pub fn is_member(conn: &Connection, group_id: &str, account_id: &str) -> Result<bool> {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM memberships WHERE group_id = ?1 AND account_id = ?2)",
            params![group_id, account_id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MembershipRow> {
        Ok(MembershipRow {
            id: row.get(0)?,
            group_id: row.get(1)?,
            account_id: row.get(2)?,
            role: row.get(3)?,
            joined_at: row.get(4)?,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
