//! Group repository — CRUD for the `groups` table.
//!
//! The owner-membership side of group creation is composed in the
//! service layer, inside one transaction.

use corkboard_core::errors::Result;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::row_types::{GroupRow, GroupWithRoleRow};

/// Options for creating a new group.
pub struct CreateGroupOptions<'a> {
    /// Display name.
    pub group_name: &'a str,
    /// Account creating the group.
    pub created_by: &'a str,
}

/// Group repository — stateless, every method takes `&Connection`.
pub struct GroupRepo;

impl GroupRepo {
    /// Create a new group.
    pub fn create(conn: &Connection, opts: &CreateGroupOptions<'_>) -> Result<GroupRow> {
        let id = format!("grp_{}", Uuid::now_v7());
        let now = chrono::Utc::now().to_rfc3339();
        let _ = conn.execute(
            "INSERT INTO groups (id, group_name, created_by, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, opts.group_name, opts.created_by, now],
        )?;
        Ok(GroupRow {
            id,
            group_name: opts.group_name.to_string(),
            created_by: opts.created_by.to_string(),
            created_at: now,
        })
    }

    /// Get group by ID.
    pub fn get_by_id(conn: &Connection, group_id: &str) -> Result<Option<GroupRow>> {
        let row = conn
            .query_row(
                "SELECT id, group_name, created_by, created_at
                 FROM groups WHERE id = ?1",
                params![group_id],
                |row| {
                    Ok(GroupRow {
                        id: row.get(0)?,
                        group_name: row.get(1)?,
                        created_by: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// List groups where the account holds a membership, annotated with
    /// that account's role, in group id order.
    pub fn list_for_account(conn: &Connection, account_id: &str) -> Result<Vec<GroupWithRoleRow>> {
        let mut stmt = conn.prepare(
            "SELECT g.id, g.group_name, g.created_by, g.created_at, m.role
             FROM groups g
             INNER JOIN memberships m ON m.group_id = g.id
             WHERE m.account_id = ?1
             ORDER BY g.id ASC",
        )?;
        let rows = stmt
            .query_map(params![account_id], |row| {
                Ok(GroupWithRoleRow {
                    id: row.get(0)?,
                    group_name: row.get(1)?,
                    created_by: row.get(2)?,
                    created_at: row.get(3)?,
                    role: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Check if a group exists.
    pub fn exists(conn: &Connection, group_id: &str) -> Result<bool> {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM groups WHERE id = ?1)",
            params![group_id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Count total groups.
    pub fn count(conn: &Connection) -> Result<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM groups", [], |row| row.get(0))?;
        Ok(count)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
