//! Account repository — CRUD for the `accounts` table.
//!
//! Emails are unique; a duplicate insert surfaces as
//! [`DomainError::Conflict`] rather than a raw constraint error.

use corkboard_core::errors::{DomainError, Result};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::row_types::AccountRow;

/// Options for creating a new account.
pub struct CreateAccountOptions<'a> {
    /// Display name.
    pub name: &'a str,
    /// Unique email.
    pub email: &'a str,
    /// Already-hashed credential.
    pub password_hash: &'a str,
}

/// Account repository — stateless, every method takes `&Connection`.
pub struct AccountRepo;

impl AccountRepo {
    /// Create a new account. Duplicate email → Conflict.
    pub fn create(conn: &Connection, opts: &CreateAccountOptions<'_>) -> Result<AccountRow> {
        let id = format!("acc_{}", Uuid::now_v7());
        let now = chrono::Utc::now().to_rfc3339();
        let inserted = conn.execute(
            "INSERT INTO accounts (id, name, email, password_hash, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, opts.name, opts.email, opts.password_hash, now],
        );
        match inserted {
            Ok(_) => Ok(AccountRow {
                id,
                name: opts.name.to_string(),
                email: opts.email.to_string(),
                password_hash: opts.password_hash.to_string(),
                created_at: now,
            }),
            Err(e) if is_unique_violation(&e) => Err(DomainError::conflict(format!(
                "email '{}' is already registered",
                opts.email
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Get account by ID.
    pub fn get_by_id(conn: &Connection, account_id: &str) -> Result<Option<AccountRow>> {
        let row = conn
            .query_row(
                "SELECT id, name, email, password_hash, created_at
                 FROM accounts WHERE id = ?1",
                params![account_id],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// Get account by email.
    pub fn get_by_email(conn: &Connection, email: &str) -> Result<Option<AccountRow>> {
        let row = conn
            .query_row(
                "SELECT id, name, email, password_hash, created_at
                 FROM accounts WHERE email = ?1",
                params![email],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// List all accounts in id order (ids are UUIDv7-based, so this is
    /// creation order and stable).
    pub fn list(conn: &Connection) -> Result<Vec<AccountRow>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, email, password_hash, created_at
             FROM accounts ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map([], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Check if an account exists.
    pub fn exists(conn: &Connection, account_id: &str) -> Result<bool> {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE id = ?1)",
            params![account_id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Count total accounts.
    pub fn count(conn: &Connection) -> Result<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))?;
        Ok(count)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AccountRow> {
        Ok(AccountRow {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
