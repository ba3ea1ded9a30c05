//! Schema migrations, tracked via `PRAGMA user_version`.
//!
//! Each entry in [`MIGRATIONS`] is a forward-only batch. On open, every
//! batch past the recorded version runs inside a transaction and the
//! version is bumped. Batches never change once released; schema
//! evolution appends new entries.

use corkboard_core::errors::Result;
use rusqlite::Connection;

/// Forward-only migration batches, applied in order.
const MIGRATIONS: &[&str] = &[
    // v1: initial schema — accounts, groups, memberships, notes, summaries.
    "CREATE TABLE accounts (
         id            TEXT PRIMARY KEY,
         name          TEXT NOT NULL,
         email         TEXT NOT NULL UNIQUE,
         password_hash TEXT NOT NULL,
         created_at    TEXT NOT NULL
     );

     CREATE TABLE groups (
         id         TEXT PRIMARY KEY,
         group_name TEXT NOT NULL,
         created_by TEXT NOT NULL REFERENCES accounts(id) ON DELETE RESTRICT,
         created_at TEXT NOT NULL
     );

     CREATE TABLE memberships (
         id         TEXT PRIMARY KEY,
         group_id   TEXT NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
         account_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
         role       TEXT NOT NULL DEFAULT 'member' CHECK (role IN ('owner', 'member')),
         joined_at  TEXT NOT NULL,
         UNIQUE (group_id, account_id)
     );

     CREATE INDEX idx_memberships_account ON memberships(account_id);

     CREATE TABLE notes (
         id         TEXT PRIMARY KEY,
         group_id   TEXT NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
         title      TEXT,
         content    TEXT,
         color      TEXT NOT NULL DEFAULT '#FFFF88',
         x          REAL NOT NULL,
         y          REAL NOT NULL,
         width      REAL NOT NULL DEFAULT 200,
         height     REAL NOT NULL DEFAULT 150,
         z_index    INTEGER NOT NULL DEFAULT 0,
         created_by TEXT REFERENCES accounts(id) ON DELETE SET NULL,
         can_edit   INTEGER NOT NULL DEFAULT 0,
         created_at TEXT NOT NULL,
         updated_at TEXT NOT NULL
     );

     CREATE INDEX idx_notes_group ON notes(group_id, z_index);

     CREATE TABLE summaries (
         id         TEXT PRIMARY KEY,
         input_text TEXT NOT NULL,
         summary    TEXT NOT NULL,
         created_at TEXT NOT NULL
     );",
];

/// Apply all pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    for (index, batch) in MIGRATIONS.iter().enumerate() {
        let version = index as i64 + 1;
        if version <= current {
            continue;
        }
        conn.execute_batch(&format!(
            "BEGIN;
             {batch}
             PRAGMA user_version = {version};
             COMMIT;"
        ))?;
        tracing::debug!(version, "applied migration");
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
