//! Connection pool over `rusqlite`.
//!
//! Every pooled connection runs the same init batch: WAL journal,
//! foreign keys on, and a busy timeout so concurrent writers back off
//! instead of failing immediately.

use std::path::Path;

use corkboard_core::errors::{DomainError, Result};
use r2d2_sqlite::SqliteConnectionManager;

use crate::migrations::run_migrations;

/// Pool of SQLite connections.
pub type ConnectionPool = r2d2::Pool<SqliteConnectionManager>;
/// A connection checked out of the pool.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

const INIT_BATCH: &str = "PRAGMA journal_mode = WAL;
     PRAGMA foreign_keys = ON;
     PRAGMA busy_timeout = 5000;";

/// Open (or create) the database at `path`, run migrations, and return
/// a connection pool.
pub fn open_pool(path: &Path) -> Result<ConnectionPool> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(DomainError::internal)?;
        }
    }

    let manager = SqliteConnectionManager::file(path)
        .with_init(|conn| conn.execute_batch(INIT_BATCH));
    let pool = r2d2::Pool::builder()
        .max_size(8)
        .build(manager)
        .map_err(DomainError::internal)?;

    let conn = pool.get().map_err(DomainError::internal)?;
    run_migrations(&conn)?;
    tracing::info!(path = %path.display(), "database opened");
    Ok(pool)
}

/// In-memory pool for tests. Single connection so every checkout sees
/// the same database.
pub fn open_memory_pool() -> Result<ConnectionPool> {
    let manager = SqliteConnectionManager::memory()
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(DomainError::internal)?;

    let conn = pool.get().map_err(DomainError::internal)?;
    run_migrations(&conn)?;
    Ok(pool)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
