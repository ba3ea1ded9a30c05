//! Summary repository — the independent legacy summary resource.
//!
//! List + detail + create only; summaries are never updated or deleted.

use corkboard_core::errors::Result;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::row_types::SummaryRow;

/// Options for storing a summary.
pub struct CreateSummaryOptions<'a> {
    /// Text that was summarized.
    pub input_text: &'a str,
    /// Produced summary.
    pub summary: &'a str,
}

/// Summary repository — stateless, every method takes `&Connection`.
pub struct SummaryRepo;

impl SummaryRepo {
    /// Store a summary.
    pub fn create(conn: &Connection, opts: &CreateSummaryOptions<'_>) -> Result<SummaryRow> {
        let id = format!("sum_{}", Uuid::now_v7());
        let now = chrono::Utc::now().to_rfc3339();
        let _ = conn.execute(
            "INSERT INTO summaries (id, input_text, summary, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, opts.input_text, opts.summary, now],
        )?;
        Ok(SummaryRow {
            id,
            input_text: opts.input_text.to_string(),
            summary: opts.summary.to_string(),
            created_at: now,
        })
    }

    /// Get summary by ID.
    pub fn get_by_id(conn: &Connection, summary_id: &str) -> Result<Option<SummaryRow>> {
        let row = conn
            .query_row(
                "SELECT id, input_text, summary, created_at
                 FROM summaries WHERE id = ?1",
                params![summary_id],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// List all summaries, newest first.
    pub fn list(conn: &Connection) -> Result<Vec<SummaryRow>> {
        let mut stmt = conn.prepare(
            "SELECT id, input_text, summary, created_at
             FROM summaries ORDER BY id DESC",
        )?;
        let rows = stmt
            .query_map([], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Count total summaries.
    pub fn count(conn: &Connection) -> Result<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM summaries", [], |row| row.get(0))?;
        Ok(count)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SummaryRow> {
        Ok(SummaryRow {
            id: row.get(0)?,
            input_text: row.get(1)?,
            summary: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
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
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn create_and_get() {
        let conn = setup();
        let summary = SummaryRepo::create(
            &conn,
            &CreateSummaryOptions {
                input_text: "long meeting transcript",
                summary: "- decided nothing",
            },
        )
        .unwrap();
        assert!(summary.id.starts_with("sum_"));

        let fetched = SummaryRepo::get_by_id(&conn, &summary.id).unwrap().unwrap();
        assert_eq!(fetched, summary);
        assert!(SummaryRepo::get_by_id(&conn, "sum_missing").unwrap().is_none());
    }

    #[test]
    fn list_is_newest_first() {
        let conn = setup();
        let first = SummaryRepo::create(
            &conn,
            &CreateSummaryOptions {
                input_text: "a",
                summary: "a'",
            },
        )
        .unwrap();
        let second = SummaryRepo::create(
            &conn,
            &CreateSummaryOptions {
                input_text: "b",
                summary: "b'",
            },
        )
        .unwrap();

        let all = SummaryRepo::list(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
        assert_eq!(SummaryRepo::count(&conn).unwrap(), 2);
    }
}
