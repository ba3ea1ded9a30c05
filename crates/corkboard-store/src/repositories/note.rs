//! Note repository — CRUD for the `notes` table.
//!
//! A note belongs to exactly one group for its whole life; there is no
//! cross-group reassignment, so `group_id` is written once at insert.
//! Listing follows paint order: `z_index` ascending, then id.

use corkboard_core::errors::Result;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::row_types::NoteRow;

/// Options for creating a new note.
pub struct CreateNoteOptions<'a> {
    /// Owning group.
    pub group_id: &'a str,
    /// Optional title.
    pub title: Option<&'a str>,
    /// Optional body.
    pub content: Option<&'a str>,
    /// Normalized `#RRGGBB` color.
    pub color: &'a str,
    /// Board x position.
    pub x: f64,
    /// Board y position.
    pub y: f64,
    /// Width in board units.
    pub width: f64,
    /// Height in board units.
    pub height: f64,
    /// Paint order.
    pub z_index: i64,
    /// Posting account, if recorded.
    pub created_by: Option<&'a str>,
    /// Whether other members may edit.
    pub can_edit: bool,
}

/// Note repository — stateless, every method takes `&Connection`.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a new note.
    pub fn create(conn: &Connection, opts: &CreateNoteOptions<'_>) -> Result<NoteRow> {
        let id = format!("note_{}", Uuid::now_v7());
        let now = chrono::Utc::now().to_rfc3339();
        let _ = conn.execute(
            "INSERT INTO notes (id, group_id, title, content, color, x, y, width, height,
                                z_index, created_by, can_edit, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                id,
                opts.group_id,
                opts.title,
                opts.content,
                opts.color,
                opts.x,
                opts.y,
                opts.width,
                opts.height,
                opts.z_index,
                opts.created_by,
                opts.can_edit,
                now,
                now
            ],
        )?;
        Ok(NoteRow {
            id,
            group_id: opts.group_id.to_string(),
            title: opts.title.map(String::from),
            content: opts.content.map(String::from),
            color: opts.color.to_string(),
            x: opts.x,
            y: opts.y,
            width: opts.width,
            height: opts.height,
            z_index: opts.z_index,
            created_by: opts.created_by.map(String::from),
            can_edit: opts.can_edit,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Get note by ID.
    pub fn get_by_id(conn: &Connection, note_id: &str) -> Result<Option<NoteRow>> {
        let row = conn
            .query_row(
                "SELECT id, group_id, title, content, color, x, y, width, height,
                        z_index, created_by, can_edit, created_at, updated_at
                 FROM notes WHERE id = ?1",
                params![note_id],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// List a group's notes in paint order (`z_index` ascending, then id).
    pub fn list_for_group(conn: &Connection, group_id: &str) -> Result<Vec<NoteRow>> {
        let mut stmt = conn.prepare(
            "SELECT id, group_id, title, content, color, x, y, width, height,
                    z_index, created_by, can_edit, created_at, updated_at
             FROM notes WHERE group_id = ?1
             ORDER BY z_index ASC, id ASC",
        )?;
        let rows = stmt
            .query_map(params![group_id], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Update title/content/color. Returns `true` if a row was updated.
    pub fn update_content(
        conn: &Connection,
        note_id: &str,
        title: Option<&str>,
        content: Option<&str>,
        color: &str,
    ) -> Result<bool> {
        let now = chrono::Utc::now().to_rfc3339();
        let changed = conn.execute(
            "UPDATE notes SET title = ?1, content = ?2, color = ?3, updated_at = ?4
             WHERE id = ?5",
            params![title, content, color, now, note_id],
        )?;
        Ok(changed > 0)
    }

    /// Update the spatial layout. Returns `true` if a row was updated.
    pub fn update_layout(
        conn: &Connection,
        note_id: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        z_index: i64,
    ) -> Result<bool> {
        let now = chrono::Utc::now().to_rfc3339();
        let changed = conn.execute(
            "UPDATE notes SET x = ?1, y = ?2, width = ?3, height = ?4, z_index = ?5,
                              updated_at = ?6
             WHERE id = ?7",
            params![x, y, width, height, z_index, now, note_id],
        )?;
        Ok(changed > 0)
    }

    /// Delete one note. Returns `true` if a row was deleted.
    pub fn delete(conn: &Connection, note_id: &str) -> Result<bool> {
        let changed = conn.execute("DELETE FROM notes WHERE id = ?1", params![note_id])?;
        Ok(changed > 0)
    }

    /// Delete every note in a group. Returns the number removed.
    pub fn delete_for_group(conn: &Connection, group_id: &str) -> Result<usize> {
        let removed = conn.execute("DELETE FROM notes WHERE group_id = ?1", params![group_id])?;
        Ok(removed)
    }

    /// Count total notes.
    pub fn count(conn: &Connection) -> Result<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<NoteRow> {
        Ok(NoteRow {
            id: row.get(0)?,
            group_id: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
            color: row.get(4)?,
            x: row.get(5)?,
            y: row.get(6)?,
            width: row.get(7)?,
            height: row.get(8)?,
            z_index: row.get(9)?,
            created_by: row.get(10)?,
            can_edit: row.get(11)?,
            created_at: row.get(12)?,
            updated_at: row.get(13)?,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
