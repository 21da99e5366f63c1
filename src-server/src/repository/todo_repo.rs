//! Todo Repository
//!
//! SQLite-backed implementation of todo create, list, delete and marking.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{normalize_text, DomainError, DomainResult, Todo};
use super::traits::{MarkableRepository, Repository};

const SELECT_TODO: &str = "SELECT id, text, mark, parent_id FROM todo_items";

/// SQLite implementation of Todo repository
#[derive(Clone)]
pub struct TodoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TodoRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        let text = normalize_text(&entity.text)?;
        let conn = self.conn.lock().await;

        if let Some(parent_id) = entity.parent_id {
            if !exists(&conn, parent_id)? {
                return Err(DomainError::InvalidInput(format!(
                    "parent {} does not exist",
                    parent_id
                )));
            }
        }

        conn.execute(
            "INSERT INTO todo_items (text, mark, parent_id) VALUES (?1, 0, ?2)",
            params![text, entity.parent_id],
        )?;
        let id = u32::try_from(conn.last_insert_rowid())
            .map_err(|e| DomainError::Internal(format!("rowid out of range: {}", e)))?;

        Ok(Todo {
            id,
            text,
            mark: false,
            parent_id: entity.parent_id,
        })
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_TODO))?;
        let rows = stmt.query_map([], row_to_todo)?;
        let todos = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        // Manual cascade: remove all descendants first
        tx.execute(
            "DELETE FROM todo_items WHERE id IN (
                WITH RECURSIVE descendants AS (
                    SELECT id FROM todo_items WHERE parent_id = ?1
                    UNION ALL
                    SELECT t.id FROM todo_items t
                    JOIN descendants d ON t.parent_id = d.id
                )
                SELECT id FROM descendants
            )",
            params![id],
        )?;
        let removed = tx.execute("DELETE FROM todo_items WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(DomainError::NotFound(format!("todo {}", id)));
        }

        tx.commit()?;
        Ok(())
    }
}

#[async_trait]
impl MarkableRepository<Todo> for TodoRepository {
    async fn set_mark(&self, id: u32, mark: bool) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE todo_items SET mark = ?1 WHERE id = ?2",
            params![mark, id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("todo {}", id)));
        }
        Ok(())
    }
}

fn exists(conn: &Connection, id: u32) -> DomainResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM todo_items WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Convert a database row to Todo
fn row_to_todo(row: &rusqlite::Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        text: row.get(1)?,
        mark: row.get(2)?,
        parent_id: row.get(3)?,
    })
}
