//! Database Connection and Setup
//!
//! Manages the SQLite connection and schema migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Path value that selects a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Shared database handle
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Connection>>,
}

impl DbState {
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }
}

/// Open the database at `db_path` and bring its schema up to date
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let opened = if db_path == Path::new(IN_MEMORY) {
        Connection::open_in_memory()
    } else {
        Connection::open(db_path)
    };
    let conn = opened
        .map_err(|e| DomainError::Internal(format!("Failed to open {}: {}", db_path.display(), e)))?;

    run_migrations(&conn)?;
    tracing::debug!(path = %db_path.display(), "database ready");

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS todo_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            mark INTEGER NOT NULL DEFAULT 0,
            parent_id INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_todo_items_parent ON todo_items(parent_id);",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let state = init_db(Path::new(IN_MEMORY)).await.unwrap();
        let conn = state.conn.lock().await;
        run_migrations(&conn).expect("second run should be a no-op");

        conn.execute("INSERT INTO todo_items (text, parent_id) VALUES ('a', NULL)", [])
            .unwrap();
        let mark: bool = conn
            .query_row("SELECT mark FROM todo_items WHERE text = 'a'", [], |row| row.get(0))
            .unwrap();
        assert!(!mark);
    }
}
