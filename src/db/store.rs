//! SQLite-backed entry store, opened and closed explicitly per command.

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct EntryStore {
    pub conn: Connection,
    path: String,
}

impl EntryStore {
    /// Open (or create) the store file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(p)?;
        run_pending_migrations(&conn)?;

        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;

        Ok(Self {
            conn,
            path: ":memory:".to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Close the underlying connection, surfacing any pending error.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}
