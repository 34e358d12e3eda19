//! Versioned schema migrations.
//!
//! Every applied migration is recorded in the `log` table as
//! `migration_applied` with its version as target, so running the
//! migrations again is a no-op.

use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_journal_entries",
        description: "Created journal_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS journal_entries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL,
            title         TEXT NOT NULL DEFAULT '',
            content       TEXT NOT NULL,
            polarity      REAL NOT NULL DEFAULT 0.0,
            subjectivity  REAL NOT NULL DEFAULT 0.0,
            mood          TEXT NOT NULL DEFAULT 'Neutral'
                          CHECK(mood IN ('Very Negative','Negative','Neutral','Positive','Very Positive')),
            keywords      TEXT NOT NULL DEFAULT '[]',
            created_at    TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250301_0002_index_journal_entries",
        description: "Added date/polarity/mood indexes",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_entries_date ON journal_entries(date);
        CREATE INDEX IF NOT EXISTS idx_entries_polarity ON journal_entries(polarity);
        CREATE INDEX IF NOT EXISTS idx_entries_mood ON journal_entries(mood);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()
}

/// Public entry point: run all pending migrations.
///
/// Returns the versions applied by this call (empty when up to date).
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}

/// Versions known to this build that are not yet recorded as applied.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut pending = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending.push(m.version);
        }
    }
    Ok(pending)
}
