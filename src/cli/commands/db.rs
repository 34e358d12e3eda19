use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::EntryStore;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // opening the store already applies pending migrations, so look
        // at what is pending on a bare connection first
        let pending = if *migrate && Path::new(&cfg.database).exists() {
            let conn = rusqlite::Connection::open(&cfg.database)?;
            pending_migrations(&conn)?
        } else {
            Vec::new()
        };

        let store = EntryStore::open(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let applied = run_pending_migrations(&store.conn)?;
            for version in pending.iter().chain(applied.iter()) {
                println!("  • applied {}", version);
            }
            if pending.is_empty() && applied.is_empty() {
                println!("  • schema already up to date");
            }
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&store)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = store
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        store.close()?;
    }

    Ok(())
}
