use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::convert::ConvertLogic;
use crate::db::EntryStore;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert { dir, out, force } = cmd {
        let outcome = ConvertLogic::convert_markdown(Path::new(dir), Path::new(out), *force)?;

        // the conversion itself never touches the store; only the audit row does
        let logged = EntryStore::open(&cfg.database).and_then(|store| {
            log::audit(
                &store.conn,
                "convert",
                out,
                &format!(
                    "{} files converted from {} ({} skipped)",
                    outcome.converted, dir, outcome.skipped
                ),
            )?;
            store.close()
        });
        if let Err(e) = logged {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}
