use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::{EntryFilter, EntryStore};
use crate::errors::AppResult;
use crate::models::MoodLabel;
use crate::utils::date::parse_period;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        mood,
        force,
    } = cmd
    {
        let (from, to) = match range {
            Some(r) => {
                let (s, e) = parse_period(r)?;
                (Some(s), Some(e))
            }
            None => (None, None),
        };

        let filter = EntryFilter {
            from,
            to,
            mood: mood.as_deref().map(MoodLabel::from_cli).transpose()?,
            keyword: None,
        };

        let store = EntryStore::open(&cfg.database)?;
        ExportLogic::export(&store, *format, Path::new(file), &filter, *force)?;
        store.close()?;
    }
    Ok(())
}
