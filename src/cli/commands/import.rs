use crate::analysis::Analyzer;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::IngestLogic;
use crate::db::{EntryStore, PutMode};
use crate::errors::AppResult;
use crate::ingest::SourceKind;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        path,
        markdown,
        replace,
    } = cmd
    {
        let source = Path::new(path);
        let kind = SourceKind::detect(source, *markdown);
        let mode = if *replace {
            PutMode::Replace
        } else {
            PutMode::Append
        };

        let analyzer = Analyzer::from_config(cfg);
        let mut store = EntryStore::open(&cfg.database)?;

        let outcome = IngestLogic::import(&mut store, &analyzer, source, kind, mode)?;
        println!("Inserted: {}", outcome.inserted);
        println!("Skipped:  {}", outcome.skipped);

        store.close()?;
    }
    Ok(())
}
