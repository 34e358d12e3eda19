//! rMoodlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Score { .. } => cli::commands::score::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // --db overrides the configured database, resolved like `init` does
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
