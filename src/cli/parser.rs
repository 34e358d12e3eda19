use crate::core::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rMoodlog
/// CLI application to analyse journal entries with SQLite
#[derive(Parser)]
#[command(
    name = "rmoodlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A journaling analytics CLI: import entries, score their sentiment and explore mood trends using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Entry selection shared by `list` and `stats`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Period: YYYY, YYYY-MM, YYYY-MM-DD or START:END of the same form
    #[arg(long)]
    pub period: Option<String>,

    /// First date included (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last date included (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Mood label (e.g. positive, very-negative, "Very Positive")
    #[arg(long)]
    pub mood: Option<String>,

    /// Case-insensitive text searched in title, content and keywords
    #[arg(long)]
    pub keyword: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import a CSV export or a directory of Markdown files
    Import {
        /// CSV file (date,title,content) or Markdown directory
        path: String,

        /// Treat PATH as a Markdown directory
        #[arg(long)]
        markdown: bool,

        /// Replace every stored entry instead of appending
        #[arg(long)]
        replace: bool,
    },

    /// Convert a directory of Markdown files into a CSV file
    Convert {
        /// Markdown directory
        dir: String,

        /// Output CSV file
        #[arg(long = "out", short = 'o')]
        out: String,

        /// Overwrite the output file without asking
        #[arg(long)]
        force: bool,
    },

    /// List stored entries
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Show content and keywords for each entry
        #[arg(long)]
        details: bool,
    },

    /// Show mood statistics for the selected entries
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of common keywords to show (default from config)
        #[arg(long)]
        top: Option<usize>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a piece of text without storing it
    Score {
        /// Text to analyse
        text: String,
    },

    /// Export analysed entries
    Export {
        /// Output format
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Output file path
        #[arg(long)]
        file: String,

        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or START:END of the same form
        #[arg(long)]
        range: Option<String>,

        /// Only entries with this mood label
        #[arg(long)]
        mood: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long)]
        force: bool,
    },
}
