use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::models::JournalEntry;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::{bold, fmt_polarity};
use crate::utils::table::{Column, Table};

const DETAILS_WIDTH: usize = 78;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, details } = cmd {
        let filter = build_filter(filter)?;

        let store = EntryStore::open(&cfg.database)?;
        let entries = store.query(&filter)?;
        store.close()?;

        if entries.is_empty() {
            info("No entries found for the selected filters.");
            return Ok(());
        }

        if *details {
            print_details(&entries);
        } else {
            print_table(&entries);
        }

        println!("{} entries", entries.len());
    }
    Ok(())
}

fn print_table(entries: &[JournalEntry]) {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("Date", 10),
        Column::new("Title", 32),
        Column::new("Polarity", 8),
        Column::new("Mood", 13),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.map(|id| id.to_string()).unwrap_or_default(),
            e.date_str(),
            e.display_title().to_string(),
            fmt_polarity(e.polarity),
            e.mood.to_string(),
        ]);
    }

    print!("{}", table.render());
}

fn print_details(entries: &[JournalEntry]) {
    for e in entries {
        println!(
            "{}  {}",
            bold(&e.date_str()),
            bold(e.display_title())
        );
        println!(
            "   polarity {}  subjectivity {:.3}  mood {}",
            fmt_polarity(e.polarity),
            e.subjectivity,
            e.mood
        );

        if !e.keywords.is_empty() {
            println!("   {GREY}keywords: {}{RESET}", e.keywords.join(", "));
        }

        let opts = textwrap::Options::new(DETAILS_WIDTH)
            .initial_indent("   ")
            .subsequent_indent("   ");
        for line in textwrap::wrap(e.content.trim(), &opts) {
            println!("{line}");
        }
        println!();
    }
}
