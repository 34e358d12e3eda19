use crate::analysis::Analyzer;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::RawEntry;
use crate::utils::colors::{RESET, color_for_mood, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::fmt_polarity;

/// Handle the `score` command: analyse text without touching the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Score { text } = cmd {
        let analyzer = Analyzer::from_config(cfg);
        let entry = analyzer.enrich(RawEntry {
            date: date::today(),
            title: String::new(),
            content: text.clone(),
            source: "argument".to_string(),
        });

        println!("Polarity     : {}", fmt_polarity(entry.polarity));
        println!("Subjectivity : {:.3}", entry.subjectivity);
        println!(
            "Mood         : {}{}{}",
            color_for_mood(entry.mood),
            entry.mood,
            RESET
        );
        let keywords = if entry.keywords.is_empty() {
            "--".to_string()
        } else {
            entry.keywords.join(", ")
        };
        println!("Keywords     : {}", colorize_optional(&keywords));
    }

    Ok(())
}
