use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{DEFAULT_HISTOGRAM_BINS, StatsReport, build_report};
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::models::weekday::weekday_name;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_mood, color_for_polarity};
use crate::utils::formatting::{bar, fmt_polarity, pad_right};

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { filter, top, json } = cmd {
        let filter = build_filter(filter)?;

        let store = EntryStore::open(&cfg.database)?;
        let entries = store.query(&filter)?;
        let weekdays = store.aggregate_by_weekday(&filter)?;
        store.close()?;

        let top_n = top.unwrap_or(cfg.top_keywords);
        let report = build_report(&entries, weekdays, top_n, DEFAULT_HISTOGRAM_BINS);

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
    }
    Ok(())
}

fn print_report(r: &StatsReport) {
    let s = &r.summary;

    header("Summary");
    println!("Entries              : {}", s.total_entries);
    println!(
        "Average polarity     : {}{}{}",
        color_for_polarity(s.average_polarity),
        fmt_polarity(s.average_polarity),
        RESET
    );
    println!("Average subjectivity : {:.3}", s.average_subjectivity);
    match s.most_common_mood {
        Some(m) => println!(
            "Most common mood     : {}{}{}",
            color_for_mood(m),
            m,
            RESET
        ),
        None => println!("Most common mood     : --"),
    }
    println!("Span                 : {} days", s.span_days);

    if s.total_entries == 0 {
        return;
    }

    header("Mood distribution");
    let max = r
        .mood_distribution
        .iter()
        .map(|c| c.entries)
        .max()
        .unwrap_or(0) as f64;
    for c in &r.mood_distribution {
        println!(
            "{}{}{} {:>5} {}",
            color_for_mood(c.mood),
            pad_right(c.mood.as_str(), 14),
            RESET,
            c.entries,
            bar(c.entries as f64, max, BAR_WIDTH)
        );
    }

    header("Polarity histogram");
    let max = r
        .polarity_histogram
        .iter()
        .map(|b| b.entries)
        .max()
        .unwrap_or(0) as f64;
    for b in &r.polarity_histogram {
        println!(
            "[{:+.2}, {:+.2}) {:>5} {}",
            b.lower,
            b.upper,
            b.entries,
            bar(b.entries as f64, max, BAR_WIDTH)
        );
    }

    header("Average polarity by weekday");
    for w in &r.weekday_averages {
        println!(
            "{} {}{}{} ({} entries)",
            pad_right(weekday_name(w.weekday), 10),
            color_for_polarity(w.average_polarity),
            fmt_polarity(w.average_polarity),
            RESET,
            w.entries
        );
    }

    header("Monthly averages");
    for m in &r.monthly_averages {
        println!(
            "{} {}{}{} ({} entries)",
            m.month,
            color_for_polarity(m.average_polarity),
            fmt_polarity(m.average_polarity),
            RESET,
            m.entries
        );
    }

    if !r.common_keywords.is_empty() {
        header("Common keywords");
        let max = r.common_keywords[0].count as f64;
        for k in &r.common_keywords {
            println!(
                "{} {:>5} {}",
                pad_right(&k.keyword, 20),
                k.count,
                bar(k.count as f64, max, BAR_WIDTH)
            );
        }
    }
}
