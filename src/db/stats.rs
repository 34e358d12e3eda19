use crate::db::queries::EntryFilter;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::models::MoodLabel;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW, color_for_mood};
use std::fs;

pub fn print_db_info(store: &EntryStore) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let db_path = store.path();
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL ENTRIES
    //
    let count = store.count()?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let bounds = store.date_bounds()?;
    let (fmt_first, fmt_last) = match bounds {
        Some((f, l)) => (f.to_string(), l.to_string()),
        None => (format!("{GREY}--{RESET}"), format!("{GREY}--{RESET}")),
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE ENTRIES/DAY
    //
    if let Some((f, l)) = bounds {
        let days = (l - f).num_days().max(1);
        let avg = count as f64 / days as f64;
        println!("{}• Average entries/day:{} {:.2}", CYAN, RESET, avg);
    }

    //
    // 5) ENTRIES PER MOOD
    //
    if count > 0 {
        println!("{}• Entries per mood:{}", CYAN, RESET);
        for mood in MoodLabel::ALL {
            let filter = EntryFilter {
                mood: Some(mood),
                ..Default::default()
            };
            let n = store.query(&filter)?.len();
            println!(
                "    {}{:<14}{} {}",
                color_for_mood(mood),
                mood.as_str(),
                RESET,
                n
            );
        }
    }

    println!();
    Ok(())
}
