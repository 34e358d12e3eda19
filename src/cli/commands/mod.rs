pub mod config;
pub mod convert;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod score;
pub mod stats;

use crate::cli::parser::FilterArgs;
use crate::db::EntryFilter;
use crate::errors::{AppError, AppResult};
use crate::models::MoodLabel;
use crate::utils::date::{parse_cli_date, parse_period};

/// Turn `--period/--from/--to/--mood/--keyword` into a store filter.
///
/// `--from`/`--to` narrow a `--period` further; an inverted range is an error.
pub(crate) fn build_filter(args: &FilterArgs) -> AppResult<EntryFilter> {
    let (mut from, mut to) = match &args.period {
        Some(p) => {
            let (s, e) = parse_period(p)?;
            (Some(s), Some(e))
        }
        None => (None, None),
    };

    if let Some(f) = &args.from {
        let d = parse_cli_date(f)?;
        from = Some(from.map_or(d, |cur| cur.max(d)));
    }
    if let Some(t) = &args.to {
        let d = parse_cli_date(t)?;
        to = Some(to.map_or(d, |cur| cur.min(d)));
    }

    if let (Some(f), Some(t)) = (from, to)
        && f > t
    {
        return Err(AppError::InvalidRange(format!("{f} is after {t}")));
    }

    let mood = args.mood.as_deref().map(MoodLabel::from_cli).transpose()?;
    let keyword = args
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string);

    Ok(EntryFilter {
        from,
        to,
        mood,
        keyword,
    })
}
