use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a date given on the command line, or fail with `InvalidDate`.
pub fn parse_cli_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Parse a period (year / month / day / interval) into inclusive bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bad = |msg: &str| AppError::InvalidRange(format!("{msg}: '{r}'"));

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(bad("start and end must have same format"));
            }
            (period_start(s), period_end(e))
        }
        None => (period_start(r.trim()), period_end(r.trim())),
    };

    let start = start.ok_or_else(|| bad("invalid period start"))?;
    let end = end.ok_or_else(|| bad("invalid period end"))?;

    if start > end {
        return Err(bad("period start is after its end"));
    }

    Ok((start, end))
}

/// First day covered by a YYYY / YYYY-MM / YYYY-MM-DD token.
fn period_start(p: &str) -> Option<NaiveDate> {
    match p.len() {
        4 => NaiveDate::from_ymd_opt(p.parse().ok()?, 1, 1),
        7 => {
            let (y, m) = year_month(p)?;
            NaiveDate::from_ymd_opt(y, m, 1)
        }
        10 => parse_date(p),
        _ => None,
    }
}

/// Last day covered by a YYYY / YYYY-MM / YYYY-MM-DD token.
fn period_end(p: &str) -> Option<NaiveDate> {
    match p.len() {
        4 => NaiveDate::from_ymd_opt(p.parse().ok()?, 12, 31),
        7 => {
            let (y, m) = year_month(p)?;
            NaiveDate::from_ymd_opt(y, m, month_last_day(y, m)?)
        }
        10 => parse_date(p),
        _ => None,
    }
}

fn year_month(p: &str) -> Option<(i32, u32)> {
    let (y, m) = p.split_once('-')?;
    Some((y.parse().ok()?, m.parse().ok()?))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
