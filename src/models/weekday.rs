use chrono::Weekday;
use serde::{Serialize, Serializer};

/// Average polarity of all entries written on one day of the week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayMood {
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub average_polarity: f64,
    pub entries: u32,
}

fn serialize_weekday<S: Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(weekday_name(*day))
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// SQLite `strftime('%w')` numbering: 0 = Sunday .. 6 = Saturday.
pub fn weekday_from_sqlite(n: i64) -> Option<Weekday> {
    match n {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
