pub mod entry;
pub mod mood;
pub mod weekday;

pub use entry::{JournalEntry, RawEntry};
pub use mood::{MoodLabel, MoodThresholds};
pub use weekday::WeekdayMood;
