use crate::db::log::audit;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::weekday::weekday_from_sqlite;
use crate::models::{JournalEntry, MoodLabel, WeekdayMood};
use chrono::{Local, NaiveDate};
use rusqlite::types::{Type, Value};
use rusqlite::{OptionalExtension, Row, params, params_from_iter};

/// How a batch is written by [`EntryStore::put_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutMode {
    /// Keep existing rows and add the batch after them.
    Append,
    /// Drop every existing row, then write the batch.
    Replace,
}

impl PutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PutMode::Append => "append",
            PutMode::Replace => "replace",
        }
    }
}

/// Optional predicates, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub mood: Option<MoodLabel>,
    /// Case-insensitive substring of title, content or keywords.
    pub keyword: Option<String>,
}

impl EntryFilter {
    pub fn is_empty(&self) -> bool {
        *self == EntryFilter::default()
    }

    /// SQL `WHERE` clause (possibly empty) and its positional arguments.
    fn to_sql(&self) -> (String, Vec<Value>) {
        let mut clauses: Vec<&str> = Vec::new();
        let mut args: Vec<Value> = Vec::new();

        if let Some(from) = self.from {
            clauses.push("date >= ?");
            args.push(Value::Text(from.format("%Y-%m-%d").to_string()));
        }

        if let Some(to) = self.to {
            clauses.push("date <= ?");
            args.push(Value::Text(to.format("%Y-%m-%d").to_string()));
        }

        if let Some(mood) = self.mood {
            clauses.push("mood = ?");
            args.push(Value::Text(mood.to_db_str().to_string()));
        }

        if let Some(kw) = self.keyword.as_deref().map(str::trim)
            && !kw.is_empty()
        {
            clauses.push(
                "(title LIKE ? ESCAPE '\\' OR content LIKE ? ESCAPE '\\'
                  OR EXISTS (SELECT 1 FROM json_each(journal_entries.keywords)
                             WHERE value LIKE ? ESCAPE '\\'))",
            );
            let pattern = format!("%{}%", escape_like(kw));
            for _ in 0..3 {
                args.push(Value::Text(pattern.clone()));
            }
        }

        if clauses.is_empty() {
            (String::new(), args)
        } else {
            (format!("WHERE {}", clauses.join(" AND ")), args)
        }
    }
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> rusqlite::Result<JournalEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    let mood_str: String = row.get("mood")?;
    let mood = MoodLabel::from_db_str(&mood_str)
        .ok_or_else(|| conversion_error(6, AppError::InvalidMood(mood_str.clone())))?;

    let keywords_raw: String = row.get("keywords")?;
    let keywords: Vec<String> = if keywords_raw.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&keywords_raw).map_err(|e| conversion_error(7, AppError::Json(e)))?
    };

    Ok(JournalEntry {
        id: Some(row.get("id")?),
        date,
        title: row.get("title")?,
        content: row.get("content")?,
        polarity: row.get("polarity")?,
        subjectivity: row.get("subjectivity")?,
        mood,
        keywords,
    })
}

impl EntryStore {
    /// Write a whole batch in one transaction: either every entry becomes
    /// visible or none does.
    pub fn put_all(&mut self, entries: &[JournalEntry], mode: PutMode) -> AppResult<usize> {
        let created_at = Local::now().to_rfc3339();
        let tx = self.conn.transaction()?;

        if mode == PutMode::Replace {
            tx.execute("DELETE FROM journal_entries", [])?;
        }

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO journal_entries
                    (date, title, content, polarity, subjectivity, mood, keywords, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;

            for e in entries {
                stmt.execute(params![
                    e.date_str(),
                    e.title,
                    e.content,
                    e.polarity,
                    e.subjectivity,
                    e.mood.to_db_str(),
                    serde_json::to_string(&e.keywords)?,
                    created_at,
                ])?;
            }
        }

        audit(
            &tx,
            "import",
            mode.as_str(),
            &format!("{} entries stored", entries.len()),
        )?;

        tx.commit()?;
        Ok(entries.len())
    }

    /// Entries matching every supplied predicate, date ascending.
    pub fn query(&self, filter: &EntryFilter) -> AppResult<Vec<JournalEntry>> {
        let (where_sql, args) = filter.to_sql();
        let sql = format!(
            "SELECT id, date, title, content, polarity, subjectivity, mood, keywords
             FROM journal_entries
             {where_sql}
             ORDER BY date ASC, id ASC"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args.iter()), map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Average polarity per weekday, Monday first; absent weekdays are omitted.
    pub fn aggregate_by_weekday(&self, filter: &EntryFilter) -> AppResult<Vec<WeekdayMood>> {
        let (where_sql, args) = filter.to_sql();
        let sql = format!(
            "SELECT CAST(strftime('%w', date) AS INTEGER) AS dow, AVG(polarity), COUNT(*)
             FROM journal_entries
             {where_sql}
             GROUP BY dow"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args.iter()), |row| {
            Ok((
                row.get::<_, Option<i64>>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, u32>(2)?,
            ))
        })?;

        let mut out = Vec::new();
        for r in rows {
            let (dow, average_polarity, entries) = r?;
            if let Some(weekday) = dow.and_then(weekday_from_sqlite) {
                out.push(WeekdayMood {
                    weekday,
                    average_polarity,
                    entries,
                });
            }
        }

        out.sort_by_key(|w| w.weekday.num_days_from_monday());
        Ok(out)
    }

    pub fn count(&self) -> AppResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM journal_entries", [], |row| row.get(0))?)
    }

    /// First and last entry dates, `None` for an empty store.
    pub fn date_bounds(&self) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
        let bounds: Option<(Option<String>, Option<String>)> = self
            .conn
            .query_row(
                "SELECT MIN(date), MAX(date) FROM journal_entries",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match bounds {
            Some((Some(first), Some(last))) => {
                let parse = |s: &str| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .map_err(|_| AppError::InvalidDate(s.to_string()))
                };
                Ok(Some((parse(&first)?, parse(&last)?)))
            }
            _ => Ok(None),
        }
    }
}
