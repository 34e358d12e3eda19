use crate::db::EntryStore;
use crate::db::log::{LogRow, load_log};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::truncate_display;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const OP_MAX_WIDTH: usize = 60;

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "import" => Colour::Green,
        "export" => Colour::Blue,
        "convert" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// `operation (target)`, or just the operation when there is no target.
fn op_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &EntryStore) -> AppResult<()> {
        let rows = load_log(&store.conn)?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = rows
            .iter()
            .map(|r| truncate_display(&op_target(r), OP_MAX_WIDTH))
            .collect();
        let dates: Vec<String> = rows.iter().map(|r| display_date(&r.date)).collect();

        let op_w = labels.iter().map(|l| l.width()).max().unwrap_or(10);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = dates.iter().map(|d| d.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for ((row, label), date) in rows.iter().zip(&labels).zip(&dates) {
            let color = color_for_operation(&row.operation);

            // only the operation word is coloured
            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(label.width()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                colored,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(op: &str, target: &str) -> LogRow {
        LogRow {
            id: 1,
            date: "2025-03-01T10:00:00+01:00".into(),
            operation: op.into(),
            target: target.into(),
            message: "m".into(),
        }
    }

    #[test]
    fn op_target_formatting() {
        assert_eq!(op_target(&row("import", "append")), "import (append)");
        assert_eq!(op_target(&row("init", "")), "init");
    }

    #[test]
    fn dates_are_normalised() {
        assert_eq!(
            display_date("2025-03-01T10:00:00.123456+01:00"),
            "2025-03-01T10:00:00+01:00"
        );
        assert_eq!(display_date("garbage"), "garbage");
    }

    #[test]
    fn prints_migrated_store_log() {
        let store = EntryStore::open_in_memory().unwrap();
        assert!(LogLogic::print_log(&store).is_ok());
    }
}
