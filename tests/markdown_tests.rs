use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{markdown_dir, rmo, setup_test_db, temp_out};

fn journal_files() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "2024-01-15 Feeling Grateful.md",
            "# Feeling Grateful\n\nCreated: January 15, 2024 8:00 PM\nToday was amazing and wonderful",
        ),
        (
            "notes.md",
            "---\ndate: 2024-01-20\ntitle: Front matter title\n---\nA calm and lovely walk.",
        ),
        (
            "Friday 2 2 24 Weekend plans abcdefabcdefabcdefabcdefabcdefab.md",
            "Nothing special.",
        ),
        ("Undated musings.md", "No date anywhere."),
        ("ignored.txt", "2024-01-01"),
    ]
}

#[test]
fn test_import_markdown_directory() {
    let db_path = setup_test_db("md_import");
    let dir = markdown_dir("md_import", &journal_files());

    rmo()
        .args(["--db", &db_path, "import", &dir])
        .assert()
        .success()
        .stdout(contains("Inserted: 3"))
        .stdout(contains("Skipped:  1"))
        .stdout(contains("Undated musings.md"));

    rmo()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Feeling Grateful"))
        .stdout(contains("Front matter title"))
        .stdout(contains("2024-02-02"))
        .stdout(contains("Weekend plans"));

    rmo()
        .args(["--db", &db_path, "list", "--details", "--keyword", "grateful"])
        .assert()
        .success()
        .stdout(contains("Created:").not());
}

#[test]
fn test_convert_markdown_to_csv_then_import() {
    let db_path = setup_test_db("md_convert");
    let dir = markdown_dir("md_convert", &journal_files());
    let out = temp_out("md_convert", "csv");

    rmo()
        .args(["--db", &db_path, "convert", &dir, "--out", &out])
        .assert()
        .success()
        .stdout(contains("Converted 3 files"));

    let csv = fs::read_to_string(&out).expect("read converted csv");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("date,title,content"));
    assert!(lines.next().unwrap().starts_with("2024-01-15,Feeling Grateful,"));
    assert!(lines.next().unwrap().starts_with("2024-01-20,Front matter title,"));

    rmo()
        .args(["--db", &db_path, "import", &out])
        .assert()
        .success()
        .stdout(contains("Inserted: 3"))
        .stdout(contains("Skipped:  0"));

    rmo()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("convert"));
}

#[test]
fn test_convert_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("md_convert_force");
    let dir = markdown_dir("md_convert_force", &journal_files());
    let out = temp_out("md_convert_force", "csv");
    fs::write(&out, "keep me").unwrap();

    rmo()
        .args(["--db", &db_path, "convert", &dir, "--out", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rmo()
        .args(["--db", &db_path, "convert", &dir, "--out", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("date,title,content"));
}
