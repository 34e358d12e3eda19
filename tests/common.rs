#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rmo() -> Command {
    cargo_bin_cmd!("rmoodlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmoodlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a fixture file into the temp dir and return its path
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(name);
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Fresh temp directory holding the given Markdown files
pub fn markdown_dir(name: &str, files: &[(&str, &str)]) -> String {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_rmoodlog_md", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create md dir");
    for (file, content) in files {
        fs::write(dir.join(file), content).expect("write md file");
    }
    dir.to_string_lossy().to_string()
}

pub const SAMPLE_CSV: &str = "date,title,content
2024-01-15,Feeling Grateful,Today was amazing and wonderful
2024-01-16,Rough day,I feel sad and tired. Everything was terrible
2024-01-17,Plain,The bus came at noon
bad-date,X,Y
";

/// Initialize DB and import the sample dataset
pub fn init_db_with_data(db_path: &str, name: &str) {
    rmo()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let csv = write_fixture(&format!("{}_sample.csv", name), SAMPLE_CSV);
    rmo()
        .args(["--db", db_path, "import", &csv])
        .assert()
        .success();
}
