#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fl() -> Command {
    cargo_bin_cmd!("focuslog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_focuslog.sqlite", name));
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

/// Initialize the DB schema only (no seed rows).
pub fn init_db(db_path: &str) {
    fl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// one pillar, one Top Priority project (id 1) and two manual logs.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    fl()
        .args(["--db", db_path, "pillar", "add", "Growth Engine"])
        .assert()
        .success();

    // --no-audit keeps the tests offline
    fl()
        .args([
            "--db",
            db_path,
            "project",
            "add",
            "Course Launch",
            "--pillar",
            "Growth Engine",
            "--budget",
            "100",
            "--quarter",
            "Top Priority",
            "--no-audit",
        ])
        .assert()
        .success();

    fl()
        .args([
            "--db", db_path, "log", "add", "--project", "1", "--hours", "2.5", "--focus", "4",
            "--date", "2026-08-24",
        ])
        .assert()
        .success();

    fl()
        .args([
            "--db", db_path, "log", "add", "--project", "1", "--hours", "1.0", "--focus", "3",
            "--date", "2026-08-25",
        ])
        .assert()
        .success();
}
