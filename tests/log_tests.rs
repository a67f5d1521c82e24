use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{fl, init_db_with_data, setup_test_db};

#[test]
fn test_log_add_and_list() {
    let db_path = setup_test_db("log_add_list");
    init_db_with_data(&db_path);

    fl()
        .args([
            "--db", &db_path, "log", "add", "--project", "1", "--hours", "3.25", "--focus", "5",
            "--date", "2026-08-26",
        ])
        .assert()
        .success()
        .stdout(contains("Logged 3.25 hours for 'Course Launch' on 2026-08-26"));

    fl()
        .args(["--db", &db_path, "log", "list"])
        .assert()
        .success()
        .stdout(contains("2026-08-26"))
        .stdout(contains("3.25"))
        .stdout(contains("5/5"));
}

#[test]
fn test_log_add_rejects_bad_inputs() {
    let db_path = setup_test_db("log_add_invalid");
    init_db_with_data(&db_path);

    fl()
        .args([
            "--db", &db_path, "log", "add", "--project", "1", "--hours", "0", "--focus", "3",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid hours"));

    fl()
        .args([
            "--db", &db_path, "log", "add", "--project", "1", "--hours", "1", "--focus", "9",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid focus score"));

    fl()
        .args([
            "--db", &db_path, "log", "add", "--project", "1", "--hours", "1", "--focus", "3",
            "--date", "26/08/2026",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    fl()
        .args([
            "--db", &db_path, "log", "add", "--project", "7", "--hours", "1", "--focus", "3",
        ])
        .assert()
        .failure()
        .stderr(contains("Project not found: 7"));
}

#[test]
fn test_log_del() {
    let db_path = setup_test_db("log_del");
    init_db_with_data(&db_path);

    fl()
        .args(["--db", &db_path, "log", "del", "1"])
        .assert()
        .success()
        .stdout(contains("Work log 1 deleted"));

    fl()
        .args(["--db", &db_path, "log", "list"])
        .assert()
        .success()
        .stdout(contains("2026-08-25"));
}

#[test]
fn test_log_list_limit() {
    let db_path = setup_test_db("log_list_limit");
    init_db_with_data(&db_path);

    fl()
        .args(["--db", &db_path, "log", "list", "--limit", "1"])
        .assert()
        .success()
        // newest first: the 2026-08-25 entry wins the single slot
        .stdout(contains("2026-08-25"))
        .stdout(contains("2026-08-24").not());
}
