use predicates::str::contains;
use std::fs;

mod common;
use common::{fl, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    fl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Exported 2 logs"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,date,project,hours,focus_score"));
    assert!(content.contains("Course Launch"));
    assert!(content.contains("2.50"));
    fs::remove_file(&out).ok();
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);
    let out = temp_out("export_json", "json");

    fl()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let logs = parsed.as_array().expect("array of logs");
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["project_name"], "Course Launch");
    fs::remove_file(&out).ok();
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_no_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "keep me").expect("create existing file");

    fl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("use --force to overwrite"));

    assert_eq!(fs::read_to_string(&out).expect("still there"), "keep me");

    fl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    assert!(
        fs::read_to_string(&out)
            .expect("overwritten")
            .starts_with("id,")
    );
    fs::remove_file(&out).ok();
}
