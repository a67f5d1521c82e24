use predicates::str::contains;

mod common;
use common::{fl, init_db, init_db_with_data, setup_test_db};

#[test]
fn test_project_add_requires_justification_without_no_audit() {
    let db_path = setup_test_db("project_needs_justification");
    init_db(&db_path);

    fl()
        .args([
            "--db",
            &db_path,
            "project",
            "add",
            "Side Quest",
            "--pillar",
            "Growth Engine",
            "--budget",
            "40",
        ])
        .assert()
        .failure()
        .stderr(contains("--justification is required"));
}

#[test]
fn test_project_add_rejects_nonpositive_budget() {
    let db_path = setup_test_db("project_bad_budget");
    init_db(&db_path);

    fl()
        .args([
            "--db",
            &db_path,
            "project",
            "add",
            "Zero Budget",
            "--pillar",
            "Growth Engine",
            "--budget",
            "0",
            "--no-audit",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid budget"));
}

#[test]
fn test_project_add_rejects_bad_quarter_tag() {
    let db_path = setup_test_db("project_bad_quarter");
    init_db(&db_path);

    fl()
        .args([
            "--db",
            &db_path,
            "project",
            "add",
            "Bad Quarter",
            "--pillar",
            "Growth Engine",
            "--budget",
            "40",
            "--quarter",
            "Q5-2026",
            "--no-audit",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid quarter tag"));
}

#[test]
fn test_project_update_and_list() {
    let db_path = setup_test_db("project_update");
    init_db_with_data(&db_path);

    fl()
        .args([
            "--db", &db_path, "project", "update", "1", "--budget", "120", "--status", "OnHold",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    fl()
        .args(["--db", &db_path, "project", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Course Launch"))
        .stdout(contains("120h"))
        .stdout(contains("OnHold"));
}

#[test]
fn test_project_update_unknown_id_fails() {
    let db_path = setup_test_db("project_update_missing");
    init_db(&db_path);

    fl()
        .args(["--db", &db_path, "project", "update", "42", "--budget", "10"])
        .assert()
        .failure()
        .stderr(contains("Project not found: 42"));
}

#[test]
fn test_completed_projects_hidden_unless_all() {
    let db_path = setup_test_db("project_completed_hidden");
    init_db_with_data(&db_path);

    fl()
        .args([
            "--db", &db_path, "project", "update", "1", "--status", "Completed",
        ])
        .assert()
        .success();

    // Completed is always hidden from the default listing
    fl()
        .args(["--db", &db_path, "project", "list"])
        .assert()
        .success()
        .stdout(contains("No projects to show"));

    fl()
        .args(["--db", &db_path, "project", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Course Launch"));
}

#[test]
fn test_project_del_keeps_work_logs() {
    let db_path = setup_test_db("project_del_keeps_logs");
    init_db_with_data(&db_path);

    fl()
        .args(["--db", &db_path, "project", "del", "1"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    // the logs survive with the denormalized project name
    fl()
        .args(["--db", &db_path, "log", "list"])
        .assert()
        .success()
        .stdout(contains("Course Launch"));
}

#[test]
fn test_pillar_add_and_duplicate() {
    let db_path = setup_test_db("pillar_dup");
    init_db(&db_path);

    fl()
        .args(["--db", &db_path, "pillar", "add", "Health"])
        .assert()
        .success();

    fl()
        .args(["--db", &db_path, "pillar", "add", "Health"])
        .assert()
        .failure()
        .stderr(contains("Pillar already exists"));

    fl()
        .args(["--db", &db_path, "pillar", "list"])
        .assert()
        .success()
        .stdout(contains("Health"));
}
