use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Bring a database (new or existing) up to the current schema. There is
/// no CREATE TABLE anywhere else; every command that opens a DbPool goes
/// through `init` first, so this also acts as the upgrade path.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Ensure that the `oplog` table exists. Every mutating command appends a
/// row here, and applied migrations are recorded in it as well.
fn ensure_oplog_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS oplog (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the core tables.
///
/// `active_session` is a singleton: the CHECK on `id` makes a second row
/// impossible at the engine level, which is what rejects concurrent starts.
fn create_core_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS pillars (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS projects (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            pillar_id    TEXT NOT NULL,
            budget_hours REAL NOT NULL CHECK(budget_hours > 0),
            status       TEXT NOT NULL DEFAULT 'Active'
                         CHECK(status IN ('Active','Completed','OnHold')),
            quarter      TEXT NOT NULL DEFAULT 'Top Priority',
            visible      INTEGER NOT NULL DEFAULT 1,
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS work_logs (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id   INTEGER NOT NULL,
            project_name TEXT NOT NULL,
            hours        REAL NOT NULL CHECK(hours > 0),
            focus_score  INTEGER NOT NULL CHECK(focus_score BETWEEN 1 AND 5),
            date         TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS active_session (
            id            INTEGER PRIMARY KEY CHECK(id = 1),
            project_id    INTEGER NOT NULL,
            project_name  TEXT NOT NULL,
            start_time    TEXT NOT NULL,
            state         TEXT NOT NULL DEFAULT 'running'
                          CHECK(state IN ('running','reviewing')),
            pending_hours REAL
        );

        CREATE INDEX IF NOT EXISTS idx_work_logs_date ON work_logs(date);
        CREATE INDEX IF NOT EXISTS idx_work_logs_project ON work_logs(project_id);
        "#,
    )?;
    Ok(())
}

/// Apply a one-off migration exactly once, recording it in the oplog.
fn apply_once<F>(conn: &Connection, version: &str, message: &str, f: F) -> Result<()>
where
    F: FnOnce(&Connection) -> Result<()>,
{
    let mut chk = conn.prepare(
        "SELECT 1 FROM oplog
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    f(conn)?;

    conn.execute(
        "INSERT INTO oplog (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Run all pending migrations, oldest first.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure oplog table
    ensure_oplog_table(conn)?;

    // 2) Ensure core tables exist
    let fresh = !table_exists(conn, "work_logs")?;
    create_core_tables(conn)?;
    if fresh {
        success("Created core tables (projects, work_logs, pillars, active_session).");
    }

    // 3) Early builds kept the review hours outside the session row, which
    //    allowed the review/running states to drift apart. Folded into the
    //    singleton in 0.2.0.
    apply_once(
        conn,
        "20260110_0001_fold_pending_review",
        "Folded pending review state into active_session",
        |conn| {
            if table_exists(conn, "pending_reviews")? {
                conn.execute_batch("DROP TABLE pending_reviews;")?;
            }
            Ok(())
        },
    )?;

    Ok(())
}
