//! Append-only operation log kept inside the database itself.
//! Mutating commands record what they did; `focuslog oplog --print`
//! shows the history.

use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::Connection;

pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO oplog (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
        [&Utc::now().to_rfc3339(), operation, target, message],
    )?;
    Ok(())
}

pub fn load(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt =
        conn.prepare("SELECT id, date, operation, target, message FROM oplog ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
