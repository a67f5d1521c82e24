use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::pillar::Pillar;
use crate::models::{ActiveSession, Project, ProjectStatus, SessionState, WorkLog};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

// ---------------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------------

pub fn map_project_row(row: &Row) -> rusqlite::Result<Project> {
    let status_str: String = row.get("status")?;
    let status = ProjectStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        pillar_id: row.get("pillar_id")?,
        budget_hours: row.get("budget_hours")?,
        status,
        quarter: row.get("quarter")?,
        visible: row.get::<_, i32>("visible")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn map_work_log_row(row: &Row) -> rusqlite::Result<WorkLog> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(WorkLog {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        project_name: row.get("project_name")?,
        hours: row.get("hours")?,
        focus_score: row.get("focus_score")?,
        date,
        created_at: row.get("created_at")?,
    })
}

fn map_session_row(row: &Row) -> rusqlite::Result<ActiveSession> {
    let start_str: String = row.get("start_time")?;
    let start_time = DateTime::parse_from_rfc3339(&start_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(start_str.clone())),
            )
        })?;

    let state_str: String = row.get("state")?;
    let state = SessionState::from_db_str(&state_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("invalid session state: {state_str}"))),
        )
    })?;

    Ok(ActiveSession {
        project_id: row.get("project_id")?,
        project_name: row.get("project_name")?,
        start_time,
        state,
        pending_hours: row.get("pending_hours")?,
    })
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

pub fn insert_project(conn: &Connection, p: &Project) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO projects (name, pillar_id, budget_hours, status, quarter, visible, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            p.name,
            p.pillar_id,
            p.budget_hours,
            p.status.to_db_str(),
            p.quarter,
            if p.visible { 1 } else { 0 },
            p.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_project(conn: &Connection, id: i64) -> AppResult<Project> {
    let mut stmt = conn.prepare("SELECT * FROM projects WHERE id = ?1")?;
    stmt.query_row([id], map_project_row)
        .optional()?
        .ok_or(AppError::ProjectNotFound(id))
}

pub fn load_projects(pool: &mut DbPool) -> AppResult<Vec<Project>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM projects ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_project_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Partial update: only the provided fields change. Returns the updated row.
pub fn update_project(
    conn: &Connection,
    id: i64,
    budget_hours: Option<f64>,
    status: Option<ProjectStatus>,
    quarter: Option<String>,
    visible: Option<bool>,
) -> AppResult<Project> {
    let mut p = get_project(conn, id)?;

    if let Some(b) = budget_hours {
        p.budget_hours = b;
    }
    if let Some(s) = status {
        p.status = s;
    }
    if let Some(q) = quarter {
        p.quarter = q;
    }
    if let Some(v) = visible {
        p.visible = v;
    }

    conn.execute(
        "UPDATE projects
         SET budget_hours = ?1, status = ?2, quarter = ?3, visible = ?4
         WHERE id = ?5",
        params![
            p.budget_hours,
            p.status.to_db_str(),
            p.quarter,
            if p.visible { 1 } else { 0 },
            id,
        ],
    )?;
    Ok(p)
}

/// Irreversible. Does NOT cascade to work_logs: orphaned logs keep their
/// denormalized project_name.
pub fn delete_project(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM projects WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::ProjectNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Work logs
// ---------------------------------------------------------------------------

pub fn insert_work_log(conn: &Connection, log: &WorkLog) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_logs (project_id, project_name, hours, focus_score, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            log.project_id,
            log.project_name,
            log.hours,
            log.focus_score,
            log.date_str(),
            log.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_work_logs(pool: &mut DbPool) -> AppResult<Vec<WorkLog>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM work_logs ORDER BY date DESC, id DESC")?;
    let rows = stmt.query_map([], map_work_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_work_logs_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<WorkLog>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM work_logs
         WHERE date = ?1
         ORDER BY id DESC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_work_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn recent_work_logs(pool: &mut DbPool, limit: usize) -> AppResult<Vec<WorkLog>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM work_logs
         ORDER BY created_at DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map([limit as i64], map_work_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_work_log(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM work_logs WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::Other(format!("Work log not found: {id}")));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Pillars
// ---------------------------------------------------------------------------

pub fn insert_pillar(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO pillars (name) VALUES (?1)", [name])
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(f, _)
                if f.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                AppError::PillarExists(name.to_string())
            }
            other => AppError::Db(other),
        })?;
    Ok(conn.last_insert_rowid())
}

pub fn load_pillars(pool: &mut DbPool) -> AppResult<Vec<Pillar>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, name FROM pillars ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Pillar {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Active session (singleton row, id = 1)
// ---------------------------------------------------------------------------

pub fn get_active_session(conn: &Connection) -> AppResult<Option<ActiveSession>> {
    let mut stmt = conn.prepare("SELECT * FROM active_session WHERE id = 1")?;
    Ok(stmt.query_row([], map_session_row).optional()?)
}

pub fn insert_active_session(conn: &Connection, s: &ActiveSession) -> AppResult<()> {
    conn.execute(
        "INSERT INTO active_session (id, project_id, project_name, start_time, state, pending_hours)
         VALUES (1, ?1, ?2, ?3, ?4, ?5)",
        params![
            s.project_id,
            s.project_name,
            s.start_time.to_rfc3339(),
            s.state.to_db_str(),
            s.pending_hours,
        ],
    )?;
    Ok(())
}

pub fn set_session_reviewing(conn: &Connection, pending_hours: f64) -> AppResult<()> {
    conn.execute(
        "UPDATE active_session SET state = 'reviewing', pending_hours = ?1 WHERE id = 1",
        params![pending_hours],
    )?;
    Ok(())
}

pub fn delete_active_session(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM active_session WHERE id = 1", [])?;
    Ok(())
}

/// The one atomic multi-write in the system: append the reviewed WorkLog
/// and drop the session singleton in a single transaction. Either both
/// land or neither does.
pub fn commit_reviewed_session(conn: &mut Connection, log: &WorkLog) -> AppResult<i64> {
    let tx = conn.transaction()?;

    let log_id = insert_work_log(&tx, log)?;
    tx.execute("DELETE FROM active_session WHERE id = 1", [])?;

    tx.commit()?;
    Ok(log_id)
}
