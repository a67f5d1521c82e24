//! Deep-work session lifecycle.
//!
//! One state machine over the singleton `active_session` row:
//! Idle -> Running -> Reviewing -> (Saved | Discarded) -> Idle.
//! All transitions go through SessionManager; nothing else writes the row.

use crate::db::pool::DbPool;
use crate::db::{oplog, queries};
use crate::errors::{AppError, AppResult};
use crate::models::{ActiveSession, Project, SessionState, WorkLog};
use crate::utils::date;
use chrono::Utc;

pub struct SessionManager<'a> {
    pool: &'a mut DbPool,
}

impl<'a> SessionManager<'a> {
    pub fn new(pool: &'a mut DbPool) -> Self {
        Self { pool }
    }

    pub fn current(&self) -> AppResult<Option<ActiveSession>> {
        queries::get_active_session(&self.pool.conn)
    }

    /// Begin a focus session on `project`. Rejected (not queued) if any
    /// session exists, Running or Reviewing alike.
    pub fn start(&mut self, project: &Project) -> AppResult<ActiveSession> {
        if let Some(existing) = self.current()? {
            return Err(AppError::SessionAlreadyActive(existing.project_name));
        }

        let session = ActiveSession {
            project_id: project.id,
            project_name: project.name.clone(),
            start_time: Utc::now(),
            state: SessionState::Running,
            pending_hours: None,
        };
        queries::insert_active_session(&self.pool.conn, &session)?;
        oplog::record(
            &self.pool.conn,
            "session_start",
            &project.name,
            "Focus session started",
        )?;
        Ok(session)
    }

    /// Capture elapsed time and move to Reviewing. Valid only from Running.
    pub fn stop(&mut self) -> AppResult<ActiveSession> {
        let mut session = self.current()?.ok_or(AppError::NoActiveSession)?;
        if session.state != SessionState::Running {
            return Err(AppError::SessionNotRunning);
        }

        let hours = session.elapsed_hours(Utc::now());
        queries::set_session_reviewing(&self.pool.conn, hours)?;

        session.state = SessionState::Reviewing;
        session.pending_hours = Some(hours);
        Ok(session)
    }

    /// Persist the reviewed session as a WorkLog and clear the singleton,
    /// atomically. Valid only from Reviewing.
    pub fn confirm(&mut self, focus_score: i32) -> AppResult<WorkLog> {
        if !(1..=5).contains(&focus_score) {
            return Err(AppError::InvalidFocusScore(focus_score));
        }

        let session = self.current()?.ok_or(AppError::NoActiveSession)?;
        let hours = match (session.state, session.pending_hours) {
            (SessionState::Reviewing, Some(h)) => h,
            _ => return Err(AppError::SessionNotReviewing),
        };

        let mut log = WorkLog::new(
            session.project_id,
            session.project_name.clone(),
            hours,
            focus_score,
            date::today(),
        );
        log.id = queries::commit_reviewed_session(&mut self.pool.conn, &log)?;

        oplog::record(
            &self.pool.conn,
            "session_save",
            &session.project_name,
            &format!("Saved {:.2}h, focus {}/5", hours, focus_score),
        )?;
        Ok(log)
    }

    /// Drop the session without writing a log. Valid from Running or
    /// Reviewing.
    pub fn discard(&mut self) -> AppResult<()> {
        let session = self.current()?.ok_or(AppError::NoActiveSession)?;
        queries::delete_active_session(&self.pool.conn)?;
        oplog::record(
            &self.pool.conn,
            "session_discard",
            &session.project_name,
            "Session discarded without saving",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::init_db;
    use crate::models::ProjectStatus;

    fn mem_pool() -> DbPool {
        let pool = DbPool {
            conn: rusqlite::Connection::open_in_memory().unwrap(),
        };
        init_db(&pool.conn).unwrap();
        pool
    }

    fn project(id: i64, name: &str) -> Project {
        Project {
            id,
            name: name.into(),
            pillar_id: "Growth Engine".into(),
            budget_hours: 100.0,
            status: ProjectStatus::Active,
            quarter: "Top Priority".into(),
            visible: true,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    fn count_logs(pool: &DbPool) -> i64 {
        pool.conn
            .query_row("SELECT COUNT(*) FROM work_logs", [], |r| r.get(0))
            .unwrap()
    }

    #[test]
    fn start_rejects_second_session() {
        let mut pool = mem_pool();
        let mut mgr = SessionManager::new(&mut pool);
        mgr.start(&project(1, "Course Launch")).unwrap();

        let err = mgr.start(&project(2, "Finance Studies")).unwrap_err();
        assert!(matches!(err, AppError::SessionAlreadyActive(_)));

        // state unchanged: still the first project
        let s = mgr.current().unwrap().unwrap();
        assert_eq!(s.project_name, "Course Launch");
    }

    #[test]
    fn stop_requires_running() {
        let mut pool = mem_pool();
        let mut mgr = SessionManager::new(&mut pool);
        assert!(matches!(mgr.stop(), Err(AppError::NoActiveSession)));

        mgr.start(&project(1, "X")).unwrap();
        mgr.stop().unwrap();
        // second stop: already reviewing
        assert!(matches!(mgr.stop(), Err(AppError::SessionNotRunning)));
    }

    #[test]
    fn confirm_saves_log_and_clears_session() {
        let mut pool = mem_pool();
        let mut mgr = SessionManager::new(&mut pool);
        mgr.start(&project(1, "Course Launch")).unwrap();

        // make the captured elapsed deterministic
        pool.conn
            .execute(
                "UPDATE active_session SET state='reviewing', pending_hours=1.5 WHERE id=1",
                [],
            )
            .unwrap();

        let mut mgr = SessionManager::new(&mut pool);
        let log = mgr.confirm(4).unwrap();
        assert!((log.hours - 1.5).abs() < 1e-9);
        assert_eq!(log.focus_score, 4);

        assert_eq!(count_logs(&pool), 1);
        assert!(queries::get_active_session(&pool.conn).unwrap().is_none());
    }

    #[test]
    fn confirm_requires_reviewing_state() {
        let mut pool = mem_pool();
        let mut mgr = SessionManager::new(&mut pool);
        mgr.start(&project(1, "X")).unwrap();

        let err = mgr.confirm(3).unwrap_err();
        assert!(matches!(err, AppError::SessionNotReviewing));

        // nothing was written, session still running
        assert_eq!(count_logs(&pool), 0);
        let s = queries::get_active_session(&pool.conn).unwrap().unwrap();
        assert_eq!(s.state, SessionState::Running);
    }

    #[test]
    fn confirm_rejects_out_of_range_focus() {
        let mut pool = mem_pool();
        let mut mgr = SessionManager::new(&mut pool);
        assert!(matches!(
            mgr.confirm(0),
            Err(AppError::InvalidFocusScore(0))
        ));
        assert!(matches!(
            mgr.confirm(6),
            Err(AppError::InvalidFocusScore(6))
        ));
    }

    #[test]
    fn failed_batch_leaves_both_sides_untouched() {
        let mut pool = mem_pool();
        let mut mgr = SessionManager::new(&mut pool);
        mgr.start(&project(1, "X")).unwrap();

        // force a review capture that violates the work_logs CHECK(hours > 0)
        pool.conn
            .execute(
                "UPDATE active_session SET state='reviewing', pending_hours=0.0 WHERE id=1",
                [],
            )
            .unwrap();

        let mut mgr = SessionManager::new(&mut pool);
        assert!(mgr.confirm(3).is_err());

        // the transaction rolled back: no log, session still present
        assert_eq!(count_logs(&pool), 0);
        assert!(queries::get_active_session(&pool.conn).unwrap().is_some());
    }

    #[test]
    fn discard_from_running_and_reviewing() {
        let mut pool = mem_pool();
        let mut mgr = SessionManager::new(&mut pool);

        mgr.start(&project(1, "X")).unwrap();
        mgr.discard().unwrap();
        assert!(mgr.current().unwrap().is_none());

        mgr.start(&project(1, "X")).unwrap();
        mgr.stop().unwrap();
        mgr.discard().unwrap();
        assert!(mgr.current().unwrap().is_none());
        assert_eq!(count_logs(&pool), 0);
    }
}
