use chrono::{NaiveDate, Utc};
use serde::Serialize;

/// A completed deep-work record. Immutable once created: the only
/// mutation the store supports is a whole-record delete.
#[derive(Debug, Clone, Serialize)]
pub struct WorkLog {
    pub id: i64,
    pub project_id: i64,
    pub project_name: String, // denormalized, survives project deletion
    pub hours: f64,           // ⇔ work_logs.hours (REAL, > 0)
    pub focus_score: i32,     // ⇔ work_logs.focus_score (INT, 1..=5)
    pub date: NaiveDate,      // ⇔ work_logs.date (TEXT "YYYY-MM-DD", UTC)
    pub created_at: String,   // ⇔ work_logs.created_at (TEXT, ISO8601)
}

impl WorkLog {
    pub fn new(
        project_id: i64,
        project_name: String,
        hours: f64,
        focus_score: i32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            project_id,
            project_name,
            hours,
            focus_score,
            date,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
