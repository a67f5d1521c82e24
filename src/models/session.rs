use chrono::{DateTime, Utc};
use serde::Serialize;

/// Transient state of the singleton session row.
///
/// Running and Reviewing are mutually exclusive: they are two values of
/// the same column on the same single row, so the system can never hold
/// both an elapsed-capture awaiting review and a ticking timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Running,
    Reviewing,
}

impl SessionState {
    pub fn to_db_str(self) -> &'static str {
        match self {
            SessionState::Running => "running",
            SessionState::Reviewing => "reviewing",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "running" => Some(SessionState::Running),
            "reviewing" => Some(SessionState::Reviewing),
            _ => None,
        }
    }
}

/// The singleton active session (fixed row id = 1).
/// At most one exists system-wide; concurrent starts are rejected.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveSession {
    pub project_id: i64,
    pub project_name: String,
    pub start_time: DateTime<Utc>,
    pub state: SessionState,
    /// Elapsed hours captured by `stop`, held while awaiting the
    /// focus-score confirmation. None while Running.
    pub pending_hours: Option<f64>,
}

impl ActiveSession {
    /// Wall-clock hours since start, clamped to >= 0 to tolerate clock skew.
    pub fn elapsed_hours(&self, now: DateTime<Utc>) -> f64 {
        let secs = (now - self.start_time).num_milliseconds() as f64 / 1000.0;
        secs.max(0.0) / 3600.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn elapsed_90_minutes_is_one_and_a_half_hours() {
        let start = Utc::now();
        let s = ActiveSession {
            project_id: 1,
            project_name: "Course Launch".into(),
            start_time: start,
            state: SessionState::Running,
            pending_hours: None,
        };
        let h = s.elapsed_hours(start + Duration::seconds(5400));
        assert!((h - 1.5).abs() < 1e-9);
    }

    #[test]
    fn elapsed_clamps_clock_skew_to_zero() {
        let start = Utc::now();
        let s = ActiveSession {
            project_id: 1,
            project_name: "X".into(),
            start_time: start,
            state: SessionState::Running,
            pending_hours: None,
        };
        assert_eq!(s.elapsed_hours(start - Duration::seconds(30)), 0.0);
    }
}
