use chrono::Utc;
use serde::Serialize;

/// Lifecycle status of a project.
/// Completed projects are always hidden from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn to_db_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "OnHold",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(ProjectStatus::Active),
            "Completed" => Some(ProjectStatus::Completed),
            // accept both the stored form and the spelled-out one
            "OnHold" | "On Hold" => Some(ProjectStatus::OnHold),
            _ => None,
        }
    }
}

/// A strategic project, grouped under a pillar.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub pillar_id: String,      // ⇔ projects.pillar_id (string match, no FK)
    pub budget_hours: f64,      // ⇔ projects.budget_hours (REAL, > 0)
    pub status: ProjectStatus,  // ⇔ projects.status
    pub quarter: String,        // ⇔ projects.quarter ("Q1-2026" or "Top Priority")
    pub visible: bool,          // ⇔ projects.visible (INT 0/1)
    pub created_at: String,     // ⇔ projects.created_at (TEXT, ISO8601)
}

impl Project {
    pub fn new(
        name: String,
        pillar_id: String,
        budget_hours: f64,
        quarter: String,
        visible: bool,
    ) -> Self {
        Self {
            id: 0,
            name,
            pillar_id,
            budget_hours,
            status: ProjectStatus::Active,
            quarter,
            visible,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
