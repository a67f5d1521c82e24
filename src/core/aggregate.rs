//! Report aggregation over work logs joined with the project registry.
//!
//! Every function here is a pure fold over its inputs: same logs in, same
//! numbers out, and an empty log set always yields zero / None instead of
//! an error.

use crate::core::quarter::TOP_PRIORITY;
use crate::models::{Project, ProjectStatus, WorkLog};
use crate::utils::date::week_start;
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};

/// Traffic-light color for spent-vs-budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetColor {
    Green,
    Orange,
    Red,
}

/// spent / budget, with budget <= 0 treated as zero progress so a
/// misconfigured project never divides by zero.
pub fn progress(spent: f64, budget: f64) -> f64 {
    if budget > 0.0 { spent / budget } else { 0.0 }
}

pub fn budget_color(progress: f64) -> BudgetColor {
    if progress > 1.0 {
        BudgetColor::Red
    } else if progress > 0.8 {
        BudgetColor::Orange
    } else {
        BudgetColor::Green
    }
}

/// Total hours logged on `day`.
pub fn daily_hours(logs: &[WorkLog], day: NaiveDate) -> f64 {
    logs.iter().filter(|l| l.date == day).map(|l| l.hours).sum()
}

/// Total hours since the most recent Monday (inclusive). Lower bound
/// only: a manually backfilled log dated later in the week still counts.
pub fn weekly_hours(logs: &[WorkLog], today: NaiveDate) -> f64 {
    let monday = week_start(today);
    logs.iter()
        .filter(|l| l.date >= monday)
        .map(|l| l.hours)
        .sum()
}

/// Mean focus score of the current week. None when the week has no logs;
/// the caller renders that as "N/A", never as zero.
pub fn weekly_focus(logs: &[WorkLog], today: NaiveDate) -> Option<f64> {
    let monday = week_start(today);
    let week: Vec<&WorkLog> = logs.iter().filter(|l| l.date >= monday).collect();
    if week.is_empty() {
        return None;
    }
    let sum: f64 = week.iter().map(|l| l.focus_score as f64).sum();
    Some(sum / week.len() as f64)
}

/// Hours spent per project, over the whole log set.
pub fn spent_by_project(logs: &[WorkLog]) -> HashMap<i64, f64> {
    let mut out = HashMap::new();
    for l in logs {
        *out.entry(l.project_id).or_insert(0.0) += l.hours;
    }
    out
}

/// Dashboard visibility filter. Precedence is deliberate and must not be
/// reordered: Completed always hides, then the manual visibility toggle,
/// then the quarter match (current quarter, Top Priority, or show-all).
pub fn is_visible(project: &Project, current_quarter: &str, show_all: bool) -> bool {
    if project.status == ProjectStatus::Completed {
        return false;
    }
    if !project.visible {
        return false;
    }
    show_all || project.quarter == current_quarter || project.quarter == TOP_PRIORITY
}

#[derive(Debug, Clone)]
pub struct QuarterSummary {
    pub total_hours: f64,
    /// Project with the most hours in the window. None when no logs fall
    /// inside it; rendered as "N/A".
    pub most_active: Option<String>,
    pub completion_pct: f64,
}

/// Totals for a fixed quarter window (both bounds inclusive).
pub fn quarter_summary(
    logs: &[WorkLog],
    start: NaiveDate,
    end: NaiveDate,
    budget_hours: f64,
) -> QuarterSummary {
    let in_window: Vec<&WorkLog> = logs
        .iter()
        .filter(|l| l.date >= start && l.date <= end)
        .collect();

    let total_hours: f64 = in_window.iter().map(|l| l.hours).sum();

    let mut per_project: HashMap<&str, f64> = HashMap::new();
    for l in &in_window {
        *per_project.entry(l.project_name.as_str()).or_insert(0.0) += l.hours;
    }
    let most_active = per_project
        .into_iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name.to_string());

    let completion_pct = if budget_hours > 0.0 {
        total_hours / budget_hours * 100.0
    } else {
        0.0
    };

    QuarterSummary {
        total_hours,
        most_active,
        completion_pct,
    }
}

/// Rolling window of hours grouped by (day, pillar), for the trend view.
/// Logs whose project no longer exists fall under "Unknown".
pub fn trend_by_day_pillar(
    logs: &[WorkLog],
    projects: &HashMap<i64, Project>,
    today: NaiveDate,
    days: i64,
) -> BTreeMap<(NaiveDate, String), f64> {
    let cutoff = today - Duration::days(days);
    let mut out = BTreeMap::new();

    for l in logs.iter().filter(|l| l.date >= cutoff && l.date <= today) {
        let pillar = projects
            .get(&l.project_id)
            .map(|p| p.pillar_id.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        *out.entry((l.date, pillar)).or_insert(0.0) += l.hours;
    }
    out
}
