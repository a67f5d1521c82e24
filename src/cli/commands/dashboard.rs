use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionManager;
use crate::core::{aggregate, quarter};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, color_for_budget, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { show_all } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let projects = queries::load_projects(&mut pool)?;
        let logs = queries::load_work_logs(&mut pool)?;
        let today = date::today();
        let current_q = quarter::quarter_tag(today);

        //
        // KPI strip
        //
        header(format!("Deep Work Dashboard ({current_q})"));

        let daily = aggregate::daily_hours(&logs, today);
        let weekly = aggregate::weekly_hours(&logs, today);
        let focus = aggregate::weekly_focus(&logs, today);

        println!("  Today:      {}", bold(&format!("{daily:.1}h")));
        println!(
            "  This week:  {} / {:.0}h target",
            bold(&format!("{weekly:.1}h")),
            cfg.weekly_target_hours
        );
        match focus {
            Some(f) => println!("  Avg focus:  {}", bold(&format!("{f:.1}/5"))),
            None => println!("  Avg focus:  {}", colorize_optional("N/A")),
        }

        if let Some(s) = SessionManager::new(&mut pool).current()? {
            println!("  Session:    🔥 {}", s.project_name);
        }
        println!();

        //
        // Project cards with budget bars
        //
        let spent = aggregate::spent_by_project(&logs);
        let shown: Vec<_> = projects
            .iter()
            .filter(|p| aggregate::is_visible(p, &current_q, *show_all))
            .collect();

        if shown.is_empty() {
            println!("No visible projects. Add one, or pass --show-all.");
            return Ok(());
        }

        for p in shown {
            let used = spent.get(&p.id).copied().unwrap_or(0.0);
            let progress = aggregate::progress(used, p.budget_hours);
            let color = color_for_budget(aggregate::budget_color(progress));

            println!("  {} {}[{}]{}", bold(&p.name), GREY, p.pillar_id, RESET);
            println!(
                "    {}{}{}  {:.1}h / {:.0}h ({:.0}%)",
                color,
                progress_bar(progress),
                RESET,
                used,
                p.budget_hours,
                progress * 100.0
            );
        }
    }
    Ok(())
}

/// 20-slot bar, capped at full even when the budget is blown.
fn progress_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 1.0)) * 20.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

#[cfg(test)]
mod tests {
    use super::progress_bar;

    #[test]
    fn bar_is_always_twenty_slots() {
        for p in [0.0, 0.25, 0.8, 1.0, 3.5] {
            assert_eq!(progress_bar(p).chars().count(), 20);
        }
    }

    #[test]
    fn overspend_caps_at_full() {
        assert_eq!(progress_bar(2.0), "█".repeat(20));
    }
}
