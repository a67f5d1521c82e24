use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{aggregate, quarter};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quarter { tag } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let tag = match tag {
            Some(t) => quarter::parse_tag(t)?,
            None => quarter::quarter_tag(date::today()),
        };
        let (start, end) = quarter::quarter_range(&tag)
            .ok_or_else(|| AppError::InvalidQuarter(tag.clone()))?;

        let logs = queries::load_work_logs(&mut pool)?;
        let summary =
            aggregate::quarter_summary(&logs, start, end, cfg.quarter_budget_hours);

        header(format!("Quarterly Review: {tag}"));
        println!("  Period:        {} to {}", start, end);
        println!(
            "  Total hours:   {}",
            bold(&format!("{:.1}h", summary.total_hours))
        );
        println!(
            "  Budget used:   {:.0}% of {:.0}h",
            summary.completion_pct, cfg.quarter_budget_hours
        );
        match &summary.most_active {
            Some(name) => println!("  Most active:   {}", bold(name)),
            None => println!("  Most active:   (no logs in this quarter)"),
        }
    }
    Ok(())
}
