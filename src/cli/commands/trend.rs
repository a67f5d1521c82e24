use std::collections::{BTreeSet, HashMap};

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend { days } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let projects: HashMap<i64, _> = queries::load_projects(&mut pool)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        let logs = queries::load_work_logs(&mut pool)?;
        let today = date::today();

        let cells = aggregate::trend_by_day_pillar(&logs, &projects, today, *days);
        if cells.is_empty() {
            println!("No activity in the last {days} days.");
            return Ok(());
        }

        // Pillars become columns, days become rows.
        let pillars: BTreeSet<String> = cells.keys().map(|(_, p)| p.clone()).collect();
        let dates: BTreeSet<_> = cells.keys().map(|(d, _)| *d).collect();

        header(format!("Hours per pillar, last {days} days"));

        let mut columns = vec![Column::new("DATE", 10)];
        for p in &pillars {
            columns.push(Column::new(p, p.chars().count().max(6)));
        }
        let mut table = Table::new(columns);

        for d in dates {
            let mut row = vec![d.format("%Y-%m-%d").to_string()];
            for p in &pillars {
                match cells.get(&(d, p.clone())) {
                    Some(h) => row.push(format!("{h:.1}")),
                    None => row.push(String::new()),
                }
            }
            table.add_row(row);
        }

        print!("{}", table.render());
    }
    Ok(())
}
