use crate::cli::parser::{Commands, LogAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{oplog, queries};
use crate::errors::{AppError, AppResult};
use crate::models::WorkLog;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            LogAction::Add {
                project,
                hours,
                focus,
                date: date_str,
            } => {
                //
                // 1. Validate
                //
                if *hours <= 0.0 {
                    return Err(AppError::InvalidHours(*hours));
                }
                if !(1..=5).contains(focus) {
                    return Err(AppError::InvalidFocusScore(*focus));
                }
                let d = match date_str {
                    Some(s) => {
                        date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?
                    }
                    None => date::today(),
                };

                //
                // 2. Denormalize the project name and insert
                //
                let proj = queries::get_project(&pool.conn, *project)?;
                let mut log = WorkLog::new(proj.id, proj.name.clone(), *hours, *focus, d);
                log.id = queries::insert_work_log(&pool.conn, &log)?;

                oplog::record(
                    &pool.conn,
                    "log_add",
                    &proj.name,
                    &format!("Manual log: {:.2}h, focus {}/5", hours, focus),
                )?;
                success(format!(
                    "Logged {:.2} hours for '{}' on {}.",
                    hours,
                    proj.name,
                    log.date_str()
                ));
            }

            LogAction::Del { id } => {
                queries::delete_work_log(&pool.conn, *id)?;
                oplog::record(&pool.conn, "log_del", &id.to_string(), "Work log deleted")?;
                success(format!("Work log {} deleted.", id));
            }

            LogAction::List { today, limit } => {
                let logs = if *today {
                    queries::load_work_logs_by_date(&mut pool, &date::today())?
                } else {
                    queries::recent_work_logs(&mut pool, *limit)?
                };

                if logs.is_empty() {
                    println!("No logs found.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("ID", 4),
                    Column::new("DATE", 10),
                    Column::new("PROJECT", 28),
                    Column::new("HOURS", 6),
                    Column::new("FOCUS", 5),
                ]);
                for l in &logs {
                    table.add_row(vec![
                        l.id.to_string(),
                        l.date_str(),
                        l.project_name.clone(),
                        format!("{:.2}", l.hours),
                        format!("{}/5", l.focus_score),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
