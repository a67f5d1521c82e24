use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "project_add" | "pillar_add" | "log_add" | "session_save" => Colour::Green,
        "project_del" | "log_del" | "session_discard" => Colour::Red,
        "project_edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Oplog { print } = cmd {
        if !*print {
            return Ok(());
        }
        let pool = DbPool::new(&cfg.database)?;
        let entries = oplog::load(&pool.conn)?;

        if entries.is_empty() {
            println!("Operation log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + 3 + target.len())
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Operation log:\n");

        for (id, date, operation, target, message) in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(date);

            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };
            // Pad on the uncolored width, then colorize only the op word.
            let padding = " ".repeat(op_w.saturating_sub(op_target.len()));
            let colored = match op_target.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&operation).paint(op), rest)
                }
                None => color_for_operation(&operation)
                    .paint(op_target.as_str())
                    .to_string(),
            };

            println!("{id:>id_w$}: {date} | {colored}{padding} => {message}");
        }
    }
    Ok(())
}
