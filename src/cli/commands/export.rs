use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{oplog, queries};
use crate::errors::AppResult;
use crate::export::export_logs;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file, force } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let logs = queries::load_work_logs(&mut pool)?;

        export_logs(file, *format, &logs, *force)?;
        oplog::record(
            &pool.conn,
            "export",
            file,
            &format!("{} logs exported", logs.len()),
        )?;
        success(format!("Exported {} logs to {}.", logs.len(), file));
    }
    Ok(())
}
