use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info, vacuum } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *info {
            print_db_info(&mut pool, &cfg.database)?;
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database optimized.");
        }
    }
    Ok(())
}
