use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Coach = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        crate::ai::coach::run_coach(cfg, &mut pool)?;
    }
    Ok(())
}
