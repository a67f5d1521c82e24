use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::migrate::init_db;
use crate::db::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the config file (unless --test) and the database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let db_path = match &cli.db {
        Some(p) => p.clone(),
        None => Config::load().database,
    };

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;
    oplog::record(&pool.conn, "init", "", "Database initialized")?;

    success("focuslog is ready.");
    Ok(())
}
