use crate::cli::parser::{Commands, PillarAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{oplog, queries};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pillar { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            PillarAction::Add { name } => {
                queries::insert_pillar(&pool.conn, name)?;
                oplog::record(&pool.conn, "pillar_add", name, "Pillar created")?;
                success(format!("Pillar '{}' created.", name));
            }
            PillarAction::List => {
                let pillars = queries::load_pillars(&mut pool)?;
                if pillars.is_empty() {
                    println!("No pillars yet.");
                } else {
                    println!("🏛️  Pillars:");
                    for p in pillars {
                        println!("  {:>3}  {}", p.id, p.name);
                    }
                }
            }
        }
    }
    Ok(())
}
