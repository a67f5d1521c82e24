use crate::cli::parser::{Commands, SessionAction};
use crate::config::Config;
use crate::core::session::SessionManager;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::SessionState;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::{elapsed_hms, hours_readable};
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            SessionAction::Start { project } => {
                let proj = queries::get_project(&pool.conn, *project)?;
                let mut mgr = SessionManager::new(&mut pool);
                let s = mgr.start(&proj)?;
                success(format!(
                    "Focus session started on '{}' at {} UTC.",
                    s.project_name,
                    s.start_time.format("%H:%M")
                ));
            }

            SessionAction::Stop => {
                let mut mgr = SessionManager::new(&mut pool);
                let s = mgr.stop()?;
                let hours = s.pending_hours.unwrap_or(0.0);
                info(format!(
                    "Session stopped. You worked {} on '{}'.",
                    hours_readable(hours, false),
                    s.project_name
                ));
                println!("Save with 'session save --focus 1..5', or 'session discard'.");
            }

            SessionAction::Save { focus } => {
                let mut mgr = SessionManager::new(&mut pool);
                let log = mgr.confirm(*focus)?;
                success(format!(
                    "Saved {:.2} hours for '{}' (focus {}/5).",
                    log.hours, log.project_name, log.focus_score
                ));
            }

            SessionAction::Discard => {
                let mut mgr = SessionManager::new(&mut pool);
                mgr.discard()?;
                warning("Session discarded. Nothing was logged.");
            }

            SessionAction::Status => status(&mut pool)?,
        }
    }
    Ok(())
}

fn status(pool: &mut DbPool) -> AppResult<()> {
    let mgr = SessionManager::new(pool);
    match mgr.current()? {
        None => println!("No active session."),
        Some(s) => match s.state {
            SessionState::Running => {
                let elapsed = (Utc::now() - s.start_time).num_seconds();
                println!(
                    "🔥 Working on '{}' for {} (started {} UTC).",
                    s.project_name,
                    elapsed_hms(elapsed),
                    s.start_time.format("%H:%M")
                );
            }
            SessionState::Reviewing => {
                println!(
                    "⏸️  '{}' stopped at {:.2} hours, awaiting focus score.",
                    s.project_name,
                    s.pending_hours.unwrap_or(0.0)
                );
            }
        },
    }
    Ok(())
}
