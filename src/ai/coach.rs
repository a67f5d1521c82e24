//! Interactive AI strategy coach.
//!
//! Builds a fixed-template context block from the weekly aggregates and
//! the live session state, sends it as the system instruction, and
//! streams replies chunk-by-chunk to the terminal. The transcript lives
//! only as long as the interactive loop.

use crate::ai::client::{ChatTurn, GeminiClient, Role};
use crate::config::Config;
use crate::core::aggregate;
use crate::core::session::SessionManager;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::date;
use std::io::{self, BufRead, Write};

pub struct CoachContext {
    pub weekly_hours: f64,
    pub weekly_target: f64,
    pub avg_focus: Option<f64>,
    pub top_project: Option<String>,
    /// Name of the project being worked on right now, if any.
    pub active_project: Option<String>,
}

/// Read everything the coach needs in one pass over the store.
pub fn gather_context(pool: &mut DbPool, cfg: &Config) -> AppResult<CoachContext> {
    let logs = queries::load_work_logs(pool)?;
    let today = date::today();
    let monday = date::week_start(today);

    // argmax over this week's logs only
    let week_summary = aggregate::quarter_summary(&logs, monday, today, 0.0);

    let active_project = SessionManager::new(pool)
        .current()?
        .map(|s| s.project_name);

    Ok(CoachContext {
        weekly_hours: aggregate::weekly_hours(&logs, today),
        weekly_target: cfg.weekly_target_hours,
        avg_focus: aggregate::weekly_focus(&logs, today),
        top_project: week_summary.most_active,
        active_project,
    })
}

pub fn build_context(ctx: &CoachContext) -> String {
    let focus = match ctx.avg_focus {
        Some(f) => format!("{:.1}/5.0", f),
        None => "N/A".to_string(),
    };
    let top = ctx.top_project.as_deref().unwrap_or("None");
    let working = match &ctx.active_project {
        Some(p) => format!("Yes, on {}", p),
        None => "No".to_string(),
    };

    format!(
        "- Current Week Deep Work: {:.1} hours (Target: {:.0}h).\n\
         - Average Focus This Week: {}.\n\
         - Top Project This Week: {}.\n\
         - Currently Working? {}.",
        ctx.weekly_hours, ctx.weekly_target, focus, top, working
    )
}

pub fn system_instruction(context: &str) -> String {
    format!(
        "You are an elite, ruthless business strategist and CFO coaching a solo founder.\n\
         Current Context:\n{context}\n\
         Rules:\n\
         - Be direct. No pleasantries.\n\
         - If weekly deep work is below target, scold them.\n\
         - If they ask about new tools or new ideas, remind them of the \
         'No New WIP' rule: finish or clear debt first.\n\
         - Use numbered lists (1., 2., 3.) for advice and bolding for emphasis."
    )
}

/// Interactive chat loop. Blocks on stdin; 'exit'/'quit' or EOF ends it.
pub fn run_coach(cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    let api_key = cfg.resolve_api_key()?;
    let ctx = gather_context(pool, cfg)?;
    let system = system_instruction(&build_context(&ctx));

    let client = GeminiClient::new(api_key, cfg.model.clone());
    let rt = tokio::runtime::Runtime::new()?;

    let mut transcript: Vec<ChatTurn> = Vec::new();
    let stdin = io::stdin();

    println!("🤖 AI Strategy Coach (type 'exit' to leave)\n");

    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let reply = rt.block_on(client.stream_chat(&system, &transcript, &line, |chunk| {
            print!("{chunk}");
            io::stdout().flush().ok();
        }))?;
        println!("\n");

        transcript.push(ChatTurn {
            role: Role::User,
            text: line,
        });
        transcript.push(ChatTurn {
            role: Role::Model,
            text: reply,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_template_renders_all_fields() {
        let ctx = CoachContext {
            weekly_hours: 12.5,
            weekly_target: 20.0,
            avg_focus: Some(4.25),
            top_project: Some("Course Launch".into()),
            active_project: Some("Course Launch".into()),
        };
        let s = build_context(&ctx);
        assert!(s.contains("12.5 hours (Target: 20h)"));
        assert!(s.contains("4.2/5.0") || s.contains("4.3/5.0"));
        assert!(s.contains("Top Project This Week: Course Launch."));
        assert!(s.contains("Currently Working? Yes, on Course Launch."));
    }

    #[test]
    fn context_template_uses_na_when_empty() {
        let ctx = CoachContext {
            weekly_hours: 0.0,
            weekly_target: 20.0,
            avg_focus: None,
            top_project: None,
            active_project: None,
        };
        let s = build_context(&ctx);
        assert!(s.contains("Average Focus This Week: N/A."));
        assert!(s.contains("Top Project This Week: None."));
        assert!(s.contains("Currently Working? No."));
    }
}
