use crate::ai::audit::{self, AuditStatus, ProjectProposal};
use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::core::{aggregate, quarter};
use crate::db::pool::DbPool;
use crate::db::{oplog, queries};
use crate::errors::{AppError, AppResult};
use crate::models::{Project, ProjectStatus};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            ProjectAction::Add {
                name,
                pillar,
                budget,
                quarter: quarter_tag,
                hidden,
                justification,
                no_audit,
            } => add(
                &mut pool,
                cfg,
                name,
                pillar,
                *budget,
                quarter_tag.as_deref(),
                *hidden,
                justification.as_deref(),
                *no_audit,
            )?,

            ProjectAction::Update {
                id,
                budget,
                status,
                quarter: quarter_tag,
                visible,
            } => update(
                &pool,
                *id,
                *budget,
                status.as_deref(),
                quarter_tag.as_deref(),
                *visible,
            )?,

            ProjectAction::Del { id } => {
                let p = queries::get_project(&pool.conn, *id)?;
                queries::delete_project(&pool.conn, *id)?;
                oplog::record(&pool.conn, "project_del", &p.name, "Project deleted")?;
                success(format!("Project '{}' deleted.", p.name));
                warning("Its work logs are kept (they retain the project name).");
            }

            ProjectAction::List { all } => list(&mut pool, *all)?,
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn add(
    pool: &mut DbPool,
    cfg: &Config,
    name: &str,
    pillar: &str,
    budget: f64,
    quarter_tag: Option<&str>,
    hidden: bool,
    justification: Option<&str>,
    no_audit: bool,
) -> AppResult<()> {
    //
    // 1. Validate inputs before touching the advisor or the store
    //
    if budget <= 0.0 {
        return Err(AppError::InvalidBudget(budget));
    }
    let quarter_tag = match quarter_tag {
        Some(q) => quarter::parse_tag(q)?,
        None => quarter::TOP_PRIORITY.to_string(),
    };

    //
    // 2. Audit gate (unless skipped). A rejection persists nothing.
    //
    if !no_audit {
        let justification = justification.ok_or_else(|| {
            AppError::Config("--justification is required unless --no-audit is set".to_string())
        })?;

        let proposal = ProjectProposal {
            name: name.to_string(),
            pillar: pillar.to_string(),
            budget_hours: budget,
            quarter: quarter_tag.clone(),
            justification: justification.to_string(),
        };

        let verdict = audit::run_audit(cfg, pool, &proposal)?;
        match verdict.status {
            AuditStatus::Approved => {
                success(format!("APPROVED: {}", verdict.reason));
            }
            AuditStatus::Rejected => {
                return Err(AppError::AuditRejected(verdict.reason));
            }
        }
    }

    //
    // 3. Persist
    //
    let mut project = Project::new(
        name.to_string(),
        pillar.to_string(),
        budget,
        quarter_tag,
        !hidden,
    );
    project.id = queries::insert_project(&pool.conn, &project)?;
    oplog::record(&pool.conn, "project_add", name, "Project created")?;
    success(format!("Project '{}' created (id {}).", name, project.id));
    Ok(())
}

fn update(
    pool: &DbPool,
    id: i64,
    budget: Option<f64>,
    status: Option<&str>,
    quarter_tag: Option<&str>,
    visible: Option<bool>,
) -> AppResult<()> {
    if let Some(b) = budget
        && b <= 0.0
    {
        return Err(AppError::InvalidBudget(b));
    }
    let status = match status {
        Some(s) => Some(
            ProjectStatus::from_db_str(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))?,
        ),
        None => None,
    };
    let quarter_tag = match quarter_tag {
        Some(q) => Some(quarter::parse_tag(q)?),
        None => None,
    };

    let p = queries::update_project(&pool.conn, id, budget, status, quarter_tag, visible)?;
    oplog::record(&pool.conn, "project_edit", &p.name, "Project updated")?;
    success(format!("Project '{}' updated.", p.name));
    Ok(())
}

fn list(pool: &mut DbPool, all: bool) -> AppResult<()> {
    let projects = queries::load_projects(pool)?;
    let current_q = quarter::quarter_tag(date::today());

    let shown: Vec<_> = projects
        .iter()
        .filter(|p| all || aggregate::is_visible(p, &current_q, false))
        .collect();

    if shown.is_empty() {
        println!("No projects to show for {current_q}. Try --all.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("NAME", 28),
        Column::new("PILLAR", 20),
        Column::new("BUDGET", 8),
        Column::new("STATUS", 10),
        Column::new("QUARTER", 14),
        Column::new("VISIBLE", 7),
    ]);

    for p in shown {
        table.add_row(vec![
            p.id.to_string(),
            p.name.clone(),
            p.pillar_id.clone(),
            format!("{:.0}h", p.budget_hours),
            p.status.to_db_str().to_string(),
            p.quarter.clone(),
            if p.visible { "yes" } else { "no" }.to_string(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
