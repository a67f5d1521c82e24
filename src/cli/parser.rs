use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for focuslog
/// CLI application to track deep-work sessions with SQLite
#[derive(Parser)]
#[command(
    name = "focuslog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track deep-work sessions against strategic projects, with dashboards and an AI coach",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage the database (integrity info, vacuum)
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Manage strategic pillars
    Pillar {
        #[command(subcommand)]
        action: PillarAction,
    },

    /// Manage projects (CRUD, gated by the AI audit)
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Control the deep-work session lifecycle
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Manage work logs (manual entry / fix-ups)
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Daily and weekly KPIs plus project budget cards
    Dashboard {
        #[arg(long = "show-all", help = "Show projects from all quarters")]
        show_all: bool,
    },

    /// Quarterly plan-vs-execution summary
    Quarter {
        #[arg(long = "tag", help = "Quarter tag, e.g. Q3-2026 (default: current)")]
        tag: Option<String>,
    },

    /// Rolling activity grouped by day and pillar
    Trend {
        #[arg(long, default_value = "30", help = "Window size in days")]
        days: i64,
    },

    /// Export work logs
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Interactive AI strategy coach (streams replies)
    Coach,

    /// Print the internal operation log
    Oplog {
        #[arg(long = "print", help = "Print rows from the internal oplog table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum PillarAction {
    /// Add a pillar
    Add { name: String },
    /// List pillars
    List,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Propose a new project (runs the AI audit unless --no-audit)
    Add {
        name: String,

        #[arg(long, help = "Pillar this project belongs to")]
        pillar: String,

        #[arg(long, help = "Budget in hours (must be > 0)")]
        budget: f64,

        #[arg(long, help = "Quarter tag, e.g. Q3-2026 or 'Top Priority'")]
        quarter: Option<String>,

        #[arg(long, help = "Hide the project from the dashboard")]
        hidden: bool,

        #[arg(long, help = "Why this project, why now (sent to the audit)")]
        justification: Option<String>,

        #[arg(long = "no-audit", help = "Skip the AI audit gate")]
        no_audit: bool,
    },

    /// Update budget / status / quarter / visibility
    Update {
        id: i64,

        #[arg(long)]
        budget: Option<f64>,

        #[arg(long, help = "Active, Completed or OnHold")]
        status: Option<String>,

        #[arg(long)]
        quarter: Option<String>,

        #[arg(long, help = "true or false")]
        visible: Option<bool>,
    },

    /// Delete a project (does not touch its work logs)
    Del { id: i64 },

    /// List projects
    List {
        #[arg(long, help = "Include hidden and completed projects")]
        all: bool,
    },
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start a focus session on a project
    Start { project: i64 },

    /// Stop the running session and capture elapsed time for review
    Stop,

    /// Confirm the reviewed session with a focus score (1-5)
    Save {
        #[arg(long)]
        focus: i32,
    },

    /// Discard the session without saving a log
    Discard,

    /// Show the current session state
    Status,
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Add a work log manually
    Add {
        #[arg(long, help = "Project id")]
        project: i64,

        #[arg(long, help = "Hours worked (must be > 0)")]
        hours: f64,

        #[arg(long, help = "Focus score (1-5)")]
        focus: i32,

        #[arg(long, help = "Date (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// Delete a work log by id
    Del { id: i64 },

    /// List work logs
    List {
        #[arg(long, help = "Only today's logs")]
        today: bool,

        #[arg(long, default_value = "20", help = "Max rows to show")]
        limit: usize,
    },
}
