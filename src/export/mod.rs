//! Work-log export (CSV / JSON).

pub mod csv;
pub mod json;

use crate::errors::{AppError, AppResult};
use crate::models::WorkLog;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Write `logs` to `path` in the requested format. Refuses to overwrite
/// an existing file unless `force` is set.
pub fn export_logs(
    path: &str,
    format: ExportFormat,
    logs: &[WorkLog],
    force: bool,
) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "File already exists: {path} (use --force to overwrite)"
        )));
    }

    match format {
        ExportFormat::Csv => csv::write_csv(path, logs)?,
        ExportFormat::Json => json::write_json(path, logs)?,
    }
    Ok(())
}
