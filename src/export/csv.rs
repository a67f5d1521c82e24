use crate::errors::{AppError, AppResult};
use crate::models::WorkLog;
use csv::Writer;

/// Write the work logs as CSV to the given file.
pub fn write_csv(path: &str, logs: &[WorkLog]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(["id", "date", "project", "hours", "focus_score"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for log in logs {
        wtr.write_record(&[
            log.id.to_string(),
            log.date_str(),
            log.project_name.clone(),
            format!("{:.2}", log.hours),
            log.focus_score.to_string(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
