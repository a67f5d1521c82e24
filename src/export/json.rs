use crate::errors::{AppError, AppResult};
use crate::models::WorkLog;

/// Write the work logs as pretty-printed JSON.
pub fn write_json(path: &str, logs: &[WorkLog]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(logs).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
