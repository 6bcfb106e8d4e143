use std::fs::{OpenOptions, create_dir_all};
use std::path::Path;

use crate::errors::GenerationError;
use crate::model::GenerationReport;

/// Write the run report as pretty JSON, replacing any existing file.
pub fn write_report(path: &Path, report: &GenerationReport) -> Result<(), GenerationError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
