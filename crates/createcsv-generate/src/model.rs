use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 1;

/// Options for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Stop once this many data records are written. `0` disables the limit.
    pub record_threshold: u64,
    /// Stop once this many bytes are written, header included. `0` disables the limit.
    pub size_threshold: u64,
    /// Fields per record.
    pub columns: usize,
    /// Seed for the value generator.
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            record_threshold: 0,
            size_threshold: 0,
            columns: 100,
            seed: DEFAULT_SEED,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.columns == 0 {
            return Err(GenerationError::InvalidOptions(
                "column count must be at least 1".to_string(),
            ));
        }
        if self.record_threshold == 0 && self.size_threshold == 0 {
            return Err(GenerationError::NoThreshold);
        }
        Ok(())
    }

    /// True while any active threshold is still unmet.
    pub fn wants_more(&self, progress: &GenerationSummary) -> bool {
        (self.size_threshold != 0 && progress.bytes < self.size_threshold)
            || (self.record_threshold != 0 && progress.records < self.record_threshold)
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Data records written; the header is not counted.
    pub records: u64,
    /// Bytes written, header included.
    pub bytes: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub started_at: String,
    pub elapsed_ms: u64,
    pub options: GenerateOptions,
    pub summary: GenerationSummary,
}

impl GenerationReport {
    pub fn new(
        output: PathBuf,
        started_at: DateTime<Utc>,
        elapsed: Duration,
        options: GenerateOptions,
        summary: GenerationSummary,
    ) -> Self {
        Self {
            output,
            started_at: started_at.to_rfc3339(),
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            options,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(record_threshold: u64, size_threshold: u64) -> GenerateOptions {
        GenerateOptions {
            record_threshold,
            size_threshold,
            ..GenerateOptions::default()
        }
    }

    fn progress(records: u64, bytes: u64) -> GenerationSummary {
        GenerationSummary { records, bytes }
    }

    #[test]
    fn validate_requires_a_threshold() {
        assert!(matches!(
            options(0, 0).validate(),
            Err(GenerationError::NoThreshold)
        ));
        assert!(options(1, 0).validate().is_ok());
        assert!(options(0, 1).validate().is_ok());
    }

    #[test]
    fn validate_requires_columns() {
        let opts = GenerateOptions {
            columns: 0,
            ..options(5, 0)
        };
        assert!(matches!(
            opts.validate(),
            Err(GenerationError::InvalidOptions(_))
        ));
    }

    #[test]
    fn record_threshold_alone() {
        let opts = options(3, 0);
        assert!(opts.wants_more(&progress(2, 10_000)));
        assert!(!opts.wants_more(&progress(3, 0)));
    }

    #[test]
    fn size_threshold_alone() {
        let opts = options(0, 100);
        assert!(opts.wants_more(&progress(1_000, 99)));
        assert!(!opts.wants_more(&progress(0, 100)));
    }

    #[test]
    fn either_unmet_threshold_keeps_going() {
        let opts = options(3, 100);
        assert!(opts.wants_more(&progress(3, 50)));
        assert!(opts.wants_more(&progress(1, 150)));
        assert!(!opts.wants_more(&progress(3, 100)));
    }

    #[test]
    fn no_threshold_never_runs() {
        assert!(!options(0, 0).wants_more(&progress(0, 0)));
    }
}
