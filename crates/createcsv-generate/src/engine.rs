use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationSummary};
use crate::output::csv::{data_record, header_record};

const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Drives the bounded generation loop.
///
/// The value generator is owned by the instance and is never reseeded, so
/// consecutive runs on the same instance continue the same stream.
pub struct RecordGenerator {
    options: GenerateOptions,
    rng: ChaCha8Rng,
}

impl RecordGenerator {
    pub fn new(options: GenerateOptions) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(options.seed);
        Self::with_rng(options, rng)
    }

    pub fn with_rng(options: GenerateOptions, rng: ChaCha8Rng) -> Self {
        Self { options, rng }
    }

    /// Create or truncate `path` and write the dataset into it.
    pub fn write_file(&mut self, path: &Path) -> Result<GenerationSummary, GenerationError> {
        self.options.validate()?;
        let file = File::create(path).map_err(|source| GenerationError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        info!(event = "output_created", path = %path.display());
        self.write_to(file)
    }

    /// Write the header and data records to `sink`, flushing before returning.
    pub fn write_to<W: Write>(&mut self, sink: W) -> Result<GenerationSummary, GenerationError> {
        self.options.validate()?;
        let columns = self.options.columns;

        info!(
            event = "generation_started",
            columns = columns,
            record_threshold = self.options.record_threshold,
            size_threshold = self.options.size_threshold,
            seed = self.options.seed,
        );

        let mut writer = BufWriter::new(sink);
        let mut summary = GenerationSummary::default();

        let mut line = header_record(columns);
        writer.write_all(line.as_bytes())?;
        summary.bytes += line.len() as u64;

        while self.options.wants_more(&summary) {
            line.clear();
            data_record(&mut self.rng, columns, &mut line);
            writer.write_all(line.as_bytes())?;
            summary.bytes += line.len() as u64;
            summary.records += 1;

            if summary.records % PROGRESS_INTERVAL == 0 {
                debug!(
                    event = "generation_progress",
                    records = summary.records,
                    bytes = summary.bytes,
                );
            }
        }

        writer.flush()?;

        info!(
            event = "generation_finished",
            records = summary.records,
            bytes = summary.bytes,
        );

        Ok(summary)
    }
}
