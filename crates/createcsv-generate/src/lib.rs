//! Bounded CSV record generation for createcsv.
//!
//! Writes a `col1..colN` header followed by rows of random non-negative
//! integers until the record-count or byte-size threshold is reached.
//! Output is deterministic for a given seed.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;

pub use engine::RecordGenerator;
pub use errors::GenerationError;
pub use model::{DEFAULT_SEED, GenerateOptions, GenerationReport, GenerationSummary};
