use std::path::PathBuf;
use thiserror::Error;

/// Failures that halt a pipeline run before the report is written.
///
/// Per-row parse failures are not represented here: the aggregator logs
/// and skips them locally, and processing continues.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot read input file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no valid records found in input")]
    NoRecords,

    #[error("need at least 4 aggregated months for a moving average, got {months}")]
    InsufficientMonths { months: usize },

    #[error("cannot write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
