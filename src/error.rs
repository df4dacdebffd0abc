// Error taxonomy. Run-level errors abort the whole invocation and map to
// distinct exit codes so an external scheduler can tell "bad config" from
// "upstream down". Day-level errors are recorded and never stop the batch.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors: nothing is written once one of these occurs.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[source] anyhow::Error),

    #[error("upstream fetch failed: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("upstream returned invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl RunError {
    /// Process exit code for this error. 0 is reserved for a completed run
    /// (individual day failures do not change the exit status).
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Config(_) => 2,
            RunError::Fetch(_) => 3,
            RunError::Decode(_) => 4,
        }
    }

    pub fn config(err: impl Into<anyhow::Error>) -> Self {
        RunError::Config(err.into())
    }
}

/// Failures isolated to a single day's output file. The orchestrator logs
/// these and moves on to the next day.
#[derive(Debug, Error)]
pub enum DayError {
    /// Moving the previous file into the backup directory failed. The new
    /// write is never attempted after this: the prior file is the operator's
    /// only copy and must stay where it is.
    #[error("failed to move previous file into {backup}: {source}")]
    Rotation {
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
