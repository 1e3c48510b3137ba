//! Error type shared by the catalog loader and the GA runner.

/// Errors raised while building a catalog or starting a run.
///
/// All of these are detected before the first generation executes; once a
/// run has started it always completes.
#[derive(Debug, thiserror::Error)]
pub enum KnapsackError {
    /// A [`GaConfig`](crate::ga::GaConfig) parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An in-memory catalog has a negative or non-finite number.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The catalog has no items, so there is nothing to select from.
    #[error("catalog contains no items")]
    EmptyCatalog,

    /// The item text could not be parsed.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number of the offending record.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The item file could not be read.
    #[error("failed to read item file: {0}")]
    Io(#[from] std::io::Error),
}

impl KnapsackError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    pub(crate) fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog(reason.into())
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
