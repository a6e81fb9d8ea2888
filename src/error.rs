//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O errors and provides semantic variants for mark
//! validation and aggregation failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mark format is wrong: token {position} ({token:?}) does not match <1-100>/<1-100>")]
    MarkFormat { token: String, position: usize },

    #[error("No of subjects given as arguments ({expected}) is not matching with the marks provided ({parsed})")]
    SubjectCountMismatch { expected: usize, parsed: usize },

    #[error("No subjects to aggregate: the marks string produced an empty collection")]
    EmptySubjects,
}
