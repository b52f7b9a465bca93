use thiserror::Error;

/// Errors surfaced by the quiz core and its storage collaborators.
///
/// There are deliberately only two classes: bad input refuses to start a
/// session, and storage trouble downgrades to in-memory defaults. Everything
/// else in the core is a total function over validated state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The caller supplied input a session cannot be built from,
    /// e.g. an empty table selection.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A persistence read or write failed. Callers fall back to default
    /// values on read and skip the write, so this is never fatal.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::StorageUnavailable(err.to_string())
    }
}

impl From<csv::Error> for QuizError {
    fn from(err: csv::Error) -> Self {
        QuizError::StorageUnavailable(err.to_string())
    }
}
