use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(u32),

    #[error("Question not found: {0}")]
    QuestionNotFound(u32),

    #[error("No results at the requested scope")]
    NoResults,

    #[error("Incomplete question: missing {0}")]
    IncompleteQuestion(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// The three failure classes the transport envelope distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Unprocessable,
}

impl ErrorKind {
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Unprocessable => 422,
        }
    }

    /// Canonical envelope message for the class.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad request",
            ErrorKind::NotFound => "resource not found",
            ErrorKind::Unprocessable => "unprocessable",
        }
    }
}

impl QuizError {
    /// Classify for the uniform error envelope.
    ///
    /// Validation failures are detected before any store access, not-found is
    /// a successful query with zero rows, and everything that went wrong
    /// while executing a store operation is unprocessable.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::InvalidRequest(_) | QuizError::UnknownCategory(_) => ErrorKind::BadRequest,
            QuizError::QuestionNotFound(_) | QuizError::NoResults => ErrorKind::NotFound,
            QuizError::IncompleteQuestion(_)
            | QuizError::Io(_)
            | QuizError::Serialization(_)
            | QuizError::Store(_) => ErrorKind::Unprocessable,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_request() {
        assert_eq!(
            QuizError::InvalidRequest("missing quiz_category".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(QuizError::UnknownCategory(99).kind(), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::BadRequest.status(), 400);
    }

    #[test]
    fn missing_rows_are_not_found() {
        assert_eq!(QuizError::QuestionNotFound(7).kind(), ErrorKind::NotFound);
        assert_eq!(QuizError::NoResults.kind(), ErrorKind::NotFound);
        assert_eq!(ErrorKind::NotFound.status(), 404);
    }

    #[test]
    fn execution_errors_are_unprocessable() {
        assert_eq!(
            QuizError::IncompleteQuestion("answer").kind(),
            ErrorKind::Unprocessable
        );
        assert_eq!(
            QuizError::Store("write failed".into()).kind(),
            ErrorKind::Unprocessable
        );
        assert_eq!(ErrorKind::Unprocessable.status(), 422);
    }
}
