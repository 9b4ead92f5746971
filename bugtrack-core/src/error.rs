use thiserror::Error;

/// Error returned when text can't be parsed into one of the closed enums
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseError {
    /// What was being parsed ("severity", "status", "sort key")
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Comma separated list of accepted values
    pub expected: &'static str,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Reasons a log-bug form draft is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Description is required")]
    MissingDescription,
    #[error("Severity is required")]
    MissingSeverity,
    #[error("Assignee is required")]
    MissingAssignee,
}

/// Error type for bug collection operations
#[derive(Debug, Error)]
pub enum BugError {
    /// No bug with the given id exists in the collection
    #[error("Bug #{0} not found")]
    NotFound(u32),

    /// Comment text was empty after trimming
    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Config file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BugError>;
