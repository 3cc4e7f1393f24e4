use pk_core::PkError;
use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while parsing or assembling model input data.
///
/// Build-time validation of a whole configuration is reported separately
/// through [`crate::ConfigurationError`], which lists every offending field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("Row {row}: expected {expected} values, got {got}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Too many values for upper triangle of a {n}x{n} matrix")]
    TriangleOverflow { n: usize },

    #[error("Could not parse '{text}' as a number")]
    Number { text: String },

    #[error("Invalid groups format '{text}'. Use group_id:count,group_id:count")]
    Groups { text: String },

    #[error("Line {line}: {message}")]
    Line { line: usize, message: String },

    #[error("Unknown {kind} identifier: {id}")]
    UnknownIdentifier { kind: &'static str, id: String },

    #[error("Length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error(transparent)]
    Core(#[from] PkError),
}
