use thiserror::Error;

pub type PkResult<T> = Result<T, PkError>;

/// Failures of the numeric helpers. `what` names the offending quantity.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PkError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Raised for zero or negative values where only positive ones are physical.
    #[error("{what} must be positive")]
    InvalidArg { what: &'static str },

    #[error("{what} index {index} out of range for {len} entries")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
