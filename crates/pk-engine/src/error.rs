//! Engine errors.

use pk_core::PkError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Failure reported by the engine itself. The message is kept verbatim.
    #[error("{message}")]
    Backend { message: String },

    /// The model family has no such calculation (e.g. a PT flash on an excess-Gibbs model).
    #[error("Not supported by this model: {what}")]
    Unsupported { what: &'static str },

    /// The engine returned something unusable.
    #[error("Non-physical engine output: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl EngineError {
    pub fn backend(message: impl Into<String>) -> Self {
        EngineError::Backend {
            message: message.into(),
        }
    }
}

impl From<PkError> for EngineError {
    fn from(err: PkError) -> Self {
        match err {
            PkError::NonFinite { what, .. } => EngineError::NonPhysical { what },
            PkError::InvalidArg { what } | PkError::IndexOob { what, .. } => {
                EngineError::InvalidArg { what }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_verbatim() {
        let err = EngineError::backend("flash did not converge at T=300");
        assert_eq!(err.to_string(), "flash did not converge at T=300");
    }

    #[test]
    fn core_errors_convert() {
        let err: EngineError = PkError::InvalidArg { what: "temperature" }.into();
        assert_eq!(err, EngineError::InvalidArg { what: "temperature" });

        let err: EngineError = PkError::NonFinite {
            what: "pressure",
            value: f64::NAN,
        }
        .into();
        assert!(matches!(err, EngineError::NonPhysical { what: "pressure" }));
    }
}
