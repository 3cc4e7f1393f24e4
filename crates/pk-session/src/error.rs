//! Error types for the pk-session service layer.

use pk_core::PkError;
use pk_engine::EngineError;
use pk_models::{ConfigurationError, ModelError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Locally detected; lists every missing or invalid field.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Raised by the engine. The message is the engine's own.
    #[error("{message}")]
    Backend { message: String },

    /// A calculation was requested without a matching built model.
    #[error("{reason}")]
    NotReady { reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for pk-session operations.
pub type SessionResult<T> = Result<T, SessionError>;

impl From<EngineError> for SessionError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Backend { message } => SessionError::Backend { message },
            other => SessionError::Backend {
                message: other.to_string(),
            },
        }
    }
}

impl From<ModelError> for SessionError {
    fn from(err: ModelError) -> Self {
        SessionError::InvalidInput(err.to_string())
    }
}

impl From<PkError> for SessionError {
    fn from(err: PkError) -> Self {
        SessionError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_passes_through() {
        let err: SessionError = EngineError::backend("singular Jacobian").into();
        assert_eq!(err.to_string(), "singular Jacobian");
    }

    #[test]
    fn unsupported_becomes_backend() {
        let err: SessionError = EngineError::Unsupported { what: "GPEC" }.into();
        assert!(matches!(err, SessionError::Backend { .. }));
        assert!(err.to_string().contains("GPEC"));
    }

    #[test]
    fn model_errors_are_input_errors() {
        let err: SessionError = ModelError::NonPhysical {
            what: "negative mole fraction",
        }
        .into();
        assert!(matches!(err, SessionError::InvalidInput(_)));
    }
}
