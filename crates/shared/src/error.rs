use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    UnknownCommand,
    InvalidShotCount,
    MalformedAction,
}

/// Serializable form of an [`OrderError`] for hosts that print JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Rejected host input. Screen operations themselves never fail.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("invalid shot count '{0}'")]
    InvalidShotCount(String),
    #[error("malformed action: {0}")]
    MalformedAction(#[from] serde_json::Error),
}

impl OrderError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::Validation,
            Self::UnknownCommand(_) => ErrorCode::UnknownCommand,
            Self::InvalidShotCount(_) => ErrorCode::InvalidShotCount,
            Self::MalformedAction(_) => ErrorCode::MalformedAction,
        }
    }
}

impl From<&OrderError> for ErrorReport {
    fn from(value: &OrderError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
