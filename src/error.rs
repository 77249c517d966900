use thiserror::Error;

use crate::core::task::TaskId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid {kind}: {value:?}")]
    InvalidTag { kind: &'static str, value: String },

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),
}

impl Error {
    /// True for every failure raised while constructing or linking a record.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::InvalidTag { .. })
    }

    pub(crate) fn invalid_document(kind: &str, err: serde_json::Error) -> Self {
        Error::Validation(format!("{}: {}", kind, err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
