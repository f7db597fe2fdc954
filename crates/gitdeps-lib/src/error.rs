use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitDepsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML at byte {position}: {reason}")]
    Parse { position: u64, reason: String },

    #[error("Manifest is missing {missing}")]
    Schema { missing: String },

    #[error("Invalid value {value:?} for {attribute}: {reason}")]
    InvalidAttribute {
        attribute: String,
        value: String,
        reason: String,
    },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}

impl GitDepsError {
    pub fn schema(missing: impl Into<String>) -> Self {
        Self::Schema {
            missing: missing.into(),
        }
    }

    /// Process exit code for this failure.
    ///
    /// `0` is success, `1` is reserved for anything unexpected.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::CliArgumentValidation { .. } => 2,
            Self::Read { .. } | Self::Write { .. } => 3,
            Self::Parse { .. } => 4,
            Self::Schema { .. } | Self::InvalidAttribute { .. } => 5,
            Self::Json(_) | Self::Unexpected(_) => 1,
        }
    }
}
