// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DrawNumbersError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DrawNumbersError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, DrawNumbersError>;

/// Domain-layer errors: every variant is a recoverable, user-facing
/// validation failure that aborts a draw before any state mutation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid range: minimum ({min}) must be less than maximum ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("All candidate numbers between {min} and {max} are excluded")]
    RangeFullyExcluded { min: i64, max: i64 },

    #[error("Requested count ({requested}) exceeds the available numbers ({available})")]
    InsufficientAvailable { requested: u32, available: u64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read settings '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings '{path}': {source}")]
    SettingsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append history to '{path}': {source}")]
    HistoryAppend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} settings: {details}")]
    SerializationError { format: String, details: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for DrawNumbersError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<toml::de::Error> for InfrastructureError {
    fn from(err: toml::de::Error) -> Self {
        Self::SerializationError {
            format: "TOML".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DrawNumbersError {
    fn from(err: toml::de::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<toml::ser::Error> for InfrastructureError {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerializationError {
            format: "TOML".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DrawNumbersError {
    fn from(err: toml::ser::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DrawNumbersError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DrawNumbersError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DrawNumbersError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
