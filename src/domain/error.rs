use std::io;
use std::path::Path;

use thiserror::Error;

/// Library-wide error type for deveco-port operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The source directory given on the command line does not exist.
    #[error("Source directory not found: {0}")]
    SourceDirNotFound(String),

    /// A required vendor input could not be resolved in the source directory.
    #[error("No {what} matching '{pattern}' found in {dir}. {hint}")]
    MissingInput { what: String, pattern: String, dir: String, hint: String },

    /// Unpack tools are missing and could not be installed.
    #[error("Required tools unavailable ({tools}): {details}")]
    PrerequisiteMissing { tools: String, details: String },

    /// External tool exited with a non-zero status or could not be spawned.
    #[error("Command '{command}' failed: {details}")]
    ToolFailed { command: String, details: String },

    /// Launch descriptor is unreadable or lacks required fields.
    #[error("Malformed launch descriptor {path}: {details}")]
    MalformedDescriptor { path: String, details: String },

    /// Copy, move, link or permission change failed.
    #[error("Failed to {action} {path}: {source}")]
    Filesystem {
        action: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// Zip or tar extraction failed.
    #[error("Failed to extract {archive}: {details}")]
    Archive { archive: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn filesystem(action: &'static str, path: &Path, source: io::Error) -> Self {
        AppError::Filesystem { action, path: path.display().to_string(), source }
    }

    pub(crate) fn malformed_descriptor<S: Into<String>>(path: &Path, details: S) -> Self {
        AppError::MalformedDescriptor { path: path.display().to_string(), details: details.into() }
    }

    /// `io::ErrorKind` view for callers that match on I/O kinds.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::Filesystem { source: err, .. } => err.kind(),
            AppError::Configuration(_) | AppError::MalformedDescriptor { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::SourceDirNotFound(_)
            | AppError::MissingInput { .. }
            | AppError::PrerequisiteMissing { .. } => io::ErrorKind::NotFound,
            AppError::Archive { .. } => io::ErrorKind::InvalidData,
            AppError::ToolFailed { .. } => io::ErrorKind::Other,
        }
    }
}
