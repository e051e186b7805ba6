use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single bind attempt. None of them are retried.
#[derive(Debug, Error)]
pub enum BindError {
    /// A file-path parameter matched no file.
    #[error("{message}")]
    NotFound { parameter: String, message: String },

    /// A file-path parameter matched more than one file.
    #[error("{message}")]
    Ambiguous {
        parameter: String,
        matches: Vec<String>,
        message: String,
    },

    #[error("invalid value for '{parameter}': {reason}")]
    InvalidValue { parameter: String, reason: String },

    #[error("'{command}' has no parameter named '{parameter}'")]
    UnknownParameter { command: String, parameter: String },

    #[error("missing mandatory parameter(s): {}", names.join(", "))]
    MissingMandatory { names: Vec<String> },

    #[error("failed to access '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BindError {
    pub(crate) fn invalid(parameter: &str, reason: impl Into<String>) -> Self {
        BindError::InvalidValue {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BindError::Io {
            path: path.into(),
            source,
        }
    }
}
