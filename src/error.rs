//! Error types for kubeconf.
//!
//! Uses thiserror for derive macros. Only two kinds of failure exist: the
//! input was not usable YAML, or the filesystem refused an operation.

use thiserror::Error;

/// Main error type for kubeconf operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not valid YAML, or cannot be represented by the target model.
    #[error("failed to parse YAML: {0}")]
    Parse(String),

    /// Reading, writing, or renaming a file failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Returns true for malformed or unrepresentable YAML.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Returns true for filesystem failures.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

/// Result type alias for kubeconf operations.
pub type Result<T> = std::result::Result<T, Error>;
