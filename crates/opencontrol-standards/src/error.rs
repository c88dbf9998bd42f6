//! Error types for loading standard documents.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a standard document.
#[derive(Debug, Error)]
pub enum StandardError {
    /// The path could not be turned into readable bytes.
    #[error("failed to read standard file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes were read but do not describe a valid standard.
    #[error("standard file {path} does not match the standard schema: {message}")]
    StandardSchema { path: PathBuf, message: String },
}

/// Discriminant of [`StandardError`], for matching by kind instead of message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardErrorKind {
    ReadFile,
    StandardSchema,
}

impl StandardErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadFile => "read-file",
            Self::StandardSchema => "standard-schema",
        }
    }
}

impl std::fmt::Display for StandardErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StandardError {
    pub fn kind(&self) -> StandardErrorKind {
        match self {
            Self::ReadFile { .. } => StandardErrorKind::ReadFile,
            Self::StandardSchema { .. } => StandardErrorKind::StandardSchema,
        }
    }

    /// Path of the file the failed load was pointed at.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadFile { path, .. } | Self::StandardSchema { path, .. } => path,
        }
    }

    pub(crate) fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::StandardSchema {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for standard loading operations.
pub type Result<T> = std::result::Result<T, StandardError>;
