//! Domain-specific error types for the build and test tooling.
//!
//! Each domain has its own error enum built with [`thiserror`].
//! Library modules return typed errors (e.g., [`ResourceError`], [`DiffError`])
//! while command handlers at the CLI boundary convert them to [`anyhow::Error`]
//! via the standard `?` operator.
//!
//! # Error types
//!
//! ```text
//! ResourceError — resource-file derivation and writing
//! DiffError     — JSON loading, gold comparison, cleanup
//! ConfigError   — test spec loading and parameter resolution
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or writing a resource file.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The input list did not contain the leading source path.
    #[error("Missing source path: the first argument must name the source file")]
    MissingSourcePath,

    /// The resource file could not be written.
    #[error("Failed to write resource file {}: {source}", path.display())]
    Write {
        /// Destination path of the resource file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The record could not be serialized to YAML.
    #[error("Failed to serialize resource record: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Errors raised by the JSON differ.
#[derive(Error, Debug)]
pub enum DiffError {
    /// A JSON file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A JSON file did not contain valid JSON.
    #[error("Failed to parse JSON in {}: {source}", path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_json::Error,
    },

    /// A previous output could not be removed before running.
    #[error("Failed to delete {}: {source}", path.display())]
    Delete {
        /// Path that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The gold file to compare against does not exist.
    #[error("Gold file not found: {}", path.display())]
    MissingGold {
        /// Expected location of the gold file.
        path: PathBuf,
    },
}

/// Errors raised while loading differ parameters from a test spec.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The spec file could not be read.
    #[error("IO error reading spec file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The spec file contains a syntax error that prevents parsing.
    #[error("Invalid TOML syntax in {file}: {message}")]
    InvalidSyntax {
        /// Name of the offending file.
        file: String,
        /// Parser message.
        message: String,
    },

    /// The requested test block or a required parameter is absent.
    #[error("Missing required parameter '{0}'")]
    MissingParameter(String),
}
