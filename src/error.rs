//! Error types for manifest operations.
//!
//! This module defines [`ManifestError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Parsing failures are reported as [`ParseError`] values, never panics
//! - Semantic problems (duplicates, unknown dependencies, cycles) are collected
//!   as lint diagnostics instead of being raised as errors
//! - Use `ManifestError` for operations that cannot produce a meaningful result
//! - Use `anyhow::Error` (via `ManifestError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::manifest::ParseError;

/// Core error type for manifest operations.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file not found at the given location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest file could not be parsed.
    #[error("Failed to parse manifest at {path}: {source}")]
    ManifestParseError {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Referenced module id does not exist in the manifest.
    #[error("Unknown module: {id}")]
    UnknownModule { id: String },

    /// Module dependency cycle detected.
    #[error("Dependency cycle detected: {cycle}")]
    CircularDependency { cycle: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for manifest operations.
pub type Result<T> = std::result::Result<T, ManifestError>;
