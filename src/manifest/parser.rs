//! Manifest text and file parsing.
//!
//! Parsing happens in two stages: the YAML text is read into a raw
//! value (syntax), then the raw value is checked against the manifest
//! shape (schema). Each stage has its own [`ParseError`] variant so
//! callers can tell a malformed document from an invalid one.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use super::schema::Manifest;
use super::validator::{validate_schema, SchemaError};
use crate::error::{ManifestError, Result};

/// Outcome of parsing manifest text.
pub type ParseResult = std::result::Result<Manifest, ParseError>;

/// Position in the manifest source (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number.
    pub line: usize,
    /// Column number.
    pub column: usize,
}

/// Why manifest text could not be turned into a [`Manifest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not well-formed YAML.
    #[error("Invalid YAML: {message}")]
    Syntax {
        message: String,
        location: Option<SourceLocation>,
    },

    /// The YAML is well-formed but does not match the manifest shape.
    #[error("Invalid manifest: {}", join_errors(.errors))]
    Schema { errors: Vec<SchemaError> },
}

impl ParseError {
    /// Whether this is a syntax failure.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    /// Source location of a syntax failure, if known.
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            ParseError::Syntax { location, .. } => *location,
            ParseError::Schema { .. } => None,
        }
    }

    /// Schema violations (empty for syntax failures).
    pub fn schema_errors(&self) -> &[SchemaError] {
        match self {
            ParseError::Schema { errors } => errors,
            ParseError::Syntax { .. } => &[],
        }
    }
}

fn join_errors(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseError::Syntax {
            location: err.location().map(|loc| SourceLocation {
                line: loc.line(),
                column: loc.column(),
            }),
            message: err.to_string(),
        }
    }
}

/// Parse manifest text into a validated [`Manifest`].
///
/// Syntax errors stop parsing immediately. Schema errors are collected
/// and returned together.
pub fn parse_manifest_str(source: &str) -> ParseResult {
    let raw: serde_yaml::Value = serde_yaml::from_str(source)?;
    let manifest = validate_schema(&raw).map_err(|errors| ParseError::Schema { errors })?;

    debug!(
        "Parsed manifest '{}' with {} module(s)",
        manifest.id,
        manifest.modules.len()
    );
    Ok(manifest)
}

/// Load a manifest file from disk.
///
/// # Errors
///
/// Returns `ManifestNotFound` if the file doesn't exist.
/// Returns `ManifestParseError` if the file is not a valid manifest.
pub fn parse_manifest_file(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ManifestError::Io(e)
        }
    })?;

    parse_manifest_str(&content).map_err(|source| ManifestError::ManifestParseError {
        path: path.to_path_buf(),
        source,
    })
}

impl FromStr for Manifest {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_manifest_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"
version: 1
name: test
id: test
defaults:
  user: ubuntu
  workspace_root: /data/projects
  mode: vibe
modules:
  - id: base.core
    description: Core packages
    install: ["apt-get update"]
    verify: ["true"]
"#;

    #[test]
    fn parses_valid_manifest() {
        let manifest = parse_manifest_str(VALID).unwrap();
        assert_eq!(manifest.name, "test");
        assert_eq!(manifest.modules[0].id, "base.core");
        assert_eq!(manifest.modules[0].install, vec!["apt-get update"]);
    }

    #[test]
    fn malformed_yaml_is_a_syntax_error() {
        let err = parse_manifest_str("version: 1\nname: test\n  extra: bad\n").unwrap_err();
        assert!(err.is_syntax());
        assert!(err.location().is_some());
        assert!(err.schema_errors().is_empty());
    }

    #[test]
    fn unclosed_flow_sequence_is_a_syntax_error() {
        let err = parse_manifest_str("name: [unclosed\n").unwrap_err();
        assert!(err.is_syntax());
        assert!(err.to_string().starts_with("Invalid YAML"));
    }

    #[test]
    fn schema_violation_is_not_a_syntax_error() {
        let err = parse_manifest_str(&VALID.replace("version: 1", "version: 0")).unwrap_err();
        assert!(!err.is_syntax());
        assert!(err.location().is_none());
        assert_eq!(err.schema_errors().len(), 1);
        assert!(err.to_string().contains("version: must be >= 1"));
    }

    #[test]
    fn missing_mode_is_rejected() {
        let err = parse_manifest_str(&VALID.replace("  mode: vibe\n", "")).unwrap_err();
        let paths: Vec<_> = err.schema_errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["defaults.mode"]);
    }

    #[test]
    fn serialized_manifest_parses_back_through_validation() {
        let manifest = parse_manifest_str(VALID).unwrap();
        let yaml = serde_yaml::to_string(&manifest).unwrap();

        assert_eq!(parse_manifest_str(&yaml).unwrap(), manifest);

        let invalid = Manifest {
            version: 0,
            ..manifest
        };
        let yaml = serde_yaml::to_string(&invalid).unwrap();
        let err = parse_manifest_str(&yaml).unwrap_err();
        assert_eq!(err.schema_errors()[0].path, "version");
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(parse_manifest_str("").is_err());
    }

    #[test]
    fn from_str_delegates_to_parser() {
        let manifest: Manifest = VALID.parse().unwrap();
        assert_eq!(manifest.id, "test");
    }

    #[test]
    fn parse_file_reads_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("acfs.manifest.yaml");
        fs::write(&path, VALID).unwrap();

        let manifest = parse_manifest_file(&path).unwrap();
        assert_eq!(manifest.modules.len(), 1);
    }

    #[test]
    fn parse_file_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");

        let result = parse_manifest_file(&path);
        assert!(matches!(result, Err(ManifestError::ManifestNotFound { .. })));
    }

    #[test]
    fn parse_file_wraps_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yaml");
        fs::write(&path, "name: [unclosed\n").unwrap();

        match parse_manifest_file(&path) {
            Err(ManifestError::ManifestParseError { path: p, source }) => {
                assert_eq!(p, path);
                assert!(source.is_syntax());
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
