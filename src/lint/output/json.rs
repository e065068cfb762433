//! JSON output formatter.
//!
//! Formats a validation result as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, ValidationResult};
use serde::Serialize;
use std::io::Write;

/// Formats validation reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    valid: bool,
    errors: Vec<JsonDiagnostic<'a>>,
    warnings: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    rule_id: &'a str,
    severity: String,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    module: Option<&'a str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    references: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn convert(diagnostics: &[LintDiagnostic]) -> Vec<JsonDiagnostic<'_>> {
        diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                rule_id: &d.rule_id.0,
                severity: d.severity.to_string(),
                message: &d.message,
                module: d.module.as_deref(),
                references: &d.references,
                suggestion: d.suggestion.as_deref(),
            })
            .collect()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, result: &ValidationResult, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            valid: result.is_valid(),
            errors: Self::convert(&result.errors),
            warnings: Self::convert(&result.warnings),
            summary: JsonSummary {
                total: result.len(),
                errors: result.errors.len(),
                warnings: result.warnings.len(),
            },
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}
