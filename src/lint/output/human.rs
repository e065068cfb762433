//! Human-readable output formatter.
//!
//! Formats a validation result for terminal display.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, ValidationResult};
use std::io::Write;

/// Formats validation reports for human consumption.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }

    fn write_diagnostic<W: Write>(diag: &LintDiagnostic, writer: &mut W) -> std::io::Result<()> {
        // Header line: error[rule-id]: message
        writeln!(writer, "{}[{}]: {}", diag.severity, diag.rule_id, diag.message)?;

        if let Some(ref module) = diag.module {
            writeln!(writer, "  --> module {}", module)?;
        }

        if let Some(ref suggestion) = diag.suggestion {
            writeln!(writer, "   = help: {}", suggestion)?;
        }

        if !diag.references.is_empty() {
            writeln!(writer, "   = note: involves {}", diag.references.join(", "))?;
        }

        writeln!(writer)
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, result: &ValidationResult, writer: &mut W) -> std::io::Result<()> {
        if result.is_empty() {
            return writeln!(writer, "Manifest is valid");
        }

        for diag in result.iter() {
            Self::write_diagnostic(diag, writer)?;
        }

        writeln!(
            writer,
            "Found {} error(s) and {} warning(s)",
            result.errors.len(),
            result.warnings.len()
        )
    }
}

/// Render a validation result as human-readable lines.
pub fn format_validation_errors(result: &ValidationResult) -> String {
    let mut output = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = HumanFormatter.format(result, &mut output);
    String::from_utf8_lossy(&output).into_owned()
}
