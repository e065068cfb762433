//! Validation report formatters.
//!
//! This module provides formatters for writing a [`ValidationResult`]
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::ValidationResult;
use std::io::Write;

/// Output format for validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// Render `result` in this format.
    pub fn render(self, result: &ValidationResult) -> std::io::Result<String> {
        let mut output = Vec::new();
        match self {
            OutputFormat::Human => HumanFormatter::new().format(result, &mut output)?,
            OutputFormat::Json => JsonFormatter::new().format(result, &mut output)?,
        }
        String::from_utf8(output).map_err(std::io::Error::other)
    }
}

/// Trait for formatting validation reports.
pub trait LintFormatter {
    /// Format the result to the given writer.
    fn format<W: Write>(&self, result: &ValidationResult, writer: &mut W) -> std::io::Result<()>;
}

pub use human::{format_validation_errors, HumanFormatter};
pub use json::JsonFormatter;
