//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! problems found during manifest validation. A diagnostic carries the
//! module it is about and the other module ids involved, so a report is
//! actionable without re-reading the manifest.

use super::rule::{RuleId, Severity};

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Module the diagnostic is about, if any.
    pub module: Option<String>,
    /// Other module ids involved (missing target, cycle path, ...).
    pub references: Vec<String>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            module: None,
            references: vec![],
            suggestion: None,
        }
    }

    /// Attach the module this diagnostic is about.
    pub fn with_module(mut self, id: impl Into<String>) -> Self {
        self.module = Some(id.into());
        self
    }

    /// Add a referenced module id.
    pub fn with_reference(mut self, id: impl Into<String>) -> Self {
        self.references.push(id.into());
        self
    }

    /// Add several referenced module ids.
    pub fn with_references<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
