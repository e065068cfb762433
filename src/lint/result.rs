//! Aggregated validation results.

use super::diagnostic::LintDiagnostic;
use super::rule::Severity;

/// Every problem found in one validation pass, split by severity.
///
/// A manifest is valid when `errors` is empty. Warnings never block
/// installation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Problems that make the manifest unusable.
    pub errors: Vec<LintDiagnostic>,
    /// Problems worth attention that do not invalidate the manifest.
    pub warnings: Vec<LintDiagnostic>,
}

impl ValidationResult {
    /// Build a result by partitioning diagnostics on severity.
    pub fn from_diagnostics(diagnostics: impl IntoIterator<Item = LintDiagnostic>) -> Self {
        let mut result = Self::default();
        result.extend(diagnostics);
        result
    }

    /// Whether the manifest passed validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any warnings were reported.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Total number of diagnostics.
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Whether nothing at all was reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Add one diagnostic to the matching list.
    pub fn push(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    /// Errors first, then warnings.
    pub fn iter(&self) -> impl Iterator<Item = &LintDiagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }

    /// Fold another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Extend<LintDiagnostic> for ValidationResult {
    fn extend<I: IntoIterator<Item = LintDiagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.push(diagnostic);
        }
    }
}
