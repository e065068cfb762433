//! Semantic validation entry points.
//!
//! Each check can run on its own; [`validate_manifest`] runs all of them
//! unconditionally and merges the findings, so one pass reports every
//! problem.

use tracing::{debug, warn};

use super::diagnostic::LintDiagnostic;
use super::registry::RuleRegistry;
use super::result::ValidationResult;
use super::rule::LintRule;
use super::rules::{
    CircularDependencyRule, DuplicateIdRule, PhaseOrderingRule, UndefinedDependencyRule,
};
use crate::graph::PhasePolicy;
use crate::manifest::{Manifest, Module};

/// Report every module id declared more than once.
pub fn check_duplicate_ids(modules: &[Module]) -> Vec<LintDiagnostic> {
    DuplicateIdRule.check_modules(modules)
}

/// Report every dependency naming a module that does not exist.
pub fn validate_dependency_existence(manifest: &Manifest) -> Vec<LintDiagnostic> {
    UndefinedDependencyRule.check(manifest)
}

/// Report dependency cycles, including self-dependencies.
pub fn detect_dependency_cycles(manifest: &Manifest) -> Vec<LintDiagnostic> {
    CircularDependencyRule.check(manifest)
}

/// Check phase ordering with the category-derived phases.
pub fn validate_phase_ordering(manifest: &Manifest) -> ValidationResult {
    ValidationResult::from_diagnostics(PhaseOrderingRule::default().check(manifest))
}

/// Check phase ordering with a custom phase policy.
pub fn validate_phase_ordering_with(
    manifest: &Manifest,
    policy: impl PhasePolicy + Send + Sync + 'static,
) -> ValidationResult {
    ValidationResult::from_diagnostics(PhaseOrderingRule::new(policy).check(manifest))
}

/// Run every built-in check and merge the results.
pub fn validate_manifest(manifest: &Manifest) -> ValidationResult {
    validate_manifest_with(manifest, &RuleRegistry::with_builtins())
}

/// Run the rules of `registry` and merge the results.
pub fn validate_manifest_with(manifest: &Manifest, registry: &RuleRegistry) -> ValidationResult {
    debug!(
        "Validating manifest '{}' ({} modules, {} rules)",
        manifest.id,
        manifest.modules.len(),
        registry.len()
    );
    let result = registry.check(manifest);
    if !result.is_valid() {
        warn!(
            "Manifest '{}' has {} error(s) and {} warning(s)",
            manifest.id,
            result.errors.len(),
            result.warnings.len()
        );
    }
    result
}
