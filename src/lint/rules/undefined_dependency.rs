//! Undefined dependency detection.
//!
//! This rule detects references to undeclared modules in dependencies.

use crate::graph::DependencyGraph;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::manifest::Manifest;

/// Detects references to undeclared modules in dependencies.
pub struct UndefinedDependencyRule;

impl LintRule for UndefinedDependencyRule {
    fn id(&self) -> RuleId {
        RuleId::new("undefined-dependency")
    }

    fn name(&self) -> &str {
        "Undefined Dependency"
    }

    fn description(&self) -> &str {
        "Ensures all dependencies reference declared modules"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, manifest: &Manifest) -> Vec<LintDiagnostic> {
        DependencyGraph::new(manifest)
            .missing_dependencies()
            .into_iter()
            .map(|missing| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Unknown dependency: module '{}' depends on '{}' which does not exist",
                        missing.module.id, missing.dependency
                    ),
                )
                .with_module(missing.module.id.as_str())
                .with_reference(missing.dependency)
            })
            .collect()
    }
}
