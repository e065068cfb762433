//! Circular dependency detection.
//!
//! This rule detects dependency cycles between modules, including a
//! module that depends on itself.

use crate::graph::DependencyGraph;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::manifest::Manifest;

/// Detects dependency cycles between modules.
pub struct CircularDependencyRule;

impl LintRule for CircularDependencyRule {
    fn id(&self) -> RuleId {
        RuleId::new("circular-dependency")
    }

    fn name(&self) -> &str {
        "Circular Dependency"
    }

    fn description(&self) -> &str {
        "Detects dependency cycles between modules"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, manifest: &Manifest) -> Vec<LintDiagnostic> {
        DependencyGraph::new(manifest)
            .find_cycles()
            .into_iter()
            .map(|cycle| {
                let message = if cycle.len() == 2 {
                    format!("Dependency cycle detected: module '{}' depends on itself", cycle[0])
                } else {
                    format!("Dependency cycle detected: {}", cycle.join(" -> "))
                };
                LintDiagnostic::new(self.id(), self.default_severity(), message)
                    .with_module(cycle[0].as_str())
                    .with_references(cycle)
            })
            .collect()
    }
}
