//! Installation phase ordering.
//!
//! This rule detects modules that depend on modules from a later
//! installation phase, which an acyclic graph alone does not rule out.

use crate::graph::{
    find_phase_concerns, CategoryPhasePolicy, DependencyGraph, PhaseConcern, PhasePolicy,
};
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::manifest::Manifest;

/// Detects dependencies that point to a later installation phase.
///
/// Dependencies on a strictly later phase are errors. A phased module
/// depending on a module the policy cannot place is a warning.
pub struct PhaseOrderingRule {
    policy: Box<dyn PhasePolicy + Send + Sync>,
}

impl PhaseOrderingRule {
    /// Create the rule with a custom phase policy.
    pub fn new(policy: impl PhasePolicy + Send + Sync + 'static) -> Self {
        Self {
            policy: Box::new(policy),
        }
    }
}

impl Default for PhaseOrderingRule {
    fn default() -> Self {
        Self::new(CategoryPhasePolicy)
    }
}

impl LintRule for PhaseOrderingRule {
    fn id(&self) -> RuleId {
        RuleId::new("phase-ordering")
    }

    fn name(&self) -> &str {
        "Phase Ordering"
    }

    fn description(&self) -> &str {
        "Ensures modules only depend on modules from the same or an earlier phase"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, manifest: &Manifest) -> Vec<LintDiagnostic> {
        let graph = DependencyGraph::new(manifest);
        let policy = self.policy.as_ref();

        find_phase_concerns(&graph, policy)
            .into_iter()
            .map(|concern| {
                let diagnostic = match concern {
                    PhaseConcern::LaterPhase {
                        module,
                        module_phase,
                        dependency,
                        dependency_phase,
                    } => LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!(
                            "Phase order violation: module '{}' ({}) depends on '{}' ({}), which installs later",
                            module.id,
                            policy.phase_name(module_phase),
                            dependency.id,
                            policy.phase_name(dependency_phase)
                        ),
                    )
                    .with_suggestion(format!(
                        "Move '{}' to an earlier phase or drop the dependency",
                        dependency.id
                    )),
                    PhaseConcern::UnphasedDependency {
                        module,
                        module_phase,
                        dependency,
                    } => LintDiagnostic::new(
                        self.id(),
                        Severity::Warning,
                        format!(
                            "Module '{}' ({}) depends on '{}', which has no installation phase",
                            module.id,
                            policy.phase_name(module_phase),
                            dependency.id
                        ),
                    ),
                };
                diagnostic
                    .with_module(concern.module().id.as_str())
                    .with_reference(concern.dependency().id.as_str())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Phase;
    use crate::manifest::Module;

    fn module(id: &str, deps: &[&str]) -> Module {
        Module {
            id: id.to_string(),
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    fn manifest(modules: Vec<Module>) -> Manifest {
        Manifest {
            modules,
            ..Default::default()
        }
    }

    #[test]
    fn later_phase_dependency_is_an_error() {
        let rule = PhaseOrderingRule::default();
        let diagnostics = rule.check(&manifest(vec![
            module("base.core", &["agents.claude"]),
            module("agents.claude", &[]),
        ]));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert!(diagnostics[0].message.contains("(system)"));
        assert!(diagnostics[0].message.contains("'agents.claude' (agents)"));
        assert_eq!(diagnostics[0].module.as_deref(), Some("base.core"));
        assert_eq!(diagnostics[0].references, vec!["agents.claude"]);
    }

    #[test]
    fn unphased_dependency_is_a_warning() {
        let rule = PhaseOrderingRule::default();
        let diagnostics = rule.check(&manifest(vec![
            module("lang.bun", &["custom.tool"]),
            module("custom.tool", &[]),
        ]));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn earlier_phase_dependency_passes() {
        let rule = PhaseOrderingRule::default();
        let diagnostics = rule.check(&manifest(vec![
            module("base.core", &[]),
            module("agents.claude", &["base.core"]),
        ]));

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn custom_policy_is_used() {
        // Reverse ranking: agents first, base last
        let rule = PhaseOrderingRule::new(|m: &Module| -> Option<Phase> {
            match m.category() {
                "agents" => Some(0),
                "base" => Some(1),
                _ => None,
            }
        });
        let diagnostics = rule.check(&manifest(vec![
            module("base.core", &[]),
            module("agents.claude", &["base.core"]),
        ]));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'agents.claude' (phase 0)"));
        assert!(diagnostics[0].message.contains("'base.core' (phase 1)"));
    }
}
