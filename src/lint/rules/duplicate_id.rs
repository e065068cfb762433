//! Duplicate module id detection.
//!
//! This rule detects module ids declared more than once.

use crate::graph::find_duplicate_ids;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::manifest::{Manifest, Module};

/// Detects module ids declared more than once.
pub struct DuplicateIdRule;

impl DuplicateIdRule {
    /// Check a bare module list, before any graph is built from it.
    pub fn check_modules(&self, modules: &[Module]) -> Vec<LintDiagnostic> {
        find_duplicate_ids(modules)
            .into_iter()
            .map(|dup| {
                let positions: Vec<_> = dup
                    .positions
                    .iter()
                    .map(|p| format!("modules[{}]", p))
                    .collect();
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Duplicate module id '{}' (declared at {})",
                        dup.id,
                        positions.join(", ")
                    ),
                )
                .with_module(dup.id)
                .with_suggestion("Rename or remove the extra declarations")
            })
            .collect()
    }
}

impl LintRule for DuplicateIdRule {
    fn id(&self) -> RuleId {
        RuleId::new("duplicate-id")
    }

    fn name(&self) -> &str {
        "Duplicate Module Id"
    }

    fn description(&self) -> &str {
        "Ensures every module id is declared once"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, manifest: &Manifest) -> Vec<LintDiagnostic> {
        self.check_modules(&manifest.modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(ids: &[&str]) -> Manifest {
        Manifest {
            modules: ids
                .iter()
                .map(|id| Module {
                    id: id.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn detects_duplicate_id() {
        let rule = DuplicateIdRule;
        let diagnostics = rule.check(&manifest(&["a.same", "a.same"]));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Duplicate"));
        assert!(diagnostics[0].message.contains("modules[0], modules[1]"));
        assert_eq!(diagnostics[0].module.as_deref(), Some("a.same"));
    }

    #[test]
    fn reports_each_duplicated_id_once() {
        let rule = DuplicateIdRule;
        let diagnostics = rule.check(&manifest(&["a", "b", "a", "b", "a"]));

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("modules[0], modules[2], modules[4]"));
    }

    #[test]
    fn passes_with_unique_ids() {
        let rule = DuplicateIdRule;
        assert!(rule.check(&manifest(&["a.one", "b.two"])).is_empty());
    }
}
