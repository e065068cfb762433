//! Installation phases.
//!
//! Modules are installed in broad phases: base system first, then the
//! shell, language runtimes, tooling, agents and finally the full stack.
//! A module depending on something from a later phase is suspicious even
//! when the graph has no cycle. Which phase a module belongs to is decided
//! by a [`PhasePolicy`]; [`CategoryPhasePolicy`] is the default.

use super::dependency::DependencyGraph;
use crate::manifest::Module;
use crate::query::{resolve_module_category, ModuleCategory};

/// Rank of an installation phase. Lower phases install first.
pub type Phase = u32;

/// Assigns modules to installation phases.
///
/// Any `Fn(&Module) -> Option<Phase>` closure is a policy.
pub trait PhasePolicy {
    /// Phase of a module, or `None` if the policy does not place it.
    fn phase_of(&self, module: &Module) -> Option<Phase>;

    /// Display name for a phase.
    fn phase_name(&self, phase: Phase) -> String {
        format!("phase {}", phase)
    }
}

impl<F> PhasePolicy for F
where
    F: Fn(&Module) -> Option<Phase>,
{
    fn phase_of(&self, module: &Module) -> Option<Phase> {
        self(module)
    }
}

/// Derives phases from the module category.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryPhasePolicy;

impl CategoryPhasePolicy {
    const NAMES: [&'static str; 6] = ["system", "shell", "runtimes", "tooling", "agents", "stack"];

    /// Phase rank for a known category.
    pub fn rank(category: ModuleCategory) -> Phase {
        match category {
            ModuleCategory::Base | ModuleCategory::Users | ModuleCategory::Filesystem => 0,
            ModuleCategory::Shell | ModuleCategory::Cli | ModuleCategory::Network => 1,
            ModuleCategory::Lang => 2,
            ModuleCategory::Tools | ModuleCategory::Db | ModuleCategory::Cloud => 3,
            ModuleCategory::Agents => 4,
            ModuleCategory::Stack | ModuleCategory::Acfs => 5,
        }
    }
}

impl PhasePolicy for CategoryPhasePolicy {
    fn phase_of(&self, module: &Module) -> Option<Phase> {
        resolve_module_category(&module.id).map(Self::rank)
    }

    fn phase_name(&self, phase: Phase) -> String {
        Self::NAMES
            .get(phase as usize)
            .map_or_else(|| format!("phase {}", phase), |name| (*name).to_string())
    }
}

/// A dependency that runs against the phase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseConcern<'m> {
    /// The dependency belongs to a strictly later phase.
    LaterPhase {
        module: &'m Module,
        module_phase: Phase,
        dependency: &'m Module,
        dependency_phase: Phase,
    },
    /// The dependency has no phase while the module has one.
    UnphasedDependency {
        module: &'m Module,
        module_phase: Phase,
        dependency: &'m Module,
    },
}

impl<'m> PhaseConcern<'m> {
    /// The module declaring the dependency.
    pub fn module(&self) -> &'m Module {
        match self {
            PhaseConcern::LaterPhase { module, .. }
            | PhaseConcern::UnphasedDependency { module, .. } => *module,
        }
    }

    /// The module being depended on.
    pub fn dependency(&self) -> &'m Module {
        match self {
            PhaseConcern::LaterPhase { dependency, .. }
            | PhaseConcern::UnphasedDependency { dependency, .. } => *dependency,
        }
    }
}

/// Check every dependency edge against the phase policy.
///
/// Self-dependencies and unknown targets are skipped; other rules report
/// them. Modules the policy does not place are not checked.
pub fn find_phase_concerns<'m>(
    graph: &DependencyGraph<'m>,
    policy: &dyn PhasePolicy,
) -> Vec<PhaseConcern<'m>> {
    let mut concerns = Vec::new();

    for (position, module) in graph.modules().iter().enumerate() {
        let Some(module_phase) = policy.phase_of(module) else {
            continue;
        };

        for dependency in graph.dependencies_at(position) {
            if dependency.id == module.id {
                continue;
            }
            match policy.phase_of(dependency) {
                Some(dependency_phase) if dependency_phase > module_phase => {
                    concerns.push(PhaseConcern::LaterPhase {
                        module,
                        module_phase,
                        dependency,
                        dependency_phase,
                    });
                }
                Some(_) => {}
                None => concerns.push(PhaseConcern::UnphasedDependency {
                    module,
                    module_phase,
                    dependency,
                }),
            }
        }
    }

    concerns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str, deps: &[&str]) -> Module {
        Module {
            id: id.to_string(),
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn category_policy_orders_base_before_agents() {
        let policy = CategoryPhasePolicy;
        let base = policy.phase_of(&module("base.core", &[])).unwrap();
        let agents = policy.phase_of(&module("agents.claude", &[])).unwrap();
        assert!(base < agents);
    }

    #[test]
    fn category_policy_leaves_unknown_categories_unplaced() {
        assert_eq!(CategoryPhasePolicy.phase_of(&module("custom.thing", &[])), None);
        assert_eq!(CategoryPhasePolicy.phase_of(&module("standalone", &[])), None);
    }

    #[test]
    fn category_policy_names_phases() {
        assert_eq!(CategoryPhasePolicy.phase_name(0), "system");
        assert_eq!(CategoryPhasePolicy.phase_name(5), "stack");
        assert_eq!(CategoryPhasePolicy.phase_name(42), "phase 42");
    }

    #[test]
    fn dependency_on_earlier_phase_is_fine() {
        let modules = vec![module("base.core", &[]), module("lang.bun", &["base.core"])];
        let graph = DependencyGraph::from_modules(&modules);

        assert!(find_phase_concerns(&graph, &CategoryPhasePolicy).is_empty());
    }

    #[test]
    fn dependency_within_same_phase_is_fine() {
        let modules = vec![module("tools.rg", &[]), module("db.postgres", &["tools.rg"])];
        let graph = DependencyGraph::from_modules(&modules);

        assert!(find_phase_concerns(&graph, &CategoryPhasePolicy).is_empty());
    }

    #[test]
    fn dependency_on_later_phase_is_flagged() {
        let modules = vec![
            module("base.core", &["agents.claude"]),
            module("agents.claude", &[]),
        ];
        let graph = DependencyGraph::from_modules(&modules);
        let concerns = find_phase_concerns(&graph, &CategoryPhasePolicy);

        assert_eq!(concerns.len(), 1);
        assert!(matches!(
            concerns[0],
            PhaseConcern::LaterPhase {
                module_phase: 0,
                dependency_phase: 4,
                ..
            }
        ));
        assert_eq!(concerns[0].module().id, "base.core");
        assert_eq!(concerns[0].dependency().id, "agents.claude");
    }

    #[test]
    fn unphased_dependency_is_flagged() {
        let modules = vec![module("custom.thing", &[]), module("lang.bun", &["custom.thing"])];
        let graph = DependencyGraph::from_modules(&modules);
        let concerns = find_phase_concerns(&graph, &CategoryPhasePolicy);

        assert!(matches!(
            concerns.as_slice(),
            [PhaseConcern::UnphasedDependency { .. }]
        ));
    }

    #[test]
    fn unphased_module_is_not_checked() {
        let modules = vec![module("custom.thing", &["stack.full"]), module("stack.full", &[])];
        let graph = DependencyGraph::from_modules(&modules);

        assert!(find_phase_concerns(&graph, &CategoryPhasePolicy).is_empty());
    }

    #[test]
    fn closure_policy_overrides_default() {
        // Everything in one phase: nothing can be out of order
        let flat = |_: &Module| -> Option<Phase> { Some(0) };
        let modules = vec![
            module("base.core", &["agents.claude"]),
            module("agents.claude", &[]),
        ];
        let graph = DependencyGraph::from_modules(&modules);

        assert!(find_phase_concerns(&graph, &flat).is_empty());
    }

    #[test]
    fn self_dependency_is_left_to_cycle_detection() {
        let modules = vec![module("base.core", &["base.core"])];
        let graph = DependencyGraph::from_modules(&modules);

        assert!(find_phase_concerns(&graph, &CategoryPhasePolicy).is_empty());
    }
}
