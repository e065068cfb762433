//! Module dependency graph engine.
//!
//! The graph is rebuilt from the manifest on every call rather than
//! stored alongside it, so a [`Manifest`] stays a plain immutable value.
//!
//! - [`dependency`] - Graph construction, cycle detection, topological sort
//! - [`phase`] - Installation phase policies
//!
//! # Example
//!
//! ```
//! use acfs_manifest::graph::sort_modules_by_install_order;
//! use acfs_manifest::manifest::{Manifest, Module};
//!
//! let manifest = Manifest {
//!     modules: vec![
//!         Module {
//!             id: "shell.zsh".into(),
//!             dependencies: vec!["base.core".into()],
//!             ..Default::default()
//!         },
//!         Module {
//!             id: "base.core".into(),
//!             ..Default::default()
//!         },
//!     ],
//!     ..Default::default()
//! };
//!
//! let order: Vec<_> = sort_modules_by_install_order(&manifest)
//!     .unwrap()
//!     .iter()
//!     .map(|m| m.id.as_str())
//!     .collect();
//! assert_eq!(order, vec!["base.core", "shell.zsh"]);
//! ```

pub mod dependency;
pub mod phase;

pub use dependency::{find_duplicate_ids, DependencyGraph, DuplicateId, MissingDependency};
pub use phase::{find_phase_concerns, CategoryPhasePolicy, Phase, PhaseConcern, PhasePolicy};

use tracing::debug;

use crate::error::Result;
use crate::manifest::{Manifest, Module};

/// Sort modules so every dependency comes before its dependents.
///
/// Modules with no ordering constraint between them keep their
/// declaration order.
///
/// # Errors
///
/// Returns `CircularDependency` if the dependency graph has a cycle.
pub fn sort_modules_by_install_order(manifest: &Manifest) -> Result<Vec<&Module>> {
    let order = DependencyGraph::new(manifest).topological_order()?;
    debug!("Computed install order for {} module(s)", order.len());
    Ok(order)
}

/// Every module `id` depends on, directly or indirectly, listed once.
pub fn get_transitive_dependencies<'m>(manifest: &'m Manifest, id: &str) -> Vec<&'m Module> {
    DependencyGraph::new(manifest).transitive_dependencies(id)
}

/// Modules that list `id` directly in their dependencies.
pub fn get_dependents<'m>(manifest: &'m Manifest, id: &str) -> Vec<&'m Module> {
    DependencyGraph::new(manifest).dependents_of(id)
}

/// Direct dependencies of `id` that exist in the manifest.
pub fn get_module_dependencies<'m>(manifest: &'m Manifest, id: &str) -> Vec<&'m Module> {
    DependencyGraph::new(manifest).dependencies_of(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManifestError;

    fn manifest(modules: &[(&str, &[&str])]) -> Manifest {
        Manifest {
            modules: modules
                .iter()
                .map(|(id, deps)| Module {
                    id: id.to_string(),
                    dependencies: deps.iter().map(|d| d.to_string()).collect(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn ids(modules: Vec<&Module>) -> Vec<&str> {
        modules.into_iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn empty_manifest_sorts_to_nothing() {
        let manifest = manifest(&[]);
        assert!(sort_modules_by_install_order(&manifest).unwrap().is_empty());
    }

    #[test]
    fn sort_places_transitive_dependencies_first() {
        let manifest = manifest(&[
            ("stack.full", &["agents.claude"]),
            ("agents.claude", &["lang.bun"]),
            ("lang.bun", &["base.core"]),
            ("base.core", &[]),
        ]);
        let order = ids(sort_modules_by_install_order(&manifest).unwrap());

        assert_eq!(
            order,
            vec!["base.core", "lang.bun", "agents.claude", "stack.full"]
        );
    }

    #[test]
    fn sort_reports_cycles() {
        let manifest = manifest(&[("a.one", &["b.two"]), ("b.two", &["a.one"])]);
        assert!(matches!(
            sort_modules_by_install_order(&manifest),
            Err(ManifestError::CircularDependency { .. })
        ));
    }

    #[test]
    fn transitive_dependencies_for_diamond() {
        let manifest = manifest(&[
            ("a.top", &["b.left", "c.right"]),
            ("b.left", &["d.bottom"]),
            ("c.right", &["d.bottom"]),
            ("d.bottom", &[]),
        ]);
        let mut deps = ids(get_transitive_dependencies(&manifest, "a.top"));
        deps.sort_unstable();

        assert_eq!(deps, vec!["b.left", "c.right", "d.bottom"]);
    }

    #[test]
    fn transitive_dependencies_of_unknown_module_is_empty() {
        let manifest = manifest(&[("a.one", &[])]);
        assert!(get_transitive_dependencies(&manifest, "ghost").is_empty());
    }

    #[test]
    fn dependents_are_direct_only() {
        let manifest = manifest(&[
            ("base.core", &[]),
            ("shell.zsh", &["base.core"]),
            ("shell.omz", &["shell.zsh"]),
        ]);

        assert_eq!(ids(get_dependents(&manifest, "base.core")), vec!["shell.zsh"]);
        assert!(get_dependents(&manifest, "shell.omz").is_empty());
    }

    #[test]
    fn module_dependencies_skip_unknown_ids() {
        let manifest = manifest(&[("base.core", &[]), ("shell.zsh", &["base.core", "ghost"])]);

        assert_eq!(
            ids(get_module_dependencies(&manifest, "shell.zsh")),
            vec!["base.core"]
        );
    }
}
