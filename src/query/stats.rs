//! Aggregate manifest statistics.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::manifest::Manifest;

/// Summary counts over a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestStats {
    /// Number of declared modules.
    pub total_modules: usize,
    /// Number of distinct categories.
    pub total_categories: usize,
    /// Module count per category.
    pub modules_by_category: BTreeMap<String, usize>,
    /// Number of declared dependency entries across all modules.
    pub total_dependencies: usize,
    /// Modules that declare at least one dependency.
    pub modules_with_dependencies: usize,
    /// Modules that declare no dependencies.
    pub root_modules: usize,
}

/// Compute summary counts for a manifest.
pub fn get_manifest_stats(manifest: &Manifest) -> ManifestStats {
    let mut modules_by_category: BTreeMap<String, usize> = BTreeMap::new();
    for module in &manifest.modules {
        *modules_by_category
            .entry(module.category().to_string())
            .or_default() += 1;
    }

    let modules_with_dependencies = manifest
        .modules
        .iter()
        .filter(|m| m.has_dependencies())
        .count();

    ManifestStats {
        total_modules: manifest.modules.len(),
        total_categories: modules_by_category.len(),
        modules_by_category,
        total_dependencies: manifest.modules.iter().map(|m| m.dependencies.len()).sum(),
        modules_with_dependencies,
        root_modules: manifest.modules.len() - modules_with_dependencies,
    }
}
