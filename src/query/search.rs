//! Module lookup and search.

use crate::manifest::{Manifest, Module};

/// Find a module by id (first declaration wins).
pub fn get_module_by_id<'m>(manifest: &'m Manifest, id: &str) -> Option<&'m Module> {
    manifest.modules.iter().find(|m| m.id == id)
}

/// Case-insensitive substring search over module ids and descriptions.
///
/// An empty or whitespace-only query matches every module. A query that
/// matches nothing returns an empty list.
pub fn search_modules<'m>(manifest: &'m Manifest, query: &str) -> Vec<&'m Module> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return manifest.modules.iter().collect();
    }

    manifest
        .modules
        .iter()
        .filter(|m| {
            m.id.to_lowercase().contains(&needle) || m.description.to_lowercase().contains(&needle)
        })
        .collect()
}
