//! Module categories.
//!
//! A category is not stored on a module; it is derived from the first
//! dot-segment of the module id (`lang.bun` is in `lang`). Ids without a
//! dot are their own category.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::manifest::{Manifest, Module};

/// Category of a module id: its first dot-segment, or the whole id.
pub fn get_module_category(id: &str) -> &str {
    id.split_once('.').map_or(id, |(category, _)| category)
}

/// Well-known module categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModuleCategory {
    Base,
    Users,
    Filesystem,
    Shell,
    Cli,
    Network,
    Lang,
    Tools,
    Db,
    Cloud,
    Agents,
    Stack,
    Acfs,
}

impl ModuleCategory {
    /// Every known category, in installation order.
    pub const ALL: [ModuleCategory; 13] = [
        ModuleCategory::Base,
        ModuleCategory::Users,
        ModuleCategory::Filesystem,
        ModuleCategory::Shell,
        ModuleCategory::Cli,
        ModuleCategory::Network,
        ModuleCategory::Lang,
        ModuleCategory::Tools,
        ModuleCategory::Db,
        ModuleCategory::Cloud,
        ModuleCategory::Agents,
        ModuleCategory::Stack,
        ModuleCategory::Acfs,
    ];

    /// The name used in module ids.
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleCategory::Base => "base",
            ModuleCategory::Users => "users",
            ModuleCategory::Filesystem => "filesystem",
            ModuleCategory::Shell => "shell",
            ModuleCategory::Cli => "cli",
            ModuleCategory::Network => "network",
            ModuleCategory::Lang => "lang",
            ModuleCategory::Tools => "tools",
            ModuleCategory::Db => "db",
            ModuleCategory::Cloud => "cloud",
            ModuleCategory::Agents => "agents",
            ModuleCategory::Stack => "stack",
            ModuleCategory::Acfs => "acfs",
        }
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category name that is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown module category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ModuleCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Whether `name` is one of the known categories.
pub fn is_valid_category(name: &str) -> bool {
    name.parse::<ModuleCategory>().is_ok()
}

/// Known category of a module id, if its first segment is one.
pub fn resolve_module_category(id: &str) -> Option<ModuleCategory> {
    get_module_category(id).parse().ok()
}

/// Distinct categories in order of first appearance.
pub fn get_categories(manifest: &Manifest) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for module in &manifest.modules {
        let category = module.category();
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// Modules whose derived category equals `category`, in declaration order.
pub fn get_modules_by_category<'m>(manifest: &'m Manifest, category: &str) -> Vec<&'m Module> {
    manifest
        .modules
        .iter()
        .filter(|m| m.category() == category)
        .collect()
}

/// Modules sharing one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'m> {
    /// The category name.
    pub category: &'m str,
    /// Modules in declaration order.
    pub modules: Vec<&'m Module>,
}

/// Group modules by category.
///
/// Groups appear in order of first appearance; modules keep their
/// declaration order within each group.
pub fn group_modules_by_category(manifest: &Manifest) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for module in &manifest.modules {
        let category = module.category();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.modules.push(module),
            None => groups.push(CategoryGroup {
                category,
                modules: vec![module],
            }),
        }
    }
    groups
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
    fn category_of_single_segment_id_is_the_id() {
        assert_eq!(get_module_category("standalone"), "standalone");
    }

    #[test]
    fn category_of_multi_dot_id_is_first_segment() {
        assert_eq!(get_module_category("a.b.c.d"), "a");
        assert_eq!(get_module_category("lang.bun"), "lang");
    }

    #[test]
    fn category_of_leading_dot_is_empty() {
        assert_eq!(get_module_category(".hidden"), "");
    }

    #[test]
    fn known_categories_parse() {
        for category in ModuleCategory::ALL {
            assert_eq!(category.as_str().parse::<ModuleCategory>(), Ok(category));
        }
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let err = "gadgets".parse::<ModuleCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("gadgets".into()));
        assert!(err.to_string().contains("gadgets"));
    }

    #[test]
    fn valid_category_check() {
        assert!(is_valid_category("agents"));
        assert!(!is_valid_category("Agents"));
        assert!(!is_valid_category(""));
    }

    #[test]
    fn resolve_known_and_unknown_categories() {
        assert_eq!(
            resolve_module_category("cloud.wrangler"),
            Some(ModuleCategory::Cloud)
        );
        assert_eq!(resolve_module_category("custom.tool"), None);
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let manifest = manifest(&["shell.zsh", "base.core", "shell.omz", "standalone"]);
        assert_eq!(
            get_categories(&manifest),
            vec!["shell", "base", "standalone"]
        );
    }

    #[test]
    fn modules_by_category_filters() {
        let manifest = manifest(&["shell.zsh", "base.core", "shell.omz"]);
        let shell: Vec<_> = get_modules_by_category(&manifest, "shell")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(shell, vec!["shell.zsh", "shell.omz"]);
        assert!(get_modules_by_category(&manifest, "db").is_empty());
    }

    #[test]
    fn grouping_keeps_declaration_order() {
        let manifest = manifest(&["shell.zsh", "base.core", "shell.omz"]);
        let groups = group_modules_by_category(&manifest);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "shell");
        assert_eq!(groups[0].modules.len(), 2);
        assert_eq!(groups[0].modules[1].id, "shell.omz");
        assert_eq!(groups[1].category, "base");
    }

    #[test]
    fn grouping_empty_manifest() {
        assert!(group_modules_by_category(&manifest(&[])).is_empty());
    }
}
