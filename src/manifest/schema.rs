//! Manifest schema definitions.
//!
//! This module contains the struct definitions that map to the
//! YAML manifest format. Manifests are only built through
//! [`validate_schema`](super::validate_schema), so these types serialize
//! but never deserialize directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root manifest structure.
///
/// A manifest is an immutable snapshot: it is built once per parse and
/// every validation or query reads it without modifying it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Manifest format version (always >= 1 once validated)
    pub version: u32,

    /// Display name
    pub name: String,

    /// Manifest identifier
    pub id: String,

    /// Shared defaults for every module
    pub defaults: ManifestDefaults,

    /// Installable modules, in declaration order
    pub modules: Vec<Module>,
}

impl Manifest {
    /// Iterate over module ids in declaration order.
    pub fn module_ids(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.id.as_str())
    }

    /// Number of modules in the manifest.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the manifest declares no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Defaults shared by all modules in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestDefaults {
    /// Account the modules are installed for
    pub user: String,

    /// Absolute path of the workspace directory
    pub workspace_root: String,

    /// Installation mode
    pub mode: InstallMode,
}

impl Default for ManifestDefaults {
    fn default() -> Self {
        Self {
            user: default_user(),
            workspace_root: default_workspace_root(),
            mode: InstallMode::default(),
        }
    }
}

fn default_user() -> String {
    "ubuntu".to_string()
}

fn default_workspace_root() -> String {
    "/data/projects".to_string()
}

/// Installation mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMode {
    /// Passwordless sudo and permissive agent settings.
    #[default]
    Vibe,
    /// Conservative settings with confirmation prompts.
    Safe,
}

impl InstallMode {
    /// Every recognized mode, in documentation order.
    pub const ALL: [InstallMode; 2] = [InstallMode::Vibe, InstallMode::Safe];

    /// The name used in manifest files.
    pub fn as_str(self) -> &'static str {
        match self {
            InstallMode::Vibe => "vibe",
            InstallMode::Safe => "safe",
        }
    }

    /// Look up a mode by its manifest name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One installable unit.
///
/// `install` and `verify` are opaque to this crate; they are carried
/// along for whatever executes them and never interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Module {
    /// Unique id, conventionally `category.name`
    pub id: String,

    /// Human-readable description
    pub description: String,

    /// Installation instructions
    pub install: Vec<String>,

    /// Verification instructions
    pub verify: Vec<String>,

    /// Ids of modules that must be installed first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl Module {
    /// Category derived from the first dot-segment of the id.
    pub fn category(&self) -> &str {
        crate::query::get_module_category(&self.id)
    }

    /// Whether this module declares any dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let defaults = ManifestDefaults::default();
        assert_eq!(defaults.user, "ubuntu");
        assert!(defaults.workspace_root.starts_with('/'));
        assert_eq!(defaults.mode, InstallMode::Vibe);
    }

    #[test]
    fn install_mode_round_trips_names() {
        for mode in InstallMode::ALL {
            assert_eq!(InstallMode::from_name(mode.as_str()), Some(mode));
        }
        assert_eq!(InstallMode::from_name("yolo"), None);
    }

    #[test]
    fn install_mode_deserializes_lowercase() {
        let mode: InstallMode = serde_yaml::from_str("safe").unwrap();
        assert_eq!(mode, InstallMode::Safe);
    }

    #[test]
    fn module_category_uses_first_segment() {
        let module = Module {
            id: "lang.rust.nightly".to_string(),
            ..Default::default()
        };
        assert_eq!(module.category(), "lang");
    }

    #[test]
    fn module_without_dependencies_skips_field_when_serialized() {
        let module = Module {
            id: "base.core".to_string(),
            description: "Core packages".to_string(),
            install: vec!["apt-get update".to_string()],
            verify: vec!["true".to_string()],
            dependencies: vec![],
        };
        let yaml = serde_yaml::to_string(&module).unwrap();
        assert!(!yaml.contains("dependencies"));
        assert!(!module.has_dependencies());
    }

    #[test]
    fn manifest_lists_module_ids_in_order() {
        let manifest = Manifest {
            modules: vec![
                Module {
                    id: "shell.zsh".to_string(),
                    ..Default::default()
                },
                Module {
                    id: "base.core".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let ids: Vec<_> = manifest.module_ids().collect();
        assert_eq!(ids, vec!["shell.zsh", "base.core"]);
        assert_eq!(manifest.len(), 2);
        assert!(!manifest.is_empty());
    }
}
