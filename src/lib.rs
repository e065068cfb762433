//! ACFS manifest engine - validation, dependency graph and install ordering.
//!
//! A manifest is a YAML document declaring installable modules, each with
//! an id, install and verify steps, and the ids of the modules it depends
//! on. This crate parses that document, validates it, and answers the
//! questions a provisioning tool needs before it runs anything.
//!
//! # Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Data model, schema validation, and parsing
//! - [`graph`] - Dependency graph, cycle detection, and install ordering
//! - [`lint`] - Semantic validation rules and report formatting
//! - [`query`] - Category, search, grouping, and statistics queries
//!
//! # Example
//!
//! ```
//! use acfs_manifest::{parse_manifest_str, sort_modules_by_install_order, validate_manifest};
//!
//! let manifest = parse_manifest_str(
//!     r#"
//! version: 1
//! name: demo
//! id: demo
//! defaults:
//!   user: ubuntu
//!   workspace_root: /data/projects
//!   mode: vibe
//! modules:
//!   - id: shell.zsh
//!     description: Z shell
//!     install: ["apt-get install -y zsh"]
//!     verify: ["zsh --version"]
//!     dependencies: [base.core]
//!   - id: base.core
//!     description: Base packages
//!     install: ["apt-get update"]
//!     verify: ["true"]
//! "#,
//! )
//! .unwrap();
//!
//! assert!(validate_manifest(&manifest).is_valid());
//!
//! let order: Vec<_> = sort_modules_by_install_order(&manifest)
//!     .unwrap()
//!     .iter()
//!     .map(|m| m.id.as_str())
//!     .collect();
//! assert_eq!(order, vec!["base.core", "shell.zsh"]);
//! ```
//!
//! For file-based manifest loading, see the integration tests.

pub mod error;
pub mod graph;
pub mod lint;
pub mod manifest;
pub mod query;

pub use error::{ManifestError, Result};
pub use graph::{
    get_dependents, get_module_dependencies, get_transitive_dependencies,
    sort_modules_by_install_order, CategoryPhasePolicy, DependencyGraph, PhasePolicy,
};
pub use lint::{format_validation_errors, validate_manifest, ValidationResult};
pub use manifest::{
    parse_manifest_file, parse_manifest_str, Manifest, Module, ParseError, ParseResult,
};
pub use query::{
    get_manifest_stats, get_module_by_id, get_module_category, get_modules_by_category,
    search_modules, ManifestStats, ModuleCategory,
};
