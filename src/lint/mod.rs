//! Semantic manifest validation.
//!
//! A manifest that passed schema validation can still be unusable:
//! duplicate ids, dependencies on modules that do not exist, cycles, or
//! dependencies pointing at a later installation phase. This module
//! finds those problems through a pluggable rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Ordered collection of rules to run ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports with severity and suggestions ([`LintDiagnostic`])
//! - **Results** - Diagnostics of one pass split by severity ([`ValidationResult`])
//! - **Output** - Human and JSON renderings of a result
//!
//! # Example
//!
//! ```
//! use acfs_manifest::lint::{validate_manifest, RuleId, RuleRegistry, Severity};
//! use acfs_manifest::manifest::{Manifest, Module};
//!
//! let registry = RuleRegistry::with_builtins();
//! assert!(registry.get(&RuleId::new("circular-dependency")).is_some());
//! assert!(Severity::Warning < Severity::Error);
//!
//! let manifest = Manifest {
//!     modules: vec![Module {
//!         id: "self.loop".into(),
//!         dependencies: vec!["self.loop".into()],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! let result = validate_manifest(&manifest);
//! assert!(!result.is_valid());
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod result;
pub mod rule;
pub mod rules;
pub mod validate;

pub use diagnostic::LintDiagnostic;
pub use output::{
    format_validation_errors, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat,
};
pub use registry::RuleRegistry;
pub use result::ValidationResult;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    CircularDependencyRule, DuplicateIdRule, PhaseOrderingRule, UndefinedDependencyRule,
};
pub use validate::{
    check_duplicate_ids, detect_dependency_cycles, validate_dependency_existence,
    validate_manifest, validate_manifest_with, validate_phase_ordering,
    validate_phase_ordering_with,
};
