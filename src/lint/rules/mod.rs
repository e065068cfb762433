//! Built-in lint rules.
//!
//! This module contains the semantic validation rules run against every
//! manifest by default.

pub mod circular_dependency;
pub mod duplicate_id;
pub mod phase_ordering;
pub mod undefined_dependency;

pub use circular_dependency::CircularDependencyRule;
pub use duplicate_id::DuplicateIdRule;
pub use phase_ordering::PhaseOrderingRule;
pub use undefined_dependency::UndefinedDependencyRule;
