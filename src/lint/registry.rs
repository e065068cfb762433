//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores the lint rules to run and provides
//! methods for registering, retrieving, and iterating over them. Rules
//! run in registration order, so reports are deterministic.

use tracing::debug;

use super::result::ValidationResult;
use super::rule::{LintRule, RuleId};
use super::rules::{
    CircularDependencyRule, DuplicateIdRule, PhaseOrderingRule, UndefinedDependencyRule,
};
use crate::graph::PhasePolicy;
use crate::manifest::Manifest;

/// Registry of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules.
    ///
    /// Duplicate ids are checked first: they make the graph ambiguous for
    /// the rules that follow.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DuplicateIdRule));
        registry.register(Box::new(UndefinedDependencyRule));
        registry.register(Box::new(CircularDependencyRule));
        registry.register(Box::new(PhaseOrderingRule::default()));
        registry
    }

    /// Replace the phase policy used by the phase-ordering rule.
    pub fn with_phase_policy(mut self, policy: impl PhasePolicy + Send + Sync + 'static) -> Self {
        self.register(Box::new(PhaseOrderingRule::new(policy)));
        self
    }

    /// Register a lint rule.
    ///
    /// A rule with the same id as an existing one replaces it in place.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.iter_mut().find(|r| r.id() == id) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Remove a rule by ID, returning whether it was registered.
    pub fn remove(&mut self, id: &RuleId) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| &r.id() != id);
        self.rules.len() != before
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and merge the diagnostics into one result.
    pub fn check(&self, manifest: &Manifest) -> ValidationResult {
        let mut result = ValidationResult::default();
        for rule in self.iter() {
            let diagnostics = rule.check(manifest);
            debug!("Rule {} produced {} diagnostic(s)", rule.id(), diagnostics.len());
            result.extend(diagnostics);
        }
        result
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
