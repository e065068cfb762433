//! Structural validation of raw manifest documents.
//!
//! This module checks a parsed YAML value against the manifest shape:
//! - Required fields exist and have the right type
//! - `version` is an integer >= 1
//! - Required strings are non-empty
//! - `defaults.mode` is a recognized mode
//! - Every module has the module shape
//!
//! Semantic rules (unique ids, known dependencies, no cycles) are not
//! checked here; see [`crate::lint`].

use serde_yaml::Value;
use std::fmt;

use super::schema::{InstallMode, Manifest, ManifestDefaults, Module};

/// A field-level schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Field path, e.g. `modules[2].id` (empty for the document root)
    pub path: String,
    /// Human-readable error message
    pub message: String,
}

impl SchemaError {
    /// Create a new schema error.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Validate a raw document and build a typed [`Manifest`].
///
/// Every violation is collected rather than stopping at the first one,
/// so callers can report all problems at once.
pub fn validate_schema(raw: &Value) -> Result<Manifest, Vec<SchemaError>> {
    let mut checker = Checker::default();

    if !raw.is_mapping() {
        checker.fail("", format!("expected a mapping, found {}", kind(raw)));
        return Err(checker.errors);
    }

    let version = checker
        .required(raw, "version", "version")
        .and_then(|v| checker.version(v, "version"));
    let name = checker
        .required(raw, "name", "name")
        .and_then(|v| checker.non_empty_string(v, "name"));
    let id = checker
        .required(raw, "id", "id")
        .and_then(|v| checker.non_empty_string(v, "id"));
    let defaults = checker
        .required(raw, "defaults", "defaults")
        .and_then(|v| checker.defaults(v, "defaults"));
    let modules = checker
        .required(raw, "modules", "modules")
        .and_then(|v| checker.modules(v, "modules"));

    match (version, name, id, defaults, modules) {
        (Some(version), Some(name), Some(id), Some(defaults), Some(modules))
            if checker.errors.is_empty() =>
        {
            Ok(Manifest {
                version,
                name,
                id,
                defaults,
                modules,
            })
        }
        _ => Err(checker.errors),
    }
}

#[derive(Default)]
struct Checker {
    errors: Vec<SchemaError>,
}

impl Checker {
    fn fail(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(SchemaError::new(path, message));
    }

    fn required<'a>(&mut self, map: &'a Value, key: &str, path: &str) -> Option<&'a Value> {
        let value = map.get(key);
        if value.is_none() {
            self.fail(path, "is required");
        }
        value
    }

    fn version(&mut self, value: &Value, path: &str) -> Option<u32> {
        let Value::Number(number) = value else {
            self.fail(path, format!("expected an integer, found {}", kind(value)));
            return None;
        };

        if let Some(n) = number.as_u64() {
            if n == 0 {
                self.fail(path, "must be >= 1");
                return None;
            }
            return match u32::try_from(n) {
                Ok(n) => Some(n),
                Err(_) => {
                    self.fail(path, format!("must be <= {}", u32::MAX));
                    None
                }
            };
        }

        if number.as_i64().is_some() {
            self.fail(path, "must be >= 1");
        } else {
            self.fail(path, "must be an integer");
        }
        None
    }

    fn non_empty_string(&mut self, value: &Value, path: &str) -> Option<String> {
        match value {
            Value::String(s) if s.is_empty() => {
                self.fail(path, "must not be empty");
                None
            }
            Value::String(s) => Some(s.clone()),
            other => {
                self.fail(path, format!("expected a string, found {}", kind(other)));
                None
            }
        }
    }

    fn string_list(&mut self, value: &Value, path: &str, min_len: usize) -> Option<Vec<String>> {
        let Value::Sequence(items) = value else {
            self.fail(path, format!("expected a list, found {}", kind(value)));
            return None;
        };

        if items.len() < min_len {
            self.fail(path, format!("must contain at least {} item(s)", min_len));
        }

        let mut ok = items.len() >= min_len;
        let mut strings = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => strings.push(s.clone()),
                other => {
                    ok = false;
                    self.fail(
                        &index_path(path, i),
                        format!("expected a string, found {}", kind(other)),
                    );
                }
            }
        }

        ok.then_some(strings)
    }

    fn defaults(&mut self, value: &Value, path: &str) -> Option<ManifestDefaults> {
        if !value.is_mapping() {
            self.fail(path, format!("expected a mapping, found {}", kind(value)));
            return None;
        }

        let user_path = field_path(path, "user");
        let user = self
            .required(value, "user", &user_path)
            .and_then(|v| self.non_empty_string(v, &user_path));

        let root_path = field_path(path, "workspace_root");
        let workspace_root = self
            .required(value, "workspace_root", &root_path)
            .and_then(|v| self.non_empty_string(v, &root_path))
            .and_then(|root| {
                if root.starts_with('/') {
                    Some(root)
                } else {
                    self.fail(&root_path, format!("must be an absolute path, got '{}'", root));
                    None
                }
            });

        let mode_path = field_path(path, "mode");
        let mode = self
            .required(value, "mode", &mode_path)
            .and_then(|v| self.mode(v, &mode_path));

        Some(ManifestDefaults {
            user: user?,
            workspace_root: workspace_root?,
            mode: mode?,
        })
    }

    fn mode(&mut self, value: &Value, path: &str) -> Option<InstallMode> {
        let name = self.non_empty_string(value, path)?;
        let mode = InstallMode::from_name(&name);
        if mode.is_none() {
            let allowed: Vec<_> = InstallMode::ALL.iter().map(|m| m.as_str()).collect();
            self.fail(
                path,
                format!("must be one of: {} (got '{}')", allowed.join(", "), name),
            );
        }
        mode
    }

    fn modules(&mut self, value: &Value, path: &str) -> Option<Vec<Module>> {
        let Value::Sequence(items) = value else {
            self.fail(path, format!("expected a list, found {}", kind(value)));
            return None;
        };

        let mut modules = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            match self.module(item, &index_path(path, i)) {
                Some(module) => modules.push(module),
                None => ok = false,
            }
        }

        ok.then_some(modules)
    }

    fn module(&mut self, value: &Value, path: &str) -> Option<Module> {
        if !value.is_mapping() {
            self.fail(path, format!("expected a mapping, found {}", kind(value)));
            return None;
        }

        let id_path = field_path(path, "id");
        let id = self
            .required(value, "id", &id_path)
            .and_then(|v| self.non_empty_string(v, &id_path));

        let description_path = field_path(path, "description");
        let description = self
            .required(value, "description", &description_path)
            .and_then(|v| self.non_empty_string(v, &description_path));

        let install_path = field_path(path, "install");
        let install = self
            .required(value, "install", &install_path)
            .and_then(|v| self.string_list(v, &install_path, 1));

        let verify_path = field_path(path, "verify");
        let verify = self
            .required(value, "verify", &verify_path)
            .and_then(|v| self.string_list(v, &verify_path, 1));

        // An empty `dependencies:` key parses as null; treat it as absent.
        let dependencies = match value.get("dependencies") {
            None | Some(Value::Null) => Some(Vec::new()),
            Some(deps) => self.string_list(deps, &field_path(path, "dependencies"), 0),
        };

        Some(Module {
            id: id?,
            description: description?,
            install: install?,
            verify: verify?,
            dependencies: dependencies?,
        })
    }
}

fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
