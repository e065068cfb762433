//! JSON Schema generation for manifest files.
//!
//! This module generates a JSON Schema (Draft-07) for the manifest
//! format, enabling editor autocomplete and validation.

use serde_json::{json, Value};

use super::schema::InstallMode;

/// Generates JSON Schema for manifest files.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for a manifest.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "ACFS Manifest",
            "description": "Installable modules and shared defaults for workstation provisioning",
            "type": "object",
            "required": ["version", "name", "id", "defaults", "modules"],
            "properties": {
                "version": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Manifest format version"
                },
                "name": self.non_empty_string("Display name"),
                "id": self.non_empty_string("Manifest identifier"),
                "defaults": self.defaults_schema(),
                "modules": {
                    "type": "array",
                    "description": "Installable modules in declaration order",
                    "items": self.module_schema()
                }
            }
        })
    }

    fn defaults_schema(&self) -> Value {
        let modes: Vec<_> = InstallMode::ALL.iter().map(|m| m.as_str()).collect();
        json!({
            "type": "object",
            "description": "Defaults shared by every module",
            "required": ["user", "workspace_root", "mode"],
            "properties": {
                "user": self.non_empty_string("Account the modules are installed for"),
                "workspace_root": {
                    "type": "string",
                    "pattern": "^/",
                    "description": "Absolute path of the workspace directory"
                },
                "mode": {
                    "type": "string",
                    "enum": modes,
                    "default": InstallMode::default().as_str(),
                    "description": "Installation mode"
                }
            }
        })
    }

    fn module_schema(&self) -> Value {
        json!({
            "type": "object",
            "required": ["id", "description", "install", "verify"],
            "properties": {
                "id": self.non_empty_string("Unique module id, conventionally category.name"),
                "description": self.non_empty_string("Human-readable description"),
                "install": self.instructions("Installation instructions"),
                "verify": self.instructions("Verification instructions"),
                "dependencies": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Ids of modules that must be installed first"
                }
            }
        })
    }

    fn instructions(&self, description: &str) -> Value {
        json!({
            "type": "array",
            "minItems": 1,
            "items": { "type": "string" },
            "description": description
        })
    }

    fn non_empty_string(&self, description: &str) -> Value {
        json!({
            "type": "string",
            "minLength": 1,
            "description": description
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
