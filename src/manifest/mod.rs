//! Manifest parsing and schema validation.
//!
//! This module handles turning manifest text into a typed [`Manifest`]:
//! - Schema definitions in [`schema`]
//! - Structural validation in [`validator`]
//! - Text and file parsing in [`parser`]
//! - JSON Schema export in [`json_schema`]
//!
//! # Example
//!
//! ```
//! use acfs_manifest::manifest::parse_manifest_str;
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
//!   - id: base.core
//!     description: Core packages
//!     install: ["apt-get update"]
//!     verify: ["true"]
//! "#,
//! )
//! .unwrap();
//! assert_eq!(manifest.modules[0].category(), "base");
//! ```

pub mod json_schema;
pub mod parser;
pub mod schema;
pub mod validator;

pub use json_schema::SchemaGenerator;
pub use parser::{parse_manifest_file, parse_manifest_str, ParseError, ParseResult, SourceLocation};
pub use schema::{InstallMode, Manifest, ManifestDefaults, Module};
pub use validator::{validate_schema, SchemaError};

#[cfg(test)]
mod tests {
    #[test]
    fn serde_yaml_parses_nested_module_lists() {
        let yaml = r#"
          modules:
            - id: base.core
              install: ["apt-get update"]
        "#;
        let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed["modules"][0]["id"], "base.core");
        assert_eq!(parsed["modules"][0]["install"][0], "apt-get update");
    }
}
