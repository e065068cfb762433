//! Read-only queries over a parsed manifest.
//!
//! - [`category`] - Category derivation and grouping
//! - [`search`] - Lookup and text search
//! - [`stats`] - Aggregate statistics
//!
//! Every function here is a pure aggregation over the module list.

pub mod category;
pub mod search;
pub mod stats;

pub use category::{
    get_categories, get_module_category, get_modules_by_category, group_modules_by_category,
    is_valid_category, resolve_module_category, CategoryGroup, ModuleCategory, UnknownCategory,
};
pub use search::{get_module_by_id, search_modules};
pub use stats::{get_manifest_stats, ManifestStats};
