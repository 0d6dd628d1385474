//! Compile-time embedded templates for scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/hero-scaffold-core/src/templates/embedded.rs`).
//!
//! ## Adding a new template
//!
//! 1. Place the template file under `templates/patterns/<pattern>/` (new files) or
//!    `templates/matchers/<pattern>/` (edits to existing files)
//! 2. Add a `pub const` here with `include_str!("../../../../templates/<path>")`
//! 3. Reference the constant from the pattern's entry in [`crate::catalog`]
//!
//! ## Warning
//!
//! Matcher templates end with `{{segment~}}`: the `~` swallows the template file's own
//! trailing newline so the last segment is written back exactly as it was read.
//! Do NOT rename a placeholder in a matcher template without renaming the matching
//! split step in the catalog.

// -------------------------------------------------------
// new_tool
// -------------------------------------------------------

pub const TOOL_CARGO: &str = include_str!("../../../../templates/patterns/new_tool/tool_cargo.toml.hbs");
pub const TOOL_LIB: &str = include_str!("../../../../templates/patterns/new_tool/tool_lib.rs.hbs");
pub const TOOL_POPULATE_PLUGIN: &str = include_str!("../../../../templates/patterns/new_tool/tool_populate_plugin.rs.hbs");
pub const TOOL_TICK_PLUGIN: &str = include_str!("../../../../templates/patterns/new_tool/tool_tick_plugin.rs.hbs");
pub const TOOL_TYPES_CARGO: &str = include_str!("../../../../templates/patterns/new_tool/tool_types_cargo.toml.hbs");
pub const TOOL_TYPES_LIB: &str = include_str!("../../../../templates/patterns/new_tool/tool_types_lib.rs.hbs");
pub const TOOL_TYPES: &str = include_str!("../../../../templates/patterns/new_tool/tool_types.rs.hbs");

pub const WORKSPACE_CARGO_MATCHER: &str = include_str!("../../../../templates/matchers/new_tool/workspace_cargo.toml.hbs");

// -------------------------------------------------------
// new_memory
// -------------------------------------------------------

pub const MEMORY_PLUGIN: &str = include_str!("../../../../templates/patterns/new_memory/memory_plugin.rs.hbs");

pub const MEMORY_LIB_MATCHER: &str = include_str!("../../../../templates/matchers/new_memory/lib.rs.hbs");
pub const MEMORY_PLUGIN_MATCHER: &str = include_str!("../../../../templates/matchers/new_memory/memory_plugin.rs.hbs");
pub const MEMORY_TYPES_MATCHER: &str = include_str!("../../../../templates/matchers/new_memory/memory_types.rs.hbs");

// -------------------------------------------------------
// new_plugin_with_types
// -------------------------------------------------------

pub const PLUGINS_CARGO_MATCHER: &str = include_str!("../../../../templates/matchers/new_plugin_with_types/plugins_cargo.toml.hbs");
pub const PLUGINS_LIB_MATCHER: &str = include_str!("../../../../templates/matchers/new_plugin_with_types/plugins_lib.rs.hbs");
