//! The fixed set of scaffolding patterns.
//!
//! A [`Pattern`] bundles the files it creates ([`NewFile`]) with the edits it makes
//! to files that already exist ([`Matcher`]). Everything here is static data; the
//! work happens in [`crate::generate`].

use crate::error::{Result, ScaffoldError};
use crate::naming::NamingRules;
use crate::splitter::{SplitPlan, SplitStep};
use crate::templates::embedded;

/// A file created from scratch. `path` is itself rendered as a template.
#[derive(Debug, Clone, Copy)]
pub struct NewFile {
    pub path: &'static str,
    pub template: &'static str,
}

/// An edit to an existing workspace file.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    /// Workspace-relative path of the file to edit.
    pub target: &'static str,
    /// Template reassembling the segments around the inserted lines.
    pub template: &'static str,
    /// How the current file is cut into segments.
    pub plan: SplitPlan,
}

#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rules: NamingRules,
    pub files: &'static [NewFile],
    pub matchers: &'static [Matcher],
}

pub const NEW_TOOL: Pattern = Pattern {
    name: "new_tool",
    description: "Tool crate + tool types crate, registered as workspace dependencies",
    rules: NamingRules {
        reserved_suffix: Some("tool"),
    },
    files: &[
        NewFile {
            path: "crates/{{crate_name}}_tool/Cargo.toml",
            template: embedded::TOOL_CARGO,
        },
        NewFile {
            path: "crates/{{crate_name}}_tool/src/lib.rs",
            template: embedded::TOOL_LIB,
        },
        NewFile {
            path: "crates/{{crate_name}}_tool/src/{{crate_name}}_tool_populate_plugin.rs",
            template: embedded::TOOL_POPULATE_PLUGIN,
        },
        NewFile {
            path: "crates/{{crate_name}}_tool/src/{{crate_name}}_tool_tick_plugin.rs",
            template: embedded::TOOL_TICK_PLUGIN,
        },
        NewFile {
            path: "crates/{{crate_name}}_tool_types/Cargo.toml",
            template: embedded::TOOL_TYPES_CARGO,
        },
        NewFile {
            path: "crates/{{crate_name}}_tool_types/src/lib.rs",
            template: embedded::TOOL_TYPES_LIB,
        },
        NewFile {
            path: "crates/{{crate_name}}_tool_types/src/{{crate_name}}_tool_types.rs",
            template: embedded::TOOL_TYPES,
        },
    ],
    matchers: &[Matcher {
        target: "Cargo.toml",
        template: embedded::WORKSPACE_CARGO_MATCHER,
        plan: SplitPlan {
            steps: &[SplitStep::through(
                "before_first_workspace_dependency",
                "[workspace.dependencies]",
            )],
            tail: "first_workspace_dependency_onwards",
        },
    }],
};

pub const NEW_MEMORY: Pattern = Pattern {
    name: "new_memory",
    description: "Persisted memory plugin inside the memory crate, gated by a build flag",
    rules: NamingRules {
        reserved_suffix: Some("memory"),
    },
    files: &[NewFile {
        path: "crates/memory/src/{{crate_name}}_memory_plugin.rs",
        template: embedded::MEMORY_PLUGIN,
    }],
    matchers: &[
        Matcher {
            target: "crates/memory/src/lib.rs",
            template: embedded::MEMORY_LIB_MATCHER,
            plan: SplitPlan {
                steps: &[],
                tail: "existing",
            },
        },
        Matcher {
            target: "crates/memory/src/memory_plugin.rs",
            template: embedded::MEMORY_PLUGIN_MATCHER,
            plan: SplitPlan {
                steps: &[
                    SplitStep::before("before_memory_plugin", "pub struct MemoryPlugin {"),
                    SplitStep::before("existing_stuff", "\n    }"),
                ],
                tail: "end",
            },
        },
        Matcher {
            target: "crates/memory_types/src/memory_types.rs",
            template: embedded::MEMORY_TYPES_MATCHER,
            plan: SplitPlan {
                steps: &[
                    SplitStep::through(
                        "before_build_config_fields",
                        "pub struct MemoryPluginBuildConfig {",
                    ),
                    SplitStep::before("build_config_fields", "\n}"),
                    SplitStep::through("before_all_enabled_fields", "\n        Self {"),
                    SplitStep::before("all_enabled_fields", "\n        }"),
                ],
                tail: "end",
            },
        },
    ],
};

pub const NEW_PLUGIN_WITH_TYPES: Pattern = Pattern {
    name: "new_plugin_with_types",
    description: "Register an existing plugin + types crate pair with the plugins crate",
    rules: NamingRules {
        reserved_suffix: Some("types"),
    },
    files: &[],
    matchers: &[
        Matcher {
            target: "crates/plugins/Cargo.toml",
            template: embedded::PLUGINS_CARGO_MATCHER,
            plan: SplitPlan {
                steps: &[SplitStep::through(
                    "before_first_plugins_dependency",
                    "[dependencies]",
                )],
                tail: "first_plugins_dependency_onwards",
            },
        },
        Matcher {
            target: "crates/plugins/src/lib.rs",
            template: embedded::PLUGINS_LIB_MATCHER,
            plan: SplitPlan {
                steps: &[
                    SplitStep::before("use_statements", "pub struct MyPlugin;"),
                    SplitStep::through("plugin_start", "fn build(&self, app: &mut App) {"),
                ],
                tail: "plugin_remaining",
            },
        },
    ],
};

/// Every pattern, in display order.
pub const PATTERNS: &[Pattern] = &[NEW_TOOL, NEW_MEMORY, NEW_PLUGIN_WITH_TYPES];

/// Resolve a pattern by name.
pub fn find(name: &str) -> Result<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name == name).ok_or_else(|| {
        let names: Vec<_> = PATTERNS.iter().map(|p| p.name).collect();
        ScaffoldError::UnknownPattern(name.to_string(), names.join(", "))
    })
}
