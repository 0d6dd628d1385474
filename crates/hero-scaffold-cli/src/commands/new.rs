use std::path::Path;

use anyhow::Result;
use dialoguer::{Input, Select};

use hero_scaffold_core::catalog::{self, Pattern, PATTERNS};
use hero_scaffold_core::config::ScaffoldConfig;
use hero_scaffold_core::generate;
use hero_scaffold_core::naming::CrateName;

use crate::output;

/// Generate a pattern into the workspace at `root`.
///
/// Prompts for the pattern and the base name when they are not given. Every file
/// is rendered before anything is written, and a write that fails part way is
/// rolled back, so a failed run leaves the workspace untouched.
pub fn run(
    root: &Path,
    config_path: &Path,
    pattern: Option<&str>,
    name: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let pattern = match pattern {
        Some(p) => catalog::find(p)?,
        None => select_pattern()?,
    };

    // Validate before anything else touches the workspace
    let crate_name = match name {
        Some(n) => CrateName::new(n, &pattern.rules)?,
        None => prompt_name(pattern)?,
    };

    output::print_header(&format!(
        "hero-scaffold new: {} {}",
        pattern.name,
        crate_name.snake()
    ));
    output::print_key_value("crate_name", crate_name.snake());
    output::print_key_value("crate_name_pascal", crate_name.pascal());

    output::print_step(1, 3, "Loading configuration");
    let config = ScaffoldConfig::load_or_default(config_path)?;
    tracing::debug!(?config, path = %config_path.display(), "loaded config");
    output::print_key_value("crate_prefix", &config.crate_prefix);

    output::print_step(2, 3, "Rendering templates");
    let plan = generate::plan(pattern, root, &crate_name, &config)?;
    plan.writes.iter().for_each(output::print_write);

    if dry_run {
        output::print_dry_run(&plan.writes);
        return Ok(());
    }

    output::print_step(3, 3, "Writing files");
    plan.write(root)?;

    output::print_generated(plan.pattern, crate_name.snake(), plan.writes.len());
    Ok(())
}

fn select_pattern() -> Result<&'static Pattern> {
    let items: Vec<String> = PATTERNS
        .iter()
        .map(|p| format!("{:<24} {}", p.name, p.description))
        .collect();
    let selection = Select::new()
        .with_prompt("Select pattern")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(&PATTERNS[selection])
}

fn prompt_name(pattern: &Pattern) -> Result<CrateName> {
    let rules = pattern.rules;
    let input: String = Input::<String>::new()
        .with_prompt("crate_name")
        .validate_with(move |input: &String| -> std::result::Result<(), String> {
            CrateName::new(input, &rules).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(CrateName::new(&input, &rules)?)
}
