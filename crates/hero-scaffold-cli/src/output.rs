//! Terminal output for hero-scaffold, styled with [`console`].

use console::style;

use hero_scaffold_core::catalog::Pattern;
use hero_scaffold_core::error::ScaffoldError;
use hero_scaffold_core::generate::{PlannedWrite, WriteAction};

pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// `[step/total] text`
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// One line per planned file: green `create` for new files, yellow `update` for edits.
pub fn print_write(write: &PlannedWrite) {
    let label = style(verb(write.action));
    let label = match write.action {
        WriteAction::Create => label.green(),
        WriteAction::Update => label.yellow(),
    };
    println!("  {label} {}", write.path.display());
}

fn verb(action: WriteAction) -> &'static str {
    match action {
        WriteAction::Create => "create",
        WriteAction::Update => "update",
    }
}

/// Dump the rendered contents of a dry run, file by file.
pub fn print_dry_run(writes: &[PlannedWrite]) {
    println!(
        "{} Dry run: nothing was written",
        style("[WARN]").yellow().bold()
    );
    for write in writes {
        println!("\n{}", style(format!("--- {} ---", write.path.display())).dim());
        print!("{}", write.contents);
    }
}

pub fn print_generated(pattern: &str, name: &str, files: usize) {
    println!(
        "{} {files} files written for {pattern} '{name}'",
        style("[OK]").green().bold()
    );
}

/// A pattern with the naming rule it enforces and the files it touches.
pub fn print_pattern(pattern: &Pattern) {
    println!("\n{}  {}", style(pattern.name).bold(), pattern.description);
    if let Some(suffix) = pattern.rules.reserved_suffix {
        print_key_value("reserved suffix", suffix);
    }
    for file in pattern.files {
        print_key_value("creates", file.path);
    }
    for matcher in pattern.matchers {
        print_key_value("edits", matcher.target);
    }
}

pub fn print_matcher_ok(pattern: &str, target: &str, segments: usize) {
    println!(
        "{} {pattern}: {target} ({segments} segments)",
        style("[OK]").green().bold()
    );
}

pub fn print_matcher_failure(pattern: &str, target: &str, error: &ScaffoldError) {
    println!(
        "{} {pattern}: {target}: {}",
        style("[ERROR]").red().bold(),
        failure_detail(error)
    );
}

/// Prefer naming the anchor that went missing; other failures print as-is.
fn failure_detail(error: &ScaffoldError) -> String {
    match error.missing_anchor() {
        Some(anchor) => format!("missing anchor {anchor:?}"),
        None => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_failure_detail_names_missing_anchor() {
        let error = ScaffoldError::Matcher {
            path: PathBuf::from("crates/plugins/src/lib.rs"),
            source: Box::new(ScaffoldError::AnchorNotFound {
                anchor: "pub struct MyPlugin;".into(),
            }),
        };
        assert_eq!(failure_detail(&error), r#"missing anchor "pub struct MyPlugin;""#);
    }

    #[test]
    fn test_failure_detail_falls_back_to_message() {
        let error = ScaffoldError::TargetNotFound(PathBuf::from("Cargo.toml"));
        assert_eq!(failure_detail(&error), error.to_string());
    }

    #[test]
    fn test_verbs() {
        assert_eq!(verb(WriteAction::Create), "create");
        assert_eq!(verb(WriteAction::Update), "update");
    }
}
