use std::path::Path;

use anyhow::Result;

use hero_scaffold_core::catalog::{self, Pattern, PATTERNS};
use hero_scaffold_core::generate;

use crate::output;

/// Split every matcher target of one pattern (or all of them) without rendering.
///
/// Reports each file separately and fails if any of them no longer matches.
pub fn run(root: &Path, pattern: Option<&str>) -> Result<()> {
    let patterns: Vec<&Pattern> = match pattern {
        Some(name) => vec![catalog::find(name)?],
        None => PATTERNS.iter().collect(),
    };

    output::print_header(&format!("hero-scaffold check: {}", root.display()));

    let mut failures = 0usize;
    for pattern in patterns {
        for matcher in pattern.matchers {
            match generate::check_matcher(matcher, root) {
                Ok(segments) => {
                    output::print_matcher_ok(pattern.name, matcher.target, segments.len())
                }
                Err(e) => {
                    failures += 1;
                    output::print_matcher_failure(pattern.name, matcher.target, &e);
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} matcher target(s) no longer match their anchors");
    }
    Ok(())
}
