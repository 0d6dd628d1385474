use hero_scaffold_core::catalog::PATTERNS;

use crate::output;

/// Print every pattern with the files it creates and edits.
pub fn run() {
    output::print_header("hero-scaffold patterns");
    PATTERNS.iter().for_each(output::print_pattern);
    println!();
}
