//! CLI command implementations for hero-scaffold.
//!
//! Each module corresponds to a subcommand (`hero-scaffold <command>`).

pub mod check;
pub mod list;
pub mod new;
