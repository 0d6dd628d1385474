//! hero-scaffold CLI - boilerplate generator for the Cursor Hero Bevy workspace.
//!
//! Three commands: `new` renders a pattern into the workspace, `list` shows the
//! catalog, and `check` verifies that every file a pattern edits still has the
//! layout its anchors expect.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hero-scaffold",
    about = "Scaffold tool, memory and plugin crates for a Bevy game workspace",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workspace root the pattern is applied to
    #[arg(long, global = true, default_value = ".", env = "HERO_SCAFFOLD_ROOT")]
    root: PathBuf,

    /// Path to hero-scaffold.config.json (default: <root>/hero-scaffold.config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate files for a pattern
    New {
        /// Pattern name (prompts if omitted)
        pattern: Option<String>,

        /// Base crate name in snake_case (prompts if omitted)
        name: Option<String>,

        /// Print what would be written without touching the workspace
        #[arg(long)]
        dry_run: bool,
    },

    /// List available patterns
    List,

    /// Verify that the files a pattern edits still match its anchors
    Check {
        /// Only check this pattern (default: all)
        pattern: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(|| cli.root.join(hero_scaffold_core::config::CONFIG_FILE));

    match cli.command {
        Commands::New {
            pattern,
            name,
            dry_run,
        } => {
            commands::new::run(
                &cli.root,
                &config_path,
                pattern.as_deref(),
                name.as_deref(),
                dry_run,
            )?;
        }
        Commands::List => {
            commands::list::run();
        }
        Commands::Check { pattern } => {
            commands::check::run(&cli.root, pattern.as_deref())?;
        }
    }

    Ok(())
}
