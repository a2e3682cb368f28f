//! CLI argument parsing using clap derive macros

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{self, DispatchOptions};
use crate::config::RmakeConfig;
use crate::graph::Target;
use crate::utils::terminal;

/// rmake - make-style target runner
///
/// Sequences external toolchain commands (build, check, clean, run) behind
/// make-like target names with fail-fast chain semantics.
#[derive(Parser, Debug)]
#[command(name = "rmake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target to execute (defaults to the configured default target)
    pub target: Option<String>,

    /// Print the commands that would run without executing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Change to DIR before reading RMAKE.toml or doing anything else
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the requested target
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        if let Some(dir) = &self.directory {
            env::set_current_dir(dir)
                .with_context(|| format!("Failed to change directory to {}", dir.display()))?;
        }

        let config = RmakeConfig::load()?;

        if self.verbose {
            terminal::print_info(&format!(
                "project: {} {}",
                config.project_name(),
                config.version()
            ));
            terminal::print_info(&format!("executable: {}", config.executable()));
            terminal::print_info(&format!("prefix: {}", config.prefix().display()));
        }

        let target = match self.target.as_deref() {
            None | Some("default") => config.default_target(),
            Some(name) => match Target::from_name(name) {
                Some(target) => target,
                None => {
                    terminal::print_warning(&format!("unknown target '{}'", name));
                    Target::Help
                }
            },
        };

        commands::dispatch(
            target,
            &config,
            DispatchOptions {
                dry_run: self.dry_run,
                verbose: self.verbose,
            },
        )
    }
}
