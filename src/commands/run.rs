//! Run target implementation
//!
//! Prints the banner, clears the display, then hands the terminal to the
//! toolchain run command with inherited stdio.

use anyhow::Result;

use crate::commands::DispatchOptions;
use crate::config::RmakeConfig;
use crate::utils::terminal;

pub fn execute(config: &RmakeConfig, opts: DispatchOptions) -> Result<()> {
    terminal::print_banner(&format!("Running {}", config.project_name()));

    if opts.dry_run {
        println!("  would clear the screen");
        println!("  would run: {}", config.toolchain.run);
        return Ok(());
    }

    // Banner first, clear second, child last.
    terminal::clear_screen();
    super::invoke_toolchain("run", &config.toolchain.run, opts)
}
