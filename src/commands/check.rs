//! Check target implementation
//!
//! Probes for the toolchain program before delegating to the static-check
//! command line.

use anyhow::Result;

use crate::commands::DispatchOptions;
use crate::config::RmakeConfig;
use crate::error::hints;
use crate::exec::subprocess;
use crate::utils::terminal;

pub fn execute(config: &RmakeConfig, opts: DispatchOptions) -> Result<()> {
    terminal::print_banner(&format!("Checking {}", config.project_name()));

    let command_line = &config.toolchain.check;
    if !opts.dry_run {
        probe_toolchain(command_line, opts.verbose);
    }

    super::invoke_toolchain("check", command_line, opts)
}

/// Warn when the command line's program is not on PATH; the chain still
/// proceeds so the shell's own exit code stays authoritative.
fn probe_toolchain(command_line: &str, verbose: bool) {
    let Some(program) = subprocess::program_name(command_line) else {
        return;
    };

    if !subprocess::command_exists(program) {
        terminal::print_warning(&format!("'{}' not found in PATH", program));
        if program == "cargo" {
            eprintln!("{}", hints::cargo());
        }
        return;
    }

    if verbose {
        if let Ok(probe) = subprocess::run_shell(&format!("{} --version", program), false) {
            if probe.success {
                if let Some(line) = probe.stdout.lines().next() {
                    terminal::print_info(&format!("{}: {}", program, line.trim()));
                }
            }
        }
    }
}
