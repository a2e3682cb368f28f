//! Target implementations
//!
//! Each target module prints its status banner and delegates the real work
//! to the external toolchain; this module owns the fail-fast chain loop.

pub mod build;
pub mod check;
pub mod clean;
pub mod help;
pub mod run;

use anyhow::Result;

use crate::config::RmakeConfig;
use crate::error::RmakeError;
use crate::exec::subprocess;
use crate::graph::{Target, TargetGraph};
use crate::utils::terminal;

/// Options shared by every target execution
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOptions {
    pub dry_run: bool,
    pub verbose: bool,
}

/// Resolve a target and execute its chain, stopping at the first failure
pub fn dispatch(target: Target, config: &RmakeConfig, opts: DispatchOptions) -> Result<()> {
    let graph = TargetGraph::new(config);
    let sequence = graph.resolve(target);

    if opts.verbose && sequence.len() > 1 {
        let names: Vec<&str> = sequence.iter().map(|step| step.name()).collect();
        terminal::print_info(&format!(
            "target '{}' chains: {}",
            target.name(),
            names.join(", ")
        ));
    }

    for step in sequence {
        execute_leaf(step, config, opts)?;
    }
    Ok(())
}

fn execute_leaf(target: Target, config: &RmakeConfig, opts: DispatchOptions) -> Result<()> {
    match target {
        Target::Build => build::execute(config, opts),
        Target::Clean => clean::execute(config, opts),
        Target::Check => check::execute(config, opts),
        Target::Run => run::execute(config, opts),
        Target::Help => help::execute(config, opts),
        // resolve() expands composites, so none reach here
        Target::All => Ok(()),
    }
}

/// Run one toolchain command line with inherited stdio, converting a
/// non-zero exit into a fail-fast error
pub(crate) fn invoke_toolchain(
    target: &str,
    command_line: &str,
    opts: DispatchOptions,
) -> Result<()> {
    if opts.dry_run {
        println!("  would run: {}", command_line);
        return Ok(());
    }

    let result = subprocess::run_shell(command_line, true)?;
    if !result.success {
        return Err(RmakeError::target_failed(target, result.exit_code).into());
    }

    if opts.verbose {
        terminal::print_info(&format!("'{}' finished in {:.2?}", target, result.duration));
    }
    Ok(())
}
