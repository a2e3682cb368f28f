//! rmake CLI - a make-style target runner for Cargo projects
//!
//! Maps make-like target names (all, build, check, clean, run) onto an
//! external toolchain, keeping the fail-fast chain semantics of a
//! target-dependency graph: prerequisites run in declared order and the
//! first non-zero exit aborts everything behind it.

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod graph;
mod utils;

use std::process;

use clap::Parser;

use cli::Cli;
use error::RmakeError;

fn main() {
    let cli = Cli::parse();
    let Err(err) = cli.execute() else { return };

    // Target failures carry the child's exit code; everything else exits 1.
    let code = match err.downcast_ref::<RmakeError>() {
        Some(known) => {
            known.display_with_hints();
            known.exit_code()
        }
        None => {
            utils::terminal::print_error(&format!("{:#}", err));
            1
        }
    };
    process::exit(code);
}
