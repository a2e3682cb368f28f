//! Clean target implementation
//!
//! Removes the build-output directory before handing off to the toolchain
//! clean command. A missing directory is not an error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::commands::DispatchOptions;
use crate::config::RmakeConfig;
use crate::utils::terminal;

pub fn execute(config: &RmakeConfig, opts: DispatchOptions) -> Result<()> {
    terminal::print_banner(&format!("Cleaning {}", config.project_name()));

    let build_dir = config.build_dir();
    if opts.dry_run {
        println!("  would remove: {}", build_dir.display());
        println!("  would run: {}", config.toolchain.clean);
        return Ok(());
    }

    remove_build_dir(&build_dir)?;
    super::invoke_toolchain("clean", &config.toolchain.clean, opts)
}

fn remove_build_dir(build_dir: &Path) -> Result<()> {
    if !build_dir.is_dir() {
        terminal::print_info(&format!(
            "{} does not exist, nothing to remove",
            build_dir.display()
        ));
        return Ok(());
    }

    let spinner = terminal::create_spinner("Scanning build artifacts...");
    let size = dir_size(build_dir);
    spinner.finish_and_clear();

    fs::remove_dir_all(build_dir)
        .with_context(|| format!("Failed to remove {}", build_dir.display()))?;
    println!("  removed: {} ({})", build_dir.display(), format_size(size));
    Ok(())
}

fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.metadata().ok())
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len())
        .sum()
}

fn format_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}
